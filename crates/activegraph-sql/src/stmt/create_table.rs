use super::{ColumnDef, Statement};

#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub table: String,

    /// Column definitions
    pub columns: Vec<ColumnDef>,

    /// Emit `IF NOT EXISTS`
    pub if_not_exists: bool,
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
