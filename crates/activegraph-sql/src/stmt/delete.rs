use super::{Statement, Value};

/// Deletes one row by primary key.
#[derive(Debug, Clone)]
pub struct Delete {
    pub table: String,
    pub key: (String, Value),
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
