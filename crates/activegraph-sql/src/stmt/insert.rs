use super::{Statement, Value};

/// Inserts one row. With no columns the row takes every column default.
#[derive(Debug, Clone)]
pub struct Insert {
    pub table: String,

    /// Inserted columns, in catalog order
    pub columns: Vec<String>,

    /// Values, one per column, already cast to the column type
    pub values: Vec<Value>,
}

impl Insert {
    /// Column/value pairs of the inserted row.
    pub fn row(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
