use super::{Statement, Value};

/// Intent to delete the row identified by `key`.
#[derive(Debug, Clone)]
pub struct Delete {
    pub model: String,
    pub key: Value,
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
