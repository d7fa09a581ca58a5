use super::{Statement, Value, Values};

/// Intent to update the row identified by `key`.
#[derive(Debug, Clone)]
pub struct Update {
    pub model: String,

    /// Primary-key value of the row to update
    pub key: Value,

    /// Attributes to assign. The primary key, if present, is not assigned.
    pub values: Values,
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
