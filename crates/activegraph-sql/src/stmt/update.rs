use super::{Statement, Value};

/// Updates one row by primary key.
#[derive(Debug, Clone)]
pub struct Update {
    pub table: String,

    /// `SET` assignments, never empty
    pub assignments: Vec<(String, Value)>,

    pub key: (String, Value),
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
