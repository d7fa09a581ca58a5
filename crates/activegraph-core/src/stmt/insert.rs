use super::{Statement, Values};

/// Intent to insert one row for a model.
#[derive(Debug, Clone)]
pub struct Insert {
    pub model: String,

    /// Attribute values present on the record. Absent attributes take their
    /// catalog default or are omitted.
    pub values: Values,
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
