use super::{Column, Value};

/// One `WHERE` conjunct.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `column = ?`
    Eq(Column, Value),

    /// `column IS NULL`
    IsNull(Column),

    /// A raw fragment. Each `?` outside a quoted literal binds the next
    /// argument.
    Raw { fragment: String, args: Vec<Value> },
}
