/// A column reference, optionally qualified by its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub table: Option<String>,
    pub name: String,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Column {
        Column {
            table: None,
            name: name.into(),
        }
    }

    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Column {
        Column {
            table: Some(table.into()),
            name: name.into(),
        }
    }
}
