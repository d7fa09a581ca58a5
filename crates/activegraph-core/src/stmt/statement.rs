use super::{Delete, Insert, Query, Update};

/// A statement against one model, before compilation.
#[derive(Debug, Clone)]
pub enum Statement {
    Query(Query),
    Insert(Insert),
    Update(Update),
    Delete(Delete),

    /// Create the table backing the named model
    CreateTable(String),
}

impl Statement {
    /// Name of the model the statement targets.
    pub fn model(&self) -> &str {
        match self {
            Statement::Query(stmt) => &stmt.model,
            Statement::Insert(stmt) => &stmt.model,
            Statement::Update(stmt) => &stmt.model,
            Statement::Delete(stmt) => &stmt.model,
            Statement::CreateTable(model) => model,
        }
    }
}

impl From<Query> for Statement {
    fn from(value: Query) -> Self {
        Self::Query(value)
    }
}
