mod column;
pub use column::Column;

mod column_def;
pub use column_def::ColumnDef;

mod condition;
pub use condition::Condition;

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod select;
pub use select::{Join, Select};

mod update;
pub use update::Update;

pub use activegraph_core::stmt::{Direction, Type, Value};

/// A statement whose names are resolved and whose values are cast, ready
/// for serialization.
#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    Delete(Delete),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    pub fn is_select(&self) -> bool {
        matches!(self, Statement::Select(_))
    }

    pub fn as_insert(&self) -> Option<&Insert> {
        match self {
            Statement::Insert(insert) => Some(insert),
            _ => None,
        }
    }
}
