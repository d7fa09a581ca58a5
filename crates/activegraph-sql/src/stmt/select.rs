use super::{Column, Condition, Direction, Statement};

#[derive(Debug, Clone)]
pub struct Select {
    /// Table the select reads from
    pub table: String,

    /// Projected columns, never empty
    pub columns: Vec<Column>,

    /// Inner joins, in declaration order
    pub joins: Vec<Join>,

    /// Conditions combined with `AND`
    pub filter: Vec<Condition>,

    pub group_by: Vec<Column>,

    pub order_by: Vec<(Column, Direction)>,

    pub limit: Option<u64>,
}

/// `INNER JOIN table ON lhs = rhs`
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub table: String,

    /// Column on the joined table
    pub lhs: Column,

    /// Column on a table already in scope
    pub rhs: Column,
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
