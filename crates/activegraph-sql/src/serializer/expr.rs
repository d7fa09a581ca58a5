use super::{Ident, Params, ToSql};

use crate::stmt;
use activegraph_core::stmt::split_placeholders;

impl ToSql for &stmt::Column {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        if let Some(table) = &self.table {
            fmt!(f, Ident(table) ".");
        }
        fmt!(f, Ident(&self.name));
    }
}

impl ToSql for &stmt::Condition {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Condition::Eq(column, value) => fmt!(f, column " = " value),
            stmt::Condition::IsNull(column) => fmt!(f, column " IS NULL"),
            stmt::Condition::Raw { fragment, args } => {
                let mut args = args.iter();

                f.dst.push('(');
                for (i, piece) in split_placeholders(fragment).into_iter().enumerate() {
                    if i > 0 {
                        fmt!(f, args.next());
                    }
                    fmt!(f, piece);
                }
                f.dst.push(')');
            }
        }
    }
}

impl ToSql for &(stmt::Column, stmt::Direction) {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let direction = match self.1 {
            stmt::Direction::Asc => " ASC",
            stmt::Direction::Desc => " DESC",
        };
        let column = &self.0;
        fmt!(f, column direction);
    }
}

impl ToSql for &stmt::Join {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let (lhs, rhs) = (&self.lhs, &self.rhs);
        fmt!(f, "INNER JOIN " Ident(&self.table) " ON " lhs " = " rhs);
    }
}

/// `"column" = ?`
pub(super) struct Assignment<'a>(pub(super) &'a str, pub(super) &'a stmt::Value);

impl ToSql for Assignment<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, Ident(self.0) " = " self.1);
    }
}
