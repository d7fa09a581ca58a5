use super::{expr::Assignment, Comma, Delimited, Ident, Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Statement::CreateTable(stmt) => stmt.to_sql(f),
            stmt::Statement::Delete(stmt) => stmt.to_sql(f),
            stmt::Statement::Insert(stmt) => stmt.to_sql(f),
            stmt::Statement::Select(stmt) => stmt.to_sql(f),
            stmt::Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let if_not_exists = if self.if_not_exists {
            "IF NOT EXISTS "
        } else {
            ""
        };
        let columns = Comma(&self.columns);

        fmt!(f, "CREATE TABLE " if_not_exists Ident(&self.table) " (" columns ")");
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let key = Assignment(&self.key.0, &self.key.1);

        fmt!(f, "DELETE FROM " Ident(&self.table) " WHERE " key);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = Ident(&self.table);

        if self.columns.is_empty() {
            if f.serializer.is_mysql() {
                fmt!(f, "INSERT INTO " table " () VALUES ()");
            } else {
                fmt!(f, "INSERT INTO " table " DEFAULT VALUES");
            }
            return;
        }

        let columns = Comma(self.columns.iter().map(Ident));
        let values = Comma(&self.values);

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")");
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let columns = Comma(&self.columns);

        fmt!(f, "SELECT " columns " FROM " Ident(&self.table));

        for join in &self.joins {
            fmt!(f, " " join);
        }

        if !self.filter.is_empty() {
            fmt!(f, " WHERE " Delimited(&self.filter, " AND "));
        }

        if !self.group_by.is_empty() {
            fmt!(f, " GROUP BY " Comma(&self.group_by));
        }

        if !self.order_by.is_empty() {
            fmt!(f, " ORDER BY " Comma(&self.order_by));
        }

        if let Some(limit) = self.limit {
            fmt!(f, " LIMIT " limit);
        }
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let assignments = Comma(
            self.assignments
                .iter()
                .map(|(column, value)| Assignment(column, value)),
        );
        let key = Assignment(&self.key.0, &self.key.1);

        fmt!(f, "UPDATE " Ident(&self.table) " SET " assignments " WHERE " key);
    }
}
