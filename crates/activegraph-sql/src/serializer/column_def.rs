use super::{Flavor, Ident, Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = Ident(&self.name);

        if self.primary_key {
            // Integer keys are assigned by the database on insert; any other
            // key must be supplied
            let auto = match (self.ty, f.serializer.flavor) {
                (stmt::Type::Integer, Flavor::Sqlite) => "",
                (stmt::Type::Integer, Flavor::Postgresql) => " GENERATED BY DEFAULT AS IDENTITY",
                (stmt::Type::Integer, Flavor::Mysql) => " AUTO_INCREMENT",
                _ => " NOT NULL",
            };

            fmt!(f, name " " self.ty auto " PRIMARY KEY");
        } else {
            let not_null = if self.not_null { " NOT NULL" } else { "" };
            fmt!(f, name " " self.ty not_null);
        }
    }
}
