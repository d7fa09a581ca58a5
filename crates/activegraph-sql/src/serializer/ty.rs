use super::{Flavor, Params, ToSql};

use crate::stmt;

impl ToSql for stmt::Type {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        let flavor = f.serializer.flavor;
        fmt!(
            f,
            match (self, flavor) {
                (stmt::Type::Integer, Flavor::Sqlite) => "INTEGER",
                (stmt::Type::Integer, _) => "BIGINT",
                (stmt::Type::Float, Flavor::Sqlite) => "REAL",
                (stmt::Type::Float, Flavor::Postgresql) => "DOUBLE PRECISION",
                (stmt::Type::Float, Flavor::Mysql) => "DOUBLE",
                (stmt::Type::String, _) => "TEXT",
                (stmt::Type::Boolean, _) => "BOOLEAN",
            }
        );
    }
}
