use super::Serializer;

use activegraph_core::adapter::Dialect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    Postgresql,
    Sqlite,
    Mysql,
}

impl Serializer {
    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: Flavor::Sqlite,
        }
    }

    pub fn postgresql() -> Serializer {
        Serializer {
            flavor: Flavor::Postgresql,
        }
    }

    pub fn mysql() -> Serializer {
        Serializer {
            flavor: Flavor::Mysql,
        }
    }

    pub fn for_dialect(dialect: Dialect) -> Serializer {
        match dialect {
            Dialect::Sqlite => Serializer::sqlite(),
            Dialect::Postgresql => Serializer::postgresql(),
            Dialect::Mysql => Serializer::mysql(),
        }
    }

    pub fn is_sqlite(&self) -> bool {
        self.flavor == Flavor::Sqlite
    }

    pub fn is_mysql(&self) -> bool {
        self.flavor == Flavor::Mysql
    }
}
