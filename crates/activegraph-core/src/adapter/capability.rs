/// SQL dialect spoken by an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Sqlite,
    Postgresql,
    Mysql,
}

#[derive(Debug)]
pub struct Capability {
    pub dialect: Dialect,

    /// When false, booleans are stored as `0`/`1` integers.
    pub native_boolean: bool,

    /// The adapter reports the key generated by an insert.
    pub last_insert_key: bool,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        dialect: Dialect::Sqlite,
        native_boolean: false,
        last_insert_key: true,
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        dialect: Dialect::Postgresql,
        native_boolean: true,
        last_insert_key: false,
    };

    /// MySQL capabilities
    pub const MYSQL: Self = Self {
        dialect: Dialect::Mysql,
        ..Self::SQLITE
    };
}
