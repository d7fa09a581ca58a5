mod value;
pub(crate) use value::Value;

use activegraph_core::{
    adapter::{Capability, ExecResponse, Row, Rows},
    async_trait, stmt, Adapter, Context, DatabaseConfig, Driver, Error, Result,
};
use parking_lot::Mutex;
use rusqlite::Connection as RusqliteConnection;
use std::{path::Path, sync::Arc};

/// Opens SQLite connections. Registered under the `sqlite` adapter kind.
#[derive(Debug, Default)]
pub struct Sqlite;

impl Sqlite {
    pub const KIND: &'static str = "sqlite";
}

#[async_trait]
impl Driver for Sqlite {
    fn kind(&self) -> &str {
        Sqlite::KIND
    }

    async fn connect(&self, config: &DatabaseConfig) -> Result<Arc<dyn Adapter>> {
        let connection = match &config.database[..] {
            "" => {
                return Err(Error::invalid_database_config(
                    "sqlite requires a database path or `:memory:`",
                ))
            }
            ":memory:" => Connection::in_memory()?,
            path => Connection::open(path)?,
        };

        tracing::debug!(database = %config.database, "opened sqlite connection");
        Ok(Arc::new(connection))
    }
}

/// A single SQLite connection. Calls are serialized through a mutex.
#[derive(Debug)]
pub struct Connection {
    /// `None` once closed
    connection: Mutex<Option<RusqliteConnection>>,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::connection_failed)?;
        Ok(Self::new(connection))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::connection_failed)?;
        Ok(Self::new(connection))
    }

    fn new(connection: RusqliteConnection) -> Self {
        Self {
            connection: Mutex::new(Some(connection)),
        }
    }

    fn with_connection<R>(
        &self,
        f: impl FnOnce(&RusqliteConnection) -> Result<R>,
    ) -> Result<R> {
        let guard = self.connection.lock();

        let Some(connection) = guard.as_ref() else {
            return Err(Error::connection_failed("connection closed"));
        };

        f(connection)
    }
}

#[async_trait]
impl Adapter for Connection {
    fn capability(&self) -> &Capability {
        &Capability::SQLITE
    }

    async fn exec(&self, cx: &Context, sql: &str, params: &[stmt::Value]) -> Result<ExecResponse> {
        cx.check()?;
        tracing::trace!(sql, params = params.len(), "sqlite exec");

        self.with_connection(|connection| {
            let rows_affected = if params.is_empty() {
                connection
                    .execute_batch(sql)
                    .map_err(Error::adapter_execution_failed)?;
                connection.changes() as u64
            } else {
                let mut stmt = connection
                    .prepare_cached(sql)
                    .map_err(Error::adapter_execution_failed)?;

                let params = params.iter().cloned().map(Value::from).collect::<Vec<_>>();

                stmt.execute(rusqlite::params_from_iter(params.iter()))
                    .map_err(Error::adapter_execution_failed)? as u64
            };

            let is_insert = sql
                .trim_start()
                .get(..6)
                .is_some_and(|verb| verb.eq_ignore_ascii_case("insert"));

            let last_insert_key = is_insert.then(|| connection.last_insert_rowid().into());

            Ok(ExecResponse {
                rows_affected,
                last_insert_key,
            })
        })
    }

    async fn query(&self, cx: &Context, sql: &str, params: &[stmt::Value]) -> Result<Rows> {
        cx.check()?;
        tracing::trace!(sql, params = params.len(), "sqlite query");

        self.with_connection(|connection| {
            let mut stmt = connection
                .prepare_cached(sql)
                .map_err(Error::adapter_execution_failed)?;

            let columns = stmt
                .column_names()
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>();

            let params = params.iter().cloned().map(Value::from).collect::<Vec<_>>();

            let mut rows = stmt
                .query(rusqlite::params_from_iter(params.iter()))
                .map_err(Error::adapter_execution_failed)?;

            let mut ret = vec![];

            loop {
                // Checked between steps so a long scan stops once canceled
                cx.check()?;

                match rows.next() {
                    Ok(Some(row)) => {
                        let mut item = Row::new();

                        for (index, column) in columns.iter().enumerate() {
                            item.insert(column, Value::from_sql(row, index)?.into_inner());
                        }

                        ret.push(item);
                    }
                    Ok(None) => break,
                    Err(err) => return Err(Error::adapter_execution_failed(err)),
                }
            }

            Ok(Rows::new(ret))
        })
    }

    async fn close(&self) -> Result<()> {
        if let Some(connection) = self.connection.lock().take() {
            connection
                .close()
                .map_err(|(_, err)| Error::connection_failed(err))?;
            tracing::debug!("closed sqlite connection");
        }
        Ok(())
    }
}
