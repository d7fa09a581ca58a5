use crate::{Connection, Db};

use activegraph_core::{
    adapter::{Dialect, ExecResponse, Rows},
    stmt::{Statement, Value},
    Context, Result,
};
use activegraph_sql::{self as sql, Serializer};

/// A statement ready to run: the connection bound to its model plus the SQL
/// serialized for that connection's dialect.
pub(crate) struct Compiled {
    pub(crate) connection: Connection,
    pub(crate) stmt: sql::Statement,
    pub(crate) sql: String,
    pub(crate) params: Vec<Value>,
}

impl Db {
    /// Lowers `stmt`, then looks up the connection of its model.
    ///
    /// Lowering runs first, so a statement that does not compile reports its
    /// compilation error even when the connection is missing.
    pub(crate) fn compile(&self, stmt: &Statement) -> Result<Compiled> {
        let lowered = sql::lower(&self.shared.models, stmt)?;

        let model = self.shared.models.get(stmt.model())?;
        let connection = self.connection(&model.connection)?;

        let mut params = vec![];
        let sql = Serializer::for_dialect(connection.dialect()).serialize(&lowered, &mut params);

        Ok(Compiled {
            connection,
            stmt: lowered,
            sql,
            params,
        })
    }

    /// Compiles without touching any connection. The model's connection
    /// picks the dialect when it is established; otherwise SQLite is used.
    pub(crate) fn to_sql(&self, stmt: &Statement) -> Result<(String, Vec<Value>)> {
        let lowered = sql::lower(&self.shared.models, stmt)?;

        let model = self.shared.models.get(stmt.model())?;
        let dialect = self
            .connection(&model.connection)
            .map(|connection| connection.dialect())
            .unwrap_or(Dialect::Sqlite);

        let mut params = vec![];
        let sql = Serializer::for_dialect(dialect).serialize(&lowered, &mut params);
        Ok((sql, params))
    }

    pub(crate) async fn exec(
        &self,
        cx: &Context,
        stmt: &Statement,
    ) -> Result<(Compiled, ExecResponse)> {
        let compiled = self.compile(stmt)?;
        let response = compiled
            .connection
            .exec(cx, &compiled.sql, &compiled.params)
            .await?;
        Ok((compiled, response))
    }

    pub(crate) async fn query(&self, cx: &Context, stmt: &Statement) -> Result<Rows> {
        let compiled = self.compile(stmt)?;
        compiled
            .connection
            .query(cx, &compiled.sql, &compiled.params)
            .await
    }
}
