mod capability;
pub use capability::{Capability, Dialect};

mod config;
pub use config::DatabaseConfig;

mod context;
pub use context::Context;

mod response;
pub use response::{ExecResponse, Row, Rows};

use crate::{async_trait, stmt::Value, Result};

use std::{fmt::Debug, sync::Arc};

/// A live connection to one database.
///
/// Statements arrive fully compiled: SQL text for the adapter's dialect plus
/// positional parameters. Adapters must tolerate concurrent calls.
#[async_trait]
pub trait Adapter: Debug + Send + Sync + 'static {
    /// Describes the adapter's dialect, which selects the SQL serializer.
    fn capability(&self) -> &Capability;

    /// Execute a statement that returns no rows.
    async fn exec(&self, cx: &Context, sql: &str, params: &[Value]) -> Result<ExecResponse>;

    /// Execute a statement and collect the rows it returns.
    async fn query(&self, cx: &Context, sql: &str, params: &[Value]) -> Result<Rows>;

    /// Release the connection. Every later call fails with a connection
    /// error.
    async fn close(&self) -> Result<()>;
}

/// Opens adapters of one kind.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// The adapter kind this driver handles, matched against
    /// [`DatabaseConfig::adapter`].
    fn kind(&self) -> &str;

    async fn connect(&self, config: &DatabaseConfig) -> Result<Arc<dyn Adapter>>;
}
