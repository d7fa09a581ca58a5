use activegraph::{
    adapter::{Capability, ExecResponse, Rows},
    async_trait, Adapter, Context, DatabaseConfig, Driver, Result, Value,
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Exec,
    Query,
}

/// One statement that reached the adapter.
#[derive(Debug, Clone)]
pub struct AdapterOp {
    pub kind: OpKind,
    pub sql: String,
    pub params: Vec<Value>,
}

/// A driver wrapper that logs every statement its adapters receive.
#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,

    /// Shared by every adapter this driver opens
    ops_log: Arc<Mutex<Vec<AdapterOp>>>,
}

impl LoggingDriver {
    pub fn new(driver: impl Driver) -> Self {
        Self {
            inner: Box::new(driver),
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<AdapterOp>>> {
        self.ops_log.clone()
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    fn kind(&self) -> &str {
        self.inner.kind()
    }

    async fn connect(&self, config: &DatabaseConfig) -> Result<Arc<dyn Adapter>> {
        Ok(Arc::new(LoggingAdapter {
            inner: self.inner.connect(config).await?,
            ops_log: self.ops_log_handle(),
        }))
    }
}

#[derive(Debug)]
pub struct LoggingAdapter {
    /// The adapter that actually executes statements
    inner: Arc<dyn Adapter>,

    ops_log: Arc<Mutex<Vec<AdapterOp>>>,
}

impl LoggingAdapter {
    fn log(&self, kind: OpKind, sql: &str, params: &[Value]) {
        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(AdapterOp {
                kind,
                sql: sql.to_string(),
                params: params.to_vec(),
            });
    }
}

#[async_trait]
impl Adapter for LoggingAdapter {
    fn capability(&self) -> &Capability {
        self.inner.capability()
    }

    async fn exec(&self, cx: &Context, sql: &str, params: &[Value]) -> Result<ExecResponse> {
        self.log(OpKind::Exec, sql, params);
        self.inner.exec(cx, sql, params).await
    }

    async fn query(&self, cx: &Context, sql: &str, params: &[Value]) -> Result<Rows> {
        self.log(OpKind::Query, sql, params);
        self.inner.query(cx, sql, params).await
    }

    async fn close(&self) -> Result<()> {
        self.inner.close().await
    }
}
