use activegraph_core::{
    adapter::{Capability, Dialect, ExecResponse, Rows},
    stmt::Value,
    Adapter, Context, Error, Result,
};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// A named handle to an adapter connection.
///
/// Handles are cheap to clone. Once the connection is removed from its
/// [`Db`](crate::Db), every handle fails with
/// [`Error::unknown_connection`].
#[derive(Debug, Clone)]
pub struct Connection {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    name: String,
    adapter: Arc<dyn Adapter>,
    closed: AtomicBool,
}

impl Connection {
    pub(crate) fn new(name: String, adapter: Arc<dyn Adapter>) -> Connection {
        Connection {
            inner: Arc::new(Inner {
                name,
                adapter,
                closed: AtomicBool::new(false),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn capability(&self) -> &Capability {
        self.inner.adapter.capability()
    }

    pub fn dialect(&self) -> Dialect {
        self.capability().dialect
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }

    /// Executes a raw statement that returns no rows, such as DDL.
    pub async fn exec(&self, cx: &Context, sql: &str, params: &[Value]) -> Result<ExecResponse> {
        let adapter = self.adapter()?;
        tracing::debug!(connection = %self.inner.name, sql, params = params.len(), "exec");
        adapter.exec(cx, sql, params).await
    }

    /// Executes a raw query and collects its rows.
    pub async fn query(&self, cx: &Context, sql: &str, params: &[Value]) -> Result<Rows> {
        let adapter = self.adapter()?;
        tracing::debug!(connection = %self.inner.name, sql, params = params.len(), "query");
        adapter.query(cx, sql, params).await
    }

    pub(crate) async fn close(&self) -> Result<()> {
        self.inner.closed.store(true, Ordering::Release);
        self.inner.adapter.close().await
    }

    fn adapter(&self) -> Result<&Arc<dyn Adapter>> {
        if self.is_closed() {
            return Err(Error::unknown_connection(&self.inner.name));
        }
        Ok(&self.inner.adapter)
    }
}
