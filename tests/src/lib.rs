
mod exec_log;
pub use exec_log::ExecLog;

mod logging_driver;
pub use logging_driver::{AdapterOp, LoggingAdapter, LoggingDriver, OpKind};

use activegraph::{Context, DatabaseConfig, Db, Model, Record, Value, Values};
use activegraph_adapter_sqlite::Sqlite;
use std::sync::{Arc, Mutex, Once};
use tracing_subscriber::EnvFilter;

/// A fresh database wired to an in-memory SQLite connection named
/// `primary`, with every statement logged.
pub struct DbTest {
    pub db: Db,
    pub cx: Context,
    ops_log: Arc<Mutex<Vec<AdapterOp>>>,
}

impl DbTest {
    pub async fn new() -> DbTest {
        init_tracing();

        let driver = LoggingDriver::new(Sqlite);
        let ops_log = driver.ops_log_handle();

        let db = Db::builder().driver(driver).build();
        db.establish_connection("primary", DatabaseConfig::sqlite_in_memory())
            .await
            .unwrap();

        DbTest {
            db,
            cx: Context::background(),
            ops_log,
        }
    }

    /// Defines the bookstore models and creates their tables. The log is
    /// cleared afterwards.
    pub async fn bookstore() -> DbTest {
        let test = DbTest::new().await;
        define_bookstore(&test.db);
        test.db.push_schema(&test.cx).await.unwrap();
        test.log().clear();
        test
    }

    pub fn model(&self, name: &str) -> Model {
        self.db.model(name).unwrap()
    }

    /// Get the operations log for assertions
    pub fn log(&self) -> ExecLog {
        ExecLog::new(self.ops_log.clone())
    }

    /// Inserts a record and panics if the insert fails.
    pub async fn create(&self, model: &str, values: Values) -> Record {
        let record = self.model(model).create(&self.cx, values).await;
        record.expect("create");
        record
    }
}

/// `author` has many books; `book` is keyed by `uid` and belongs to an
/// author; `publisher` is unrelated.
pub fn define_bookstore(db: &Db) {
    db.define("author", |m| {
        m.attr_string("name").not_null();
        m.has_many("books");
    })
    .unwrap();

    db.define("book", |m| {
        m.primary_key("uid");
        m.attr_int("uid");
        m.attr_string("title").not_null();
        m.attr_int("year");
        m.attr_bool("in_print").default(true);
        m.attr_int("author_id");
        m.belongs_to("author");
    })
    .unwrap();

    db.define("publisher", |m| {
        m.attr_string("name");
        m.attr_float("revenue");
    })
    .unwrap();
}

/// Installs a `tracing` subscriber configured from `RUST_LOG`. Safe to call
/// from every test.
pub fn init_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// The `title` of every record, in order.
pub fn titles(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|record| match record.get("title") {
            Some(Value::String(title)) => title.clone(),
            other => panic!("record without a title: {other:?}"),
        })
        .collect()
}
