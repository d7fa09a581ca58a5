mod builder;
pub use builder::Builder;

use crate::{Connection, Model};

use activegraph_core::{
    schema::ModelBuilder, stmt::Statement, Context, DatabaseConfig, Driver, Error, Registry,
    Result,
};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::{fmt, sync::Arc};

/// Shared state between all `Db` clones.
pub(crate) struct Shared {
    /// Model definitions
    pub(crate) models: Registry,

    /// Live connections by name
    pub(crate) connections: RwLock<IndexMap<String, Connection>>,

    /// Registered drivers by adapter kind
    pub(crate) drivers: IndexMap<String, Arc<dyn Driver>>,
}

/// Owns a model registry and a connection registry.
///
/// Cloning is cheap and every clone sees the same models and connections.
/// Independent `Db` values share nothing.
#[derive(Clone)]
pub struct Db {
    pub(crate) shared: Arc<Shared>,
}

impl Db {
    /// A `Db` with the built-in drivers enabled by cargo features.
    pub fn new() -> Db {
        Db::builder().build()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Defines and registers a model.
    ///
    /// ```
    /// # let db = activegraph::Db::new();
    /// let book = db
    ///     .define("book", |m| {
    ///         m.attr_string("title");
    ///         m.attr_int("year");
    ///         m.belongs_to("author");
    ///     })
    ///     .unwrap();
    ///
    /// assert_eq!(book.table_name(), "books");
    /// assert_eq!(book.primary_key(), "id");
    /// ```
    pub fn define(&self, name: &str, f: impl FnOnce(&mut ModelBuilder)) -> Result<Model> {
        let mut builder = ModelBuilder::new(name);
        f(&mut builder);

        let schema = self.shared.models.define(builder.build()?)?;
        tracing::debug!(model = %schema.name, "defined model");

        Ok(Model::from_schema(self.clone(), schema))
    }

    pub fn model(&self, name: &str) -> Result<Model> {
        let schema = self.shared.models.get(name)?;
        Ok(Model::from_schema(self.clone(), schema))
    }

    /// All defined models, in definition order.
    pub fn models(&self) -> Vec<Model> {
        self.shared
            .models
            .models()
            .into_iter()
            .map(|schema| Model::from_schema(self.clone(), schema))
            .collect()
    }

    /// Removes every model definition. Connections are left alone.
    pub fn reset(&self) {
        self.shared.models.clear();
    }

    /// Connects using the driver registered for `config.adapter` and
    /// registers the connection under `name`, replacing and closing any
    /// connection previously registered under that name.
    pub async fn establish_connection(
        &self,
        name: impl Into<String>,
        config: DatabaseConfig,
    ) -> Result<Connection> {
        let name = name.into();

        let Some(driver) = self.shared.drivers.get(&config.adapter).cloned() else {
            return Err(Error::adapter_unknown(&config.adapter));
        };

        let adapter = driver.connect(&config).await?;
        let connection = Connection::new(name.clone(), adapter);

        let replaced = self
            .shared
            .connections
            .write()
            .insert(name.clone(), connection.clone());

        if let Some(replaced) = replaced {
            if let Err(err) = replaced.close().await {
                tracing::warn!(connection = %name, error = %err, "failed to close replaced connection");
            }
        }

        tracing::info!(connection = %name, adapter = %config.adapter, "established connection");
        Ok(connection)
    }

    /// Detaches and closes the named connection. Handles to it fail with
    /// [`Error::unknown_connection`] afterwards. Removing an absent name does
    /// nothing.
    pub async fn remove_connection(&self, name: &str) -> Result<()> {
        let removed = self.shared.connections.write().shift_remove(name);

        if let Some(connection) = removed {
            connection.close().await?;
            tracing::info!(connection = %name, "removed connection");
        }

        Ok(())
    }

    pub fn connection(&self, name: &str) -> Result<Connection> {
        self.shared
            .connections
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::unknown_connection(name))
    }

    /// Creates the table of every defined model on its bound connection, if
    /// it does not exist yet.
    pub async fn push_schema(&self, cx: &Context) -> Result<()> {
        for model in self.shared.models.models() {
            self.exec(cx, &Statement::CreateTable(model.name.clone()))
                .await?;
        }

        Ok(())
    }
}

impl Default for Db {
    fn default() -> Self {
        Db::new()
    }
}

impl fmt::Debug for Db {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let models = self.shared.models.models();
        let connections = self.shared.connections.read();

        f.debug_struct("Db")
            .field(
                "models",
                &models.iter().map(|model| &model.name).collect::<Vec<_>>(),
            )
            .field("connections", &connections.keys().collect::<Vec<_>>())
            .field("drivers", &self.shared.drivers.keys().collect::<Vec<_>>())
            .finish()
    }
}
