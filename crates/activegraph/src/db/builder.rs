use super::{Db, Shared};

use activegraph_core::{Driver, Registry};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    /// Drivers by adapter kind
    drivers: IndexMap<String, Arc<dyn Driver>>,
}

impl Builder {
    /// Registers a driver. A later driver of the same kind replaces an
    /// earlier one, including the built-in ones.
    pub fn driver(&mut self, driver: impl Driver) -> &mut Self {
        self.drivers
            .insert(driver.kind().to_string(), Arc::new(driver));
        self
    }

    pub fn build(&mut self) -> Db {
        let mut drivers = IndexMap::new();

        #[cfg(feature = "sqlite")]
        {
            let sqlite = activegraph_adapter_sqlite::Sqlite;
            drivers.insert(
                sqlite.kind().to_string(),
                Arc::new(sqlite) as Arc<dyn Driver>,
            );
        }

        drivers.extend(
            self.drivers
                .iter()
                .map(|(kind, driver)| (kind.clone(), driver.clone())),
        );

        Db {
            shared: Arc::new(Shared {
                models: Registry::new(),
                connections: RwLock::new(IndexMap::new()),
                drivers,
            }),
        }
    }
}
