mod connection;
pub use connection::Connection;

pub mod db;
pub use db::Db;

mod engine;

mod model;
pub use model::Model;

mod record;
pub use record::{Record, Status};

mod relation;
pub use relation::Relation;

pub use activegraph_core::{
    adapter::{self, Adapter, Context, DatabaseConfig, Driver},
    async_trait, bail, err,
    schema::{self, Association, AssociationKind, Attribute, ModelBuilder, ResolvedAssociation},
    stmt::{Type, Value, Values},
    Error, Result,
};

/// Builds [`Values`] from `name: value` pairs.
///
/// ```
/// let values = activegraph::values! { title: "Moby Dick", year: 1851 };
/// assert_eq!(values.len(), 2);
/// ```
#[macro_export]
macro_rules! values {
    ( $( $name:ident : $value:expr ),* $(,)? ) => {{
        #[allow(unused_mut)]
        let mut values = $crate::Values::new();
        $(
            values.insert(stringify!($name), $value);
        )*
        values
    }};
}
