mod lower;
pub use lower::lower;

pub mod serializer;
pub use serializer::{Params, Placeholder, Serializer};

pub mod stmt;
pub use stmt::Statement;

use activegraph_core::{adapter::Dialect, stmt::Value, Registry, Result};

/// Lowers `statement` against `registry` and serializes it for `dialect`.
///
/// Returns the SQL text and its positional parameters.
pub fn compile(
    registry: &Registry,
    statement: &activegraph_core::stmt::Statement,
    dialect: Dialect,
) -> Result<(String, Vec<Value>)> {
    let stmt = lower(registry, statement)?;
    let mut params = vec![];
    let sql = Serializer::for_dialect(dialect).serialize(&stmt, &mut params);
    Ok((sql, params))
}
