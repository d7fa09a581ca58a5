mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod list;
pub use list::List;

mod order_by;
pub use order_by::{Direction, OrderBy};

mod predicate;
pub use predicate::{split_placeholders, Predicate};

mod query;
pub use query::Query;

mod statement;
pub use statement::Statement;

mod ty;
pub use ty::Type;

mod update;
pub use update::Update;

mod value;
pub use value::Value;

mod values;
pub use values::Values;
