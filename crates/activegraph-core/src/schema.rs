mod association;
pub use association::{Association, AssociationKind, ResolvedAssociation};

mod attribute;
pub use attribute::Attribute;

mod builder;
pub use builder::ModelBuilder;

mod model;
pub use model::Model;

mod name;
pub use name::Name;

mod registry;
pub use registry::Registry;
