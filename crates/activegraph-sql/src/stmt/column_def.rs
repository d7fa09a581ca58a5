use super::Type;

use activegraph_core::schema::{Attribute, Model};

#[derive(Debug, Clone)]
pub struct ColumnDef {
    /// Name of the column
    pub name: String,

    /// Logical type; the serializer picks the storage type per flavor
    pub ty: Type,

    pub not_null: bool,

    /// True for the primary-key column. Integer primary keys are
    /// auto-assigned by the database.
    pub primary_key: bool,
}

impl ColumnDef {
    pub(crate) fn from_attribute(model: &Model, attribute: &Attribute) -> ColumnDef {
        ColumnDef {
            name: attribute.name.clone(),
            ty: attribute.ty,
            not_null: !attribute.nullable,
            primary_key: attribute.name == model.primary_key,
        }
    }
}
