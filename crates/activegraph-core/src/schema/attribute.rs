use crate::stmt::{Type, Value};

/// A typed, named field of a model.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Attribute name, used verbatim as the column name
    pub name: String,

    /// Logical cast type
    pub ty: Type,

    /// True if the attribute may hold `Null`
    pub nullable: bool,

    /// Value used on insert when the record does not carry the attribute
    pub default: Option<Value>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, ty: Type) -> Attribute {
        Attribute {
            name: name.into(),
            ty,
            nullable: true,
            default: None,
        }
    }

    /// Sets the value used on insert when the record leaves the attribute
    /// out.
    pub fn default(&mut self, value: impl Into<Value>) -> &mut Self {
        self.default = Some(value.into());
        self
    }

    /// Marks the attribute as required.
    pub fn not_null(&mut self) -> &mut Self {
        self.nullable = false;
        self
    }
}
