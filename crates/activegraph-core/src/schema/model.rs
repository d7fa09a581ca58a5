use super::{Association, Attribute, Name};

/// A named schema definition: attribute catalog, primary key and outgoing
/// associations.
#[derive(Debug, Clone)]
pub struct Model {
    /// Snake-cased model name, unique within a registry
    pub name: String,

    /// Attribute catalog, in declaration order
    pub attributes: Vec<Attribute>,

    /// Name of the primary-key attribute
    pub primary_key: String,

    pub associations: Vec<Association>,

    /// Name of the connection statements for this model execute on
    pub connection: String,
}

impl Model {
    /// Pluralized model name: `book` → `books`.
    pub fn table_name(&self) -> String {
        Name::new(&self.name).plural()
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attribute| attribute.name == name)
    }

    pub fn primary_key_attribute(&self) -> Option<&Attribute> {
        self.attribute(&self.primary_key)
    }

    /// Finds an association by name. A name that only differs in number
    /// (`books` for a declared `book`) also matches.
    pub fn association(&self, name: &str) -> Option<&Association> {
        self.associations
            .iter()
            .find(|association| association.name == name)
            .or_else(|| {
                let singular = Name::new(name).singular();
                self.associations
                    .iter()
                    .find(|association| Name::new(&association.name).singular() == singular)
            })
    }
}
