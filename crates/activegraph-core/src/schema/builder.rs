use super::{Association, Attribute, Model, Name};
use crate::{stmt::Type, Error, Result};

/// Collects the declarations of one model.
///
/// ```
/// # use activegraph_core::schema::ModelBuilder;
/// let mut book = ModelBuilder::new("book");
/// book.primary_key("uid");
/// book.attr_int("uid");
/// book.attr_string("title");
/// book.attr_int("author_id");
/// book.belongs_to("author").foreign_key("author_id");
///
/// let book = book.build().unwrap();
/// assert_eq!(book.table_name(), "books");
/// ```
#[derive(Debug)]
pub struct ModelBuilder {
    name: String,
    attributes: Vec<Attribute>,
    primary_key: Option<String>,
    associations: Vec<Association>,
    connection: Option<String>,
}

/// Primary-key attribute used when a model does not declare one.
pub const DEFAULT_PRIMARY_KEY: &str = "id";

/// Connection used when a model does not name one.
pub const DEFAULT_CONNECTION: &str = "primary";

impl ModelBuilder {
    pub fn new(name: &str) -> ModelBuilder {
        ModelBuilder {
            name: Name::new(name).snake_case(),
            attributes: vec![],
            primary_key: None,
            associations: vec![],
            connection: None,
        }
    }

    pub fn attr(&mut self, name: impl Into<String>, ty: Type) -> &mut Attribute {
        let index = self.attributes.len();
        self.attributes.push(Attribute::new(name, ty));
        &mut self.attributes[index]
    }

    pub fn attr_int(&mut self, name: impl Into<String>) -> &mut Attribute {
        self.attr(name, Type::Integer)
    }

    pub fn attr_float(&mut self, name: impl Into<String>) -> &mut Attribute {
        self.attr(name, Type::Float)
    }

    pub fn attr_string(&mut self, name: impl Into<String>) -> &mut Attribute {
        self.attr(name, Type::String)
    }

    pub fn attr_bool(&mut self, name: impl Into<String>) -> &mut Attribute {
        self.attr(name, Type::Boolean)
    }

    /// Names the primary-key attribute. Defaults to `id`; an undeclared
    /// primary key is added to the catalog as an integer.
    pub fn primary_key(&mut self, name: impl Into<String>) -> &mut Self {
        self.primary_key = Some(name.into());
        self
    }

    pub fn belongs_to(&mut self, name: impl Into<String>) -> &mut Association {
        self.association(Association::belongs_to(name))
    }

    pub fn has_many(&mut self, name: impl Into<String>) -> &mut Association {
        self.association(Association::has_many(name))
    }

    /// Binds the model to a named connection. Defaults to `primary`.
    pub fn connection(&mut self, name: impl Into<String>) -> &mut Self {
        self.connection = Some(name.into());
        self
    }

    fn association(&mut self, association: Association) -> &mut Association {
        let index = self.associations.len();
        self.associations.push(association);
        &mut self.associations[index]
    }

    pub fn build(self) -> Result<Model> {
        if self.name.is_empty() {
            return Err(Error::invalid_schema("model name must not be empty"));
        }

        for (i, attribute) in self.attributes.iter().enumerate() {
            if self.attributes[..i]
                .iter()
                .any(|other| other.name == attribute.name)
            {
                return Err(Error::invalid_schema(format!(
                    "attribute `{}` is declared twice on model `{}`",
                    attribute.name, self.name
                )));
            }
        }

        for (i, association) in self.associations.iter().enumerate() {
            if self.associations[..i]
                .iter()
                .any(|other| other.name == association.name)
            {
                return Err(Error::invalid_schema(format!(
                    "association `{}` is declared twice on model `{}`",
                    association.name, self.name
                )));
            }
        }

        let primary_key = self
            .primary_key
            .unwrap_or_else(|| DEFAULT_PRIMARY_KEY.to_string());

        let mut attributes = self.attributes;
        if !attributes.iter().any(|attribute| attribute.name == primary_key) {
            let mut attribute = Attribute::new(primary_key.clone(), Type::Integer);
            attribute.not_null();
            attributes.insert(0, attribute);
        }

        Ok(Model {
            name: self.name,
            attributes,
            primary_key,
            associations: self.associations,
            connection: self
                .connection
                .unwrap_or_else(|| DEFAULT_CONNECTION.to_string()),
        })
    }
}
