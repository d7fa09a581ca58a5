use crate::{Db, Record, Relation};

use activegraph_core::{
    schema::{self, Association, Attribute, ResolvedAssociation},
    stmt::{Query, Value, Values},
    Context, Result,
};
use std::{fmt, sync::Arc};

/// Handle to a defined model.
///
/// The entry point for building relations and records of the model. Cheap
/// to clone.
#[derive(Clone)]
pub struct Model {
    db: Db,
    schema: Arc<schema::Model>,
}

impl Model {
    pub(crate) fn from_schema(db: Db, schema: Arc<schema::Model>) -> Model {
        Model { db, schema }
    }

    pub(crate) fn db(&self) -> &Db {
        &self.db
    }

    pub fn schema(&self) -> &Arc<schema::Model> {
        &self.schema
    }

    pub fn name(&self) -> &str {
        &self.schema.name
    }

    pub fn table_name(&self) -> String {
        self.schema.table_name()
    }

    pub fn primary_key(&self) -> &str {
        &self.schema.primary_key
    }

    /// The attribute catalog, in declaration order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.schema.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.schema.attribute(name)
    }

    pub fn associations(&self) -> &[Association] {
        &self.schema.associations
    }

    /// Resolves an association against the models defined so far.
    pub fn resolve_association(&self, name: &str) -> Result<ResolvedAssociation> {
        self.db.shared.models.resolve(&self.schema, name)
    }

    /// Builds an unsaved record.
    pub fn new(&self, values: impl Into<Values>) -> Record {
        Record::new(self.clone(), values.into())
    }

    /// A relation over every row of the model.
    pub fn all(&self) -> Relation {
        Relation::new(self.clone(), Query::new(&self.schema.name))
    }

    pub fn filter<I>(&self, fragment: &str, args: I) -> Relation
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.all().filter(fragment, args)
    }

    pub fn filter_by(&self, attribute: &str, value: impl Into<Value>) -> Relation {
        self.all().filter_by(attribute, value)
    }

    pub fn select<I>(&self, attributes: I) -> Relation
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.all().select(attributes)
    }

    pub fn group<I>(&self, attributes: I) -> Relation
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.all().group(attributes)
    }

    pub fn joins(&self, association: &str) -> Relation {
        self.all().joins(association)
    }

    pub fn order(&self, order: &str) -> Relation {
        self.all().order(order)
    }

    /// Loads the record with primary key `key`.
    pub async fn find(&self, cx: &Context, key: impl Into<Value>) -> Result<Option<Record>> {
        self.filter_by(&self.schema.primary_key, key).first(cx).await
    }

    /// Builds a record and inserts it. Check the returned record's outcome
    /// for failures.
    pub async fn create(&self, cx: &Context, values: impl Into<Values>) -> Record {
        let mut record = self.new(values);
        record.insert(cx).await;
        record
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("name", &self.schema.name)
            .field("primary_key", &self.schema.primary_key)
            .field("connection", &self.schema.connection)
            .finish()
    }
}
