use crate::{Model, Relation};

use activegraph_core::{
    adapter::Row,
    schema::AssociationKind,
    stmt::{Delete, Insert, Statement, Type, Update, Value, Values},
    Context, Error, Result,
};
use std::fmt;

/// Persistence status of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Built in memory, not inserted yet
    New,

    /// Inserted or loaded from the database
    Persisted,

    /// Deleted from the database
    Destroyed,
}

/// One instance of a model: its attribute values, persistence status and
/// the outcome of the last operation.
///
/// `insert`, `update` and `destroy` never fail on the spot. They record
/// their outcome, which is inspected with [`error`](Record::error) or turned
/// into a panic with [`expect`](Record::expect).
#[derive(Clone)]
pub struct Record {
    model: Model,
    values: Values,
    status: Status,
    error: Option<Error>,
}

impl Record {
    pub(crate) fn new(model: Model, values: Values) -> Record {
        Record {
            model,
            values,
            status: Status::New,
            error: None,
        }
    }

    /// Builds a persisted record from a result row. Values of catalog
    /// attributes are cast to their attribute type.
    pub(crate) fn hydrate(model: Model, row: Row) -> Result<Record> {
        let mut values = Values::new();

        for (column, value) in row {
            let value = match model.attribute(&column) {
                Some(attribute) => attribute.ty.cast(value)?,
                None => value,
            };
            values.insert(column, value);
        }

        Ok(Record {
            model,
            values,
            status: Status::Persisted,
            error: None,
        })
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Returns the value of `name`, or `None` if the record does not carry
    /// the attribute, for example because it was not selected.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.values.insert(name, value);
        self
    }

    /// Sets every value in `values`.
    pub fn assign(&mut self, values: impl Into<Values>) -> &mut Self {
        self.values.merge(values.into());
        self
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    /// The primary-key value, if present and not null.
    pub fn key(&self) -> Option<&Value> {
        self.values
            .get(self.model.primary_key())
            .filter(|value| !value.is_null())
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_new_record(&self) -> bool {
        self.status == Status::New
    }

    pub fn is_persisted(&self) -> bool {
        self.status == Status::Persisted
    }

    pub fn is_destroyed(&self) -> bool {
        self.status == Status::Destroyed
    }

    /// True if the last operation succeeded.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// The reason the last operation failed.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn outcome(&self) -> Result<()> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    /// Panics with `"<msg>: <reason>"` if the last operation failed.
    #[track_caller]
    pub fn expect(&self, msg: &str) -> &Self {
        if let Some(err) = &self.error {
            panic!("{msg}: {err}");
        }
        self
    }

    /// Inserts a new record. On success the record is persisted, carries the
    /// values as stored (defaults included) and the database-assigned key.
    /// On failure it stays new.
    pub async fn insert(&mut self, cx: &Context) -> &mut Self {
        let result = self.try_insert(cx).await;
        self.finish("insert", result)
    }

    /// Writes the record's values to its row.
    pub async fn update(&mut self, cx: &Context) -> &mut Self {
        let result = self.try_update(cx).await;
        self.finish("update", result)
    }

    /// Deletes the record's row.
    pub async fn destroy(&mut self, cx: &Context) -> &mut Self {
        let result = self.try_destroy(cx).await;
        self.finish("destroy", result)
    }

    async fn try_insert(&mut self, cx: &Context) -> Result<()> {
        if self.status != Status::New {
            return Err(Error::compilation(format!(
                "cannot insert a {} `{}` record",
                self.status,
                self.model.name()
            )));
        }

        let stmt = Statement::Insert(Insert {
            model: self.model.name().to_string(),
            values: self.values.clone(),
        });

        let (compiled, response) = self.model.db().exec(cx, &stmt).await?;

        if let Some(insert) = compiled.stmt.as_insert() {
            for (column, value) in insert.row() {
                self.values.insert(column, value);
            }
        }

        // Only integer keys are assigned by the database
        if self.key().is_none() {
            let primary_key = self
                .model
                .attribute(self.model.primary_key())
                .filter(|attribute| attribute.ty == Type::Integer);

            if let (Some(attribute), Some(key)) = (primary_key, response.last_insert_key) {
                let key = attribute.ty.cast(key)?;
                self.values.insert(attribute.name.clone(), key);
            }
        }

        self.status = Status::Persisted;
        Ok(())
    }

    async fn try_update(&mut self, cx: &Context) -> Result<()> {
        let key = self.persisted_key()?;

        let stmt = Statement::Update(Update {
            model: self.model.name().to_string(),
            key,
            values: self.values.clone(),
        });

        let (compiled, _) = self.model.db().exec(cx, &stmt).await?;

        if let activegraph_sql::Statement::Update(update) = &compiled.stmt {
            for (column, value) in &update.assignments {
                self.values.insert(column, value);
            }
        }

        Ok(())
    }

    async fn try_destroy(&mut self, cx: &Context) -> Result<()> {
        let key = self.persisted_key()?;

        let stmt = Statement::Delete(Delete {
            model: self.model.name().to_string(),
            key,
        });

        self.model.db().exec(cx, &stmt).await?;

        self.status = Status::Destroyed;
        Ok(())
    }

    fn persisted_key(&self) -> Result<Value> {
        match self.key() {
            Some(key) if self.is_persisted() => Ok(key.clone()),
            _ => Err(Error::missing_primary_key(self.model.name())),
        }
    }

    fn finish(&mut self, action: &'static str, result: Result<()>) -> &mut Self {
        match result {
            Ok(()) => self.error = None,
            Err(err) => {
                tracing::debug!(model = %self.model.name(), action, error = %err, "record operation failed");
                self.error = Some(err);
            }
        }
        self
    }

    /// Loads the target of a belongs-to association.
    ///
    /// Returns `Ok(None)` without querying when the foreign key is absent or
    /// null, and when no row matches.
    pub async fn association(&self, name: &str, cx: &Context) -> Result<Option<Record>> {
        let association = self.model.resolve_association(name)?;

        if association.kind == AssociationKind::HasMany {
            return Err(Error::compilation(format!(
                "association `{name}` of model `{}` is has-many; use `collection`",
                self.model.name()
            )));
        }

        let key = match self.values.get(association.owner_key()) {
            Some(key) if !key.is_null() => key.clone(),
            _ => return Ok(None),
        };

        let target = Model::from_schema(self.model.db().clone(), association.target.clone());

        target
            .filter_by(association.target_key(), key)
            .first(cx)
            .await
    }

    /// The relation over the records of a has-many association. Nothing is
    /// executed, so the relation can be refined further.
    pub fn collection(&self, name: &str) -> Result<Relation> {
        let association = self.model.resolve_association(name)?;

        if association.kind == AssociationKind::BelongsTo {
            return Err(Error::compilation(format!(
                "association `{name}` of model `{}` is belongs-to; use `association`",
                self.model.name()
            )));
        }

        let Some(key) = self
            .values
            .get(association.owner_key())
            .filter(|key| !key.is_null())
        else {
            return Err(Error::missing_primary_key(self.model.name()));
        };

        let target = Model::from_schema(self.model.db().clone(), association.target.clone());
        Ok(target.filter_by(association.target_key(), key.clone()))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::New => "new",
            Status::Persisted => "persisted",
            Status::Destroyed => "destroyed",
        })
    }
}

/// Renders `#<book uid: 1, title: "Moby Dick">`, catalog attributes first.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<{}", self.model.name())?;

        let catalog = self
            .model
            .attributes()
            .iter()
            .filter_map(|attribute| {
                self.values
                    .get(&attribute.name)
                    .map(|value| (&attribute.name[..], value))
            });
        let extra = self
            .values
            .iter()
            .filter(|(name, _)| self.model.attribute(name).is_none());

        for (i, (name, value)) in catalog.chain(extra).enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{name}: {value}")?;
        }

        f.write_str(">")
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("model", &self.model.name())
            .field("values", &self.values)
            .field("status", &self.status)
            .field("error", &self.error)
            .finish()
    }
}
