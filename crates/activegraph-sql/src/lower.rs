use crate::stmt::{self as sql, Column, ColumnDef, Condition, Join};

use activegraph_core::{
    schema::{Attribute, Model},
    stmt::{self, Predicate, Value},
    Error, Registry, Result,
};

/// Resolves every model, attribute and association name in `statement`,
/// casts its values through the attribute catalog and validates its shape.
///
/// This is where all compilation failures are reported. Serializing the
/// result cannot fail, so nothing reaches an adapter unless lowering
/// succeeded.
pub fn lower(registry: &Registry, statement: &stmt::Statement) -> Result<sql::Statement> {
    let model = registry.get(statement.model())?;

    let lower = Lower {
        registry,
        table: model.table_name(),
        model: &model,
        qualify: false,
    };

    match statement {
        stmt::Statement::Query(query) => lower.select(query).map(Into::into),
        stmt::Statement::Insert(insert) => lower.insert(insert).map(Into::into),
        stmt::Statement::Update(update) => lower.update(update).map(Into::into),
        stmt::Statement::Delete(delete) => lower.delete(delete).map(Into::into),
        stmt::Statement::CreateTable(_) => Ok(lower.create_table().into()),
    }
}

struct Lower<'a> {
    registry: &'a Registry,
    model: &'a std::sync::Arc<Model>,
    table: String,

    /// Qualify column references with the table name. Set once the
    /// statement joins other tables.
    qualify: bool,
}

impl Lower<'_> {
    fn select(mut self, query: &stmt::Query) -> Result<sql::Select> {
        let joins = query
            .joins
            .iter()
            .map(|name| self.join(name))
            .collect::<Result<Vec<_>>>()?;

        self.qualify = !joins.is_empty();

        let columns = if query.select.is_empty() {
            self.model
                .attributes
                .iter()
                .map(|attribute| self.column(attribute))
                .collect()
        } else {
            query
                .select
                .iter()
                .map(|name| Ok(self.column(self.attribute(name)?)))
                .collect::<Result<Vec<_>>>()?
        };

        self.validate_group(query)?;

        let group_by = query
            .group
            .iter()
            .map(|name| Ok(self.column(self.attribute(name)?)))
            .collect::<Result<Vec<_>>>()?;

        let filter = query
            .filter
            .iter()
            .map(|predicate| self.condition(predicate))
            .collect::<Result<Vec<_>>>()?;

        let order_by = query
            .order_by
            .iter()
            .map(|order_by| {
                let column = self.column(self.attribute(&order_by.attribute)?);
                Ok((column, order_by.direction))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(sql::Select {
            table: self.table,
            columns,
            joins,
            filter,
            group_by,
            order_by,
            limit: query.limit,
        })
    }

    fn join(&self, name: &str) -> Result<Join> {
        let association = self.registry.resolve(self.model, name)?;

        if association.target.name == self.model.name {
            return Err(Error::compilation(format!(
                "cannot join association `{name}` of model `{}` onto its own table",
                self.model.name
            )));
        }

        let table = association.target.table_name();

        Ok(Join {
            lhs: Column::qualified(&table, association.target_key()),
            rhs: Column::qualified(&self.table, association.owner_key()),
            table,
        })
    }

    /// Grouping requires an explicit projection that matches the grouped
    /// attributes exactly.
    fn validate_group(&self, query: &stmt::Query) -> Result<()> {
        let Some(first) = query.group.iter().next() else {
            return Ok(());
        };

        if query.select.is_empty() {
            return Err(Error::compilation(format!(
                "grouping model `{}` by `{first}` requires selecting the grouped attributes",
                self.model.name
            )));
        }

        for name in query.group.iter() {
            self.attribute(name)?;

            if !query.select.contains(name) {
                return Err(Error::compilation(format!(
                    "grouped attribute `{name}` of model `{}` is not selected",
                    self.model.name
                )));
            }
        }

        for name in query.select.iter() {
            if !query.group.contains(name) {
                return Err(Error::compilation(format!(
                    "selected attribute `{name}` of model `{}` is not grouped",
                    self.model.name
                )));
            }
        }

        Ok(())
    }

    fn condition(&self, predicate: &Predicate) -> Result<Condition> {
        match predicate {
            Predicate::Eq { attribute, value } => {
                let attribute = self.attribute(attribute)?;
                let column = self.column(attribute);

                match attribute.ty.cast(value.clone())? {
                    Value::Null => Ok(Condition::IsNull(column)),
                    value => Ok(Condition::Eq(column, value)),
                }
            }
            Predicate::Sql { fragment, args } => {
                let placeholders = predicate.placeholders();

                if placeholders != args.len() {
                    return Err(Error::compilation(format!(
                        "`{fragment}` has {placeholders} placeholder(s) but {} argument(s) were given",
                        args.len()
                    )));
                }

                Ok(Condition::Raw {
                    fragment: fragment.clone(),
                    args: args.clone(),
                })
            }
        }
    }

    fn insert(self, insert: &stmt::Insert) -> Result<sql::Insert> {
        for name in insert.values.keys() {
            self.attribute(name)?;
        }

        let mut columns = vec![];
        let mut values = vec![];

        for attribute in &self.model.attributes {
            let value = match insert.values.get(&attribute.name) {
                Some(value) => attribute.ty.cast(value.clone())?,
                None => match &attribute.default {
                    Some(default) => attribute.ty.cast(default.clone())?,
                    None => continue,
                },
            };

            // A null primary key is assigned by the database
            if value.is_null() && attribute.name == self.model.primary_key {
                continue;
            }

            self.check_nullability(attribute, &value)?;

            columns.push(attribute.name.clone());
            values.push(value);
        }

        Ok(sql::Insert {
            table: self.table,
            columns,
            values,
        })
    }

    fn update(self, update: &stmt::Update) -> Result<sql::Update> {
        let key = self.key(&update.key)?;
        let mut assignments = vec![];

        for (name, value) in update.values.iter() {
            if name == self.model.primary_key {
                continue;
            }

            let attribute = self.attribute(name)?;
            let value = attribute.ty.cast(value.clone())?;
            self.check_nullability(attribute, &value)?;

            assignments.push((attribute.name.clone(), value));
        }

        if assignments.is_empty() {
            return Err(Error::compilation(format!(
                "update of model `{}` assigns no attributes",
                self.model.name
            )));
        }

        Ok(sql::Update {
            table: self.table,
            assignments,
            key,
        })
    }

    fn delete(self, delete: &stmt::Delete) -> Result<sql::Delete> {
        let key = self.key(&delete.key)?;

        Ok(sql::Delete {
            table: self.table,
            key,
        })
    }

    fn create_table(self) -> sql::CreateTable {
        sql::CreateTable {
            columns: self
                .model
                .attributes
                .iter()
                .map(|attribute| ColumnDef::from_attribute(self.model, attribute))
                .collect(),
            table: self.table,
            if_not_exists: true,
        }
    }

    /// Casts a primary-key value, which must be present.
    fn key(&self, key: &Value) -> Result<(String, Value)> {
        let Some(attribute) = self.model.primary_key_attribute() else {
            return Err(Error::missing_primary_key(&self.model.name));
        };

        if key.is_null() {
            return Err(Error::missing_primary_key(&self.model.name));
        }

        Ok((attribute.name.clone(), attribute.ty.cast(key.clone())?))
    }

    fn check_nullability(&self, attribute: &Attribute, value: &Value) -> Result<()> {
        if value.is_null() && !attribute.nullable {
            return Err(Error::compilation(format!(
                "attribute `{}` of model `{}` must not be null",
                attribute.name, self.model.name
            )));
        }
        Ok(())
    }

    fn attribute(&self, name: &str) -> Result<&Attribute> {
        self.model.attribute(name).ok_or_else(|| {
            Error::compilation(format!(
                "unknown attribute `{name}` on model `{}`",
                self.model.name
            ))
        })
    }

    fn column(&self, attribute: &Attribute) -> Column {
        if self.qualify {
            Column::qualified(&self.table, &attribute.name)
        } else {
            Column::new(&attribute.name)
        }
    }
}
