use super::{AssociationKind, Model, Name, ResolvedAssociation};
use crate::{Error, Result};

use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// Name-keyed store of model definitions.
///
/// Definitions are immutable once registered. Lookups take a shared lock and
/// do not contend with each other.
#[derive(Debug, Default)]
pub struct Registry {
    models: RwLock<IndexMap<String, Arc<Model>>>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Registers `model`. Fails if a model with the same name exists.
    pub fn define(&self, model: Model) -> Result<Arc<Model>> {
        let mut models = self.models.write();

        if models.contains_key(&model.name) {
            return Err(Error::duplicate_model(&model.name));
        }

        let model = Arc::new(model);
        models.insert(model.name.clone(), model.clone());
        Ok(model)
    }

    pub fn get(&self, name: &str) -> Result<Arc<Model>> {
        let models = self.models.read();

        models
            .get(name)
            .or_else(|| models.get(&Name::new(name).snake_case()))
            .cloned()
            .ok_or_else(|| Error::unknown_model(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// Snapshot of all definitions, in definition order.
    pub fn models(&self) -> Vec<Arc<Model>> {
        self.models.read().values().cloned().collect()
    }

    /// Removes every definition.
    pub fn clear(&self) {
        self.models.write().clear();
    }

    /// Resolves `association` on `owner`: looks up the target model and
    /// checks that the foreign key exists on the model that stores it.
    pub fn resolve(&self, owner: &Arc<Model>, association: &str) -> Result<ResolvedAssociation> {
        let Some(declared) = owner.association(association) else {
            return Err(Error::unknown_association(&owner.name, association));
        };

        let target = self.get(&declared.target)?;
        let foreign_key = declared.foreign_key_for(owner);

        let resolved = ResolvedAssociation {
            kind: declared.kind,
            name: declared.name.clone(),
            owner: owner.clone(),
            target,
            foreign_key,
        };

        let storing = resolved.foreign_key_model();
        if storing.attribute(&resolved.foreign_key).is_none() {
            return Err(Error::missing_foreign_key(
                &storing.name,
                &resolved.name,
                &resolved.foreign_key,
            ));
        }

        // The side being matched against must carry a primary key.
        let keyed = match resolved.kind {
            AssociationKind::BelongsTo => &resolved.target,
            AssociationKind::HasMany => &resolved.owner,
        };
        if keyed.primary_key_attribute().is_none() {
            return Err(Error::missing_primary_key(&keyed.name));
        }

        Ok(resolved)
    }
}
