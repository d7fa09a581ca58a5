use super::{Model, Name};

use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationKind {
    /// The owning model stores the foreign key and references one target row.
    BelongsTo,

    /// The target model stores the foreign key; the owner references many
    /// target rows.
    HasMany,
}

/// A declared edge from the owning model to a target model.
///
/// The target is stored by name and only looked up when the association is
/// traversed, so it may be defined after the owner, or reference the owner
/// back.
#[derive(Debug, Clone, PartialEq)]
pub struct Association {
    pub kind: AssociationKind,

    /// Name used to traverse the association
    pub name: String,

    /// Name of the target model
    pub target: String,

    /// Explicit foreign-key attribute, overriding the naming convention
    pub foreign_key: Option<String>,
}

impl Association {
    /// Declares a belongs-to association. The target model defaults to the
    /// association name.
    pub fn belongs_to(name: impl Into<String>) -> Association {
        let name = name.into();
        Association {
            kind: AssociationKind::BelongsTo,
            target: Name::new(&name).snake_case(),
            name,
            foreign_key: None,
        }
    }

    /// Declares a has-many association. The target model defaults to the
    /// singularized association name, so `books` targets `book`.
    pub fn has_many(name: impl Into<String>) -> Association {
        let name = name.into();
        Association {
            kind: AssociationKind::HasMany,
            target: Name::new(&name).singular(),
            name,
            foreign_key: None,
        }
    }

    pub fn foreign_key(&mut self, foreign_key: impl Into<String>) -> &mut Self {
        self.foreign_key = Some(foreign_key.into());
        self
    }

    /// Overrides the target model.
    pub fn model(&mut self, target: impl Into<String>) -> &mut Self {
        self.target = Name::new(&target.into()).snake_case();
        self
    }

    pub fn is_belongs_to(&self) -> bool {
        self.kind == AssociationKind::BelongsTo
    }

    pub fn is_has_many(&self) -> bool {
        self.kind == AssociationKind::HasMany
    }

    /// The foreign-key attribute name: the explicit override if set,
    /// otherwise `<target>_id` for belongs-to and `<owner>_id` for has-many.
    pub fn foreign_key_for(&self, owner: &Model) -> String {
        if let Some(foreign_key) = &self.foreign_key {
            return foreign_key.clone();
        }

        match self.kind {
            AssociationKind::BelongsTo => Name::new(&self.target).foreign_key(),
            AssociationKind::HasMany => Name::new(&owner.name).foreign_key(),
        }
    }
}

/// An association whose target model has been looked up and whose foreign
/// key has been checked against the catalog.
#[derive(Debug, Clone)]
pub struct ResolvedAssociation {
    pub kind: AssociationKind,
    pub name: String,
    pub owner: Arc<Model>,
    pub target: Arc<Model>,
    pub foreign_key: String,
}

impl ResolvedAssociation {
    /// The model whose catalog stores the foreign key.
    pub fn foreign_key_model(&self) -> &Arc<Model> {
        match self.kind {
            AssociationKind::BelongsTo => &self.owner,
            AssociationKind::HasMany => &self.target,
        }
    }

    /// Attribute on the owner that links to [`target_key`](Self::target_key).
    pub fn owner_key(&self) -> &str {
        match self.kind {
            AssociationKind::BelongsTo => &self.foreign_key,
            AssociationKind::HasMany => &self.owner.primary_key,
        }
    }

    /// Attribute on the target that equals the owner's
    /// [`owner_key`](Self::owner_key) for associated rows.
    pub fn target_key(&self) -> &str {
        match self.kind {
            AssociationKind::BelongsTo => &self.target.primary_key,
            AssociationKind::HasMany => &self.foreign_key,
        }
    }
}
