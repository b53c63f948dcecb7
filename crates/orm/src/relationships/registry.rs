//! Association Registry - which property declared each classified association

use std::sync::Arc;
use dashmap::DashMap;

use crate::introspect::{Association, AssociationId, PropertyInfo};

/// One registration: the association instance and the property declaring it.
/// Holding `association` keeps its [`AssociationId`] from being reused.
#[derive(Debug, Clone)]
pub struct RegisteredAssociation {
    pub association: Association,
    pub property: Arc<PropertyInfo>,
}

/// Thread-safe, append-only registry keyed by association instance.
///
/// Entries are written the first time an association is classified and never
/// overwritten or removed. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct AssociationRegistry {
    entries: Arc<DashMap<AssociationId, RegisteredAssociation>>,
}

impl AssociationRegistry {
    /// Create a new empty association registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `property` declares `association`.
    ///
    /// Returns `true` when this call created the entry. The check and the
    /// insert happen under the same shard lock, so racing callers register
    /// an instance exactly once.
    pub fn register(&self, association: &Association, property: &Arc<PropertyInfo>) -> bool {
        let mut inserted = false;
        self.entries.entry(association.id()).or_insert_with(|| {
            inserted = true;
            RegisteredAssociation {
                association: association.clone(),
                property: property.clone(),
            }
        });

        if inserted {
            tracing::debug!(
                "Registered association '{}' declared by property '{}'",
                association.name,
                property.name
            );
        }
        inserted
    }

    /// The property that declared a registered association
    pub fn property_of(&self, association: &Association) -> Option<Arc<PropertyInfo>> {
        self.entries
            .get(&association.id())
            .map(|entry| entry.property.clone())
    }

    pub fn contains(&self, association: &Association) -> bool {
        self.entries.contains_key(&association.id())
    }

    /// Get statistics about the registry
    pub fn stats(&self) -> RegistryStats {
        let total_associations = self.entries.len();
        let foreign_key_sides = self
            .entries
            .iter()
            .filter(|entry| entry.association.is_foreign_key)
            .count();

        RegistryStats {
            total_associations,
            foreign_key_sides,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Statistics about the association registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryStats {
    pub total_associations: usize,
    pub foreign_key_sides: usize,
}
