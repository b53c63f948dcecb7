//! Type catalog - the introspection capability handed to the resolvers

use std::sync::Arc;
use dashmap::DashMap;

use super::types::{TypeInfo, TypeRef};

/// Implemented by types that publish their mapping metadata
pub trait Entity {
    fn type_info() -> TypeInfo;
}

/// Resolves a type identity to its description
pub trait Introspector: Send + Sync {
    fn describe(&self, ty: &TypeRef) -> Option<Arc<TypeInfo>>;
}

/// Thread-safe store of type descriptions, one shared instance per type.
///
/// Association identity is instance identity, so every component that looks a
/// type up must see the same `Arc<TypeInfo>`. The first registration of a type
/// wins and later registrations return the stored instance.
#[derive(Debug, Default)]
pub struct TypeCatalog {
    types: DashMap<TypeRef, Arc<TypeInfo>>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type description, returning the canonical shared instance
    pub fn register(&self, info: TypeInfo) -> Arc<TypeInfo> {
        let registered = self
            .types
            .entry(info.ty.clone())
            .or_insert_with(|| {
                tracing::debug!("Registering type information for {}", info.ty);
                Arc::new(info)
            });
        registered.value().clone()
    }

    /// Register an [`Entity`], building its description only on first registration
    pub fn register_entity<T: Entity>(&self) -> Arc<TypeInfo> {
        let info = T::type_info();
        if let Some(existing) = self.types.get(&info.ty) {
            return existing.value().clone();
        }
        self.register(info)
    }

    pub fn get(&self, ty: &TypeRef) -> Option<Arc<TypeInfo>> {
        self.types.get(ty).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, ty: &TypeRef) -> bool {
        self.types.contains_key(ty)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Introspector for TypeCatalog {
    fn describe(&self, ty: &TypeRef) -> Option<Arc<TypeInfo>> {
        self.get(ty)
    }
}
