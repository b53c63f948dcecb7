//! Projection cache - one descriptor per type for the process lifetime

use std::sync::Arc;
use dashmap::DashMap;

use crate::error::MappingResult;
use crate::introspect::{TypeInfo, TypeRef};
use super::extractor::MetadataExtractor;
use super::projection::ProjectionData;

/// Thread-safe, append-only cache of resolved descriptors.
///
/// Failed resolutions are not cached, so a misconfigured type fails on every
/// lookup. There is no eviction.
#[derive(Debug)]
pub struct ProjectionCache {
    extractor: MetadataExtractor,
    entries: DashMap<TypeRef, Arc<ProjectionData>>,
    enabled: bool,
}

impl Default for ProjectionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectionCache {
    pub fn new() -> Self {
        Self {
            extractor: MetadataExtractor::new(),
            entries: DashMap::new(),
            enabled: true,
        }
    }

    /// A cache that resolves on every call and stores nothing
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Return the cached descriptor for a type, resolving it on first use
    pub fn get_or_resolve(&self, info: &TypeInfo) -> MappingResult<Arc<ProjectionData>> {
        if !self.enabled {
            return self.extractor.resolve(info).map(Arc::new);
        }

        if let Some(hit) = self.entries.get(&info.ty) {
            tracing::trace!("Projection cache hit for {}", info.ty);
            return Ok(hit.value().clone());
        }

        tracing::debug!("Projection cache miss for {}", info.ty);
        let data = Arc::new(self.extractor.resolve(info)?);

        // A concurrent resolver may have stored first; keep its instance.
        let stored = self.entries.entry(info.ty.clone()).or_insert(data);
        Ok(stored.value().clone())
    }

    pub fn get(&self, ty: &TypeRef) -> Option<Arc<ProjectionData>> {
        self.entries.get(ty).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
