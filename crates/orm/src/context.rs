//! Mapping context - the mapping subsystem wired together
//!
//! Created once at startup and shared by the query and command builders. It
//! owns the type catalog, the projection cache, the association resolver (and
//! with it the association registry) and the active SQL provider.

use std::sync::Arc;

use crate::backends::SqlProvider;
use crate::config::MappingConfig;
use crate::error::{MappingError, MappingResult};
use crate::introspect::{Entity, Introspector, TypeCatalog, TypeInfo, TypeRef};
use crate::metadata::{ProjectionCache, ProjectionData};
use crate::relationships::AssociationResolver;

#[derive(Debug)]
pub struct MappingContext {
    config: MappingConfig,
    catalog: Arc<TypeCatalog>,
    projections: ProjectionCache,
    associations: AssociationResolver,
    provider: Arc<dyn SqlProvider>,
}

impl MappingContext {
    pub fn new(config: MappingConfig) -> MappingResult<Self> {
        config.validate()?;

        let catalog = Arc::new(TypeCatalog::new());
        let introspector: Arc<dyn Introspector> = catalog.clone();
        let associations = AssociationResolver::new(introspector)
            .with_entity_set_suffix(config.entity_set_suffix.clone());
        let projections = if config.cache_descriptors {
            ProjectionCache::new()
        } else {
            ProjectionCache::disabled()
        };
        let provider = config.dialect.provider();

        tracing::debug!("Mapping context created for dialect {}", config.dialect);

        Ok(Self {
            config,
            catalog,
            projections,
            associations,
            provider,
        })
    }

    /// Build a context from `ORM_*` environment variables
    pub fn from_env() -> MappingResult<Self> {
        Self::new(MappingConfig::from_env()?)
    }

    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<TypeCatalog> {
        &self.catalog
    }

    pub fn associations(&self) -> &AssociationResolver {
        &self.associations
    }

    pub fn provider(&self) -> &Arc<dyn SqlProvider> {
        &self.provider
    }

    /// Register an entity type with the catalog
    pub fn register<T: Entity>(&self) -> Arc<TypeInfo> {
        self.catalog.register_entity::<T>()
    }

    /// Descriptor of an entity type, registering the type if needed
    pub fn projection<T: Entity>(&self) -> MappingResult<Arc<ProjectionData>> {
        let info = self.register::<T>();
        self.projections.get_or_resolve(&info)
    }

    /// Descriptor of an already registered type
    pub fn projection_for(&self, ty: &TypeRef) -> MappingResult<Arc<ProjectionData>> {
        let info = self.catalog.get(ty).ok_or_else(|| MappingError::UnknownType {
            type_name: ty.to_string(),
        })?;
        self.projections.get_or_resolve(&info)
    }
}
