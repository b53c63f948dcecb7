//! Association Resolver - classifying association properties and pairing them
//! with their reverse side

use std::sync::Arc;

use crate::config::DEFAULT_ENTITY_SET_SUFFIX;
use crate::error::{MappingError, MappingResult};
use crate::introspect::{Association, HasAttributes, Introspector, MemberExpr, PropertyInfo, TypeRef};
use super::registry::AssociationRegistry;

/// Given type `EntitySet<X>`, return `X`; any other type is returned unchanged.
///
/// A type counts as an entity set when its name ends with `suffix` and it has
/// exactly one generic argument.
pub fn extract_related_type(ty: &TypeRef, suffix: &str) -> TypeRef {
    match ty.args.as_slice() {
        [inner] if ty.name.ends_with(suffix) => inner.clone(),
        _ => ty.clone(),
    }
}

/// Classifies association properties and finds reverse associations.
///
/// Owns the [`AssociationRegistry`] that records every classified association.
/// Reverse lookups consult the introspector for the related type, so the
/// introspector must hand out the same shared type descriptions the caller
/// classified from.
pub struct AssociationResolver {
    registry: AssociationRegistry,
    introspector: Arc<dyn Introspector>,
    entity_set_suffix: String,
}

impl AssociationResolver {
    pub fn new(introspector: Arc<dyn Introspector>) -> Self {
        Self {
            registry: AssociationRegistry::new(),
            introspector,
            entity_set_suffix: DEFAULT_ENTITY_SET_SUFFIX.to_string(),
        }
    }

    pub fn with_entity_set_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.entity_set_suffix = suffix.into();
        self
    }

    pub fn registry(&self) -> &AssociationRegistry {
        &self.registry
    }

    /// Given property `Order.Customer`, check whether it carries an
    /// association attribute. The first association attribute is returned and
    /// registered against the property the first time it is seen.
    pub fn classify(&self, property: &Arc<PropertyInfo>) -> Option<Association> {
        let association = property.associations().next()?.clone();
        self.registry.register(&association, property);
        Some(association)
    }

    /// Given expression `o.Customer`, check whether the accessed member is an
    /// association property. Absent expressions and non-property members are
    /// never associations.
    pub fn classify_member(&self, expr: Option<&MemberExpr>) -> Option<Association> {
        let property = expr?.as_property()?;
        self.classify(property)
    }

    /// Unwrap an entity-set association target to its entity type
    pub fn extract_related_type(&self, ty: &TypeRef) -> TypeRef {
        extract_related_type(ty, &self.entity_set_suffix)
    }

    /// Find the association on the related type whose name matches.
    ///
    /// `Ok(None)` means the association is one-directional. The input must
    /// come from a previous [`classify`](Self::classify) on this resolver.
    pub fn find_reverse(&self, association: &Association) -> MappingResult<Option<Association>> {
        Ok(self
            .find_reverse_property(association)?
            .map(|(_, reverse)| reverse))
    }

    /// Like [`find_reverse`](Self::find_reverse), also returning the related
    /// type's property that declares the reverse association.
    pub fn find_reverse_property(
        &self,
        association: &Association,
    ) -> MappingResult<Option<(Arc<PropertyInfo>, Association)>> {
        let property = self.registry.property_of(association).ok_or_else(|| {
            MappingError::UnregisteredAssociation {
                name: association.name.clone(),
            }
        })?;

        let related_type = self.extract_related_type(&property.ty);
        let related = self
            .introspector
            .describe(&related_type)
            .ok_or_else(|| MappingError::UnknownType {
                type_name: related_type.to_string(),
            })?;

        // e.g. 'FK_Customers_Orders'; first match in property order wins
        let reverse = related.properties.iter().find_map(|candidate| {
            candidate
                .associations()
                .find(|a| a.name == association.name)
                .map(|a| (candidate.clone(), a.clone()))
        });

        match &reverse {
            Some((reverse_property, _)) => tracing::debug!(
                "Association '{}' on {} reverses through {}.{}",
                association.name,
                property.name,
                related_type,
                reverse_property.name
            ),
            None => tracing::debug!(
                "Association '{}' on {} has no reverse on {}",
                association.name,
                property.name,
                related_type
            ),
        }

        Ok(reverse)
    }
}

impl std::fmt::Debug for AssociationResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssociationResolver")
            .field("registry", &self.registry)
            .field("entity_set_suffix", &self.entity_set_suffix)
            .finish_non_exhaustive()
    }
}
