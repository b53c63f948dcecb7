//! Metadata Extractor - builds `ProjectionData` from a type description

use crate::error::{MappingError, MappingResult};
use crate::introspect::{table_attribute, ConstructorInfo, HasAttributes, TypeInfo};
use super::projection::{ConstructionStrategy, ProjectionData, ProjectionField};

/// Stateless resolver from [`TypeInfo`] to [`ProjectionData`].
///
/// Safe to call concurrently and repeatedly; equal input yields an equal
/// descriptor. Caching is left to [`super::ProjectionCache`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataExtractor;

impl MetadataExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Prepare the projection data for a type: constructors, table, column
    /// fields and the auto-generated id field.
    pub fn resolve(&self, info: &TypeInfo) -> MappingResult<ProjectionData> {
        let mut data = ProjectionData::new(info.ty.clone());

        let (ctor, ctor2) = select_constructors(info);
        data.construction = match (&ctor, &ctor2) {
            (Some(_), _) => Some(ConstructionStrategy::ZeroArgThenAssign),
            (None, Some(full)) => Some(ConstructionStrategy::FullArgConstructor(full.clone())),
            (None, None) => None,
        };
        data.ctor = ctor;
        data.ctor2 = ctor2;

        data.table = table_attribute(info).cloned();

        for property in &info.properties {
            let Some(column) = property.columns().next() else {
                // not a DB field
                continue;
            };

            if !property.can_write {
                return Err(MappingError::not_writable(info.name(), &property.name));
            }

            let field = ProjectionField::new(property.clone(), column.clone());

            if field.is_primary_key() {
                if let Some(previous) = &data.key_column_name {
                    tracing::warn!(
                        "Type {} declares more than one primary key column; '{}' replaces '{}'",
                        info.ty,
                        field.column_name(),
                        previous
                    );
                }
                data.key_column_name = Some(field.column_name().to_string());
            }

            data.fields.push(field);
        }

        data.auto_gen_field = info
            .non_public_instance_fields()
            .find(|field| field.has_auto_gen_id())
            .cloned();

        tracing::debug!(
            "Resolved projection data for {}: table={:?}, {} field(s), key={:?}",
            info.ty,
            data.table_name(),
            data.fields.len(),
            data.key_column_name
        );

        Ok(data)
    }
}

/// Pick the zero-argument constructor and the optional multi-argument one.
///
/// Generated entity classes carry a convenience constructor next to the
/// zero-argument one; projection types carry a single constructor taking
/// every member.
fn select_constructors(info: &TypeInfo) -> (Option<ConstructorInfo>, Option<ConstructorInfo>) {
    let ctors: Vec<&ConstructorInfo> = info.public_constructors().collect();
    let ctor = ctors.iter().find(|c| c.is_zero_arg()).map(|c| (*c).clone());

    let ctor2 = match ctors.as_slice() {
        [first, second] if ctor.is_some() => {
            let other = if first.is_zero_arg() { second } else { first };
            Some((*other).clone())
        }
        [only] if !only.is_zero_arg() => Some((*only).clone()),
        _ => None,
    };

    (ctor, ctor2)
}
