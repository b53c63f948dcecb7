//! Projection descriptors - the resolved mapping of one type

use std::sync::Arc;

use crate::introspect::{ColumnAttribute, ConstructorInfo, FieldInfo, PropertyInfo, TableAttribute, TypeRef};

/// How the hydration layer builds an instance of a mapped type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionStrategy {
    /// Call the zero-argument constructor, then assign each mapped property
    ZeroArgThenAssign,
    /// Pass every value to a multi-argument constructor (projection types)
    FullArgConstructor(ConstructorInfo),
}

/// A mapped property and its column metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionField {
    pub property: Arc<PropertyInfo>,
    pub column: ColumnAttribute,
}

impl ProjectionField {
    pub fn new(property: Arc<PropertyInfo>, column: ColumnAttribute) -> Self {
        Self { property, column }
    }

    /// The column name, falling back to the property name
    pub fn column_name(&self) -> &str {
        self.column.name.as_deref().unwrap_or(&self.property.name)
    }

    pub fn property_name(&self) -> &str {
        &self.property.name
    }

    pub fn is_primary_key(&self) -> bool {
        self.column.is_primary_key
    }
}

/// Holds the table, column and construction metadata of one type
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionData {
    pub type_ref: TypeRef,
    /// `None` when the type carries no table attribute
    pub table: Option<TableAttribute>,
    pub fields: Vec<ProjectionField>,
    /// Column of the last primary-key field; an unnamed column contributes
    /// its property name
    pub key_column_name: Option<String>,
    pub ctor: Option<ConstructorInfo>,
    pub ctor2: Option<ConstructorInfo>,
    pub construction: Option<ConstructionStrategy>,
    /// Non-public field the database populates after insert
    pub auto_gen_field: Option<FieldInfo>,
}

impl ProjectionData {
    pub(crate) fn new(type_ref: TypeRef) -> Self {
        Self {
            type_ref,
            table: None,
            fields: Vec::new(),
            key_column_name: None,
            ctor: None,
            ctor2: None,
            construction: None,
            auto_gen_field: None,
        }
    }

    /// Whether the type maps to a table. Unmapped descriptors must not be
    /// treated as persistable.
    pub fn is_mapped(&self) -> bool {
        self.table.is_some()
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table.as_ref().map(|table| table.name.as_str())
    }

    pub fn field(&self, property_name: &str) -> Option<&ProjectionField> {
        self.fields.iter().find(|f| f.property.name == property_name)
    }

    pub fn field_by_column(&self, column_name: &str) -> Option<&ProjectionField> {
        self.fields.iter().find(|f| f.column_name() == column_name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.fields.iter().map(ProjectionField::column_name).collect()
    }

    /// The field whose column is `key_column_name`
    pub fn primary_key_field(&self) -> Option<&ProjectionField> {
        let key = self.key_column_name.as_deref()?;
        self.fields
            .iter()
            .rev()
            .find(|f| f.is_primary_key() && f.column_name() == key)
    }
}
