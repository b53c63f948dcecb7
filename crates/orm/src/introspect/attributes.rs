//! Declarative mapping attributes
//!
//! These are the annotation shapes the resolvers understand: `Table` on a
//! type, `Column` and `Association` on properties, and the `AutoGenId` marker
//! on non-public fields.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;
use serde::{Deserialize, Serialize};

/// Maps a type to a relational table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableAttribute {
    pub name: String,
    pub schema: Option<String>,
}

impl TableAttribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// `schema.name` when a schema is set, otherwise just the table name
    pub fn qualified_name(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{}.{}", schema, self.name),
            None => self.name.clone(),
        }
    }
}

/// Maps a property to a table column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAttribute {
    /// Column name; the property name is used when absent
    pub name: Option<String>,
    pub is_primary_key: bool,
    pub can_be_null: bool,
    /// Database type hint, e.g. `int4 NOT NULL`
    pub db_type: Option<String>,
    pub is_db_generated: bool,
}

impl ColumnAttribute {
    pub fn new() -> Self {
        Self {
            can_be_null: true,
            ..Self::default()
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new()
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self.can_be_null = false;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.can_be_null = false;
        self
    }

    pub fn with_db_type(mut self, db_type: impl Into<String>) -> Self {
        self.db_type = Some(db_type.into());
        self
    }

    pub fn db_generated(mut self) -> Self {
        self.is_db_generated = true;
        self
    }
}

/// Declares one direction of a foreign-key relationship
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationAttribute {
    /// Logical constraint name, shared by both directions (e.g. `FK_Orders_Customers`)
    pub name: String,
    /// Backing storage member for the related value
    pub storage: Option<String>,
    /// Key column(s) on the declaring side
    pub this_key: Option<String>,
    /// Key column(s) on the related side
    pub other_key: Option<String>,
    /// True on the side that holds the foreign key column
    pub is_foreign_key: bool,
}

impl AssociationAttribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_storage(mut self, storage: impl Into<String>) -> Self {
        self.storage = Some(storage.into());
        self
    }

    pub fn with_this_key(mut self, key: impl Into<String>) -> Self {
        self.this_key = Some(key.into());
        self
    }

    pub fn with_other_key(mut self, key: impl Into<String>) -> Self {
        self.other_key = Some(key.into());
        self
    }

    pub fn foreign_key(mut self) -> Self {
        self.is_foreign_key = true;
        self
    }
}

/// Identity of one association attribute instance: the address of the
/// shared attribute behind an [`Association`].
///
/// Only unique while that allocation is alive. `AssociationRegistry` keeps a
/// clone of every association it registers, so a registered id can never be
/// freed and reused by a later association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssociationId(usize);

/// A shared association attribute instance.
///
/// Equality and hashing follow instance identity, not content: two
/// declarations with the same payload on different properties are different
/// associations.
#[derive(Clone)]
pub struct Association(Arc<AssociationAttribute>);

impl Association {
    pub fn new(attribute: AssociationAttribute) -> Self {
        Self(Arc::new(attribute))
    }

    pub fn id(&self) -> AssociationId {
        AssociationId(Arc::as_ptr(&self.0) as usize)
    }

    pub fn attribute(&self) -> &AssociationAttribute {
        &self.0
    }
}

impl Deref for Association {
    type Target = AssociationAttribute;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for Association {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Association {}

impl Hash for Association {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for Association {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Association").field(&*self.0).finish()
    }
}

impl From<AssociationAttribute> for Association {
    fn from(attribute: AssociationAttribute) -> Self {
        Association::new(attribute)
    }
}

/// Any attribute that can decorate a type, property, or field
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    Table(TableAttribute),
    Column(ColumnAttribute),
    Association(Association),
    /// Marks a non-public field that the database fills in after insert
    AutoGenId,
}

impl Attribute {
    pub fn as_table(&self) -> Option<&TableAttribute> {
        match self {
            Attribute::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_column(&self) -> Option<&ColumnAttribute> {
        match self {
            Attribute::Column(column) => Some(column),
            _ => None,
        }
    }

    pub fn as_association(&self) -> Option<&Association> {
        match self {
            Attribute::Association(association) => Some(association),
            _ => None,
        }
    }

    pub fn is_auto_gen_id(&self) -> bool {
        matches!(self, Attribute::AutoGenId)
    }
}

impl From<TableAttribute> for Attribute {
    fn from(value: TableAttribute) -> Self {
        Attribute::Table(value)
    }
}

impl From<ColumnAttribute> for Attribute {
    fn from(value: ColumnAttribute) -> Self {
        Attribute::Column(value)
    }
}

impl From<AssociationAttribute> for Attribute {
    fn from(value: AssociationAttribute) -> Self {
        Attribute::Association(Association::new(value))
    }
}

impl From<Association> for Attribute {
    fn from(value: Association) -> Self {
        Attribute::Association(value)
    }
}

/// Read access to the attributes declared on a member or type
pub trait HasAttributes {
    fn attributes(&self) -> &[Attribute];

    fn tables(&self) -> impl Iterator<Item = &TableAttribute> {
        self.attributes().iter().filter_map(Attribute::as_table)
    }

    fn columns(&self) -> impl Iterator<Item = &ColumnAttribute> {
        self.attributes().iter().filter_map(Attribute::as_column)
    }

    fn associations(&self) -> impl Iterator<Item = &Association> {
        self.attributes().iter().filter_map(Attribute::as_association)
    }

    fn has_auto_gen_id(&self) -> bool {
        self.attributes().iter().any(Attribute::is_auto_gen_id)
    }
}
