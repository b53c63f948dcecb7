//! Type descriptions consumed by the resolvers
//!
//! Rust has no runtime reflection, so mapped types describe themselves with a
//! [`TypeInfo`]: declared attributes, public properties, public constructors
//! and instance fields, all in declaration order.

use std::fmt;
use std::sync::Arc;
use serde::{Deserialize, Serialize};

use super::attributes::{Attribute, HasAttributes};

/// Identity of a type, including its generic arguments
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
    pub args: Vec<TypeRef>,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Shorthand for a generic wrapper with a single argument, e.g. `EntitySet<Order>`
    pub fn wrap(name: impl Into<String>, arg: TypeRef) -> Self {
        Self::generic(name, vec![arg])
    }

    pub fn is_generic(&self) -> bool {
        !self.args.is_empty()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.args.is_empty() {
            return Ok(());
        }
        f.write_str("<")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        f.write_str(">")
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        TypeRef::new(name)
    }
}

/// A public property with accessor capabilities
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyInfo {
    pub name: String,
    pub ty: TypeRef,
    pub can_read: bool,
    pub can_write: bool,
    pub attributes: Vec<Attribute>,
}

impl PropertyInfo {
    /// A readable and writable property
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            can_read: true,
            can_write: true,
            attributes: Vec::new(),
        }
    }

    /// A property with a getter only
    pub fn read_only(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            can_write: false,
            ..Self::new(name, ty)
        }
    }

    pub fn with_attribute(mut self, attribute: impl Into<Attribute>) -> Self {
        self.attributes.push(attribute.into());
        self
    }
}

impl HasAttributes for PropertyInfo {
    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

/// An instance or static field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInfo {
    pub name: String,
    pub ty: TypeRef,
    pub is_public: bool,
    pub is_static: bool,
    pub attributes: Vec<Attribute>,
}

impl FieldInfo {
    /// A non-public instance field
    pub fn private(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            is_public: false,
            is_static: false,
            attributes: Vec::new(),
        }
    }

    pub fn public(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            is_public: true,
            ..Self::private(name, ty)
        }
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_attribute(mut self, attribute: impl Into<Attribute>) -> Self {
        self.attributes.push(attribute.into());
        self
    }
}

impl HasAttributes for FieldInfo {
    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInfo {
    pub name: String,
    pub ty: TypeRef,
}

/// A constructor signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorInfo {
    pub parameters: Vec<ParameterInfo>,
    pub is_public: bool,
}

impl ConstructorInfo {
    /// A public zero-argument constructor
    pub fn new() -> Self {
        Self {
            parameters: Vec::new(),
            is_public: true,
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        self.parameters.push(ParameterInfo {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }

    pub fn non_public(mut self) -> Self {
        self.is_public = false;
        self
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_zero_arg(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl Default for ConstructorInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the resolvers need to know about one type
#[derive(Debug, Clone, PartialEq)]
pub struct TypeInfo {
    pub ty: TypeRef,
    pub attributes: Vec<Attribute>,
    pub properties: Vec<Arc<PropertyInfo>>,
    pub constructors: Vec<ConstructorInfo>,
    pub fields: Vec<FieldInfo>,
}

impl TypeInfo {
    pub fn new(ty: impl Into<TypeRef>) -> Self {
        Self {
            ty: ty.into(),
            attributes: Vec::new(),
            properties: Vec::new(),
            constructors: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: impl Into<Attribute>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    pub fn with_property(mut self, property: PropertyInfo) -> Self {
        self.properties.push(Arc::new(property));
        self
    }

    pub fn with_constructor(mut self, constructor: ConstructorInfo) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn with_field(mut self, field: FieldInfo) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &str {
        &self.ty.name
    }

    /// Look up a property by exact name
    pub fn property(&self, name: &str) -> Option<&Arc<PropertyInfo>> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn public_constructors(&self) -> impl Iterator<Item = &ConstructorInfo> {
        self.constructors.iter().filter(|c| c.is_public)
    }

    /// Non-public, non-static fields in declaration order
    pub fn non_public_instance_fields(&self) -> impl Iterator<Item = &FieldInfo> {
        self.fields.iter().filter(|f| !f.is_public && !f.is_static)
    }
}

impl HasAttributes for TypeInfo {
    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

/// A member-access node taken from a query expression tree, e.g. `o.Customer`
#[derive(Debug, Clone)]
pub enum MemberExpr {
    Property {
        owner: TypeRef,
        property: Arc<PropertyInfo>,
    },
    Field {
        owner: TypeRef,
        field: FieldInfo,
    },
    Method {
        owner: TypeRef,
        name: String,
    },
}

impl MemberExpr {
    pub fn property(owner: impl Into<TypeRef>, property: Arc<PropertyInfo>) -> Self {
        MemberExpr::Property {
            owner: owner.into(),
            property,
        }
    }

    pub fn owner(&self) -> &TypeRef {
        match self {
            MemberExpr::Property { owner, .. }
            | MemberExpr::Field { owner, .. }
            | MemberExpr::Method { owner, .. } => owner,
        }
    }

    /// The property this expression accesses, if it is a property access
    pub fn as_property(&self) -> Option<&Arc<PropertyInfo>> {
        match self {
            MemberExpr::Property { property, .. } => Some(property),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspect::attributes::ColumnAttribute;

    #[test]
    fn test_type_ref_display() {
        let set = TypeRef::wrap("EntitySet", TypeRef::new("Order"));
        assert_eq!(set.to_string(), "EntitySet<Order>");

        let map = TypeRef::generic("Map", vec!["String".into(), set]);
        assert_eq!(map.to_string(), "Map<String, EntitySet<Order>>");
        assert!(!TypeRef::new("Order").is_generic());
    }

    #[test]
    fn test_type_info_lookup() {
        let info = TypeInfo::new("Product")
            .with_constructor(ConstructorInfo::new())
            .with_constructor(ConstructorInfo::new().with_parameter("id", "i32").non_public())
            .with_property(PropertyInfo::new("ProductID", "i32").with_attribute(ColumnAttribute::new()))
            .with_field(FieldInfo::private("productId", "i32"))
            .with_field(FieldInfo::private("count", "i32").with_static())
            .with_field(FieldInfo::public("label", "String"));

        assert_eq!(info.name(), "Product");
        assert!(info.property("ProductID").is_some());
        assert!(info.property("productid").is_none());
        assert_eq!(info.public_constructors().count(), 1);

        let fields: Vec<_> = info.non_public_instance_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(fields, vec!["productId"]);
    }

    #[test]
    fn test_member_expr_as_property() {
        let property = Arc::new(PropertyInfo::new("Customer", "Customer"));
        let expr = MemberExpr::property("Order", property.clone());
        assert!(Arc::ptr_eq(expr.as_property().unwrap(), &property));
        assert_eq!(expr.owner(), &TypeRef::new("Order"));

        let method = MemberExpr::Method {
            owner: TypeRef::new("Order"),
            name: "ToString".to_string(),
        };
        assert!(method.as_property().is_none());
    }
}
