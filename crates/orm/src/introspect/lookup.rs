//! Attribute lookups over type descriptions

use std::sync::Arc;

use super::attributes::{Association, ColumnAttribute, HasAttributes, TableAttribute};
use super::types::{PropertyInfo, TypeInfo};

/// Given type `Products`, find its table attribute (or `None`)
pub fn table_attribute(info: &TypeInfo) -> Option<&TableAttribute> {
    info.tables().next()
}

/// Walk all properties and return `(property, column)` pairs.
///
/// Only the first column attribute of each property is paired; properties
/// without one are skipped.
pub fn properties_with_columns(info: &TypeInfo) -> Vec<(&Arc<PropertyInfo>, &ColumnAttribute)> {
    info.properties
        .iter()
        .filter_map(|property| property.columns().next().map(|column| (property, column)))
        .collect()
}

/// Every column attribute declared on every property
pub fn column_attributes(info: &TypeInfo) -> Vec<&ColumnAttribute> {
    info.properties.iter().flat_map(|p| p.columns()).collect()
}

/// Every association attribute declared on every property, in property order
pub fn association_attributes(info: &TypeInfo) -> Vec<&Association> {
    info.properties.iter().flat_map(|p| p.associations()).collect()
}

/// The column attribute of a property, only when exactly one is declared
pub fn column_attribute(property: &PropertyInfo) -> Option<&ColumnAttribute> {
    let mut columns = property.columns();
    match (columns.next(), columns.next()) {
        (Some(column), None) => Some(column),
        _ => None,
    }
}

/// Name of the SQL column behind a property
pub fn sql_column_name(property: &PropertyInfo) -> Option<&str> {
    column_attribute(property).and_then(|column| column.name.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspect::attributes::AssociationAttribute;

    fn employee() -> TypeInfo {
        TypeInfo::new("Employee")
            .with_attribute(TableAttribute::new("employees"))
            .with_attribute(TableAttribute::new("staff"))
            .with_property(
                PropertyInfo::new("EmployeeID", "i32")
                    .with_attribute(ColumnAttribute::named("employeeid").primary_key()),
            )
            .with_property(PropertyInfo::new("FullName", "String"))
            .with_property(
                PropertyInfo::new("Title", "String")
                    .with_attribute(ColumnAttribute::named("title"))
                    .with_attribute(ColumnAttribute::named("job_title")),
            )
            .with_property(
                PropertyInfo::new("Manager", "Employee")
                    .with_attribute(AssociationAttribute::new("FK_Employees_Manager"))
                    .with_attribute(AssociationAttribute::new("FK_Employees_Boss")),
            )
    }

    #[test]
    fn test_first_table_attribute_wins() {
        let info = employee();
        assert_eq!(table_attribute(&info).unwrap().name, "employees");
        assert!(table_attribute(&TypeInfo::new("Anonymous")).is_none());
    }

    #[test]
    fn test_properties_with_columns_pairs_first_column() {
        let info = employee();
        let pairs = properties_with_columns(&info);
        let names: Vec<_> = pairs
            .iter()
            .map(|(p, c)| (p.name.as_str(), c.name.as_deref().unwrap()))
            .collect();
        assert_eq!(names, vec![("EmployeeID", "employeeid"), ("Title", "title")]);
    }

    #[test]
    fn test_column_attributes_collects_all() {
        assert_eq!(column_attributes(&employee()).len(), 3);
    }

    #[test]
    fn test_association_attributes_collects_all() {
        let info = employee();
        let names: Vec<_> = association_attributes(&info).iter().map(|a| a.name.clone()).collect();
        assert_eq!(names, vec!["FK_Employees_Manager", "FK_Employees_Boss"]);
    }

    #[test]
    fn test_column_attribute_requires_exactly_one() {
        let info = employee();
        assert_eq!(sql_column_name(info.property("EmployeeID").unwrap()), Some("employeeid"));
        assert!(column_attribute(info.property("Title").unwrap()).is_none());
        assert!(column_attribute(info.property("FullName").unwrap()).is_none());
    }
}
