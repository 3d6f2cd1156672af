use crate::core::data_type::ScalarType;
use serde::Serialize;

/// How a column participates in a filter, decided once when the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TypeCategory {
    Scalar(ScalarType),
    ArrayScalar(ScalarType),
    JsonArray,
    Relation(RelationTarget),
}

/// The far side of a relation column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationTarget {
    /// Name of the related entity in the same catalog.
    pub entity: String,
    /// Physical column on the owning table.
    pub local_column: String,
    /// Physical column on the related table.
    pub foreign_column: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDescriptor {
    pub property_name: String,
    pub physical_name: String,
    pub type_category: TypeCategory,
    pub nullable: bool,
}

impl ColumnDescriptor {
    pub fn new(property_name: &str, type_category: TypeCategory) -> Self {
        Self {
            property_name: property_name.to_string(),
            physical_name: property_name.to_string(),
            type_category,
            nullable: false,
        }
    }

    pub fn scalar(property_name: &str, scalar_type: ScalarType) -> Self {
        Self::new(property_name, TypeCategory::Scalar(scalar_type))
    }

    pub fn array(property_name: &str, element_type: ScalarType) -> Self {
        Self::new(property_name, TypeCategory::ArrayScalar(element_type))
    }

    pub fn json_array(property_name: &str) -> Self {
        Self::new(property_name, TypeCategory::JsonArray)
    }

    pub fn relation(property_name: &str, target: RelationTarget) -> Self {
        Self::new(property_name, TypeCategory::Relation(target))
    }

    pub fn with_physical_name(mut self, physical_name: &str) -> Self {
        self.physical_name = physical_name.to_string();
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn relation_target(&self) -> Option<&RelationTarget> {
        match &self.type_category {
            TypeCategory::Relation(target) => Some(target),
            _ => None,
        }
    }

    pub fn is_relation(&self) -> bool {
        self.relation_target().is_some()
    }
}

impl RelationTarget {
    pub fn new(entity: &str, local_column: &str, foreign_column: &str) -> Self {
        Self {
            entity: entity.to_string(),
            local_column: local_column.to_string(),
            foreign_column: foreign_column.to_string(),
        }
    }
}
