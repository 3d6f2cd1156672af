use crate::{
    core::data_type::ScalarType,
    error::ModelError,
    schema::{
        column::{ColumnDescriptor, RelationTarget, TypeCategory},
        definition::{ColumnDefinition, SchemaDefinition},
        entity::EntityDescriptor,
    },
};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Read-only registry of entities, built once and shared by every compilation.
#[derive(Debug, Clone, Default)]
pub struct SchemaCatalog {
    entities: BTreeMap<String, EntityDescriptor>,
}

impl SchemaCatalog {
    /// Registers already-built descriptors.
    ///
    /// Fails on duplicate entity names and on relations whose target entity
    /// is not part of the same set.
    pub fn new(entities: Vec<EntityDescriptor>) -> Result<Self, ModelError> {
        let mut map = BTreeMap::new();
        for entity in entities {
            if map.contains_key(&entity.name) {
                return Err(ModelError::DuplicateEntity(entity.name));
            }
            map.insert(entity.name.clone(), entity);
        }

        for entity in map.values() {
            for column in entity.columns() {
                if let Some(target) = column.relation_target()
                    && !map.contains_key(&target.entity)
                {
                    return Err(ModelError::UnknownRelationTarget {
                        entity: entity.name.clone(),
                        property: column.property_name.clone(),
                        target: target.entity.clone(),
                    });
                }
            }
        }

        Ok(Self { entities: map })
    }

    pub fn from_definition(definition: &SchemaDefinition) -> Result<Self, ModelError> {
        let mut seen = HashSet::new();
        let mut entities = Vec::with_capacity(definition.entities.len());

        for entity_def in &definition.entities {
            if !seen.insert(entity_def.name.as_str()) {
                return Err(ModelError::DuplicateEntity(entity_def.name.clone()));
            }

            let columns = entity_def
                .columns
                .iter()
                .map(|col| resolve_column(&entity_def.name, col))
                .collect::<Result<Vec<_>, _>>()?;

            let table = entity_def.table_name();
            debug!(
                "Registered entity `{}` on table `{}` with {} columns",
                entity_def.name,
                table,
                columns.len()
            );
            entities.push(EntityDescriptor::new(&entity_def.name, &table, columns)?);
        }

        Self::new(entities)
    }

    pub fn from_json(source: &str) -> Result<Self, ModelError> {
        let definition: SchemaDefinition = serde_json::from_str(source)?;
        Self::from_definition(&definition)
    }

    pub fn lookup_entity(&self, name: &str) -> Option<&EntityDescriptor> {
        self.entities.get(name)
    }

    pub fn entities(&self) -> impl Iterator<Item = &EntityDescriptor> {
        self.entities.values()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

fn resolve_column(entity: &str, def: &ColumnDefinition) -> Result<ColumnDescriptor, ModelError> {
    let type_category = match (&def.relation, &def.data_type) {
        (Some(relation), _) => TypeCategory::Relation(RelationTarget::new(
            &relation.entity,
            &relation.local_column,
            &relation.foreign_column,
        )),
        (None, Some(type_name)) => resolve_type_category(type_name, def.array),
        (None, None) => {
            return Err(ModelError::MissingType {
                entity: entity.to_string(),
                property: def.property.clone(),
            });
        }
    };

    Ok(ColumnDescriptor {
        property_name: def.property.clone(),
        physical_name: def.column.clone().unwrap_or_else(|| def.property.clone()),
        type_category,
        nullable: def.nullable,
    })
}

fn resolve_type_category(type_name: &str, array: bool) -> TypeCategory {
    if let Some(element) = ScalarType::array_element_name(type_name) {
        return TypeCategory::ArrayScalar(ScalarType::from_type_name(element));
    }

    let scalar = ScalarType::from_type_name(type_name);
    match (array, scalar.is_json()) {
        (true, true) => TypeCategory::JsonArray,
        (true, false) => TypeCategory::ArrayScalar(scalar),
        (false, _) => TypeCategory::Scalar(scalar),
    }
}
