use crate::{error::ModelError, schema::column::ColumnDescriptor};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize)]
pub struct EntityDescriptor {
    pub name: String,
    pub table: String,
    columns: Vec<ColumnDescriptor>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl EntityDescriptor {
    pub fn new(
        name: &str,
        table: &str,
        columns: Vec<ColumnDescriptor>,
    ) -> Result<Self, ModelError> {
        let mut index = HashMap::with_capacity(columns.len());
        for (pos, column) in columns.iter().enumerate() {
            if index.insert(column.property_name.clone(), pos).is_some() {
                return Err(ModelError::DuplicateProperty {
                    entity: name.to_string(),
                    property: column.property_name.clone(),
                });
            }
        }

        Ok(Self {
            name: name.to_string(),
            table: table.to_string(),
            columns,
            index,
        })
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Looks up a column by its logical property name.
    pub fn column(&self, property_name: &str) -> Option<&ColumnDescriptor> {
        self.index.get(property_name).map(|&pos| &self.columns[pos])
    }
}
