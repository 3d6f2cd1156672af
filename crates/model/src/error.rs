use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Duplicate entity '{0}' in schema")]
    DuplicateEntity(String),

    #[error("Duplicate property '{property}' on entity '{entity}'")]
    DuplicateProperty { entity: String, property: String },

    #[error("Column '{property}' on entity '{entity}' declares neither a type nor a relation")]
    MissingType { entity: String, property: String },

    #[error("Relation '{property}' on entity '{entity}' targets unknown entity '{target}'")]
    UnknownRelationTarget {
        entity: String,
        property: String,
        target: String,
    },

    #[error("Failed to parse schema definition: {0}")]
    Definition(#[from] serde_json::Error),
}
