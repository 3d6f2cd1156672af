use crate::join::JoinPlanner;
use model::schema::{catalog::SchemaCatalog, column::ColumnDescriptor, entity::EntityDescriptor};
use planner::filter::PredicateSink;
use search_syntax::ast::FieldPath;

/// Outcome of resolving a term's field path against the schema.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldResolution<'a> {
    /// The path names a comparable column reachable under `alias`.
    Resolved {
        alias: String,
        column: &'a ColumnDescriptor,
    },
    /// The first segment is not a property of the entity, or the path shape
    /// does not fit the column (a relation without a subfield, a scalar with one).
    UnknownField,
    /// The relation exists and is joined, but the rest of the path does not
    /// resolve on the related entity.
    UnknownRelationField,
}

/// Resolves field paths on one root entity, following at most one relation.
pub struct FieldResolver<'a> {
    catalog: &'a SchemaCatalog,
    entity: &'a EntityDescriptor,
    alias: &'a str,
    joins: JoinPlanner,
}

impl<'a> FieldResolver<'a> {
    pub fn new(catalog: &'a SchemaCatalog, entity: &'a EntityDescriptor, alias: &'a str) -> Self {
        Self {
            catalog,
            entity,
            alias,
            joins: JoinPlanner::new(alias),
        }
    }

    /// Resolves `path`. Traversing a relation registers its join on `sink`
    /// even when the subfield then fails to resolve.
    pub fn resolve(&self, path: &FieldPath, sink: &mut dyn PredicateSink) -> FieldResolution<'a> {
        let Some(column) = path.head().and_then(|head| self.entity.column(head)) else {
            return FieldResolution::UnknownField;
        };

        let rest = path.rest();
        let Some(relation) = column.relation_target() else {
            return if rest.is_empty() {
                FieldResolution::Resolved {
                    alias: self.alias.to_string(),
                    column,
                }
            } else {
                FieldResolution::UnknownField
            };
        };

        if rest.is_empty() {
            return FieldResolution::UnknownField;
        }

        let Some(target) = self.catalog.lookup_entity(&relation.entity) else {
            return FieldResolution::UnknownRelationField;
        };

        let alias = self
            .joins
            .request(sink, self.alias, &column.property_name, relation, target);

        match rest {
            [subfield] => match target.column(subfield) {
                Some(sub) if !sub.is_relation() => FieldResolution::Resolved { alias, column: sub },
                _ => FieldResolution::UnknownRelationField,
            },
            _ => FieldResolution::UnknownRelationField,
        }
    }
}
