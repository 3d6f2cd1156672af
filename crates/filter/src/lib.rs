//! Compiles search-bar filter expressions into predicates on a relational query.
//!
//! ```text
//! name:"John Wick" AND enable:true
//! ```
//!
//! is parsed into a term tree, resolved against a [`SchemaCatalog`], and
//! emitted into a [`PredicateSink`] such as [`planner::filter::FilterQuery`]:
//!
//! ```text
//! WHERE LOWER("user"."name") LIKE LOWER($1) AND "user"."enable" = $2
//! ```
//!
//! Fields that do not resolve are skipped rather than reported; only malformed
//! text and an unknown root entity are errors.

use model::schema::catalog::SchemaCatalog;
use planner::filter::PredicateSink;
use tracing::debug;

pub mod compiler;
pub mod error;
pub mod join;
pub mod operator;
pub mod params;
pub mod resolve;

#[cfg(test)]
mod tests;

pub use compiler::Compiler;
pub use error::FilterError;

/// Parses `query`, compiles it against `root_entity`, and returns `sink` for
/// chaining.
///
/// Applying several filters to one sink AND-s them together; parameter keys
/// keep counting from the bindings the sink already holds.
pub fn apply_filter<'s, S: PredicateSink>(
    sink: &'s mut S,
    catalog: &SchemaCatalog,
    root_entity: &str,
    query: &str,
) -> Result<&'s mut S, FilterError> {
    let tree = search_syntax::parse(query)?;

    let entity = catalog
        .lookup_entity(root_entity)
        .ok_or_else(|| FilterError::UnknownEntity(root_entity.to_string()))?;

    debug!("Applying filter `{}` to entity '{}'", query, entity.name);
    Compiler::new(catalog).compile(&tree, entity, &mut *sink);
    Ok(sink)
}
