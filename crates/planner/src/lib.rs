//! Relational query building: a SQL AST, per-database dialects, a renderer,
//! and [`filter::FilterQuery`], the sink that filter predicates are compiled into.

pub mod filter;
pub mod query;
