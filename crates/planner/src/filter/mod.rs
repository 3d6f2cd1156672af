//! The predicate sink: the contract between the filter compiler and the
//! relational query it fills.
//!
//! A sink accepts predicate fragments attached with a connective, nested
//! scopes (parenthesized groups) and join registrations. Compilers never see
//! SQL text; rendering happens once the sink is complete.

use crate::query::ast::expr::Expr;
use serde::Serialize;

pub mod query;

pub use crate::query::ast::{common::Connective, expr::ParameterBinding};
pub use query::FilterQuery;

pub trait PredicateSink {
    /// Attaches `predicate` to the current scope with `connective`.
    fn add_predicate(&mut self, connective: Connective, predicate: Predicate);

    /// Opens a nested scope attached to the current one with `connective`.
    /// Everything `build` adds lands inside the nested scope.
    fn add_nested_scope(
        &mut self,
        connective: Connective,
        build: &mut dyn FnMut(&mut dyn PredicateSink),
    );

    /// Registers a join. A request for an already registered
    /// (source alias, relation property) pair is ignored.
    fn add_join(&mut self, join: JoinRequest);

    /// Joins registered so far, in registration order.
    fn joins(&self) -> &[JoinRequest];

    /// Number of parameter bindings held by the sink.
    fn parameter_count(&self) -> usize;

    /// True while nothing has been attached to the current scope.
    fn is_empty(&self) -> bool;

    /// Alias the root table is selected under. Root-level predicates are
    /// qualified with it.
    fn root_alias(&self) -> &str;
}

/// A single condition together with the parameters it binds.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub expr: Expr,
}

impl Predicate {
    pub fn new(expr: Expr) -> Self {
        Self { expr }
    }

    pub fn bindings(&self) -> Vec<&ParameterBinding> {
        self.expr.bindings()
    }
}

impl From<Expr> for Predicate {
    fn from(expr: Expr) -> Self {
        Self::new(expr)
    }
}

/// A LEFT OUTER JOIN from `source_alias` through a relation property to the
/// related table, rendered as
/// `LEFT JOIN target_table AS target_alias ON target_alias.target_column = source_alias.source_column`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinRequest {
    pub source_alias: String,
    pub relation_property: String,
    pub target_table: String,
    pub target_alias: String,
    pub source_column: String,
    pub target_column: String,
}

impl JoinRequest {
    pub fn is_same_relation(&self, source_alias: &str, relation_property: &str) -> bool {
        self.source_alias == source_alias && self.relation_property == relation_property
    }
}
