use crate::{
    filter::{Connective, JoinRequest, ParameterBinding, Predicate, PredicateSink},
    query::{
        ast::{
            common::{OrderDir, TableRef},
            expr::{BinaryOperator, Expr, Link},
            select::Select,
        },
        builder::select::SelectBuilder,
        dialect::Dialect,
        qual_ident,
        renderer::{Render, Renderer},
        value,
    },
    table_ref,
};
use model::core::value::Value;
use tracing::debug;

/// A `SELECT` over one table that filters are compiled into.
///
/// The root table is aliased by its own name, or by the alias given to
/// [`FilterQuery::aliased`], so predicates can always be column-qualified. Predicates attached at the top level form the `WHERE`
/// clause; nested scopes become parenthesized groups.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterQuery {
    table: TableRef,
    alias: String,
    columns: Vec<Expr>,
    joins: Vec<JoinRequest>,
    conditions: Vec<Link>,
    order_by: Vec<(String, Option<OrderDir>)>,
    limit: Option<u64>,
    offset: Option<u64>,
    parameter_count: usize,
}

impl FilterQuery {
    pub fn new(table: &str) -> Self {
        Self::aliased(table, table)
    }

    /// A query over `table` selected under `alias` instead of its own name.
    pub fn aliased(table: &str, alias: &str) -> Self {
        Self {
            table: table_ref!(table),
            alias: alias.to_string(),
            columns: Vec::new(),
            joins: Vec::new(),
            conditions: Vec::new(),
            order_by: Vec::new(),
            limit: None,
            offset: None,
            parameter_count: 0,
        }
    }

    /// Restricts the projection to the given root-table columns. Without
    /// this, every column of the root table is selected.
    pub fn columns(&mut self, columns: &[&str]) -> &mut Self {
        self.columns = columns
            .iter()
            .map(|column| qual_ident(&self.alias, column))
            .collect();
        self
    }

    pub fn order_by(&mut self, column: &str, direction: Option<OrderDir>) -> &mut Self {
        self.order_by.push((column.to_string(), direction));
        self
    }

    pub fn limit(&mut self, limit: u64) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(&mut self, offset: u64) -> &mut Self {
        self.offset = Some(offset);
        self
    }

    /// Top-level conditions in the order they were attached.
    pub fn conditions(&self) -> &[Link] {
        &self.conditions
    }

    /// The combined `WHERE` condition, or `None` when no predicate survived.
    pub fn where_clause(&self) -> Option<Expr> {
        let chain = Expr::Chain(self.conditions.clone());
        (!chain.is_vacuous()).then_some(chain)
    }

    /// Named bindings in the order their placeholders appear in the SQL.
    pub fn bindings(&self) -> Vec<&ParameterBinding> {
        self.conditions
            .iter()
            .flat_map(|link| link.expr.bindings())
            .collect()
    }

    pub fn build(&self) -> Select {
        let columns = if self.columns.is_empty() {
            vec![Expr::Wildcard(Some(self.alias.clone()))]
        } else {
            self.columns.clone()
        };

        let mut builder = SelectBuilder::new()
            .select(columns)
            .from(self.table.clone(), Some(&self.alias));

        for join in &self.joins {
            let on = Expr::binary(
                qual_ident(&join.target_alias, &join.target_column),
                BinaryOperator::Eq,
                qual_ident(&join.source_alias, &join.source_column),
            );
            builder = builder.left_join(
                table_ref!(join.target_table),
                Some(&join.target_alias),
                on,
            );
        }

        if let Some(condition) = self.where_clause() {
            builder = builder.filter(condition);
        }

        for (column, direction) in &self.order_by {
            builder = builder.order_by(qual_ident(&self.alias, column), direction.clone());
        }

        if let Some(limit) = self.limit {
            builder = builder.limit(value(Value::Int(saturating_i64(limit))));
        }
        if let Some(offset) = self.offset {
            builder = builder.offset(value(Value::Int(saturating_i64(offset))));
        }

        builder.build()
    }

    /// Renders the query for `dialect`, returning the SQL and its positional
    /// parameters in placeholder order.
    pub fn render(&self, dialect: &dyn Dialect) -> (String, Vec<Value>) {
        let select = self.build();
        let mut renderer = Renderer::new(dialect);
        select.render(&mut renderer);
        renderer.finish()
    }

    fn root_scope(&mut self) -> ScopeSink<'_> {
        ScopeSink {
            root_alias: &self.alias,
            conditions: &mut self.conditions,
            joins: &mut self.joins,
            parameter_count: &mut self.parameter_count,
        }
    }
}

impl PredicateSink for FilterQuery {
    fn add_predicate(&mut self, connective: Connective, predicate: Predicate) {
        self.root_scope().add_predicate(connective, predicate);
    }

    fn add_nested_scope(
        &mut self,
        connective: Connective,
        build: &mut dyn FnMut(&mut dyn PredicateSink),
    ) {
        self.root_scope().add_nested_scope(connective, build);
    }

    fn add_join(&mut self, join: JoinRequest) {
        self.root_scope().add_join(join);
    }

    fn joins(&self) -> &[JoinRequest] {
        &self.joins
    }

    fn parameter_count(&self) -> usize {
        self.parameter_count
    }

    fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    fn root_alias(&self) -> &str {
        &self.alias
    }
}

// Paging values beyond i64::MAX bind as i64::MAX.
fn saturating_i64(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// One scope of a [`FilterQuery`]. Conditions go to the scope's own list;
/// joins and the parameter count are shared with the whole query.
struct ScopeSink<'a> {
    root_alias: &'a str,
    conditions: &'a mut Vec<Link>,
    joins: &'a mut Vec<JoinRequest>,
    parameter_count: &'a mut usize,
}

impl PredicateSink for ScopeSink<'_> {
    fn add_predicate(&mut self, connective: Connective, predicate: Predicate) {
        *self.parameter_count += predicate.bindings().len();
        self.conditions.push(Link {
            connective,
            expr: predicate.expr,
        });
    }

    fn add_nested_scope(
        &mut self,
        connective: Connective,
        build: &mut dyn FnMut(&mut dyn PredicateSink),
    ) {
        let mut nested = Vec::new();
        {
            let mut scope = ScopeSink {
                root_alias: self.root_alias,
                conditions: &mut nested,
                joins: &mut *self.joins,
                parameter_count: &mut *self.parameter_count,
            };
            build(&mut scope);
        }
        self.conditions.push(Link {
            connective,
            expr: Expr::Chain(nested),
        });
    }

    fn add_join(&mut self, join: JoinRequest) {
        if self
            .joins
            .iter()
            .any(|j| j.is_same_relation(&join.source_alias, &join.relation_property))
        {
            debug!(
                "Join {}.{} already registered",
                join.source_alias, join.relation_property
            );
            return;
        }
        self.joins.push(join);
    }

    fn joins(&self) -> &[JoinRequest] {
        self.joins.as_slice()
    }

    fn parameter_count(&self) -> usize {
        *self.parameter_count
    }

    fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    fn root_alias(&self) -> &str {
        self.root_alias
    }
}
