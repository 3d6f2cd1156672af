//! Defines the AST for SQL expressions.

use crate::query::ast::common::Connective;
use model::core::value::Value;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column or table identifier, e.g., `users` or `users.id`.
    Identifier(Ident),

    /// Every column of a table, e.g. `"users".*`, or a bare `*`.
    Wildcard(Option<String>),

    /// A literal value, bound as an anonymous positional parameter.
    Value(Value),

    /// A value bound under a key that is unique within one compilation.
    Param(ParameterBinding),

    /// A comparison, e.g. `column = $1`.
    BinaryOp(Box<BinaryOp>),

    /// A function call, e.g. `LOWER(name)`.
    FunctionCall(FunctionCall),

    /// `expr LIKE pattern`
    Like { expr: Box<Expr>, pattern: Box<Expr> },

    /// `expr IS NULL`, or `expr IS NOT NULL` when negated.
    IsNull { expr: Box<Expr>, negated: bool },

    /// `NOT (expr)`
    Not(Box<Expr>),

    /// Membership of `element` in a native array column.
    ArrayContains { array: Box<Expr>, element: Box<Expr> },

    /// Containment of a JSON-encoded `candidate` in a JSON array column.
    JsonContains { target: Box<Expr>, candidate: Box<Expr> },

    /// Conditions combined left to right, e.g. `a AND b AND (c OR d)`.
    /// The connective of the first link is ignored.
    Chain(Vec<Link>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>, // e.g., the 'users' in 'users.id'
    pub name: String,              // e.g., the 'id' in 'users.id'
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub connective: Connective,
    pub expr: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterBinding {
    pub key: String,
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOperator {
    pub fn as_sql(&self) -> &'static str {
        match self {
            BinaryOperator::Eq => "=",
            BinaryOperator::NotEq => "<>",
            BinaryOperator::Lt => "<",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::GtEq => ">=",
        }
    }
}

impl Expr {
    pub fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Self {
        Expr::BinaryOp(Box::new(BinaryOp { left, op, right }))
    }

    pub fn function(name: &str, args: Vec<Expr>) -> Self {
        Expr::FunctionCall(FunctionCall {
            name: name.to_string(),
            args,
        })
    }

    pub fn param(key: impl Into<String>, value: Value) -> Self {
        Expr::Param(ParameterBinding {
            key: key.into(),
            value,
        })
    }

    pub fn negate(self) -> Self {
        Expr::Not(Box::new(self))
    }

    /// True for a chain that holds no condition, directly or through nested chains.
    pub fn is_vacuous(&self) -> bool {
        match self {
            Expr::Chain(links) => links.iter().all(|link| link.expr.is_vacuous()),
            _ => false,
        }
    }

    /// Named bindings in the order they appear in the rendered SQL.
    pub fn bindings(&self) -> Vec<&ParameterBinding> {
        let mut out = Vec::new();
        self.collect_bindings(&mut out);
        out
    }

    fn collect_bindings<'a>(&'a self, out: &mut Vec<&'a ParameterBinding>) {
        match self {
            Expr::Param(binding) => out.push(binding),
            Expr::BinaryOp(op) => {
                op.left.collect_bindings(out);
                op.right.collect_bindings(out);
            }
            Expr::FunctionCall(func) => func.args.iter().for_each(|a| a.collect_bindings(out)),
            Expr::Like { expr, pattern } => {
                expr.collect_bindings(out);
                pattern.collect_bindings(out);
            }
            Expr::IsNull { expr, .. } | Expr::Not(expr) => expr.collect_bindings(out),
            // element first: dialects render membership as `element = ANY(array)`
            Expr::ArrayContains { array, element } => {
                element.collect_bindings(out);
                array.collect_bindings(out);
            }
            Expr::JsonContains { target, candidate } => {
                target.collect_bindings(out);
                candidate.collect_bindings(out);
            }
            Expr::Chain(links) => links.iter().for_each(|l| l.expr.collect_bindings(out)),
            Expr::Identifier(_) | Expr::Wildcard(_) | Expr::Value(_) => {}
        }
    }
}
