//! Operator selection: which SQL pattern a term compiles to, given the
//! category of the column it resolved to.

use crate::params::ParamKeys;
use model::{core::value::Value, schema::column::TypeCategory};
use planner::query::{
    ast::expr::{BinaryOperator, Expr},
    qual_ident,
};
use search_syntax::ast::{Comparator, Literal, TermNode};

/// Builds the predicate for `term` against `alias.column`.
///
/// First match wins:
///
/// | term                        | predicate                               |
/// |-----------------------------|-----------------------------------------|
/// | `null` value                | `col IS NULL` / `col IS NOT NULL`       |
/// | text column, `:`            | `LOWER(col) LIKE LOWER('%value%')`      |
/// | array column, `:`           | array membership of the value           |
/// | JSON array column, `:`      | JSON containment of the encoded value   |
/// | anything else               | `col <op> value`                        |
///
/// A negated term other than `null` is wrapped in `NOT (...)`.
pub fn build_predicate(
    term: &TermNode,
    alias: &str,
    column: &str,
    category: &TypeCategory,
    keys: &mut ParamKeys,
) -> Expr {
    let target = qual_ident(alias, column);

    if term.value.is_null() {
        return Expr::IsNull {
            expr: Box::new(target),
            negated: term.negated,
        };
    }

    let value = literal_value(&term.value);
    let expr = match (category, term.comparator) {
        (TypeCategory::Scalar(scalar), Comparator::Eq) if scalar.is_text() => {
            let pattern = format!("%{}%", value.as_string().unwrap_or_default());
            Expr::Like {
                expr: Box::new(Expr::function("LOWER", vec![target])),
                pattern: Box::new(Expr::function(
                    "LOWER",
                    vec![Expr::param(keys.next_key(), Value::String(pattern))],
                )),
            }
        }
        (TypeCategory::ArrayScalar(_), Comparator::Eq) => Expr::ArrayContains {
            array: Box::new(target),
            element: Box::new(Expr::param(keys.next_key(), value)),
        },
        (TypeCategory::JsonArray, Comparator::Eq) => {
            let encoded = value.to_json().to_string();
            Expr::JsonContains {
                target: Box::new(target),
                candidate: Box::new(Expr::param(keys.next_key(), Value::String(encoded))),
            }
        }
        (_, comparator) => Expr::binary(
            target,
            comparison_operator(comparator),
            Expr::param(keys.next_key(), value),
        ),
    };

    if term.negated { expr.negate() } else { expr }
}

pub fn comparison_operator(comparator: Comparator) -> BinaryOperator {
    match comparator {
        Comparator::Eq => BinaryOperator::Eq,
        Comparator::Lt => BinaryOperator::Lt,
        Comparator::Gt => BinaryOperator::Gt,
        Comparator::Le => BinaryOperator::LtEq,
        Comparator::Ge => BinaryOperator::GtEq,
    }
}

pub fn literal_value(literal: &Literal) -> Value {
    match literal {
        Literal::String(s) => Value::String(s.clone()),
        Literal::Integer(n) => Value::Int(*n),
        Literal::Float(n) => Value::Float(*n),
        Literal::Boolean(b) => Value::Boolean(*b),
        Literal::Null => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::core::data_type::ScalarType;

    fn term(field: &str, comparator: Comparator, value: Literal) -> TermNode {
        TermNode::new(field, comparator, value)
    }

    fn text() -> TypeCategory {
        TypeCategory::Scalar(ScalarType::Text)
    }

    #[test]
    fn test_null_ignores_comparator_and_binds_nothing() {
        let mut keys = ParamKeys::default();
        let expr = build_predicate(
            &term("status", Comparator::Gt, Literal::Null),
            "user",
            "status",
            &text(),
            &mut keys,
        );

        assert_eq!(
            expr,
            Expr::IsNull {
                expr: Box::new(qual_ident("user", "status")),
                negated: false,
            }
        );
        assert_eq!(keys.next_key(), "p1");
    }

    #[test]
    fn test_negated_null_is_not_null() {
        let mut keys = ParamKeys::default();
        let expr = build_predicate(
            &term("status", Comparator::Eq, Literal::Null).negate(),
            "user",
            "status",
            &text(),
            &mut keys,
        );
        assert!(matches!(expr, Expr::IsNull { negated: true, .. }));
    }

    #[test]
    fn test_text_equality_is_case_insensitive_substring() {
        let mut keys = ParamKeys::default();
        let expr = build_predicate(
            &term("name", Comparator::Eq, Literal::String("John".into())),
            "user",
            "name",
            &text(),
            &mut keys,
        );

        let bindings = expr.bindings();
        assert!(matches!(expr, Expr::Like { .. }));
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].value, Value::String("%John%".into()));
    }

    #[test]
    fn test_text_with_comparator_is_plain_comparison() {
        let mut keys = ParamKeys::default();
        let expr = build_predicate(
            &term("name", Comparator::Ge, Literal::String("M".into())),
            "user",
            "name",
            &text(),
            &mut keys,
        );

        assert_eq!(
            expr,
            Expr::binary(
                qual_ident("user", "name"),
                BinaryOperator::GtEq,
                Expr::param("p1", Value::String("M".into())),
            )
        );
    }

    #[test]
    fn test_json_array_binds_encoded_value() {
        let mut keys = ParamKeys::default();
        let expr = build_predicate(
            &term("labels", Comparator::Eq, Literal::String("vip".into())),
            "user",
            "labels",
            &TypeCategory::JsonArray,
            &mut keys,
        );

        assert!(matches!(expr, Expr::JsonContains { .. }));
        assert_eq!(expr.bindings()[0].value, Value::String(r#""vip""#.into()));
    }

    #[test]
    fn test_negation_wraps_base_pattern_once() {
        let mut keys = ParamKeys::default();
        let expr = build_predicate(
            &term("tags", Comparator::Eq, Literal::String("rust".into())).negate(),
            "user",
            "tags",
            &TypeCategory::ArrayScalar(ScalarType::Text),
            &mut keys,
        );

        let Expr::Not(inner) = expr else {
            panic!("expected NOT, got {expr:?}");
        };
        assert!(matches!(*inner, Expr::ArrayContains { .. }));
    }
}
