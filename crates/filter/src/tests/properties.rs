#[cfg(test)]
mod tests {
    use crate::{
        apply_filter,
        error::FilterError,
        tests::fixtures::{catalog, filter, keys},
    };
    use planner::{
        filter::{Connective, FilterQuery, PredicateSink},
        query::{ast::expr::Expr, dialect::Postgres},
    };
    use std::collections::HashSet;

    fn chain_connectives(expr: &Expr) -> Vec<Connective> {
        match expr {
            Expr::Chain(links) => links.iter().map(|l| l.connective).collect(),
            other => panic!("expected a nested scope, got {other:?}"),
        }
    }

    // Every parameterized leaf gets its own key; null leaves bind nothing.
    #[test]
    fn test_parameter_keys_are_unique() {
        let query = filter("name:a age:>1 tags:rust labels:vip status:null createdAt:<2024-01-01");

        let keys = keys(&query);
        assert_eq!(keys.len(), 5);
        assert_eq!(keys.iter().collect::<HashSet<_>>().len(), 5);
        assert_eq!(query.parameter_count(), 5);
    }

    #[test]
    fn test_unknown_field_is_a_no_op() {
        for text in ["nope:1", "nope.city:1", "name.first:x", "address:1", "NOT nope:null"] {
            let query = filter(text);
            assert!(query.where_clause().is_none(), "{text} emitted a predicate");
            assert!(query.joins().is_empty(), "{text} emitted a join");
            assert_eq!(query.parameter_count(), 0);
        }
    }

    #[test]
    fn test_negation_wraps_exactly_the_base_pattern() {
        for field in ["name:a", "age:>1", "tags:rust", "labels:vip", "status:active"] {
            let plain = filter(field);
            let negated = filter(&format!("NOT {field}"));

            assert_eq!(
                negated.conditions()[0].expr,
                plain.conditions()[0].expr.clone().negate(),
                "negating {field}"
            );
        }
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        let query = filter("name:a AND age:1 OR name:c AND age:2");

        let scopes = query.conditions();
        assert_eq!(scopes.len(), 2);
        for scope in scopes {
            assert_eq!(scope.connective, Connective::Or);
            assert_eq!(
                chain_connectives(&scope.expr),
                vec![Connective::And, Connective::And]
            );
        }

        assert_eq!(
            query.render(&Postgres).0,
            r#"SELECT "user".* FROM "user" AS "user" WHERE (LOWER("user"."name") LIKE LOWER($1) AND "user"."age" = $2) OR (LOWER("user"."name") LIKE LOWER($3) AND "user"."age" = $4)"#
        );
    }

    #[test]
    fn test_relation_emits_one_join_and_qualified_predicate() {
        let query = filter("address.city:Paris");

        assert_eq!(query.joins().len(), 1);
        let join = &query.joins()[0];
        assert_eq!(join.target_table, "addresses");
        assert_eq!(join.source_column, "address_id");
        assert_eq!(join.target_column, "id");
        assert!(query.render(&Postgres).0.contains(r#"LOWER("addresses"."city")"#));
    }

    #[test]
    fn test_joins_are_deduplicated() {
        let query = filter("address.city:x address.zip:y (address.city:z OR address.planet:w)");

        assert_eq!(query.joins().len(), 1);
        assert_eq!(keys(&query), vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_distinct_relations_to_one_table_get_distinct_aliases() {
        let query = filter("address.city:x billing.city:y");

        let aliases: Vec<_> = query.joins().iter().map(|j| j.target_alias.as_str()).collect();
        assert_eq!(aliases, vec!["addresses", "addresses_1"]);
        assert!(
            query
                .render(&Postgres)
                .0
                .contains(r#"LOWER("addresses_1"."city") LIKE LOWER($2)"#)
        );
    }

    #[test]
    fn test_unresolved_relation_subfield_keeps_join() {
        let query = filter("address.country.name:France");

        assert!(query.where_clause().is_none());
        assert_eq!(query.joins().len(), 1);
        assert_eq!(
            query.render(&Postgres).0,
            r#"SELECT "user".* FROM "user" AS "user" LEFT JOIN "addresses" AS "addresses" ON "addresses"."id" = "user"."address_id""#
        );
    }

    #[test]
    fn test_compilation_is_deterministic() {
        let text = r#"(name:"John Wick" OR address.city:Paris) -tags:rust age:>=21"#;

        let first = filter(text);
        let second = filter(text);
        assert_eq!(first, second);
        assert_eq!(first.render(&Postgres), second.render(&Postgres));
    }

    #[test]
    fn test_keys_continue_across_filters_on_one_sink() {
        let catalog = catalog();
        let mut query = FilterQuery::new("user");

        apply_filter(&mut query, &catalog, "User", "name:a OR name:b").unwrap();
        apply_filter(&mut query, &catalog, "User", "enable:true")
            .unwrap()
            .limit(10);

        assert_eq!(keys(&query), vec!["p1", "p2", "p3"]);
        assert_eq!(
            query.render(&Postgres).0,
            r#"SELECT "user".* FROM "user" AS "user" WHERE (LOWER("user"."name") LIKE LOWER($1) OR LOWER("user"."name") LIKE LOWER($2)) AND "user"."enable" = $3 LIMIT $4"#
        );
    }

    #[test]
    fn test_joins_are_shared_across_filters_on_one_sink() {
        let catalog = catalog();
        let mut query = FilterQuery::new("user");

        apply_filter(&mut query, &catalog, "User", "address.city:x").unwrap();
        apply_filter(&mut query, &catalog, "User", "billing.city:y address.zip:z").unwrap();

        let aliases: Vec<_> = query.joins().iter().map(|j| j.target_alias.as_str()).collect();
        assert_eq!(aliases, vec!["addresses", "addresses_1"]);
    }

    #[test]
    fn test_empty_query_adds_nothing() {
        for text in ["", "   "] {
            let query = filter(text);
            assert!(query.is_empty());
            assert_eq!(
                query.render(&Postgres).0,
                r#"SELECT "user".* FROM "user" AS "user""#
            );
        }
    }

    #[test]
    fn test_errors() {
        let catalog = catalog();
        let mut query = FilterQuery::new("user");

        assert!(matches!(
            apply_filter(&mut query, &catalog, "User", r#"name:"unterminated"#),
            Err(FilterError::Syntax(_))
        ));
        assert!(matches!(
            apply_filter(&mut query, &catalog, "Nope", "name:a"),
            Err(FilterError::UnknownEntity(name)) if name == "Nope"
        ));
        assert!(query.is_empty());
    }
}
