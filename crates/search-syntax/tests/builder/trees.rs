use search_syntax::{
    ast::{Comparator, Connective, GroupNode, Literal, Node, TermNode},
    parse,
};

fn term(field: &str, value: Literal) -> Node {
    Node::Term(TermNode::eq(field, value))
}

#[test]
fn test_precedence_tree_matches_hand_built_tree() {
    let tree = parse("a:1 AND b:2 OR c:3 AND d:4").unwrap();

    let expected = GroupNode::or(vec![
        Node::Group(GroupNode::and(vec![
            term("a", Literal::Integer(1)),
            term("b", Literal::Integer(2)),
        ])),
        Node::Group(GroupNode::and(vec![
            term("c", Literal::Integer(3)),
            term("d", Literal::Integer(4)),
        ])),
    ]);

    // spans differ from the hand-built tree, so compare the rendered form
    assert_eq!(tree.to_string(), expected.to_string());
    assert_eq!(tree.to_string(), "(a:1 AND b:2) OR (c:3 AND d:4)");
}

#[test]
fn test_nested_groups() {
    let tree = parse("((a:1 OR b:2) AND (c:3 OR d:4)) OR e:5").unwrap();

    assert_eq!(tree.connective, Connective::Or);
    assert_eq!(tree.term_count(), 5);
    assert_eq!(
        tree.to_string(),
        "((a:1 OR b:2) AND (c:3 OR d:4)) OR e:5"
    );
}

#[test]
fn test_mixed_negation_and_comparators() {
    let tree = parse(r#"NOT name:"John Wick" age:>=18"#).unwrap();

    let Node::Term(name) = &tree.children[0] else {
        panic!("expected term");
    };
    assert!(name.negated);

    let Node::Term(age) = &tree.children[1] else {
        panic!("expected term");
    };
    assert_eq!(age.comparator, Comparator::Ge);
}

#[test]
fn test_field_named_and_joins_implicitly() {
    let tree = parse("a:1 and:2").unwrap();

    assert_eq!(tree.connective, Connective::And);
    assert_eq!(tree.children.len(), 2);
    let Node::Term(second) = &tree.children[1] else {
        panic!("expected term");
    };
    assert_eq!(second.field.to_string(), "and");
    assert_eq!(second.value, Literal::Integer(2));
}

#[test]
fn test_tree_serializes_to_json() {
    let tree = parse("status:null OR tags:rust").unwrap();
    let json = serde_json::to_value(&tree).unwrap();

    assert_eq!(json["connective"], "OR");
    assert_eq!(json["children"][0]["type"], "term");
    assert_eq!(json["children"][0]["field"], serde_json::json!(["status"]));
    assert_eq!(json["children"][0]["value"], serde_json::Value::Null);
    assert_eq!(json["children"][1]["comparator"], "eq");
}

#[test]
fn test_syntax_error_reports_position() {
    let err = parse("name:ok AND (age:1").unwrap_err();
    let formatted = err.format_error();
    assert!(formatted.contains("line 1"), "{formatted}");
    assert!(formatted.contains('^'));
}
