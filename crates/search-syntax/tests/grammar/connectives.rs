//! Grammar tests for AND/OR chains and grouping

use pest::Parser;
use search_syntax::parser::{Rule, SearchParser};

#[test]
fn test_parse_connectives() {
    let inputs = vec![
        "a:1 AND b:2",
        "a:1 and b:2",
        "a:1 OR b:2",
        "a:1 or b:2",
        "a:1 b:2 c:3",
        "a:1 AND b:2 OR c:3 AND d:4",
    ];

    for input in inputs {
        let result = SearchParser::parse(Rule::query, input);
        assert!(result.is_ok(), "Failed to parse: {}", input);
    }
}

#[test]
fn test_keyword_named_fields() {
    for input in ["a:1 and:2", "a:1 AND and:2", "a:1 or:2", "a:1 OR or:2", "and:1"] {
        let result = SearchParser::parse(Rule::query, input);
        assert!(result.is_ok(), "Failed to parse: {}", input);
    }
}

#[test]
fn test_parse_groups() {
    let inputs = vec![
        "(a:1)",
        "(a:1 OR b:2) AND c:3",
        "((a:1 OR b:2) AND (c:3 OR d:4)) OR e:5",
        "NOT a:1 (b:2 OR -c:3)",
    ];

    for input in inputs {
        let result = SearchParser::parse(Rule::query, input);
        assert!(result.is_ok(), "Failed to parse: {}", input);
    }
}

#[test]
fn test_reject_unbalanced() {
    for input in ["(a:1", "a:1)", "a:1 OR", "AND a:1", "()"] {
        let result = SearchParser::parse(Rule::query, input);
        assert!(result.is_err(), "Should have failed: {}", input);
    }
}

#[test]
fn test_empty_query() {
    assert!(SearchParser::parse(Rule::query, "").is_ok());
    assert!(SearchParser::parse(Rule::query, "  \n ").is_ok());
}
