//! Grammar tests for single terms (fields, comparators, values)

use pest::Parser;
use search_syntax::parser::{Rule, SearchParser};

#[test]
fn test_parse_values() {
    let inputs = vec![
        r#"name:"John Wick""#,
        r#"name:"""#,
        "age:42",
        "ratio:3.14",
        "enable:true",
        "enable:FALSE",
        "status:null",
        "created:2024-01-01",
        "email:john@example.com",
    ];

    for input in inputs {
        let result = SearchParser::parse(Rule::query, input);
        assert!(result.is_ok(), "Failed to parse: {}", input);
    }
}

#[test]
fn test_parse_comparators() {
    for input in ["age:<18", "age:>18", "age:<=18", "age:>=18"] {
        let result = SearchParser::parse(Rule::query, input);
        assert!(result.is_ok(), "Failed to parse: {}", input);
    }
}

#[test]
fn test_parse_negation() {
    for input in ["NOT status:active", "not status:active", "-status:active"] {
        let result = SearchParser::parse(Rule::query, input);
        assert!(result.is_ok(), "Failed to parse: {}", input);
    }
}

#[test]
fn test_parse_dotted_fields() {
    let result = SearchParser::parse(Rule::query, "address.city:Paris address.zip:75001");
    assert!(result.is_ok());
}

#[test]
fn test_reject_malformed_terms() {
    let inputs = vec![
        "name",
        ":value",
        "name:",
        r#"name:"open"#,
        "1name:x",
        "name :x",
        "name: x",
    ];

    for input in inputs {
        let result = SearchParser::parse(Rule::query, input);
        assert!(result.is_err(), "Should have failed: {}", input);
    }
}
