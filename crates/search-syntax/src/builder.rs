use crate::{
    ast::{
        group::{Connective, GroupNode, Node},
        literal::Literal,
        path::FieldPath,
        span::Span,
        term::{Comparator, TermNode},
    },
    error::SyntaxError,
    parser::{Rule, SearchParser},
};
use pest::{Parser, iterators::Pair};
use tracing::debug;

pub type BuildResult<T> = Result<T, SyntaxError>;

/// Parse filter text into a term tree.
///
/// The root is always a group. Empty or whitespace-only input yields an
/// empty AND group, which compiles to no predicates at all.
pub fn parse(input: &str) -> BuildResult<GroupNode> {
    let mut pairs =
        SearchParser::parse(Rule::query, input).map_err(SyntaxError::from_pest_error)?;

    let Some(query) = pairs.next() else {
        return Ok(GroupNode::default());
    };

    let root = query
        .into_inner()
        .find(|pair| pair.as_rule() == Rule::or_expr)
        .map(build_node)
        .transpose()?;

    let tree = match root {
        None => GroupNode::default(),
        Some(Node::Group(group)) => group,
        Some(Node::Term(term)) => GroupNode::and(vec![Node::Term(term)]),
    };

    debug!("Parsed filter `{}` into {} term(s)", input, tree.term_count());
    Ok(tree)
}

fn pair_to_span(pair: &Pair<Rule>) -> Span {
    let (line, col) = pair.line_col();
    let span_pest = pair.as_span();
    Span::new(span_pest.start(), span_pest.end(), line, col)
}

fn unexpected(pair: &Pair<Rule>) -> SyntaxError {
    let span = pair_to_span(pair);
    SyntaxError::UnexpectedRule {
        rule: format!("{:?}", pair.as_rule()),
        line: span.line,
        column: span.column,
    }
}

fn build_node(pair: Pair<Rule>) -> BuildResult<Node> {
    match pair.as_rule() {
        Rule::or_expr => build_chain(pair, Connective::Or),
        Rule::and_expr => build_chain(pair, Connective::And),
        Rule::group => {
            let err = unexpected(&pair);
            let inner = pair.into_inner().next().ok_or(err)?;
            build_node(inner)
        }
        Rule::term => build_term(pair).map(Node::Term),
        _ => Err(unexpected(&pair)),
    }
}

/// Operands joined by one connective collapse into a single group; a lone
/// operand is returned as-is so that `a:1` does not become `(a:1)`.
fn build_chain(pair: Pair<Rule>, connective: Connective) -> BuildResult<Node> {
    let mut children = Vec::new();

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::kw_and | Rule::kw_or => {}
            _ => children.push(build_node(inner)?),
        }
    }

    if children.len() == 1
        && let Some(only) = children.pop()
    {
        return Ok(only);
    }

    Ok(Node::Group(GroupNode::new(connective, children)))
}

fn build_term(pair: Pair<Rule>) -> BuildResult<TermNode> {
    let span = pair_to_span(&pair);
    let missing = unexpected(&pair);

    let mut negated = false;
    let mut field = None;
    let mut comparator = Comparator::Eq;
    let mut value = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::negation => negated = true,
            Rule::field => field = Some(FieldPath::parse(inner.as_str())),
            Rule::comparator => {
                comparator = Comparator::from_symbol(inner.as_str())
                    .ok_or_else(|| SyntaxError::InvalidComparator(inner.as_str().to_string()))?;
            }
            Rule::quoted => {
                let raw = inner.into_inner().next().map(|p| p.as_str()).unwrap_or("");
                value = Some(Literal::String(unescape(raw)));
            }
            Rule::bare => value = Some(Literal::from_bare(inner.as_str())),
            _ => return Err(unexpected(&inner)),
        }
    }

    let (Some(field), Some(value)) = (field, value) else {
        return Err(missing);
    };

    Ok(TermNode {
        field,
        comparator,
        value,
        negated,
        span,
    })
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(ch);
        }
    }
    out
}
