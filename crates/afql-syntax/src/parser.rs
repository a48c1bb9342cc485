use crate::error::ParseError;
use model::{CompareOp, FilterKind, FilterLeaf, LogicalOp, PredicateTree, Value};
use pest::{Parser, iterators::Pair};
use pest_derive::Parser;
use tracing::debug;

#[derive(Parser)]
#[grammar = "afql.pest"]
pub struct AfqlParser;

/// Parses a textual filter expression into a predicate tree.
///
/// Terms are joined left to right: `a == 'x' & b == 'y' | c == 'z'`
/// becomes one combination with three children and two joins.
pub fn parse(source: &str) -> Result<PredicateTree, ParseError> {
    let mut pairs = AfqlParser::parse(Rule::expression, source)
        .map_err(|e| ParseError::Malformed(e.to_string()))?;

    let expression = pairs
        .next()
        .ok_or_else(|| ParseError::Malformed("empty expression".to_string()))?;

    let mut children = vec![];
    let mut joins = vec![];
    for pair in expression.into_inner() {
        match pair.as_rule() {
            Rule::term => children.push(parse_term(pair)?),
            Rule::logical_op => joins.push(parse_logical_op(&pair)?),
            Rule::EOI => {}
            rule => {
                return Err(ParseError::Malformed(format!(
                    "unexpected {rule:?} in expression"
                )));
            }
        }
    }

    debug!(terms = children.len(), source, "parsed filter expression");
    Ok(PredicateTree::combine(children, joins)?)
}

fn parse_term(pair: Pair<Rule>) -> Result<PredicateTree, ParseError> {
    let span = pair.as_str().to_string();
    let mut inner = pair.into_inner();

    let field = inner
        .next()
        .ok_or_else(|| ParseError::Malformed(format!("term without field: '{span}'")))?;
    let kind = FilterKind::from_name(field.as_str())
        .ok_or_else(|| ParseError::UnknownField(field.as_str().to_string()))?;

    let op = inner
        .next()
        .ok_or_else(|| ParseError::Malformed(format!("term without operator: '{span}'")))?;
    let operator = parse_comp_op(&op)?;

    let literal = inner
        .next()
        .ok_or_else(|| ParseError::MissingValue(span))?;
    let value = parse_literal(&literal)?;

    let leaf = FilterLeaf::with_operator(kind, operator, vec![value])?;
    Ok(leaf.into())
}

fn parse_comp_op(pair: &Pair<Rule>) -> Result<CompareOp, ParseError> {
    match pair.as_str() {
        "==" => Ok(CompareOp::Eq),
        "!=" => Ok(CompareOp::NotEq),
        ">" => Ok(CompareOp::Gt),
        ">=" => Ok(CompareOp::GtEq),
        "<" => Ok(CompareOp::Lt),
        "<=" => Ok(CompareOp::LtEq),
        other => Err(ParseError::UnknownOperator(other.to_string())),
    }
}

fn parse_logical_op(pair: &Pair<Rule>) -> Result<LogicalOp, ParseError> {
    match pair.as_str() {
        "&" => Ok(LogicalOp::And),
        "|" => Ok(LogicalOp::Or),
        other => Err(ParseError::Malformed(format!(
            "unexpected join token '{other}'"
        ))),
    }
}

fn parse_literal(pair: &Pair<Rule>) -> Result<Value, ParseError> {
    let raw = pair.as_str();
    match pair.as_rule() {
        Rule::string => Ok(Value::from(
            raw.trim_matches(|c| c == '"' || c == '\'').to_string(),
        )),
        Rule::number if raw.contains('.') => raw
            .parse::<f64>()
            .map(Value::from)
            .map_err(|e| ParseError::Malformed(format!("bad number '{raw}': {e}"))),
        Rule::number => raw
            .parse::<i64>()
            .map(Value::from)
            .map_err(|e| ParseError::Malformed(format!("bad number '{raw}': {e}"))),
        rule => Err(ParseError::Malformed(format!(
            "unexpected {rule:?} in place of a value"
        ))),
    }
}
