//! 単独の二項式のパーサーテスト

use pretty_assertions::assert_eq;
use rill::error::ParserError;
use rill::lexer::{tokenize, Location};
use rill::parser::{ParseResult, Parser};
use rill::value::{Expression, Operator, Value};
use test_case::test_case;

fn parse_expression(source: &str) -> ParseResult<Expression> {
    let tokens = tokenize(source, "test.rill").expect("Lexing should succeed");
    Parser::new(tokens).parse_expression()
}

#[test_case("3 + 4", Operator::Sum; "sum")]
#[test_case("3 - 4", Operator::Sub; "sub")]
#[test_case("3 * 4", Operator::Mult; "mult")]
#[test_case("3 / 4", Operator::Div; "div")]
#[test_case("3 % 4", Operator::Mod; "modulo")]
fn test_operators(source: &str, operator: Operator) {
    assert_eq!(
        parse_expression(source).unwrap(),
        Expression::new(operator, Value::Int(3), Value::Int(4))
    );
}

#[test]
fn test_literals() {
    assert_eq!(
        parse_expression(r#""ab" + "cd""#).unwrap(),
        Expression::new(Operator::Sum, Value::from("ab"), Value::from("cd"))
    );
    assert_eq!(
        parse_expression("'a' * 'b'").unwrap(),
        Expression::new(Operator::Mult, Value::Char('a'), Value::Char('b'))
    );
    assert_eq!(
        parse_expression("true + false").unwrap(),
        Expression::new(Operator::Sum, Value::Bool(true), Value::Bool(false))
    );
}

#[test]
fn test_negative_operands() {
    assert_eq!(
        parse_expression("-3 - -4;").unwrap(),
        Expression::new(Operator::Sub, Value::Int(-3), Value::Int(-4))
    );
}

#[test]
fn test_integer_range() {
    assert_eq!(
        parse_expression("-9223372036854775808 + 0").unwrap().operands[0],
        Value::Int(i64::MIN)
    );

    let error = parse_expression("9223372036854775808 + 0").unwrap_err();
    assert_eq!(
        error,
        ParserError::IntegerOutOfRange {
            text: "9223372036854775808".to_string(),
            location: Location::new("test.rill", 1, 1),
        }
    );
}

#[test]
fn test_unfinished_expression() {
    let error = parse_expression("3 +").unwrap_err();
    assert_eq!(
        error,
        ParserError::UnfinishedExpression {
            location: Some(Location::new("test.rill", 1, 3)),
        }
    );

    let error = Parser::new(Vec::new()).parse_expression().unwrap_err();
    assert_eq!(error, ParserError::UnfinishedExpression { location: None });
}

#[test]
fn test_variables_are_unsupported() {
    let error = parse_expression("x + 1").unwrap_err();
    assert!(matches!(error, ParserError::Unsupported { .. }));
    assert_eq!(error.to_string(), "Variable `x` is not supported yet");
}

#[test_case("3 4", "4"; "missing operator")]
#[test_case("3 + 4 5", "5"; "trailing token")]
#[test_case("3 + 4;;", ";"; "double semicolon")]
#[test_case("3 = 4", "="; "assignment")]
#[test_case("+ 4", "+"; "missing left operand")]
fn test_unexpected_tokens(source: &str, found: &str) {
    match parse_expression(source).unwrap_err() {
        ParserError::UnexpectedToken { found: actual, .. } => assert_eq!(actual, found),
        other => panic!("Expected UnexpectedToken, got {:?}", other),
    }
}
