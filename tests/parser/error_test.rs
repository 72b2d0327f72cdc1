//! パーサーのエラーケースのテスト

use super::*;
use pretty_assertions::assert_eq;
use rill::error::ParserError;
use rill::lexer::Location;
use test_case::test_case;

fn at(row: usize, column: usize) -> Location {
    Location::new("test.rill", row, column)
}

#[test]
fn test_missing_closing_paren() {
    // 閉じ括弧が無いまま本体が始まる
    let error = assert_parse_error("func bad(x: int { }");
    assert_eq!(error, ParserError::UnclosedParen { location: at(1, 9) });
}

#[test_case("func f(x: int"; "end of input")]
#[test_case("func f(x: int,"; "after comma")]
#[test_case("func f(x: int -> int { }"; "arrow inside arguments")]
#[test_case("func f(x:"; "missing type at end of input")]
fn test_unclosed_paren(source: &str) {
    let error = assert_parse_error(source);
    assert_eq!(error, ParserError::UnclosedParen { location: at(1, 7) });
}

#[test]
fn test_missing_function_name() {
    assert_eq!(
        assert_parse_error("(x: int) { }"),
        ParserError::MissingFunctionName { location: at(1, 1) }
    );
    assert_eq!(
        assert_parse_error("func (x: int) { }"),
        ParserError::MissingFunctionName { location: at(1, 6) }
    );
}

#[test]
fn test_unknown_argument_type() {
    let error = assert_parse_error("func f(x: num) { }");
    assert_eq!(
        error,
        ParserError::UnknownType {
            name: "num".to_string(),
            location: at(1, 11),
        }
    );
}

#[test]
fn test_unknown_return_type() {
    let error = assert_parse_error("func f() -> void { }");
    assert_eq!(
        error,
        ParserError::UnknownType {
            name: "void".to_string(),
            location: at(1, 13),
        }
    );
}

#[test_case("func f() -> { }", 1, 13; "brace after arrow")]
#[test_case("func f() ->", 1, 10; "arrow at end of input")]
fn test_missing_return_type(source: &str, row: usize, column: usize) {
    let error = assert_parse_error(source);
    assert_eq!(error, ParserError::UnfinishedDeclaration { location: at(row, column) });
}

#[test_case("func f(x) { }"; "before close paren")]
#[test_case("func f(x, y: int) { }"; "before comma")]
#[test_case("func f(x y: int) { }"; "followed by another name")]
fn test_missing_argument_type(source: &str) {
    let error = assert_parse_error(source);
    assert_eq!(
        error,
        ParserError::MissingArgumentType {
            name: "x".to_string(),
            location: at(1, 8),
        }
    );
}

#[test]
fn test_unclosed_body() {
    let error = assert_parse_error("func main() {\n  x\n");
    assert_eq!(error, ParserError::UnclosedBody { location: at(1, 13) });

    let error = assert_parse_error("func main() { { }");
    assert_eq!(error, ParserError::UnclosedBody { location: at(1, 13) });
}

#[test_case("func"; "keyword only")]
#[test_case("func main"; "name only")]
#[test_case("func main()"; "no body")]
#[test_case("func main() -> int"; "no body after return type")]
fn test_unfinished_declaration(source: &str) {
    let error = assert_parse_error(source);
    assert!(matches!(error, ParserError::UnfinishedDeclaration { .. }));
}

#[test]
fn test_unsupported_statement() {
    let error = assert_parse_error("x = 3 + 4;");
    assert_eq!(
        error,
        ParserError::Unsupported {
            construct: "Statement starting with `x`".to_string(),
            location: at(1, 1),
        }
    );
    assert_eq!(error.to_string(), "Statement starting with `x` is not supported yet");
}

#[test_case("x = 3;", "x"; "name")]
#[test_case("42", "42"; "number")]
#[test_case(";", ";"; "semicolon")]
#[test_case("= 1", "="; "equal sign")]
#[test_case("+ 1", "+"; "operator")]
#[test_case("-1", "-"; "minus")]
#[test_case(r#""hello""#, "\""; "string literal")]
#[test_case("'c'", "'"; "char literal")]
fn test_unsupported_top_level(source: &str, text: &str) {
    match assert_parse_error(source) {
        ParserError::Unsupported { construct, location } => {
            assert_eq!(construct, format!("Statement starting with `{}`", text));
            assert_eq!(location, at(1, 1));
        }
        other => panic!("Expected Unsupported, got {:?}", other),
    }
}

#[test]
fn test_stray_token_after_function() {
    let error = assert_parse_error("func main() { } ;");
    assert_eq!(
        error,
        ParserError::Unsupported {
            construct: "Statement starting with `;`".to_string(),
            location: at(1, 17),
        }
    );
}

#[test_case("{ }", "{"; "brace at top level")]
#[test_case("}", "}"; "close brace at top level")]
#[test_case("func f(: int) { }", ":"; "colon without name")]
#[test_case("func f(x: int y: int) { }", "y"; "missing comma")]
#[test_case("func f(, x: int) { }", ","; "leading comma")]
#[test_case("func func() { }", "func"; "keyword as name")]
fn test_unexpected_token(source: &str, found: &str) {
    match assert_parse_error(source) {
        ParserError::UnexpectedToken { found: actual, .. } => assert_eq!(actual, found),
        other => panic!("Expected UnexpectedToken, got {:?}", other),
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(assert_parse_error("func bad(x: int { }").to_string(), "Unclosed parenthesis");
    assert_eq!(assert_parse_error("(").to_string(), "Function has no name");
    assert_eq!(assert_parse_error("func f() {").to_string(), "Unclosed function body");
    assert_eq!(assert_parse_error("func f(x: num) { }").to_string(), "Unknown type `num`");
}
