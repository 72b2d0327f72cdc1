//! 関数宣言のパーサーテスト

use super::*;
use pretty_assertions::assert_eq;
use rill::lexer::{Location, TokenKind};
use rill::value::ValueType;

#[test]
fn test_function_with_arguments() {
    let functions = assert_parse_success("func add(x: int, y: int) -> int { }");

    assert_eq!(functions.len(), 1);
    let add = &functions[0];
    assert_eq!(add.name, "add");
    assert_eq!(add.arguments.len(), 2);
    assert_eq!(add.argument_types(), vec![ValueType::Int, ValueType::Int]);
    assert_eq!(add.arguments.keys().map(String::as_str).collect::<Vec<_>>(), vec!["x", "y"]);
    assert_eq!(add.return_type, Some(ValueType::Int));
    assert!(add.body_tokens.is_empty());
}

#[test]
fn test_declaring_token() {
    let functions = assert_parse_success("\nfunc  main() { }");

    let token = &functions[0].declaring_token;
    assert_eq!(token.kind, TokenKind::Name);
    assert_eq!(token.text, "main");
    assert_eq!(token.location, Location::new("test.rill", 2, 7));
}

#[test]
fn test_empty_function_arguments() {
    let functions = assert_parse_success("func test() { }");

    assert!(functions[0].arguments.is_empty());
    assert!(functions[0].return_type.is_none());
}

#[test]
fn test_argument_types_are_kept() {
    // 解析した型がそのまま宣言に残る
    let functions =
        assert_parse_success("func mix(a: int, b: float, c: str, d: char, e: ptr, f: bool) { }");

    assert_eq!(
        functions[0].argument_types(),
        vec![
            ValueType::Int,
            ValueType::Float,
            ValueType::Str,
            ValueType::Char,
            ValueType::Ptr,
            ValueType::Bool,
        ]
    );
}

#[test]
fn test_duplicate_arguments_are_ignored() {
    let functions = assert_parse_success("func dup(x: int, x: char, y: ptr) { }");

    assert_eq!(functions[0].arguments.len(), 2);
    assert_eq!(functions[0].arguments["x"], ValueType::Int);
    assert_eq!(functions[0].arguments["y"], ValueType::Ptr);
}

#[test]
fn test_body_tokens_are_collected_verbatim() {
    let source = r#"
    func main() -> int {
        x = 3 + 4;
        y = "hi";
    }
    "#;

    let functions = assert_parse_success(source);
    let body: Vec<_> = functions[0]
        .body_tokens
        .iter()
        .map(|token| token.text.as_str())
        .collect();

    assert_eq!(
        body,
        vec!["x", "=", "3", "+", "4", ";", "y", "=", "\"", "hi", "\"", ";"]
    );
}

#[test]
fn test_nested_braces_in_body() {
    let functions = assert_parse_success("func outer() { { inner } } func next() { }");

    assert_eq!(functions.len(), 2);
    assert_eq!(functions[0].body_tokens.len(), 3);
    assert_eq!(functions[1].name, "next");
}

#[test]
fn test_multiple_functions() {
    let source = r#"
    func add(a: int, b: int) -> int {
        a + b
    }

    func sub(a: float, b: float) -> float {
        a - b
    }

    func main() {
    }
    "#;

    let functions = assert_parse_success(source);
    let names: Vec<_> = functions.iter().map(|f| f.name.as_str()).collect();

    assert_eq!(names, vec!["add", "sub", "main"]);
    assert_eq!(functions[1].return_type, Some(ValueType::Float));
    assert_eq!(functions[2].return_type, None);
}

#[test]
fn test_empty_source() {
    assert!(assert_parse_success("").is_empty());
}

#[test]
fn test_trailing_comma() {
    let functions = assert_parse_success("func f(x: int,) { }");
    assert_eq!(functions[0].argument_types(), vec![ValueType::Int]);
}

#[test]
fn test_inspect() {
    let functions = assert_parse_success("func add(x: int, y: float) -> int { 1 }");

    assert_eq!(
        functions[0].inspect(),
        r#"{ value: "add", type: Function, arguments: [x: int, y: float], returns: int, body: [{ value: "1", type: Number }] }"#
    );
}
