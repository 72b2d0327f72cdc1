//! 統一的なエラーハンドリングモジュール
//!
//! このモジュールは、Rillフロントエンド全体で使用される統一的なエラー型と
//! エラー報告の整形を提供します。フロントエンドは最初のエラーで処理を打ち切り、
//! プロセスの終了はドライバ（`main.rs`）だけが行います。

use crate::lexer::Location;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use thiserror::Error;

/// Rillフロントエンドの統一エラー型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RillError {
    /// レキサーエラー
    #[error(transparent)]
    Lexer(#[from] LexerError),

    /// パーサーエラー
    #[error(transparent)]
    Parser(#[from] ParserError),

    /// 式の評価エラー
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// ファイルI/Oエラー
    #[error("Failed to read `{path}`: {message}")]
    Io { path: String, message: String },

    /// 拡張子が `.rill` ではない
    #[error("`{path}` is not a Rill source file (expected the `.{expected}` extension)")]
    InvalidExtension { path: String, expected: &'static str },

    /// その他のエラー
    #[error("{0}")]
    Other(String),
}

/// レキサーエラーの詳細
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("Unexpected character `{character}`")]
    UnexpectedCharacter { character: char, location: Location },

    #[error("Unterminated string literal")]
    UnterminatedString { location: Location },

    #[error("Character literal must contain exactly one character")]
    InvalidCharLiteral { location: Location },
}

impl LexerError {
    pub fn location(&self) -> &Location {
        match self {
            LexerError::UnexpectedCharacter { location, .. }
            | LexerError::UnterminatedString { location }
            | LexerError::InvalidCharLiteral { location } => location,
        }
    }
}

/// パーサーエラーの詳細
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("Function has no name")]
    MissingFunctionName { location: Location },

    #[error("Unclosed parenthesis")]
    UnclosedParen { location: Location },

    #[error("Unclosed function body")]
    UnclosedBody { location: Location },

    #[error("Unknown type `{name}`")]
    UnknownType { name: String, location: Location },

    #[error("Argument `{name}` has no type")]
    MissingArgumentType { name: String, location: Location },

    #[error("Unfinished function declaration")]
    UnfinishedDeclaration { location: Location },

    #[error("Unfinished expression")]
    UnfinishedExpression { location: Option<Location> },

    #[error("Integer literal `{text}` is out of range")]
    IntegerOutOfRange { text: String, location: Location },

    #[error("`{found}` is unexpected here")]
    UnexpectedToken { found: String, location: Location },

    #[error("{construct} is not supported yet")]
    Unsupported { construct: String, location: Location },
}

impl ParserError {
    pub fn location(&self) -> Option<&Location> {
        match self {
            ParserError::MissingFunctionName { location }
            | ParserError::UnclosedParen { location }
            | ParserError::UnclosedBody { location }
            | ParserError::UnknownType { location, .. }
            | ParserError::MissingArgumentType { location, .. }
            | ParserError::UnfinishedDeclaration { location }
            | ParserError::IntegerOutOfRange { location, .. }
            | ParserError::UnexpectedToken { location, .. }
            | ParserError::Unsupported { location, .. } => Some(location),
            ParserError::UnfinishedExpression { location } => location.as_ref(),
        }
    }
}

/// 式の評価エラー
///
/// 値は位置情報を持たないため、評価エラーには位置が付かない。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Type mismatch for operator `{operator}`: {expression}")]
    TypeMismatch { operator: String, expression: String },

    #[error("Invalid operands for `{operator}`: {left}, {right}")]
    InvalidOperands {
        operator: String,
        left: String,
        right: String,
    },

    /// 演算子と型の組み合わせが明示的に禁止されている
    #[error("{0}")]
    Forbidden(&'static str),

    #[error("Division by zero: {expression}")]
    DivisionByZero { expression: String },

    #[error("Arithmetic overflow: {expression}")]
    Overflow { expression: String },

    #[error("Insufficient operands for `{operator}` operator: expected 2, found {found}")]
    OperandCount { operator: String, found: usize },
}

impl RillError {
    /// エラーに位置情報があれば返す
    pub fn location(&self) -> Option<&Location> {
        match self {
            RillError::Lexer(e) => Some(e.location()),
            RillError::Parser(e) => e.location(),
            _ => None,
        }
    }

    /// 1行の診断メッセージ `<file>:<row>:<col>: ERROR: <message>`
    pub fn render(&self) -> String {
        match self.location() {
            Some(location) => format!("{}: ERROR: {}", location, self),
            None => format!("ERROR: {}", self),
        }
    }

    /// codespan-reportingのDiagnosticに変換
    ///
    /// `source` は `file_id` に登録したソース全体。位置が無いエラーはラベル無し。
    pub fn to_diagnostic(&self, file_id: usize, source: &str) -> Diagnostic<usize> {
        let labels = self
            .location()
            .map(|location| {
                let start = byte_offset(source, location);
                let end = source[start..]
                    .chars()
                    .next()
                    .map_or(start, |c| start + c.len_utf8());
                vec![Label::primary(file_id, start..end)]
            })
            .unwrap_or_default();

        Diagnostic::error()
            .with_message(self.to_string())
            .with_labels(labels)
    }
}

/// 行・列からバイトオフセットを求める。範囲外はソース末尾に丸める
fn byte_offset(source: &str, location: &Location) -> usize {
    let mut offset = 0;
    for (index, line) in source.split('\n').enumerate() {
        if index + 1 == location.row {
            let column_offset: usize = line
                .chars()
                .take(location.column.saturating_sub(1))
                .map(char::len_utf8)
                .sum();
            return offset + column_offset;
        }
        offset += line.len() + 1;
    }
    source.len()
}

/// Result型のエイリアス
pub type RillResult<T> = Result<T, RillError>;
