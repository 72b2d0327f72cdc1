//! トークン定義

use logos::Logos;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::location::Location;

/// logosによる1行分の生トークン
///
/// 引用符で囲まれたリテラルはここでは開き引用符だけを認識し、
/// 中身の切り出しは `literal_parser` が行う。
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r" +")] // 空白のみスキップ（タブなどはエラー）
pub(crate) enum RawToken {
    #[regex(r"[a-zA-Z]+")]
    Name,
    #[regex(r"[0-9]+")]
    Number,

    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("=")]
    Equal,
    #[token("->")]
    Arrow,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,

    #[token("\"")]
    DoubleQuote,
    #[token("'")]
    SingleQuote,
}

impl RawToken {
    /// 単独で完結するトークンの種類。引用符は `None`
    pub(crate) fn simple_kind(self) -> Option<TokenKind> {
        let kind = match self {
            RawToken::Name => TokenKind::Name,
            RawToken::Number => TokenKind::Number,
            RawToken::OpenParen => TokenKind::OpenParen,
            RawToken::CloseParen => TokenKind::CloseParen,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Percent => TokenKind::Percent,
            RawToken::Equal => TokenKind::Equal,
            RawToken::Arrow => TokenKind::Arrow,
            RawToken::OpenBrace => TokenKind::OpenBrace,
            RawToken::CloseBrace => TokenKind::CloseBrace,
            RawToken::DoubleQuote | RawToken::SingleQuote => return None,
        };
        Some(kind)
    }
}

/// トークンの種類（閉じた集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Name,
    Number,
    OpenParen,
    CloseParen,
    Semicolon,
    Colon,
    Comma,
    Minus,
    Plus,
    Star,
    Slash,
    Percent,
    Equal,
    Arrow,
    OpenBrace,
    CloseBrace,
    DoubleQuote,
    SingleQuote,
    StringLiteral,
    CharLiteral,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// 予約語
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Func,
}

impl Keyword {
    /// 名前が予約語であれば対応するキーワードを返す
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "func" => Some(Keyword::Func),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Func => "func",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 位置情報付きトークン
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: Location,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    /// `Name` トークンが予約語であればそのキーワード
    pub fn keyword(&self) -> Option<Keyword> {
        if self.kind == TokenKind::Name {
            Keyword::from_name(&self.text)
        } else {
            None
        }
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.keyword() == Some(keyword)
    }

    /// デバッグ用の表示 `{ value: "<text>", type: <Kind> }`
    pub fn inspect(&self) -> String {
        format!("{{ value: \"{}\", type: {} }}", self.text, self.kind)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}
