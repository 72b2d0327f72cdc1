//! 型の解析

use crate::error::ParserError;
use crate::lexer::{Token, TokenKind};
use crate::value::ValueType;

use super::{ParseResult, Parser};

impl Parser {
    /// 型注釈のトークンを型表で解決
    pub(super) fn resolve_type(&self, token: Token) -> ParseResult<ValueType> {
        let ty = match token.kind {
            TokenKind::Name => ValueType::from_name(&token.text),
            _ => None,
        };

        ty.ok_or(ParserError::UnknownType {
            name: token.text,
            location: token.location,
        })
    }
}
