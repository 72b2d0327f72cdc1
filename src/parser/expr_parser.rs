//! 単独の二項式 `literal op literal` の解析

use crate::error::ParserError;
use crate::lexer::{Token, TokenKind};
use crate::value::{Expression, Operator, Value};

use super::{ParseResult, Parser};

impl Parser {
    /// トークン列全体を1つの二項式として解析（末尾の `;` は許可）
    pub fn parse_expression(mut self) -> ParseResult<Expression> {
        let left = self.parse_literal()?;
        let operator = self.parse_operator()?;
        let right = self.parse_literal()?;

        if self.peek().is_some_and(|t| t.kind == TokenKind::Semicolon) {
            self.pop();
        }
        if let Some(token) = self.pop() {
            return Err(self.unexpected(token));
        }

        Ok(Expression::new(operator, left, right))
    }

    fn parse_operator(&mut self) -> ParseResult<Operator> {
        let token = self.expect_more()?;
        match Operator::from_token_kind(token.kind) {
            Some(operator) => Ok(operator),
            None => Err(self.unexpected(token)),
        }
    }

    /// リテラルを値に変換
    fn parse_literal(&mut self) -> ParseResult<Value> {
        let token = self.expect_more()?;

        match token.kind {
            TokenKind::Number => parse_int(&token, false),
            // 負の整数リテラル
            TokenKind::Minus if self.peek().is_some_and(|t| t.kind == TokenKind::Number) => {
                let number = self.expect_more()?;
                parse_int(&number, true)
            }
            TokenKind::DoubleQuote => {
                let contents = self.expect_kind(TokenKind::StringLiteral)?;
                self.expect_kind(TokenKind::DoubleQuote)?;
                Ok(Value::Str(contents.text))
            }
            TokenKind::SingleQuote => {
                let contents = self.expect_kind(TokenKind::CharLiteral)?;
                self.expect_kind(TokenKind::SingleQuote)?;
                match contents.text.chars().next() {
                    Some(c) => Ok(Value::Char(c)),
                    None => Err(self.unexpected(contents)),
                }
            }
            TokenKind::Name => match token.text.as_str() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                _ => Err(ParserError::Unsupported {
                    construct: format!("Variable `{}`", token.text),
                    location: token.location,
                }),
            },
            _ => Err(self.unexpected(token)),
        }
    }

    /// 次のトークンを取り出す。無ければ式が途中で終わっている
    fn expect_more(&mut self) -> ParseResult<Token> {
        self.pop().ok_or_else(|| ParserError::UnfinishedExpression {
            location: self.last_location.clone(),
        })
    }

    fn expect_kind(&mut self, kind: TokenKind) -> ParseResult<Token> {
        let token = self.expect_more()?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(self.unexpected(token))
        }
    }
}

fn parse_int(token: &Token, negative: bool) -> ParseResult<Value> {
    let text = if negative {
        format!("-{}", token.text)
    } else {
        token.text.clone()
    };

    text.parse::<i64>()
        .map(Value::Int)
        .map_err(|_| ParserError::IntegerOutOfRange {
            text,
            location: token.location.clone(),
        })
}
