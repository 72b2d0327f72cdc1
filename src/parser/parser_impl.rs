//! メインパーサー構造と宣言認識の状態機械

use std::collections::VecDeque;

use crate::ast::Function;
use crate::error::ParserError;
use crate::lexer::{Keyword, Location, Token, TokenKind};

use super::ParseResult;

/// 宣言認識の状態
///
/// 引数リストと本体の読み取りは遷移の中で閉じ括弧まで一気に行うため、
/// 状態としては現れない。
#[derive(Debug)]
enum State {
    Idle,
    /// `func` を読んだ
    SeenFunc(Token),
    /// 関数名を読んだ
    SeenName(Function),
    /// 引数リストを読んだ
    SeenArgs(Function),
    /// `-> type` を読んだ
    SeenReturner(Function),
}

/// Rillパーサー
///
/// トークンは先頭から取り出され、一度しか読まれない。
pub struct Parser {
    pub(super) pending: VecDeque<Token>,
    pub(super) last_location: Option<Location>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            pending: tokens.into(),
            last_location: None,
        }
    }

    /// トークン列をすべて消費して関数宣言を集める
    pub fn parse(mut self) -> ParseResult<Vec<Function>> {
        let mut functions = Vec::new();
        let mut state = State::Idle;

        while let Some(token) = self.pop() {
            state = match (state, token.kind) {
                (State::Idle, TokenKind::Name) if token.is_keyword(Keyword::Func) => {
                    State::SeenFunc(token)
                }
                (State::SeenFunc(_), TokenKind::Name) if token.keyword().is_none() => {
                    State::SeenName(Function::new(token))
                }
                (State::Idle | State::SeenFunc(_), TokenKind::OpenParen) => {
                    return Err(ParserError::MissingFunctionName {
                        location: token.location,
                    });
                }
                (State::SeenName(mut function), TokenKind::OpenParen) => {
                    function.arguments = self.parse_arguments(&token)?;
                    State::SeenArgs(function)
                }
                (State::SeenArgs(mut function), TokenKind::Arrow) => {
                    function.return_type = Some(self.parse_return_type(&token)?);
                    State::SeenReturner(function)
                }
                (
                    State::SeenArgs(mut function) | State::SeenReturner(mut function),
                    TokenKind::OpenBrace,
                ) => {
                    function.body_tokens = self.collect_body(&token)?;
                    log::debug!("parsed {} at {}", function.inspect(), function.declaring_token.location);
                    functions.push(function);
                    State::Idle
                }
                // 宣言以外で始まる文はまだ扱えない
                (
                    State::Idle,
                    TokenKind::Name
                    | TokenKind::Number
                    | TokenKind::Minus
                    | TokenKind::Plus
                    | TokenKind::Star
                    | TokenKind::Slash
                    | TokenKind::Percent
                    | TokenKind::Equal
                    | TokenKind::Semicolon
                    | TokenKind::DoubleQuote
                    | TokenKind::SingleQuote
                    | TokenKind::StringLiteral
                    | TokenKind::CharLiteral,
                ) => {
                    return Err(ParserError::Unsupported {
                        construct: format!("Statement starting with `{}`", token.text),
                        location: token.location,
                    });
                }
                _ => return Err(self.unexpected(token)),
            };
        }

        match state {
            State::Idle => Ok(functions),
            State::SeenFunc(token) => Err(ParserError::UnfinishedDeclaration {
                location: token.location,
            }),
            State::SeenName(function) | State::SeenArgs(function) | State::SeenReturner(function) => {
                Err(ParserError::UnfinishedDeclaration {
                    location: function.declaring_token.location,
                })
            }
        }
    }

    // ==================== ユーティリティメソッド ====================

    /// 次のトークンを取り出す
    pub(super) fn pop(&mut self) -> Option<Token> {
        let token = self.pending.pop_front()?;
        self.last_location = Some(token.location.clone());
        Some(token)
    }

    /// 次のトークンを覗く（取り出さない）
    pub(super) fn peek(&self) -> Option<&Token> {
        self.pending.front()
    }

    /// 予期しないトークンエラーを作成
    pub(super) fn unexpected(&self, token: Token) -> ParserError {
        ParserError::UnexpectedToken {
            found: token.text,
            location: token.location,
        }
    }
}
