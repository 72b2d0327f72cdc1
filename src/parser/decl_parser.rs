//! 関数宣言（引数リスト、戻り値型、本体）の解析

use indexmap::IndexMap;

use crate::error::ParserError;
use crate::lexer::{Token, TokenKind};
use crate::value::ValueType;

use super::{ParseResult, Parser};

impl Parser {
    /// `(` の直後から対応する `)` までの引数リストを解析
    ///
    /// 同名の引数は最初の宣言だけを残し、後続は黙って無視する。
    pub(super) fn parse_arguments(
        &mut self,
        open_paren: &Token,
    ) -> ParseResult<IndexMap<String, ValueType>> {
        let mut arguments = IndexMap::new();
        // 宣言されたばかりで `:` を待っている引数名
        let mut pending: Option<Token> = None;
        // 型まで読み終わり、`,` か `)` を待っている
        let mut expect_separator = false;

        loop {
            let Some(token) = self.pop() else {
                return Err(ParserError::UnclosedParen {
                    location: open_paren.location.clone(),
                });
            };

            match token.kind {
                TokenKind::CloseParen => {
                    if let Some(name) = pending {
                        return Err(missing_type(name));
                    }
                    break;
                }
                TokenKind::Name if !expect_separator => {
                    if let Some(previous) = pending.replace(token) {
                        return Err(missing_type(previous));
                    }
                }
                TokenKind::Colon => {
                    let Some(name) = pending.take() else {
                        return Err(self.unexpected(token));
                    };
                    let Some(type_token) = self.pop() else {
                        return Err(ParserError::UnclosedParen {
                            location: open_paren.location.clone(),
                        });
                    };
                    let ty = self.resolve_type(type_token)?;

                    if arguments.contains_key(&name.text) {
                        log::debug!("{}: duplicate argument `{}` ignored", name.location, name.text);
                    } else {
                        arguments.insert(name.text, ty);
                    }
                    expect_separator = true;
                }
                TokenKind::Comma => {
                    if let Some(name) = pending {
                        return Err(missing_type(name));
                    }
                    if !expect_separator {
                        return Err(self.unexpected(token));
                    }
                    expect_separator = false;
                }
                // 本体や戻り値型が始まった時点で括弧が閉じていない
                TokenKind::OpenBrace | TokenKind::CloseBrace | TokenKind::Arrow => {
                    return Err(ParserError::UnclosedParen {
                        location: open_paren.location.clone(),
                    });
                }
                _ => return Err(self.unexpected(token)),
            }
        }

        Ok(arguments)
    }

    /// `->` の直後の戻り値型を解析
    pub(super) fn parse_return_type(&mut self, arrow: &Token) -> ParseResult<ValueType> {
        match self.pop() {
            Some(token) if token.kind == TokenKind::Name => self.resolve_type(token),
            Some(token) => Err(ParserError::UnfinishedDeclaration {
                location: token.location,
            }),
            None => Err(ParserError::UnfinishedDeclaration {
                location: arrow.location.clone(),
            }),
        }
    }

    /// `{` の直後から対応する `}` までのトークンをそのまま集める
    pub(super) fn collect_body(&mut self, open_brace: &Token) -> ParseResult<Vec<Token>> {
        let mut body = Vec::new();
        let mut depth = 1usize;

        loop {
            let Some(token) = self.pop() else {
                return Err(ParserError::UnclosedBody {
                    location: open_brace.location.clone(),
                });
            };

            match token.kind {
                TokenKind::OpenBrace => depth += 1,
                TokenKind::CloseBrace => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
            body.push(token);
        }

        Ok(body)
    }
}

fn missing_type(name: Token) -> ParserError {
    ParserError::MissingArgumentType {
        name: name.text,
        location: name.location,
    }
}
