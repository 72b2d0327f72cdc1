//! レキサーのメイン実装

use logos::Logos;

use super::literal_parser::{scan_char, scan_string};
use super::location::Location;
use super::token::{RawToken, Token, TokenKind};
use crate::error::LexerError;

/// Rill言語のレキサー
///
/// 入力は前後の空白を取り除き `\r` を削除したうえで、1行ずつ走査する。
/// 位置情報は取り除く前の元のソースに対する行・列を指す。
pub struct Lexer<'a> {
    source: &'a str,
    file_path: String,
}

impl<'a> Lexer<'a> {
    /// 新しいレキサーを作成
    pub fn new(source: &'a str, file_path: impl Into<String>) -> Self {
        Self {
            source,
            file_path: file_path.into(),
        }
    }

    /// すべてのトークンを収集
    pub fn tokenize(self) -> Result<Vec<Token>, LexerError> {
        let trimmed = self.source.trim();
        if trimmed.is_empty() {
            log::warn!("{}: source file is empty", self.file_path);
            return Ok(Vec::new());
        }

        // 取り除いた先頭部分のぶんだけ行・列をずらす
        let leading = &self.source[..self.source.len() - self.source.trim_start().len()];
        let row_offset = leading.matches('\n').count();
        let first_column_offset = leading
            .rsplit('\n')
            .next()
            .map_or(0, |tail| tail.chars().filter(|&c| c != '\r').count());

        let text = trimmed.replace('\r', "");
        let mut tokens = Vec::new();
        for (index, line) in text.split('\n').enumerate() {
            let column_offset = if index == 0 { first_column_offset } else { 0 };
            self.lex_line(line, row_offset + index + 1, column_offset, &mut tokens)?;
        }

        log::debug!("{}: {} tokens", self.file_path, tokens.len());
        Ok(tokens)
    }

    /// 1行分を走査してトークンを追加
    fn lex_line(
        &self,
        line: &str,
        row: usize,
        column_offset: usize,
        tokens: &mut Vec<Token>,
    ) -> Result<(), LexerError> {
        let mut inner = RawToken::lexer(line);

        while let Some(result) = inner.next() {
            let start = inner.span().start;
            let location = Location::new(
                self.file_path.as_str(),
                row,
                column_offset + line[..start].chars().count() + 1,
            );

            let raw = match result {
                Ok(raw) => raw,
                Err(()) => {
                    let character = line[start..].chars().next().unwrap_or_default();
                    return Err(LexerError::UnexpectedCharacter { character, location });
                }
            };

            match raw {
                RawToken::DoubleQuote => {
                    let Some(contents) = scan_string(inner.remainder()) else {
                        return Err(LexerError::UnterminatedString { location });
                    };
                    let width = contents.chars().count();
                    tokens.push(Token::new(TokenKind::DoubleQuote, "\"", location.clone()));
                    tokens.push(Token::new(
                        TokenKind::StringLiteral,
                        contents,
                        location.shifted(1),
                    ));
                    tokens.push(Token::new(
                        TokenKind::DoubleQuote,
                        "\"",
                        location.shifted(1 + width),
                    ));
                    inner.bump(contents.len() + 1);
                }
                RawToken::SingleQuote => {
                    let Some(character) = scan_char(inner.remainder()) else {
                        return Err(LexerError::InvalidCharLiteral { location });
                    };
                    tokens.push(Token::new(TokenKind::SingleQuote, "'", location.clone()));
                    tokens.push(Token::new(
                        TokenKind::CharLiteral,
                        character.to_string(),
                        location.shifted(1),
                    ));
                    tokens.push(Token::new(TokenKind::SingleQuote, "'", location.shifted(2)));
                    inner.bump(character.len_utf8() + 1);
                }
                raw => {
                    if let Some(kind) = raw.simple_kind() {
                        let token = Token::new(kind, inner.slice(), location);
                        log::trace!("{} @ {}", token.inspect(), token.location);
                        tokens.push(token);
                    }
                }
            }
        }

        Ok(())
    }
}

/// ソースコードをトークン化
pub fn tokenize(source: &str, file_path: &str) -> Result<Vec<Token>, LexerError> {
    Lexer::new(source, file_path).tokenize()
}

/// デバッグ用：トークンストリームを文字列として出力
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::inspect)
        .collect::<Vec<_>>()
        .join("\n")
}
