//! レキサーモジュール
//!
//! Rillのソースコードを、ファイル・行・列の位置情報付きトークン列に変換します。
//! 引用符で囲まれたリテラルは、開き引用符・中身・閉じ引用符の3トークンに分割されます。

#[allow(clippy::module_inception)]
mod lexer;
mod literal_parser;
mod location;
mod token;

pub use lexer::{format_tokens, tokenize, Lexer};
pub use location::Location;
pub use token::{Keyword, Token, TokenKind};
