//! パーサーモジュール
//!
//! このモジュールはトークン列から関数宣言を認識する責任を持ちます。
//! 現在サポートしている構文は関数宣言だけです：
//!
//! ```rill
//! func add(x: int, y: int) -> int {
//!     ...
//! }
//! ```
//!
//! 本体は文として解析せず、波括弧の間のトークン列をそのまま `Function` に格納します。
//! 単独の二項式（`3 + 4` など）は `Parser::parse_expression` で式として取り出し、
//! `value` モジュールの評価器に渡します。

mod decl_parser;
mod expr_parser;
mod parser_impl;
mod type_parser;

// 公開API
pub use parser_impl::Parser;

use crate::error::ParserError;
pub type ParseError = ParserError;
pub type ParseResult<T> = Result<T, ParseError>;
