//! 算術演算子

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lexer::TokenKind;

/// 5つの算術演算子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Sum,
    Sub,
    Mult,
    Div,
    Mod,
}

impl Operator {
    /// 演算子トークンから対応する演算子を得る
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Operator::Sum),
            TokenKind::Minus => Some(Operator::Sub),
            TokenKind::Star => Some(Operator::Mult),
            TokenKind::Slash => Some(Operator::Div),
            TokenKind::Percent => Some(Operator::Mod),
            _ => None,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Operator::Sum => "+",
            Operator::Sub => "-",
            Operator::Mult => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}
