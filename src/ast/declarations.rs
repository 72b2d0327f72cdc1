//! 宣言の定義

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::lexer::Token;
use crate::value::ValueType;

/// 関数宣言
///
/// 本体は文として解析せず、波括弧の間のトークン列をそのまま保持する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    /// 引数名と型（宣言順、名前は一意）
    pub arguments: IndexMap<String, ValueType>,
    pub return_type: Option<ValueType>,
    pub body_tokens: Vec<Token>,
    /// 関数名のトークン
    pub declaring_token: Token,
}

impl Function {
    pub fn new(declaring_token: Token) -> Self {
        Self {
            name: declaring_token.text.clone(),
            arguments: IndexMap::new(),
            return_type: None,
            body_tokens: Vec::new(),
            declaring_token,
        }
    }

    /// 宣言された引数の型（宣言順）
    pub fn argument_types(&self) -> Vec<ValueType> {
        self.arguments.values().copied().collect()
    }

    /// デバッグ用の表示
    pub fn inspect(&self) -> String {
        let arguments = self
            .arguments
            .iter()
            .map(|(name, ty)| format!("{name}: {ty}"))
            .collect::<Vec<_>>()
            .join(", ");
        let returns = self
            .return_type
            .map_or_else(|| "none".to_string(), |ty| ty.to_string());
        let body = self
            .body_tokens
            .iter()
            .map(Token::inspect)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{{ value: \"{}\", type: Function, arguments: [{}], returns: {}, body: [{}] }}",
            self.name, arguments, returns, body
        )
    }
}
