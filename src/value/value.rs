//! 値と型の定義

use serde::{Deserialize, Serialize};
use std::fmt;

/// 式や宣言で使えるスカラー型の閉じた集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Int,
    Float,
    Str,
    Char,
    Ptr,
    Bool,
}

impl ValueType {
    pub const ALL: [ValueType; 6] = [
        ValueType::Int,
        ValueType::Float,
        ValueType::Str,
        ValueType::Char,
        ValueType::Ptr,
        ValueType::Bool,
    ];

    /// ソース上の型名から型を引く（`"int"` → `Int` など）
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.name() == name)
    }

    /// ソース上で使われる型名
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Str => "str",
            ValueType::Char => "char",
            ValueType::Ptr => "ptr",
            ValueType::Bool => "bool",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 評価可能なスカラー値
///
/// 値は常に複製して受け渡し、参照で共有しない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Char(char),
    /// アドレス値
    Ptr(usize),
    Bool(bool),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Str(_) => ValueType::Str,
            Value::Char(_) => ValueType::Char,
            Value::Ptr(_) => ValueType::Ptr,
            Value::Bool(_) => ValueType::Bool,
        }
    }

    /// 型名付きの表示（例: `3(int)`）
    pub fn display_with_type(&self) -> String {
        format!("{}({})", self, self.value_type())
    }

    /// `with_type` が真なら型名付きで表示
    pub fn to_display_string(&self, with_type: bool) -> String {
        if with_type {
            self.display_with_type()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:.2}f"),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::Char(c) => write!(f, "{c}"),
            Value::Ptr(address) => write!(f, "{address:x}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Char(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}
