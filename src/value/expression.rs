//! 二項式の評価
//!
//! 式は2つのオペランドと1つの演算子からなり、一度評価されて捨てられる。
//! 両オペランドは同じ型でなければならず、結果の型はオペランドの型と同じになる。

use serde::{Deserialize, Serialize};
use std::fmt;

use super::operator::Operator;
use super::value::Value;
use crate::error::EvalError;

/// 評価要求 `operand {operator} operand`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub operator: Operator,
    pub operands: Vec<Value>,
}

impl Expression {
    pub fn new(operator: Operator, left: Value, right: Value) -> Self {
        Self {
            operator,
            operands: vec![left, right],
        }
    }

    /// オペランド数を検査せずに作成（評価時に検査される）
    pub fn with_operands(operator: Operator, operands: Vec<Value>) -> Self {
        Self { operator, operands }
    }

    /// 式を評価する
    pub fn evaluate(&self) -> Result<Value, EvalError> {
        match self.operands.as_slice() {
            [left, right] => evaluate(self.operator, left, right),
            operands => Err(EvalError::OperandCount {
                operator: self.operator.to_string(),
                found: operands.len(),
            }),
        }
    }

    /// `with_type` が真なら各オペランドに型名を付けて表示
    pub fn to_display_string(&self, with_type: bool) -> String {
        self.operands
            .iter()
            .map(|operand| operand.to_display_string(with_type))
            .collect::<Vec<_>>()
            .join(&format!(" {} ", self.operator))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string(false))
    }
}

/// 2つの値に演算子を適用する
pub fn evaluate(operator: Operator, left: &Value, right: &Value) -> Result<Value, EvalError> {
    let describe = || Expression::new(operator, left.clone(), right.clone()).to_display_string(true);

    if left.value_type() != right.value_type() {
        return Err(EvalError::TypeMismatch {
            operator: operator.to_string(),
            expression: describe(),
        });
    }

    let invalid_operands = || EvalError::InvalidOperands {
        operator: operator.to_string(),
        left: left.display_with_type(),
        right: right.display_with_type(),
    };
    let overflow = || EvalError::Overflow {
        expression: describe(),
    };
    let division_by_zero = || EvalError::DivisionByZero {
        expression: describe(),
    };

    use Value::{Char, Float, Int, Ptr, Str};

    match operator {
        Operator::Sum => match (left, right) {
            (Int(a), Int(b)) => a.checked_add(*b).map(Int).ok_or_else(overflow),
            (Float(a), Float(b)) => Ok(Float(a + b)),
            (Ptr(a), Ptr(b)) => Ok(Ptr(a.wrapping_add(*b))),
            (Str(a), Str(b)) => Ok(Str(format!("{a}{b}"))),
            _ => Err(invalid_operands()),
        },
        Operator::Sub => match (left, right) {
            (Int(a), Int(b)) => a.checked_sub(*b).map(Int).ok_or_else(overflow),
            (Float(a), Float(b)) => Ok(Float(a - b)),
            (Ptr(a), Ptr(b)) => Ok(Ptr(a.wrapping_sub(*b))),
            _ => Err(invalid_operands()),
        },
        Operator::Mult => match (left, right) {
            (Int(a), Int(b)) => a.checked_mul(*b).map(Int).ok_or_else(overflow),
            (Float(a), Float(b)) => Ok(Float(a * b)),
            (Ptr(a), Ptr(b)) => Ok(Ptr(a.wrapping_mul(*b))),
            (Char(_), _) => Err(EvalError::Forbidden("Cannot multiply characters")),
            (Str(_), _) => Err(EvalError::Forbidden("Cannot multiply strings")),
            _ => Err(invalid_operands()),
        },
        Operator::Div => match (left, right) {
            (Int(_), Int(0)) | (Ptr(_), Ptr(0)) => Err(division_by_zero()),
            (Float(_), Float(b)) if *b == 0.0 => Err(division_by_zero()),
            (Int(a), Int(b)) => a.checked_div(*b).map(Int).ok_or_else(overflow),
            (Float(a), Float(b)) => Ok(Float(a / b)),
            (Ptr(a), Ptr(b)) => Ok(Ptr(a / b)),
            (Char(_), _) => Err(EvalError::Forbidden("Cannot divide characters")),
            (Str(_), _) => Err(EvalError::Forbidden("Cannot divide strings")),
            _ => Err(invalid_operands()),
        },
        Operator::Mod => match (left, right) {
            (Int(_), Int(0)) => Err(division_by_zero()),
            (Int(a), Int(b)) => a.checked_rem(*b).map(Int).ok_or_else(overflow),
            (Float(_), _) => Err(EvalError::Forbidden("Floats have no modulo")),
            (Ptr(_), _) => Err(EvalError::Forbidden("Pointers have no modulo")),
            (Char(_), _) => Err(EvalError::Forbidden("Cannot take the modulo of characters")),
            (Str(_), _) => Err(EvalError::Forbidden("Cannot take the modulo of strings")),
            _ => Err(invalid_operands()),
        },
    }
}
