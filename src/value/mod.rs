//! 値モデル、算術演算子、2項式の評価器

mod expression;
mod operator;
#[allow(clippy::module_inception)]
mod value;

pub use expression::{evaluate, Expression};
pub use operator::Operator;
pub use value::{Value, ValueType};
