//! Rill Language Front End Library
//!
//! This library provides the lexer, the typed value evaluator and the
//! function-declaration parser of the Rill language.

pub mod ast;
pub mod compiler;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod value;

// Re-export commonly used types
pub use ast::Function;
pub use compiler::{CompilationPipeline, CompilationState};
pub use error::{RillError, RillResult};
pub use lexer::{Lexer, Location, Token, TokenKind};
pub use parser::{ParseError, ParseResult, Parser};
pub use value::{evaluate, Expression, Operator, Value, ValueType};
