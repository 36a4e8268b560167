//! Arithmetic expression evaluation via two stack passes
//!
//! A shunting-yard conversion from infix to postfix followed by an
//! operand-stack fold. See [`evaluate`] for the end-to-end pipeline.

pub mod eval;
pub mod tokens;

pub use eval::{eval_postfix, evaluate, infix_to_postfix, Evaluation};
pub use tokens::{is_balanced, tokenize, Bracket, Operator, Token};
