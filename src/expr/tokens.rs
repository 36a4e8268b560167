//! Tokens and lexing for infix arithmetic expressions
//!
//! Expressions use integer literals, the five binary operators
//! `+ - * / ^`, and three interchangeable bracket kinds `() [] {}`.
//! Whitespace is insignificant.

use crate::error::{AlgolabError, Result};
use std::fmt;

/// Bracket kind; open/close pairs must match by kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// `(` / `)`
    Round,
    /// `[` / `]`
    Square,
    /// `{` / `}`
    Curly,
}

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/` (truncating integer division)
    Div,
    /// `^` (right-associative exponentiation)
    Pow,
}

impl Operator {
    /// Binding strength: `^` over `*` `/` over `+` `-`
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Pow => 3,
            Self::Mul | Self::Div => 2,
            Self::Add | Self::Sub => 1,
        }
    }

    /// Apply the operator to two operands with overflow checking
    pub fn apply(&self, a: i64, b: i64) -> Result<i64> {
        let result = match self {
            Self::Add => a.checked_add(b),
            Self::Sub => a.checked_sub(b),
            Self::Mul => a.checked_mul(b),
            Self::Div => {
                if b == 0 {
                    return Err(AlgolabError::DivisionByZero);
                }
                a.checked_div(b)
            }
            Self::Pow => {
                let exp = u32::try_from(b).map_err(|_| {
                    AlgolabError::invalid_expression(format!("negative exponent: {}", b))
                })?;
                a.checked_pow(exp)
            }
        };
        result.ok_or_else(|| AlgolabError::invalid_expression("arithmetic overflow"))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        };
        write!(f, "{}", symbol)
    }
}

/// One lexed token of an infix expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Non-negative integer literal
    Number(i64),
    /// Binary operator
    Op(Operator),
    /// Opening bracket
    Open(Bracket),
    /// Closing bracket
    Close(Bracket),
}

/// Lex an infix expression into tokens
///
/// Multi-digit literals are read greedily; any character that is not a digit,
/// operator, bracket, or whitespace is rejected.
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = expression.chars().peekable();

    while let Some(&ch) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            '0'..='9' => {
                let mut value: i64 = 0;
                while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(i64::from(digit)))
                        .ok_or_else(|| {
                            AlgolabError::invalid_expression("integer literal overflows i64")
                        })?;
                    chars.next();
                }
                tokens.push(Token::Number(value));
            }
            '+' => { chars.next(); tokens.push(Token::Op(Operator::Add)); }
            '-' => { chars.next(); tokens.push(Token::Op(Operator::Sub)); }
            '*' => { chars.next(); tokens.push(Token::Op(Operator::Mul)); }
            '/' => { chars.next(); tokens.push(Token::Op(Operator::Div)); }
            '^' => { chars.next(); tokens.push(Token::Op(Operator::Pow)); }
            '(' => { chars.next(); tokens.push(Token::Open(Bracket::Round)); }
            '[' => { chars.next(); tokens.push(Token::Open(Bracket::Square)); }
            '{' => { chars.next(); tokens.push(Token::Open(Bracket::Curly)); }
            ')' => { chars.next(); tokens.push(Token::Close(Bracket::Round)); }
            ']' => { chars.next(); tokens.push(Token::Close(Bracket::Square)); }
            '}' => { chars.next(); tokens.push(Token::Close(Bracket::Curly)); }
            other => {
                return Err(AlgolabError::invalid_expression(format!(
                    "unexpected character '{}'",
                    other
                )));
            }
        }
    }

    Ok(tokens)
}

/// Check that all brackets in `expression` nest and match by kind
///
/// Only brackets are inspected; every other character is skipped.
pub fn is_balanced(expression: &str) -> bool {
    let mut stack = Vec::new();
    for ch in expression.chars() {
        let kind = match ch {
            '(' | ')' => Bracket::Round,
            '[' | ']' => Bracket::Square,
            '{' | '}' => Bracket::Curly,
            _ => continue,
        };
        if matches!(ch, '(' | '[' | '{') {
            stack.push(kind);
        } else if stack.pop() != Some(kind) {
            return false;
        }
    }
    stack.is_empty()
}
