//! Infix-to-postfix conversion and postfix evaluation
//!
//! The classic two-stack pipeline: a shunting-yard pass turns the infix
//! expression into space-separated postfix tokens, then an operand stack folds
//! the postfix form into a value. `^` is right-associative; everything else is
//! left-associative.

use crate::error::{AlgolabError, Result};
use crate::expr::tokens::{is_balanced, tokenize, Operator, Token};

/// Result of evaluating an infix expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The expression in space-separated postfix notation
    pub postfix: String,
    /// The evaluated integer value
    pub value: i64,
}

/// Convert an infix expression to space-separated postfix notation
///
/// # Examples
///
/// ```rust
/// use algolab::expr::infix_to_postfix;
///
/// let postfix = infix_to_postfix("3 + 5 * (2 - 8)")?;
/// assert_eq!(postfix, "3 5 2 8 - * +");
/// # Ok::<(), algolab::AlgolabError>(())
/// ```
pub fn infix_to_postfix(expression: &str) -> Result<String> {
    let tokens = tokenize(expression)?;
    let mut output: Vec<String> = Vec::new();
    let mut ops: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(n) => output.push(n.to_string()),
            Token::Open(_) => ops.push(token),
            Token::Close(kind) => {
                // Pop operators until this bracket's opener surfaces
                loop {
                    match ops.pop() {
                        Some(Token::Op(op)) => output.push(op.to_string()),
                        Some(Token::Open(open)) if open == kind => break,
                        Some(Token::Open(_)) | None => {
                            return Err(AlgolabError::invalid_expression(
                                "mismatched brackets",
                            ));
                        }
                        Some(_) => unreachable!("only operators and openers are stacked"),
                    }
                }
            }
            Token::Op(op) => {
                // `^` never pops the stack: right associativity
                if op != Operator::Pow {
                    while let Some(Token::Op(top)) = ops.last() {
                        if top.precedence() < op.precedence() {
                            break;
                        }
                        output.push(top.to_string());
                        ops.pop();
                    }
                }
                ops.push(Token::Op(op));
            }
        }
    }

    while let Some(token) = ops.pop() {
        match token {
            Token::Op(op) => output.push(op.to_string()),
            Token::Open(_) => {
                return Err(AlgolabError::invalid_expression("unclosed bracket"));
            }
            _ => unreachable!("only operators and openers are stacked"),
        }
    }

    Ok(output.join(" "))
}

/// Evaluate a space-separated postfix expression
///
/// Operands push onto a stack; each operator pops its right then left operand.
/// Underflow and leftover operands are both rejected.
pub fn eval_postfix(postfix: &str) -> Result<i64> {
    let mut stack: Vec<i64> = Vec::new();

    for token in postfix.split_whitespace() {
        let op = match token {
            "+" => Operator::Add,
            "-" => Operator::Sub,
            "*" => Operator::Mul,
            "/" => Operator::Div,
            "^" => Operator::Pow,
            literal => {
                let value = literal.parse::<i64>().map_err(|_| {
                    AlgolabError::invalid_expression(format!(
                        "unrecognized postfix token '{}'",
                        literal
                    ))
                })?;
                stack.push(value);
                continue;
            }
        };
        let b = stack.pop();
        let a = stack.pop();
        match (a, b) {
            (Some(a), Some(b)) => stack.push(op.apply(a, b)?),
            _ => {
                return Err(AlgolabError::invalid_expression(
                    "operator with missing operands",
                ));
            }
        }
    }

    match (stack.pop(), stack.is_empty()) {
        (Some(value), true) => Ok(value),
        (None, _) => Err(AlgolabError::invalid_expression("empty expression")),
        (Some(_), false) => Err(AlgolabError::invalid_expression(
            "leftover operands after evaluation",
        )),
    }
}

/// Evaluate an infix expression end to end
///
/// Bracket balance is validated first; unbalanced input fails before any
/// conversion is attempted.
///
/// # Examples
///
/// ```rust
/// use algolab::expr::evaluate;
///
/// let eval = evaluate("(10 + 2) * 6 / 3")?;
/// assert_eq!(eval.postfix, "10 2 + 6 * 3 /");
/// assert_eq!(eval.value, 24);
/// # Ok::<(), algolab::AlgolabError>(())
/// ```
pub fn evaluate(expression: &str) -> Result<Evaluation> {
    if !is_balanced(expression) {
        return Err(AlgolabError::invalid_expression("unbalanced brackets"));
    }
    let postfix = infix_to_postfix(expression)?;
    let value = eval_postfix(&postfix)?;
    Ok(Evaluation { postfix, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postfix_simple_precedence() {
        assert_eq!(infix_to_postfix("3 + 5 * (2 - 8)").unwrap(), "3 5 2 8 - * +");
    }

    #[test]
    fn test_postfix_power_and_division() {
        assert_eq!(
            infix_to_postfix("7 + (6 * 5^2 + 3) - (4 / 2)").unwrap(),
            "7 6 5 2 ^ * 3 + + 4 2 / -"
        );
    }

    #[test]
    fn test_postfix_left_associative_chain() {
        assert_eq!(infix_to_postfix("(10 + 2) * 6 / 3").unwrap(), "10 2 + 6 * 3 /");
    }

    #[test]
    fn test_postfix_right_associative_power() {
        // 2^3^2 groups as 2^(3^2)
        assert_eq!(infix_to_postfix("2^3^2").unwrap(), "2 3 2 ^ ^");
        assert_eq!(eval_postfix("2 3 2 ^ ^").unwrap(), 512);
    }

    #[test]
    fn test_eval_postfix_values() {
        assert_eq!(eval_postfix("3 5 2 8 - * +").unwrap(), -27);
        assert_eq!(eval_postfix("7 6 5 2 ^ * 3 + + 4 2 / -").unwrap(), 158);
        assert_eq!(eval_postfix("10 2 + 6 * 3 /").unwrap(), 24);
    }

    #[test]
    fn test_eval_postfix_malformed() {
        assert!(eval_postfix("").is_err());
        assert!(eval_postfix("+").is_err()); // underflow
        assert!(eval_postfix("1 2").is_err()); // leftover operand
        assert!(eval_postfix("1 2 &").is_err()); // unknown token
    }

    #[test]
    fn test_evaluate_pipeline() {
        let eval = evaluate("3 + 5 * (2 - 8)").unwrap();
        assert_eq!(eval.postfix, "3 5 2 8 - * +");
        assert_eq!(eval.value, -27);
    }

    #[test]
    fn test_evaluate_rejects_unbalanced() {
        assert!(evaluate("(2 + 3)) * ((4 - 1)").is_err());
        assert!(evaluate("[2 + 3) * (4 - (5 * 6))]").is_err());
    }

    #[test]
    fn test_evaluate_mixed_brackets() {
        let eval = evaluate("{[2 + 3] * (4 - 1)}").unwrap();
        assert_eq!(eval.value, 15);
    }

    #[test]
    fn test_division_by_zero_propagates() {
        assert_eq!(evaluate("1 / (2 - 2)"), Err(AlgolabError::DivisionByZero));
    }
}
