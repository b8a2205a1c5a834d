// SPDX-License-Identifier: MIT

//! Errors raised while compiling or evaluating a condition

use thiserror::Error;

/// Unrecognized input while tokenizing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A non-whitespace control character (byte offset into the input)
    #[error("control character {ch:?} at offset {offset}")]
    ControlCharacter { offset: usize, ch: char },
}

/// Why a token sequence is not a well-formed condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    UnmatchedCloseParen,
    UnmatchedOpenParen,
    OperatorMissingOperand,
    ConsecutiveOperators,
    EmptyExpression,
    /// Two operands side by side with no `and`/`or` between them
    MissingOperator,
}

impl std::fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyntaxErrorKind::UnmatchedCloseParen => write!(f, "unmatched ')'"),
            SyntaxErrorKind::UnmatchedOpenParen => write!(f, "unmatched '('"),
            SyntaxErrorKind::OperatorMissingOperand => write!(f, "operator is missing an operand"),
            SyntaxErrorKind::ConsecutiveOperators => write!(f, "consecutive operators"),
            SyntaxErrorKind::EmptyExpression => write!(f, "empty expression"),
            SyntaxErrorKind::MissingOperator => write!(f, "missing 'and'/'or' between operands"),
        }
    }
}

/// Malformed expression, with the index of the offending token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at token {position}: {reason}")]
pub struct SyntaxError {
    pub reason: SyntaxErrorKind,
    pub position: usize,
}

impl SyntaxError {
    pub fn new(reason: SyntaxErrorKind, position: usize) -> Self {
        Self { reason, position }
    }
}

/// Failure while executing a postfix program
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// An operator found fewer operands than it needs
    #[error("stack underflow at instruction {index}")]
    StackUnderflow { index: usize },

    /// The program did not leave exactly one value behind
    #[error("malformed result: {remaining} values left on the stack")]
    MalformedResult { remaining: usize },
}

/// Any error from the condition pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display() {
        let err = SyntaxError::new(SyntaxErrorKind::UnmatchedCloseParen, 4);
        assert_eq!(err.to_string(), "syntax error at token 4: unmatched ')'");
    }

    #[test]
    fn test_condition_error_from() {
        let err: ConditionError = EvalError::MalformedResult { remaining: 2 }.into();
        assert_eq!(
            err.to_string(),
            "evaluation error: malformed result: 2 values left on the stack"
        );
        assert!(matches!(err, ConditionError::Eval(_)));
    }
}
