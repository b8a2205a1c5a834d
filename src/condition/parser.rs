//! Shunting-yard compiler from tokens to a postfix program
//!
//! Precedence, lowest first: `or`, `and`, `not`. Binary operators are
//! left-associative; `not` is a unary prefix operator.

use super::error::{ConditionError, SyntaxError, SyntaxErrorKind};
use super::instruction::Instruction;
use super::token::{tokenize, Token};

/// Operator waiting on the operator stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Or,
    And,
    Not,
    LParen,
}

impl Pending {
    fn precedence(self) -> u8 {
        match self {
            Pending::LParen => 0,
            Pending::Or => 1,
            Pending::And => 2,
            Pending::Not => 3,
        }
    }

    fn instruction(self) -> Option<Instruction> {
        match self {
            Pending::Or => Some(Instruction::OpOr),
            Pending::And => Some(Instruction::OpAnd),
            Pending::Not => Some(Instruction::OpNot),
            Pending::LParen => None,
        }
    }
}

/// Kind of the previously consumed token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prev {
    Start,
    Operand,
    Binary,
    Not,
    LParen,
}

/// Compile a condition string into a postfix program
pub fn compile(input: &str) -> Result<Vec<Instruction>, ConditionError> {
    let tokens = tokenize(input)?;
    let program = parse(&tokens)?;
    log::debug!(
        "Compiled condition '{}' into {} instructions",
        input,
        program.len()
    );
    Ok(program)
}

/// Convert a token sequence into a postfix program
pub fn parse(tokens: &[Token]) -> Result<Vec<Instruction>, SyntaxError> {
    if tokens.is_empty() {
        return Err(SyntaxError::new(SyntaxErrorKind::EmptyExpression, 0));
    }

    let mut output = Vec::with_capacity(tokens.len());
    // (operator, index of the token that pushed it)
    let mut ops: Vec<(Pending, usize)> = Vec::new();
    let mut prev = Prev::Start;

    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::Word(word) => {
                if prev == Prev::Operand {
                    return Err(SyntaxError::new(SyntaxErrorKind::MissingOperator, index));
                }
                output.push(Instruction::PushWord(word.clone()));
                prev = Prev::Operand;
            }
            Token::Not => {
                if prev == Prev::Operand {
                    return Err(SyntaxError::new(SyntaxErrorKind::MissingOperator, index));
                }
                ops.push((Pending::Not, index));
                prev = Prev::Not;
            }
            Token::And | Token::Or => {
                match prev {
                    Prev::Operand => {}
                    Prev::Binary => {
                        return Err(SyntaxError::new(
                            SyntaxErrorKind::ConsecutiveOperators,
                            index,
                        ))
                    }
                    Prev::Start | Prev::LParen | Prev::Not => {
                        return Err(SyntaxError::new(
                            SyntaxErrorKind::OperatorMissingOperand,
                            index,
                        ))
                    }
                }

                let incoming = if *token == Token::And {
                    Pending::And
                } else {
                    Pending::Or
                };
                while let Some(&(top, _)) = ops.last() {
                    if top == Pending::LParen || top.precedence() < incoming.precedence() {
                        break;
                    }
                    ops.pop();
                    output.extend(top.instruction());
                }
                ops.push((incoming, index));
                prev = Prev::Binary;
            }
            Token::LParen => {
                if prev == Prev::Operand {
                    return Err(SyntaxError::new(SyntaxErrorKind::MissingOperator, index));
                }
                ops.push((Pending::LParen, index));
                prev = Prev::LParen;
            }
            Token::RParen => {
                match prev {
                    Prev::Operand | Prev::Start => {}
                    Prev::LParen => {
                        return Err(SyntaxError::new(SyntaxErrorKind::EmptyExpression, index))
                    }
                    Prev::Binary | Prev::Not => {
                        return Err(SyntaxError::new(
                            SyntaxErrorKind::OperatorMissingOperand,
                            index - 1,
                        ))
                    }
                }

                loop {
                    match ops.pop() {
                        Some((Pending::LParen, _)) => break,
                        Some((op, _)) => output.extend(op.instruction()),
                        None => {
                            return Err(SyntaxError::new(
                                SyntaxErrorKind::UnmatchedCloseParen,
                                index,
                            ))
                        }
                    }
                }
                prev = Prev::Operand;
            }
        }
    }

    if matches!(prev, Prev::Binary | Prev::Not) {
        return Err(SyntaxError::new(
            SyntaxErrorKind::OperatorMissingOperand,
            tokens.len() - 1,
        ));
    }

    while let Some((op, index)) = ops.pop() {
        if op == Pending::LParen {
            return Err(SyntaxError::new(SyntaxErrorKind::UnmatchedOpenParen, index));
        }
        output.extend(op.instruction());
    }

    Ok(output)
}
