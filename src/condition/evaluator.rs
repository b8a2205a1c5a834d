//! Stack machine for postfix condition programs

use super::error::EvalError;
use super::instruction::Instruction;

/// Run a postfix program, testing each word with `word_test`
///
/// Every `PushWord` invokes the predicate exactly once; `and`/`or` never
/// short-circuit.
pub fn evaluate<F>(program: &[Instruction], mut word_test: F) -> Result<bool, EvalError>
where
    F: FnMut(&str) -> bool,
{
    let mut stack: Vec<bool> = Vec::with_capacity(program.len());

    for (index, instruction) in program.iter().enumerate() {
        match instruction {
            Instruction::PushWord(word) => {
                let value = word_test(word);
                log::trace!("word '{}' -> {}", word, value);
                stack.push(value);
            }
            Instruction::OpNot => {
                let value = stack.pop().ok_or(EvalError::StackUnderflow { index })?;
                stack.push(!value);
            }
            Instruction::OpAnd | Instruction::OpOr => {
                let right = stack.pop().ok_or(EvalError::StackUnderflow { index })?;
                let left = stack.pop().ok_or(EvalError::StackUnderflow { index })?;
                stack.push(if *instruction == Instruction::OpAnd {
                    left & right
                } else {
                    left | right
                });
            }
        }
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        rest => Err(EvalError::MalformedResult {
            remaining: rest.len(),
        }),
    }
}
