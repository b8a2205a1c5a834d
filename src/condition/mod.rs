// SPDX-License-Identifier: MIT

//! Boolean conditions over word tokens
//!
//! A condition combines words with `and`, `or`, `not` and parentheses:
//! - `apple`
//! - `(apple or orange) and banana`
//! - `not banana`
//!
//! Each word is tested with a caller-supplied predicate. Conditions are
//! tokenized, compiled to a postfix program with the shunting-yard
//! algorithm, and executed on a value stack.

mod compiled;
mod error;
mod evaluator;
mod instruction;
mod parser;
mod token;

pub use compiled::{evaluate_expression, Condition};
pub use error::{ConditionError, EvalError, LexError, SyntaxError, SyntaxErrorKind};
pub use evaluator::evaluate;
pub use instruction::Instruction;
pub use parser::{compile, parse};
pub use token::{tokenize, Token};
