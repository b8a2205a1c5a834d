// SPDX-License-Identifier: MIT

//! Postfix program for condition expressions

use serde::Serialize;

/// One step of a postfix (reverse-Polish) program
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Instruction {
    /// Test a word with the predicate and push the result
    PushWord(String),
    /// Pop right, pop left, push `left && right`
    #[serde(rename = "and")]
    OpAnd,
    /// Pop right, pop left, push `left || right`
    #[serde(rename = "or")]
    OpOr,
    /// Pop one, push its negation
    #[serde(rename = "not")]
    OpNot,
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::PushWord(w) => write!(f, "{}", w),
            Instruction::OpAnd => write!(f, "and"),
            Instruction::OpOr => write!(f, "or"),
            Instruction::OpNot => write!(f, "not"),
        }
    }
}
