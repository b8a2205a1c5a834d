// SPDX-License-Identifier: MIT

//! A condition compiled once and evaluated many times

use serde::Serialize;
use std::str::FromStr;

use super::error::{ConditionError, EvalError};
use super::evaluator::evaluate;
use super::instruction::Instruction;
use super::parser::compile;

/// A compiled condition together with the text it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condition {
    source: String,
    program: Vec<Instruction>,
}

impl Condition {
    /// Tokenize and parse a condition string
    pub fn compile(source: &str) -> Result<Self, ConditionError> {
        let program = compile(source)?;
        Ok(Self {
            source: source.to_string(),
            program,
        })
    }

    /// Evaluate against a word predicate, with a fresh value stack
    pub fn evaluate<F>(&self, word_test: F) -> Result<bool, EvalError>
    where
        F: FnMut(&str) -> bool,
    {
        evaluate(&self.program, word_test)
    }

    /// The original condition string
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The postfix program
    pub fn instructions(&self) -> &[Instruction] {
        &self.program
    }

    /// The postfix program as pretty-printed JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.program)
    }

    /// Word operands, in the order the predicate will see them
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.program.iter().filter_map(|i| match i {
            Instruction::PushWord(w) => Some(w.as_str()),
            _ => None,
        })
    }
}

impl FromStr for Condition {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, instruction) in self.program.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", instruction)?;
        }
        Ok(())
    }
}

/// Compile and evaluate a condition in one step
pub fn evaluate_expression<F>(expression: &str, word_test: F) -> Result<bool, ConditionError>
where
    F: FnMut(&str) -> bool,
{
    let program = compile(expression)?;
    Ok(evaluate(&program, word_test)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::error::{SyntaxError, SyntaxErrorKind};

    #[test]
    fn test_condition_display() {
        let cond = Condition::compile("(apple or orange) and not banana").unwrap();
        assert_eq!(cond.to_string(), "apple orange or banana not and");
        assert_eq!(cond.source(), "(apple or orange) and not banana");
    }

    #[test]
    fn test_condition_words() {
        let cond: Condition = "Apple and (banana or not Cherry)".parse().unwrap();
        assert_eq!(cond.words().collect::<Vec<_>>(), vec!["Apple", "banana", "Cherry"]);
    }

    #[test]
    fn test_condition_to_json() {
        let cond = Condition::compile("not (apple or kiwi)").unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&cond.to_json_pretty().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"push_word": "apple"}, {"push_word": "kiwi"}, "or", "not"])
        );
    }

    #[test]
    fn test_condition_reuse() {
        let cond = Condition::compile("apple and not kiwi").unwrap();
        let texts = ["apple pie", "kiwi and apple", "banana"];
        let results: Vec<bool> = texts
            .iter()
            .map(|t| cond.evaluate(|w| t.contains(w)).unwrap())
            .collect();
        assert_eq!(results, vec![true, false, false]);
    }

    #[test]
    fn test_condition_from_str_error() {
        let result: Result<Condition, _> = "a and b)".parse();
        assert_eq!(
            result.unwrap_err(),
            ConditionError::Syntax(SyntaxError::new(SyntaxErrorKind::UnmatchedCloseParen, 3))
        );
    }

    #[test]
    fn test_evaluate_expression() {
        let text = "apple orange";
        assert_eq!(
            evaluate_expression("(apple and orange)", |w| text.contains(w)),
            Ok(true)
        );
        assert_eq!(
            evaluate_expression("not orange", |w| text.contains(w)),
            Ok(false)
        );
        assert!(evaluate_expression("apple or", |w| text.contains(w)).is_err());
    }

    #[test]
    fn test_compile_error_stops_evaluation() {
        let mut calls = 0;
        let result = evaluate_expression("apple and (banana", |_| {
            calls += 1;
            true
        });
        assert!(result.is_err());
        assert_eq!(calls, 0);
    }
}
