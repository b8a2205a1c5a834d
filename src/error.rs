// SPDX-License-Identifier: MIT

//! Typed error handling for wordcond-rs

use crate::condition::ConditionError;
use thiserror::Error;

/// Top-level error type for wordcond-rs
#[derive(Debug, Error)]
pub enum WordcondError {
    /// Condition failed to tokenize, parse or evaluate
    #[error(transparent)]
    Condition(#[from] ConditionError),

    /// Configuration errors (bad env values, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl WordcondError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<crate::condition::EvalError> for WordcondError {
    fn from(err: crate::condition::EvalError) -> Self {
        Self::Condition(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::EvalError;

    #[test]
    fn test_config_error_display() {
        let err = WordcondError::config("bad value");
        assert_eq!(err.to_string(), "Configuration error: bad value");
    }

    #[test]
    fn test_from_eval_error() {
        let err: WordcondError = EvalError::StackUnderflow { index: 3 }.into();
        assert!(matches!(
            err,
            WordcondError::Condition(ConditionError::Eval(EvalError::StackUnderflow { index: 3 }))
        ));
    }
}
