// SPDX-License-Identifier: MIT

//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Top-level configuration file
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct AppConfig {
    /// How words are tested against a text
    #[serde(default)]
    pub matching: MatchConfig,
    /// What to do with a condition that fails to compile or evaluate
    #[serde(default)]
    pub on_error: ErrorPolicy,
}

/// Word matching options
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MatchConfig {
    #[serde(default)]
    pub mode: MatchMode,
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
}

fn default_case_sensitive() -> bool {
    true
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            mode: MatchMode::default(),
            case_sensitive: default_case_sensitive(),
        }
    }
}

/// How a word is found in a text
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The word occurs anywhere in the text (default)
    #[default]
    Substring,
    /// The word equals one of the text's whitespace/punctuation separated tokens
    Token,
}

/// Caller policy for malformed conditions
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Propagate the error (default)
    #[default]
    Fail,
    /// Log a warning and treat the text as not matching
    NoMatch,
}

impl ErrorPolicy {
    /// Map a condition result according to the policy
    ///
    /// Under `NoMatch` an error becomes `T::default()`: `false` for a
    /// match result, `None` for an optional compiled condition.
    pub fn apply<T: Default, E: std::fmt::Display>(
        self,
        result: Result<T, E>,
        source: &str,
    ) -> Result<T, E> {
        match (self, result) {
            (ErrorPolicy::NoMatch, Err(e)) => {
                log::warn!("Condition '{}' failed, treating as no match: {}", source, e);
                Ok(T::default())
            }
            (_, result) => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_policy_apply() {
        let err: Result<bool, String> = Err("unmatched '('".to_string());
        assert_eq!(ErrorPolicy::NoMatch.apply(err.clone(), "(a"), Ok(false));
        assert_eq!(ErrorPolicy::Fail.apply(err.clone(), "(a"), err);
        assert_eq!(ErrorPolicy::NoMatch.apply(Ok::<bool, String>(true), "a"), Ok(true));
    }

    #[test]
    fn test_error_policy_apply_option() {
        let err: Result<Option<u32>, String> = Err("empty expression".to_string());
        assert_eq!(ErrorPolicy::NoMatch.apply(err, ""), Ok(None));
        assert_eq!(ErrorPolicy::NoMatch.apply(Ok::<_, String>(Some(7)), "a"), Ok(Some(7)));
    }

    #[test]
    fn test_config_deserialize() {
        let yaml = r#"
            matching:
              mode: token
              case_sensitive: false
            on_error: no_match
        "#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.matching.mode, MatchMode::Token);
        assert!(!config.matching.case_sensitive);
        assert_eq!(config.on_error, ErrorPolicy::NoMatch);
    }

    #[test]
    fn test_config_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.matching.mode, MatchMode::Substring);
        assert!(config.matching.case_sensitive);
        assert_eq!(config.on_error, ErrorPolicy::Fail);
    }

    #[test]
    fn test_partial_matching_section() {
        let yaml = r#"
            matching:
              case_sensitive: false
        "#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.matching.mode, MatchMode::Substring);
        assert!(!config.matching.case_sensitive);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let yaml = "matching: { mode: regex }";
        assert!(serde_yaml::from_str::<AppConfig>(yaml).is_err());
    }
}
