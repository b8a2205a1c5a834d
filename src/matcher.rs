//! Word predicates bound to a text
//!
//! Conditions only know about words; this module decides what it means
//! for a word to be "in" a text.

use std::borrow::Cow;
use std::collections::HashSet;
use std::io::{BufRead, Write};

use crate::condition::{Condition, EvalError};
use crate::config::{ErrorPolicy, MatchConfig, MatchMode};
use crate::error::WordcondError;

/// Builds word predicates from a [`MatchConfig`]
#[derive(Debug, Clone, Default)]
pub struct TextMatcher {
    config: MatchConfig,
}

impl TextMatcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Normalize a text once so many words can be tested against it
    pub fn bind<'a>(&self, text: &'a str) -> BoundText<'a> {
        let fold_case = !self.config.case_sensitive;
        match self.config.mode {
            MatchMode::Substring => BoundText::Substring {
                text: normalize(text, fold_case),
                fold_case,
            },
            MatchMode::Token => BoundText::Tokens {
                tokens: split_tokens(text)
                    .map(|t| normalize(t, fold_case).into_owned())
                    .collect(),
                fold_case,
            },
        }
    }

    /// Evaluate a compiled condition against one text
    pub fn matches(&self, condition: &Condition, text: &str) -> Result<bool, EvalError> {
        let bound = self.bind(text);
        let result = condition.evaluate(|word| bound.contains(word))?;
        log::trace!("'{}' on {:?} -> {}", condition.source(), text, result);
        Ok(result)
    }

    /// Copy to `out` every line of `input` that satisfies `source`
    ///
    /// The condition is compiled once. Lines that are not valid UTF-8 are
    /// decoded lossily. Returns the number of lines written.
    pub fn filter_lines<R: BufRead, W: Write>(
        &self,
        source: &str,
        input: R,
        mut out: W,
        policy: ErrorPolicy,
    ) -> Result<usize, WordcondError> {
        let condition = match policy.apply(Condition::compile(source).map(Some), source)? {
            Some(condition) => condition,
            None => return Ok(0),
        };

        let mut matched = 0;
        for line in input.split(b'\n') {
            let line = line?;
            let bytes = line.strip_suffix(b"\r").unwrap_or(&line[..]);
            let text = String::from_utf8_lossy(bytes);
            if policy.apply(self.matches(&condition, &text), source)? {
                matched += 1;
                writeln!(out, "{}", text)?;
            }
        }

        log::info!("{} lines matched '{}'", matched, source);
        Ok(matched)
    }
}

/// A text prepared for word lookups
#[derive(Debug, Clone)]
pub enum BoundText<'a> {
    Substring { text: Cow<'a, str>, fold_case: bool },
    Tokens { tokens: HashSet<String>, fold_case: bool },
}

impl BoundText<'_> {
    /// Whether `word` is present in the bound text
    pub fn contains(&self, word: &str) -> bool {
        match self {
            BoundText::Substring { text, fold_case } => {
                let word = normalize(word, *fold_case);
                text.contains(&*word)
            }
            BoundText::Tokens { tokens, fold_case } => {
                let word = normalize(word, *fold_case);
                tokens.contains(&*word)
            }
        }
    }
}

fn normalize(s: &str, fold_case: bool) -> Cow<'_, str> {
    if fold_case {
        Cow::Owned(s.to_lowercase())
    } else {
        Cow::Borrowed(s)
    }
}

fn split_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .filter(|t| !t.is_empty())
}
