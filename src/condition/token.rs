// SPDX-License-Identifier: MIT

//! Tokenizer for condition strings

use super::error::LexError;

/// A lexical token of a condition string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Any other run of characters, original casing preserved
    Word(String),
    And,
    Or,
    Not,
    LParen,
    RParen,
}

impl Token {
    /// Classify a run of non-separator characters
    fn classify(run: &str) -> Self {
        match run.to_lowercase().as_str() {
            "and" => Token::And,
            "or" => Token::Or,
            "not" => Token::Not,
            _ => Token::Word(run.to_string()),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Word(w) => write!(f, "{}", w),
            Token::And => write!(f, "and"),
            Token::Or => write!(f, "or"),
            Token::Not => write!(f, "not"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// Split a condition string into tokens
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut run_start: Option<usize> = None;

    for (offset, ch) in input.char_indices() {
        let is_separator = ch.is_whitespace() || ch == '(' || ch == ')';
        if is_separator {
            if let Some(start) = run_start.take() {
                tokens.push(Token::classify(&input[start..offset]));
            }
            match ch {
                '(' => tokens.push(Token::LParen),
                ')' => tokens.push(Token::RParen),
                _ => {}
            }
        } else if ch.is_control() {
            return Err(LexError::ControlCharacter { offset, ch });
        } else if run_start.is_none() {
            run_start = Some(offset);
        }
    }

    if let Some(start) = run_start {
        tokens.push(Token::classify(&input[start..]));
    }

    Ok(tokens)
}
