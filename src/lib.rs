//! Boolean word conditions (`and`, `or`, `not`, parentheses) evaluated
//! against texts.
//!
//! ```
//! use wordcond_rs::condition::Condition;
//!
//! let cond = Condition::compile("(apple or orange) and not kiwi").unwrap();
//! let text = "apple pie";
//! assert!(cond.evaluate(|w| text.contains(w)).unwrap());
//! ```

pub mod condition;
pub mod config;
pub mod error;
pub mod matcher;
