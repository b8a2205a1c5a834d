// SPDX-License-Identifier: MIT

mod loader;
mod schema;

pub use loader::{ConfigLoader, CASE_SENSITIVE_ENV, CONFIG_ENV};
pub use schema::{AppConfig, ErrorPolicy, MatchConfig, MatchMode};
