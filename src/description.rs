//! User-supplied chain descriptions
//!
//! A description labels one fluent chain and is rendered as the `[bracketed]`
//! prefix of every failure message the chain produces.

use std::fmt;

/// Label attached to a fluent chain via `described_as`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    text: String,
}

impl Description {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
