// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Prompt configuration.

/// Configuration for interactive prompts.
///
/// Controls how the question is laid out and how long a prompt keeps
/// asking before giving up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    /// Print the input marker on the same line as the question.
    pub one_line: bool,
    /// Marker printed right before the user types.
    pub marker: String,
    /// Give up after this many invalid answers (None = ask forever).
    pub max_attempts: Option<u32>,
    /// Style warnings with terminal colors.
    pub colors: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            one_line: false,
            marker: "> ".to_string(),
            max_attempts: None,
            colors: false,
        }
    }
}

impl PromptConfig {
    /// Create the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Config for scripted input: plain output, bounded retries.
    pub fn scripted(max_attempts: u32) -> Self {
        Self {
            max_attempts: Some(max_attempts),
            ..Self::default()
        }
    }

    /// Put the marker on the question's line.
    pub fn one_line(mut self, one_line: bool) -> Self {
        self.one_line = one_line;
        self
    }

    /// Set the input marker.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Limit the number of attempts.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Enable or disable colored warnings.
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Check whether `attempts` answers have used up the budget.
    pub fn exhausted(&self, attempts: u32) -> bool {
        self.max_attempts.is_some_and(|max| attempts >= max)
    }
}
