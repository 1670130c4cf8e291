// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Dynamic prompt builder for the REPL.

use super::SessionState;
use console::style;

/// Builder for the REPL prompt.
pub struct PromptBuilder {
    /// Whether to use colors.
    use_colors: bool,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    /// Create a new prompt builder.
    pub fn new() -> Self {
        Self {
            use_colors: true,
        }
    }

    /// Disable colors.
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Build the prompt string.
    pub fn build(&self, state: &SessionState) -> String {
        let mut prompt = String::new();

        if self.use_colors {
            prompt.push_str(&format!("{}", style("typeline").cyan().bold()));
        } else {
            prompt.push_str("typeline");
        }

        if let Some(kind) = state.last_kind {
            if self.use_colors {
                prompt.push_str(&format!(" [{}]", style(kind).yellow()));
            } else {
                prompt.push_str(&format!(" [{}]", kind));
            }
        }

        prompt.push_str("> ");
        prompt
    }

    /// Build an error indicator.
    pub fn error_indicator(&self) -> String {
        if self.use_colors {
            format!("{}", style("✗").red().bold())
        } else {
            "ERROR".to_string()
        }
    }
}
