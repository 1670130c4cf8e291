// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Rendering of classification results.

use console::style;
use serde::Serialize;
use typeline::{classify, Kind, Token, Value};

/// One classified input, ready to print.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// The text as typed.
    pub input: &'a str,
    /// The classified token.
    pub token: Token,
}

impl<'a> Report<'a> {
    /// Classify `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            token: classify(input),
        }
    }

    /// Render as a small table: the primary kind, then one row per kind.
    ///
    /// Rows read `-` for kinds the primary kind never converts to and
    /// `(none)` for kinds it converts to but this value has no form in.
    pub fn render(&self, colors: bool) -> String {
        let primary = self.token.primary_kind();
        let mut out = format!(
            "{:?} -> {}",
            self.input,
            style(primary).cyan().bold().force_styling(colors)
        );

        for kind in Kind::ALL {
            let cell = match self.token.get_as(kind) {
                Some(value) => render_value(value),
                None if self.token.has_kind(kind) => "(none)".to_string(),
                None => "-".to_string(),
            };
            let marker = if kind == primary { "*" } else { " " };
            let row = format!("\n  {} {:<10} {}", marker, kind.name(), cell);
            if self.token.get_as(kind).is_some() {
                out.push_str(&row);
            } else {
                out.push_str(&style(row).dim().force_styling(colors).to_string());
            }
        }

        out
    }
}

/// Quote text-like values so empty strings and whitespace stay visible.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("{:?}", s),
        Value::Character(c) => format!("{:?}", c),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_integer() {
        let out = Report::new("0x41").render(false);
        assert!(out.starts_with("\"0x41\" -> Integer"));
        assert!(out.contains("* Integer    65"));
        assert!(out.contains("  Character  'A'"));
        assert!(out.contains("  String     \"65\""));
        assert!(out.contains("  Double     65.0"));
        assert!(!out.contains("\x1b["));
    }

    #[test]
    fn test_render_marks_unreachable_and_absent() {
        let out = Report::new("").render(false);
        assert!(out.contains("Character  (none)"));
        assert!(out.contains("Integer    -"));
        assert!(out.contains("Boolean    false"));
    }

    #[test]
    fn test_render_colors() {
        let out = Report::new("yes").render(true);
        assert!(out.contains("\x1b["));
    }

    #[test]
    fn test_json() {
        let json = serde_json::to_value(Report::new("2.5f")).unwrap();
        assert_eq!(json["input"], "2.5f");
        assert_eq!(json["token"]["primary"], "Float");
        assert_eq!(json["token"]["projections"]["Integer"]["value"], 2);
    }
}
