// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Help and quit commands.

use super::{Command, CommandRegistry, Output, COMMAND_PREFIX};
use crate::repl::SessionState;
use console::style;

/// Help command - shows available commands.
pub struct HelpCommand {
    text: String,
}

impl HelpCommand {
    /// Summarize every command in `registry`, plus help itself.
    pub fn new(registry: &CommandRegistry) -> Self {
        let mut text = format!(
            "{}\n\nType any text to see its inferred kind and every conversion.\n",
            style("TYPELINE REPL").bold().underlined()
        );

        let mut entries: Vec<(String, &str)> = registry
            .commands()
            .into_iter()
            .map(|cmd| (usage(cmd.name(), cmd.aliases()), cmd.description()))
            .collect();
        entries.push((usage("help", &["h", "?"]), "Show this help"));
        entries.sort();

        for (usage, description) in entries {
            text.push_str(&format!(
                "\n  {} - {}",
                style(format!("{:<20}", usage)).green(),
                description
            ));
        }

        Self { text }
    }
}

fn usage(name: &str, aliases: &[&str]) -> String {
    let mut usage = format!("{}{}", COMMAND_PREFIX, name);
    if !aliases.is_empty() {
        let aliases: Vec<String> = aliases
            .iter()
            .map(|alias| format!("{}{}", COMMAND_PREFIX, alias))
            .collect();
        usage.push_str(&format!(" ({})", aliases.join(", ")));
    }
    usage
}

impl Command for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn aliases(&self) -> &[&str] {
        &["h", "?"]
    }

    fn description(&self) -> &str {
        "Show this help"
    }

    fn execute(&self, _args: &str, _state: &mut SessionState) -> Output {
        Output::text(self.text.clone())
    }
}

/// Quit command - exits the REPL.
pub struct QuitCommand;

impl Command for QuitCommand {
    fn name(&self) -> &str {
        "quit"
    }

    fn aliases(&self) -> &[&str] {
        &["q", "exit"]
    }

    fn description(&self) -> &str {
        "Exit the REPL"
    }

    fn execute(&self, _args: &str, _state: &mut SessionState) -> Output {
        Output::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_commands() {
        let registry = CommandRegistry::with_defaults();
        let help = registry.get("help").unwrap();

        match help.execute("", &mut SessionState::default()) {
            Output::Text(text) => {
                let text = console::strip_ansi_codes(&text);
                for name in [":kinds", ":booleans", ":matrix", ":quit (:q, :exit)", ":help (:h, :?)"] {
                    assert!(text.contains(name), "{}", name);
                }
                assert!(text.contains("Exit the REPL"));
            }
            other => panic!("unexpected output: {:?}", other),
        }
    }

    #[test]
    fn test_usage() {
        assert_eq!(usage("kinds", &[]), ":kinds");
        assert_eq!(usage("quit", &["q"]), ":quit (:q)");
    }

    #[test]
    fn test_quit() {
        let mut state = SessionState::default();
        assert!(matches!(QuitCommand.execute("", &mut state), Output::Quit));
    }
}
