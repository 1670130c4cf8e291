// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! REPL command system.
//!
//! Provides the Command trait and command registry for the REPL.

mod help;
mod reference;

pub use help::{HelpCommand, QuitCommand};
pub use reference::{BooleansCommand, KindsCommand, MatrixCommand};

use super::SessionState;
use std::collections::HashMap;

/// Prefix that marks a line as a command.
pub const COMMAND_PREFIX: char = ':';

/// Output from a command.
#[derive(Debug)]
pub enum Output {
    /// Plain text output.
    Text(String),
    /// Error message.
    Error(String),
    /// Quit signal.
    Quit,
}

impl Output {
    /// Create an error output.
    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    /// Create a text output.
    pub fn text(msg: impl Into<String>) -> Self {
        Self::Text(msg.into())
    }
}

/// Command trait for REPL commands.
pub trait Command: Send + Sync {
    /// Command name without the prefix (e.g., "kinds").
    fn name(&self) -> &str;

    /// Command aliases (e.g., ["h", "?"]).
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Short description for help.
    fn description(&self) -> &str;

    /// Execute the command.
    fn execute(&self, args: &str, state: &mut SessionState) -> Output;
}

/// Command registry for looking up and executing commands.
pub struct CommandRegistry {
    /// Registered commands.
    commands: HashMap<String, Box<dyn Command>>,
    /// Alias to command name mapping.
    aliases: HashMap<String, String>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Create a registry with all default commands.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(Box::new(KindsCommand));
        registry.register(Box::new(BooleansCommand));
        registry.register(Box::new(MatrixCommand));

        registry.register(Box::new(QuitCommand));

        // Help summarizes everything registered before it.
        let help = HelpCommand::new(&registry);
        registry.register(Box::new(help));

        registry
    }

    /// Register a command.
    pub fn register(&mut self, command: Box<dyn Command>) {
        let name = command.name().to_string();

        for alias in command.aliases() {
            self.aliases.insert(alias.to_string(), name.clone());
        }

        self.commands.insert(name, command);
    }

    /// Look up a command by name or alias.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        if let Some(cmd) = self.commands.get(name) {
            return Some(cmd.as_ref());
        }

        self.aliases
            .get(name)
            .and_then(|cmd_name| self.commands.get(cmd_name))
            .map(|cmd| cmd.as_ref())
    }

    /// All commands, sorted by name.
    pub fn commands(&self) -> Vec<&dyn Command> {
        let mut commands: Vec<&dyn Command> = self.commands.values().map(|b| b.as_ref()).collect();
        commands.sort_by(|a, b| a.name().cmp(b.name()));
        commands
    }

    /// Every name and alias with the command prefix, sorted, for completion.
    pub fn completions(&self) -> Vec<String> {
        let mut results: Vec<String> = self
            .commands
            .keys()
            .chain(self.aliases.keys())
            .map(|name| format!("{}{}", COMMAND_PREFIX, name))
            .collect();

        results.sort();
        results.dedup();
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_constructors() {
        assert!(matches!(Output::error("err"), Output::Error(_)));
        assert!(matches!(Output::text("text"), Output::Text(_)));
    }

    #[test]
    fn test_command_registry() {
        let registry = CommandRegistry::with_defaults();

        for name in ["help", "kinds", "booleans", "matrix", "quit"] {
            assert!(registry.get(name).is_some(), "{}", name);
        }
        assert!(registry.get("nonexistent").is_none());
        assert_eq!(registry.commands().len(), 5);
    }

    #[test]
    fn test_command_registry_aliases() {
        let registry = CommandRegistry::with_defaults();

        for alias in ["h", "?"] {
            assert_eq!(registry.get(alias).unwrap().name(), "help");
        }
        for alias in ["q", "exit"] {
            assert_eq!(registry.get(alias).unwrap().name(), "quit");
        }
    }

    #[test]
    fn test_command_registry_completions() {
        let registry = CommandRegistry::with_defaults();

        let completions = registry.completions();
        assert!(completions.contains(&":help".to_string()));
        assert!(completions.contains(&":exit".to_string()));
        assert!(completions.windows(2).all(|w| w[0] < w[1]));
    }
}
