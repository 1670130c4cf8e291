// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! REPL engine implementation.

use super::commands::{CommandRegistry, Output, COMMAND_PREFIX};
use super::prompt::PromptBuilder;
use super::state::SessionState;
use crate::report::Report;
use console::style;
use reedline::{
    default_emacs_keybindings, ColumnarMenu, DefaultCompleter, Emacs, FileBackedHistory,
    KeyCode, MenuBuilder, KeyModifiers, Prompt, PromptEditMode, PromptHistorySearch,
    PromptHistorySearchStatus, Reedline, ReedlineEvent, ReedlineMenu, Signal,
};
use std::borrow::Cow;
use std::path::PathBuf;

const COMPLETION_MENU: &str = "completion_menu";

/// Line handling shared by the interactive loop and tests.
pub struct Session {
    /// Current session state.
    state: SessionState,
    /// Command registry.
    commands: CommandRegistry,
    /// Style classification reports.
    colors: bool,
}

impl Session {
    /// Create a session with the default commands.
    pub fn new(colors: bool) -> Self {
        Self {
            state: SessionState::default(),
            commands: CommandRegistry::with_defaults(),
            colors,
        }
    }

    /// Handle one trimmed, non-empty line.
    pub fn execute_line(&mut self, line: &str) -> Output {
        let Some(command_line) = line.strip_prefix(COMMAND_PREFIX) else {
            let report = Report::new(line);
            self.state.record(report.token.primary_kind());
            tracing::debug!(kind = %report.token.primary_kind(), "line classified");
            return Output::text(report.render(self.colors));
        };

        let (name, args) = command_line
            .split_once(' ')
            .unwrap_or((command_line, ""));

        match self.commands.get(name) {
            Some(command) => command.execute(args, &mut self.state),
            None => Output::error(format!(
                "Unknown command: '{}{}'. Type ':help' for available commands.",
                COMMAND_PREFIX, name
            )),
        }
    }

    /// Get the current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Get the command registry.
    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }
}

/// The main REPL engine.
pub struct Repl {
    /// Line handling.
    session: Session,
    /// Line editor.
    editor: Reedline,
    /// Prompt builder.
    prompt_builder: PromptBuilder,
}

impl Repl {
    /// Create a new REPL.
    pub fn new(colors: bool) -> anyhow::Result<Self> {
        if !colors {
            console::set_colors_enabled(false);
        }
        let colors = console::colors_enabled();
        let session = Session::new(colors);

        let history_file = Self::history_file_path();
        if let Some(parent) = history_file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let history = Box::new(
            FileBackedHistory::with_file(1000, history_file.clone())
                .map_err(|e| anyhow::anyhow!("Failed to create history: {}", e))?,
        );
        tracing::debug!(path = %history_file.display(), "history file");

        let mut completer =
            DefaultCompleter::with_inclusions(&[COMMAND_PREFIX]).set_min_word_len(2);
        completer.insert(session.commands().completions());
        let completer = Box::new(completer);
        let menu = Box::new(ColumnarMenu::default().with_name(COMPLETION_MENU));

        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );

        let editor = Reedline::create()
            .with_history(history)
            .with_completer(completer)
            .with_menu(ReedlineMenu::EngineCompleter(menu))
            .with_edit_mode(Box::new(Emacs::new(keybindings)));

        let prompt_builder = if colors {
            PromptBuilder::new()
        } else {
            PromptBuilder::new().without_colors()
        };

        Ok(Self {
            session,
            editor,
            prompt_builder,
        })
    }

    /// Get the history file path.
    fn history_file_path() -> PathBuf {
        directories::ProjectDirs::from("io", "typeline", "typeline")
            .map(|dirs| dirs.data_dir().join("repl_history.txt"))
            .unwrap_or_else(|| PathBuf::from(".typeline_history"))
    }

    /// Run the REPL loop.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.print_welcome();

        loop {
            let prompt = ReplPrompt::new(&self.prompt_builder, self.session.state());

            match self.editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    match self.session.execute_line(line) {
                        Output::Quit => {
                            println!("{}", style("Goodbye!").dim());
                            break;
                        }
                        Output::Text(text) => println!("{}", text),
                        Output::Error(msg) => {
                            println!("{} {}", self.prompt_builder.error_indicator(), msg)
                        }
                    }
                }
                Ok(Signal::CtrlC) => {
                    println!("{}", style("Ctrl-C: Use ':quit' or Ctrl-D to exit").dim());
                }
                Ok(Signal::CtrlD) => {
                    println!("{}", style("Goodbye!").dim());
                    break;
                }
                Err(e) => {
                    eprintln!("{} {}", self.prompt_builder.error_indicator(), e);
                }
            }
        }

        tracing::info!(classified = self.session.state().classified, "session ended");
        Ok(())
    }

    /// Print the welcome message.
    fn print_welcome(&self) {
        println!();
        println!(
            "{} {}",
            style("typeline REPL").bold().cyan(),
            style(format!("v{}", env!("CARGO_PKG_VERSION"))).dim()
        );
        println!(
            "{}",
            style("Type anything to classify it. ':help' for commands, ':quit' to exit.").dim()
        );
        println!();
    }
}

/// Custom prompt for the REPL.
struct ReplPrompt {
    prompt_str: String,
}

impl ReplPrompt {
    fn new(builder: &PromptBuilder, state: &SessionState) -> Self {
        Self {
            prompt_str: builder.build(state),
        }
    }
}

#[allow(clippy::all, warnings)] // Cow<str> lifetime pattern required by reedline Prompt trait
impl Prompt for ReplPrompt {
    fn render_prompt_left(&self) -> Cow<str> {
        Cow::Borrowed(&self.prompt_str)
    }

    fn render_prompt_right(&self) -> Cow<str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        Cow::Borrowed("... ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}
