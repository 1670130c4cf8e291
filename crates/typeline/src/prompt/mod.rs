// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Interactive prompts built on the classifier.
//!
//! A [`Prompt`] prints a question, reads one line, classifies it and asks
//! again until the answer has the requested kind:
//!
//! ```
//! use typeline::Prompt;
//!
//! let input = b"seven\n7\n";
//! let mut prompt = Prompt::new(&input[..], Vec::new());
//!
//! assert_eq!(prompt.prompt_integer("How many?").unwrap(), 7);
//!
//! let (_, output) = prompt.into_inner();
//! assert!(String::from_utf8(output).unwrap().contains("! Must be an integer"));
//! ```

mod config;

pub use config::PromptConfig;

use crate::classify::{boolean_literals, classify};
use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::token::Token;
use console::style;
use std::io::{self, BufRead, Write};

const MUST_BE_INTEGER: &str = "! Must be an integer";
const MUST_BE_NUMBER: &str = "! Must be a number";
const MUST_NOT_BE_EMPTY: &str = "! Must not be empty";
const INVALID_SELECTION: &str = "! Invalid selection";

/// Line that ends a multi-line answer.
const END_OF_TEXT: &str = ".";

/// Outcome of checking one answer: the accepted value, or the warning to
/// print before asking again.
type Check<T> = core::result::Result<T, String>;

/// Interactive prompt over a line reader and a writer.
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
    config: PromptConfig,
}

impl Prompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Create a prompt with the default config.
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_config(reader, writer, PromptConfig::default())
    }

    /// Create a prompt with a custom config.
    pub fn with_config(reader: R, writer: W, config: PromptConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Current config.
    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    /// Writer the prompts print to, for output between questions.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Release the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Read one raw line and classify it. No validation.
    ///
    /// The message is printed exactly as given, followed by the marker.
    pub fn prompt_token(&mut self, message: &str) -> Result<Token> {
        write!(self.writer, "{}{}", message, self.config.marker)?;
        self.writer.flush()?;
        let line = self.read_line()?;
        Ok(classify(&line))
    }

    /// Ask for a non-empty string.
    pub fn prompt_string(&mut self, message: &str) -> Result<String> {
        self.retry(message, self.config.one_line, |token| {
            match token.as_string() {
                Some(s) if !s.is_empty() => Ok(s.to_string()),
                _ => Err(MUST_NOT_BE_EMPTY.to_string()),
            }
        })
    }

    /// Ask for text spanning several lines, ended by a line holding only `.`.
    ///
    /// Every collected line keeps its trailing newline. Running out of input
    /// ends the text as well.
    pub fn prompt_multi_line_string(&mut self, message: &str) -> Result<String> {
        writeln!(self.writer, "{}", message)?;
        writeln!(
            self.writer,
            "When finished, enter \"{}\" on a new line.",
            END_OF_TEXT
        )?;

        let mut text = String::new();
        loop {
            write!(self.writer, "{}", self.config.marker)?;
            self.writer.flush()?;

            let line = match self.read_line() {
                Ok(line) => line,
                Err(Error::EndOfInput) => break,
                Err(e) => return Err(e),
            };
            if line == END_OF_TEXT {
                break;
            }
            text.push_str(&line);
            text.push('\n');
        }

        tracing::debug!(lines = text.lines().count(), "multi-line answer read");
        Ok(text)
    }

    /// Ask for a single character (the first character of the answer).
    pub fn prompt_character(&mut self, message: &str) -> Result<char> {
        self.retry(message, self.config.one_line, |token| {
            first_character(token).ok_or_else(|| MUST_NOT_BE_EMPTY.to_string())
        })
    }

    /// Ask for one of the allowed characters.
    pub fn prompt_character_selection(&mut self, message: &str, allowed: &[char]) -> Result<char> {
        if allowed.is_empty() {
            return Err(Error::EmptySelection);
        }

        let choices = join(allowed.iter());
        let message = format!("{}\none of [{}] ", message, choices);
        self.retry(&message, true, |token| match first_character(token) {
            Some(c) if allowed.contains(&c) => Ok(c),
            Some(_) => Err(INVALID_SELECTION.to_string()),
            None => Err(MUST_NOT_BE_EMPTY.to_string()),
        })
    }

    /// Ask for an integer (decimal, `0x` hexadecimal or `0b` binary).
    ///
    /// The answer must classify as [`Kind::Integer`]. Answers that merely
    /// convert to an integer are rejected: `a` is a character (not 97), `yes`
    /// is a boolean (not 1) and `2.5` is a double.
    pub fn prompt_integer(&mut self, message: &str) -> Result<i32> {
        self.retry(message, self.config.one_line, integer_answer)
    }

    /// Ask for one of the allowed integers. Accepts the same answers as
    /// [`prompt_integer`](Self::prompt_integer).
    pub fn prompt_integer_selection(&mut self, message: &str, allowed: &[i32]) -> Result<i32> {
        if allowed.is_empty() {
            return Err(Error::EmptySelection);
        }

        let choices = join(allowed.iter());
        let message = format!("{}\none of [{}] ", message, choices);
        self.retry(&message, true, |token| {
            let value = integer_answer(token)?;
            if allowed.contains(&value) {
                Ok(value)
            } else {
                Err(INVALID_SELECTION.to_string())
            }
        })
    }

    /// Ask for an integer between `min` and `max`, both included. Accepts the
    /// same answers as [`prompt_integer`](Self::prompt_integer).
    pub fn prompt_integer_range(&mut self, message: &str, min: i32, max: i32) -> Result<i32> {
        if min > max {
            return Err(Error::EmptySelection);
        }

        let message = format!("{}\nselect [{}...{}] ", message, min, max);
        self.retry(&message, true, |token| {
            let value = integer_answer(token)?;
            if (min..=max).contains(&value) {
                Ok(value)
            } else {
                Err(INVALID_SELECTION.to_string())
            }
        })
    }

    /// Show a numbered list and ask the user to pick an entry.
    pub fn prompt_list<'o, S: AsRef<str>>(&mut self, title: &str, options: &'o [S]) -> Result<&'o S> {
        if options.is_empty() {
            return Err(Error::EmptySelection);
        }
        let last = i32::try_from(options.len() - 1).unwrap_or(i32::MAX);

        let mut message = format!("{}:\n", title);
        for (i, option) in options.iter().enumerate() {
            message.push_str(&format!("  {}: {}\n", i, option.as_ref()));
        }

        let index = self.prompt_integer_range(message.trim_end(), 0, last)?;
        // In range by construction.
        Ok(&options[index as usize])
    }

    /// Ask for a double.
    ///
    /// The answer must classify as a number ([`Kind::Integer`],
    /// [`Kind::Double`] or [`Kind::Float`]). Characters and booleans are
    /// rejected even though they convert to a double.
    pub fn prompt_double(&mut self, message: &str) -> Result<f64> {
        self.retry(message, self.config.one_line, |token| {
            numeric(token)
                .and_then(Token::as_double)
                .ok_or_else(|| MUST_BE_NUMBER.to_string())
        })
    }

    /// Ask for a float. A trailing `f` is allowed.
    ///
    /// Accepts the same answers as [`prompt_double`](Self::prompt_double).
    pub fn prompt_float(&mut self, message: &str) -> Result<f32> {
        self.retry(message, self.config.one_line, |token| {
            numeric(token)
                .and_then(Token::as_float)
                .ok_or_else(|| MUST_BE_NUMBER.to_string())
        })
    }

    /// Ask for a boolean: one of yes, no, true, false, accept, deny.
    ///
    /// Other answers are rejected even though every token converts to a
    /// boolean; `1` or `hello` are not accepted as `true`.
    pub fn prompt_boolean(&mut self, message: &str) -> Result<bool> {
        self.retry(message, self.config.one_line, |token| {
            if token.primary_kind() != Kind::Boolean {
                return Err(format!(
                    "! Must be a boolean ({})",
                    boolean_literals().collect::<Vec<_>>().join(", ")
                ));
            }
            token.as_boolean().ok_or_else(|| "! Must be a boolean".to_string())
        })
    }

    /// Ask until `check` accepts an answer or the attempt budget runs out.
    fn retry<T>(
        &mut self,
        message: &str,
        one_line: bool,
        mut check: impl FnMut(&Token) -> Check<T>,
    ) -> Result<T> {
        let mut attempts = 0u32;
        loop {
            if one_line {
                write!(self.writer, "{}", message)?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
            let token = self.prompt_token("")?;
            attempts = next_attempt(attempts);

            match check(&token) {
                Ok(value) => return Ok(value),
                Err(warning) => {
                    tracing::debug!(
                        attempts,
                        primary = %token.primary_kind(),
                        "answer rejected"
                    );
                    self.warn(&warning)?;
                }
            }

            if self.config.exhausted(attempts) {
                return Err(Error::AttemptsExhausted { attempts });
            }
        }
    }

    fn warn(&mut self, warning: &str) -> Result<()> {
        let styled = style(warning).yellow().force_styling(self.config.colors);
        writeln!(self.writer, "{}", styled)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(Error::EndOfInput);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

// Saturates so an unbounded prompt never overflows.
fn next_attempt(attempts: u32) -> u32 {
    attempts.saturating_add(1)
}

fn integer_answer(token: &Token) -> Check<i32> {
    if token.primary_kind() != Kind::Integer {
        return Err(MUST_BE_INTEGER.to_string());
    }
    token.as_integer().ok_or_else(|| MUST_BE_INTEGER.to_string())
}

fn numeric(token: &Token) -> Option<&Token> {
    token.primary_kind().is_numeric().then_some(token)
}

fn first_character(token: &Token) -> Option<char> {
    token.as_string().and_then(|s| s.chars().next())
}

fn join<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(",")
}
