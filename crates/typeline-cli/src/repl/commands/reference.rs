// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Reference commands: kinds, boolean words, conversion matrix.

use super::{Command, Output};
use crate::repl::SessionState;
use console::style;
use typeline::{matrix, Kind, BOOLEAN_LITERALS};

/// Lists every kind with the kinds it converts to.
pub struct KindsCommand;

impl Command for KindsCommand {
    fn name(&self) -> &str {
        "kinds"
    }

    fn description(&self) -> &str {
        "List the kinds and where each converts"
    }

    fn execute(&self, _args: &str, _state: &mut SessionState) -> Output {
        let lines: Vec<String> = Kind::ALL
            .into_iter()
            .map(|kind| {
                let targets: Vec<&str> = matrix()
                    .targets(kind)
                    .filter(|&to| to != kind)
                    .map(Kind::name)
                    .collect();
                format!(
                    "{} -> {}",
                    style(format!("{:<10}", kind.name())).green(),
                    targets.join(", ")
                )
            })
            .collect();
        Output::text(lines.join("\n"))
    }
}

/// Lists the boolean vocabulary.
pub struct BooleansCommand;

impl Command for BooleansCommand {
    fn name(&self) -> &str {
        "booleans"
    }

    fn description(&self) -> &str {
        "List the accepted boolean words"
    }

    fn execute(&self, _args: &str, _state: &mut SessionState) -> Output {
        let words = |value: bool| {
            BOOLEAN_LITERALS
                .iter()
                .filter(|(_, v)| *v == value)
                .map(|(literal, _)| *literal)
                .collect::<Vec<_>>()
                .join(", ")
        };
        Output::text(format!(
            "true:  {}\nfalse: {}\n{}",
            words(true),
            words(false),
            style("(any letter case)").dim()
        ))
    }
}

/// Shows the conversion matrix as a grid.
pub struct MatrixCommand;

impl Command for MatrixCommand {
    fn name(&self) -> &str {
        "matrix"
    }

    fn description(&self) -> &str {
        "Show the conversion matrix"
    }

    fn execute(&self, _args: &str, _state: &mut SessionState) -> Output {
        Output::text(render_matrix())
    }
}

/// Rows are source kinds, columns are destination kinds.
fn render_matrix() -> String {
    let mut out = format!("{:<10}", "from\\to");
    for to in Kind::ALL {
        out.push_str(&format!(" {:>4}", abbreviation(to)));
    }

    for from in Kind::ALL {
        out.push_str(&format!("\n{:<10}", from.name()));
        for to in Kind::ALL {
            let cell = if matrix().can_convert(from, to) { "x" } else { "." };
            out.push_str(&format!(" {:>4}", cell));
        }
    }
    out
}

fn abbreviation(kind: Kind) -> &'static str {
    match kind {
        Kind::String => "Str",
        Kind::Character => "Chr",
        Kind::Integer => "Int",
        Kind::Double => "Dbl",
        Kind::Float => "Flt",
        Kind::Boolean => "Bool",
    }
}
