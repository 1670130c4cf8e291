// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! typeline CLI tool

mod demo;
mod logging;
mod repl;
mod report;

use clap::{Parser, Subcommand};
use std::io::Write;

#[derive(Parser)]
#[command(name = "typeline")]
#[command(about = "Infer the kind of console input and convert between kinds", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify each argument and show every projection
    Classify {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Text to classify
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Start an interactive classification REPL
    Repl {
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Run the guided prompt walkthrough
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match cli.command {
        Commands::Classify { json, texts } => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            if json {
                let reports: Vec<_> = texts.iter().map(|t| report::Report::new(t)).collect();
                serde_json::to_writer_pretty(&mut out, &reports)?;
                writeln!(out)?;
            } else {
                let colors = console::colors_enabled();
                for text in &texts {
                    let report = report::Report::new(text);
                    writeln!(out, "{}", report.render(colors))?;
                }
            }
        }
        Commands::Repl { no_color } => {
            let mut repl = repl::Repl::new(!no_color)?;
            repl.run()?;
        }
        Commands::Demo => {
            let mut prompt = typeline::Prompt::stdio();
            demo::run(&mut prompt)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_classify() {
        let cli = Cli::parse_from(["typeline", "-vv", "classify", "--json", "0xff", "h"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Classify { json, texts } => {
                assert!(json);
                assert_eq!(texts, ["0xff", "h"]);
            }
            _ => panic!("expected classify"),
        }
    }

    #[test]
    fn test_classify_requires_text() {
        assert!(Cli::try_parse_from(["typeline", "classify"]).is_err());
    }

    #[test]
    fn test_parse_repl_flags() {
        let cli = Cli::parse_from(["typeline", "repl", "--no-color"]);
        assert!(matches!(cli.command, Commands::Repl { no_color: true }));
    }
}
