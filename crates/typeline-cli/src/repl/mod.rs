// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! REPL (Read-Eval-Print-Loop) for interactive classification.
//!
//! Every line typed is classified and its projections are shown. Lines
//! starting with `:` are commands.

mod commands;
mod engine;
mod prompt;
mod state;

pub use engine::Repl;
pub use state::SessionState;
