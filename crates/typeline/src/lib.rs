// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! # typeline - Typed Console Input
//!
//! Infers what a line of user input *is* and lets callers read it back as any
//! compatible kind.
//!
//! ## Architecture
//!
//! - **Kind**: the closed set of primitive kinds (`String`, `Character`,
//!   `Integer`, `Double`, `Float`, `Boolean`) and the [`Value`] sum type
//! - **Conversion matrix**: a fixed `(Kind, Kind) -> converter` table, built
//!   once per process
//! - **Token**: an immutable value with every reachable projection computed
//!   up front
//! - **Classifier**: the heuristic `text -> Token` scan
//! - **Prompt**: retrying interactive questions on top of the classifier
//!
//! ## Quick Start
//!
//! ```
//! use typeline::{classify, Kind};
//!
//! let token = classify("100_000.001");
//! assert_eq!(token.primary_kind(), Kind::Double);
//! assert_eq!(token.as_integer(), Some(100_000));
//! assert_eq!(token.as_string(), Some("100000.001"));
//!
//! let answer = classify("Yes");
//! assert_eq!(answer.as_boolean(), Some(true));
//! assert_eq!(answer.as_character(), Some('T'));
//! ```

#![warn(missing_docs)]

pub mod classify;
pub mod convert;
pub mod error;
pub mod kind;
pub mod prompt;
pub mod token;

pub use classify::{boolean_literals, classify, materialize, parse_boolean, BOOLEAN_LITERALS};
pub use convert::{can_convert, convert, matrix, ConversionMatrix, Converter};
pub use error::{Error, Result};
pub use kind::{Kind, Value};
pub use prompt::{Prompt, PromptConfig};
pub use token::Token;
