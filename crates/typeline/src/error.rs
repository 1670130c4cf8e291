// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Error types for typeline

use crate::kind::Kind;
use thiserror::Error;

/// Result type alias for typeline operations
pub type Result<T> = core::result::Result<T, Error>;

/// Main error type for the typeline library
#[derive(Error, Debug)]
pub enum Error {
    /// A projection was requested between kinds that do not interconvert,
    /// or a value was handed to a converter for the wrong source kind.
    #[error("Invalid conversion from {from} to {to}")]
    InvalidConversion {
        /// Source kind
        from: Kind,
        /// Requested destination kind
        to: Kind,
    },

    /// Text routed to a kind could not be parsed as that kind.
    ///
    /// This signals a mismatch between the classifier scan and the
    /// materializer, never bad user input.
    #[error("Unparsable {kind} literal: {text:?}")]
    UnparsableLiteral {
        /// Kind the text was routed to
        kind: Kind,
        /// The offending text
        text: String,
    },

    /// I/O errors from the prompt layer
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The prompt reader ran dry before a valid answer was read
    #[error("End of input reached before a valid answer")]
    EndOfInput,

    /// A prompt with a retry limit ran out of attempts
    #[error("No valid answer after {attempts} attempts")]
    AttemptsExhausted {
        /// Number of attempts made
        attempts: u32,
    },

    /// A selection prompt was given nothing to select from
    #[error("Selection prompt has no options")]
    EmptySelection,
}

impl Error {
    /// Create an invalid conversion error
    pub fn invalid_conversion(from: Kind, to: Kind) -> Self {
        Self::InvalidConversion { from, to }
    }

    /// Create an unparsable literal error
    pub fn unparsable(kind: Kind, text: impl Into<String>) -> Self {
        Self::UnparsableLiteral {
            kind,
            text: text.into(),
        }
    }

    /// Check if this error indicates a defect inside the library rather
    /// than a condition of the caller's environment.
    #[inline]
    pub fn is_internal_fault(&self) -> bool {
        matches!(self, Self::UnparsableLiteral { .. })
    }

    /// Check if this error came from the prompt layer's input stream.
    #[inline]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::EndOfInput | Self::AttemptsExhausted { .. }
        )
    }

    /// Get the error category for logging.
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidConversion { .. } => "conversion",
            Self::UnparsableLiteral { .. } => "literal",
            Self::Io(_) => "io",
            Self::EndOfInput => "eof",
            Self::AttemptsExhausted { .. } => "attempts",
            Self::EmptySelection => "selection",
        }
    }
}
