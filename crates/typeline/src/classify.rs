// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Heuristic classification of raw input text.
//!
//! [`classify`] decides the most specific [`Kind`] a line of text represents
//! and builds a [`Token`] from it. The decision is a single left-to-right scan
//! accumulating flags, followed by one ordered decision procedure:
//!
//! 1. Empty text, or text holding a space or newline, is a `String`.
//! 2. Text in the boolean vocabulary (any casing) is a `Boolean`.
//! 3. The lone modifier characters `_ x b .` are a `String`.
//! 4. Text the scan still considers numeric is a `Float` (an `f` without an
//!    `x`), a `Double` (a `.`), or otherwise an `Integer`.
//! 5. Anything else is a `Character` when one character long, or a `String`.
//!
//! Numeric candidates are confirmed by parsing them. The scan admits a few
//! strings no parser accepts (`"ff"`, `"1.2.3"`, overflowing integers); those
//! fall through to step 5.

use crate::error::{Error, Result};
use crate::kind::{Kind, Value};
use crate::token::Token;

/// Text accepted as a boolean, with the truth value it maps to.
///
/// Matching is case-insensitive against the whole input.
pub const BOOLEAN_LITERALS: [(&str, bool); 6] = [
    ("yes", true),
    ("no", false),
    ("true", true),
    ("false", false),
    ("accept", true),
    ("deny", false),
];

/// Characters that modify a number but mean nothing on their own.
const LONE_MODIFIERS: [char; 4] = ['_', 'x', 'b', '.'];

/// Iterate over the accepted boolean spellings.
pub fn boolean_literals() -> impl Iterator<Item = &'static str> {
    BOOLEAN_LITERALS.iter().map(|(literal, _)| *literal)
}

/// Look up `text` in the boolean vocabulary, ignoring case.
pub fn parse_boolean(text: &str) -> Option<bool> {
    BOOLEAN_LITERALS
        .iter()
        .find(|(literal, _)| literal.eq_ignore_ascii_case(text))
        .map(|&(_, value)| value)
}

/// Classify a line of text.
///
/// Total: every input yields a token, falling back to [`Kind::String`].
///
/// # Example
///
/// ```
/// use typeline::{classify, Kind};
///
/// assert_eq!(classify("0xff").as_integer(), Some(255));
/// assert_eq!(classify("Accept").primary_kind(), Kind::Boolean);
/// assert_eq!(classify("two words").primary_kind(), Kind::String);
/// ```
pub fn classify(text: &str) -> Token {
    let _span = tracing::debug_span!("classify", len = text.len()).entered();

    let scan = Scan::run(text);
    let kind = scan.decide();
    tracing::trace!(?scan, %kind, "scan decided");

    match materialize_with(kind, text, &scan) {
        Ok(value) => Token::new(value),
        Err(err) => {
            let fallback = scan.non_numeric_kind();
            tracing::debug!(
                error = %err,
                category = err.category(),
                %fallback,
                "numeric candidate rejected by parser"
            );
            // Non-numeric kinds always materialize.
            match materialize_with(fallback, text, &scan) {
                Ok(value) => Token::new(value),
                Err(_) => Token::new(text),
            }
        }
    }
}

/// Turn `text` into a value of `kind` using the same rules [`classify`] does.
///
/// # Errors
///
/// [`Error::UnparsableLiteral`] when `text` is not a literal of `kind`.
pub fn materialize(kind: Kind, text: &str) -> Result<Value> {
    materialize_with(kind, text, &Scan::run(text))
}

/// Flags accumulated by one pass over the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scan {
    /// Number of characters scanned.
    len: usize,
    /// First character, lower-cased.
    first: Option<char>,
    /// Contains a space or newline.
    whitespace: bool,
    /// Whole input is a boolean literal.
    boolean: bool,
    is_number: bool,
    is_float: bool,
    is_double: bool,
    is_hex: bool,
    is_binary: bool,
}

impl Scan {
    fn run(text: &str) -> Self {
        let mut scan = Self {
            len: 0,
            first: None,
            whitespace: false,
            boolean: parse_boolean(text).is_some(),
            is_number: true,
            is_float: false,
            is_double: false,
            is_hex: false,
            is_binary: false,
        };

        for c in text.chars() {
            scan.len += 1;

            if c == ' ' || c == '\n' {
                scan.whitespace = true;
                break;
            }

            let c = c.to_ascii_lowercase();
            scan.first.get_or_insert(c);
            match c {
                'f' => scan.is_float = true,
                '.' => scan.is_double = true,
                'x' => scan.is_hex = true,
                'b' => scan.is_binary = true,
                _ => {}
            }

            let admitted = c.is_ascii_digit()
                || matches!(c, '_' | 'f' | 'x' | 'b' | '.')
                || (scan.is_hex && c.is_ascii_hexdigit());
            if !admitted {
                scan.is_number = false;
            }
        }

        scan
    }

    fn decide(&self) -> Kind {
        if self.len == 0 || self.whitespace {
            return Kind::String;
        }
        if self.boolean {
            return Kind::Boolean;
        }
        if self.is_lone_modifier() {
            return Kind::String;
        }
        if self.is_number {
            return self.numeric_kind();
        }
        self.non_numeric_kind()
    }

    fn numeric_kind(&self) -> Kind {
        if self.is_float && !self.is_hex {
            Kind::Float
        } else if self.is_double {
            Kind::Double
        } else {
            Kind::Integer
        }
    }

    fn non_numeric_kind(&self) -> Kind {
        if self.len == 1 && !self.whitespace {
            Kind::Character
        } else {
            Kind::String
        }
    }

    fn is_lone_modifier(&self) -> bool {
        self.len == 1 && self.first.is_some_and(|c| LONE_MODIFIERS.contains(&c))
    }

    fn radix(&self) -> u32 {
        if self.is_binary {
            2
        } else if self.is_hex {
            16
        } else {
            10
        }
    }
}

fn materialize_with(kind: Kind, text: &str, scan: &Scan) -> Result<Value> {
    match kind {
        Kind::String => Ok(Value::String(text.to_string())),
        Kind::Character => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Value::Character(c)),
                _ => Err(Error::unparsable(kind, text)),
            }
        }
        Kind::Integer => {
            let radix = scan.radix();
            let digits = if radix == 10 {
                text
            } else {
                // Drop the "0x" / "0b" marker.
                text.get(2..).unwrap_or("")
            };
            let digits: String = digits.chars().filter(|&c| c != '_').collect();
            i32::from_str_radix(&digits, radix)
                .map(Value::Integer)
                .map_err(|_| Error::unparsable(kind, text))
        }
        Kind::Double => {
            let digits: String = text.chars().filter(|&c| c != '_').collect();
            parse_decimal::<f64>(&digits)
                .map(Value::Double)
                .ok_or_else(|| Error::unparsable(kind, text))
        }
        Kind::Float => {
            let digits: String = text
                .chars()
                .filter(|&c| !matches!(c, '_' | 'f' | 'F'))
                .collect();
            parse_decimal::<f32>(&digits)
                .map(Value::Float)
                .ok_or_else(|| Error::unparsable(kind, text))
        }
        Kind::Boolean => parse_boolean(text)
            .map(Value::Boolean)
            .ok_or_else(|| Error::unparsable(kind, text)),
    }
}

/// Parse plain decimal notation only.
///
/// `str::parse` also accepts `inf`, `NaN` and exponents, none of which the
/// scan can produce; guarding here keeps `materialize` consistent with it.
fn parse_decimal<T: std::str::FromStr>(digits: &str) -> Option<T> {
    let plain = !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.chars().any(|c| c.is_ascii_digit());
    if !plain {
        return None;
    }
    digits.parse().ok()
}
