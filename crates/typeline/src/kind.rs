// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Primitive kinds and the values that carry them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the primitive kinds a line of input can be inferred as.
///
/// The set is closed: every kind-indexed table in this crate has exactly
/// [`Kind::COUNT`] slots, addressed by [`Kind::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Kind {
    /// Free text
    String,
    /// A single character
    Character,
    /// 32-bit signed integer
    Integer,
    /// 64-bit floating point
    Double,
    /// 32-bit floating point
    Float,
    /// Truth value
    Boolean,
}

impl Kind {
    /// Number of kinds.
    pub const COUNT: usize = 6;

    /// Every kind, in table order.
    pub const ALL: [Kind; Kind::COUNT] = [
        Kind::String,
        Kind::Character,
        Kind::Integer,
        Kind::Double,
        Kind::Float,
        Kind::Boolean,
    ];

    /// Stable name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::String => "String",
            Kind::Character => "Character",
            Kind::Integer => "Integer",
            Kind::Double => "Double",
            Kind::Float => "Float",
            Kind::Boolean => "Boolean",
        }
    }

    /// Slot of this kind in kind-indexed tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a kind by its name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Kind> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Whether the kind holds a number.
    pub const fn is_numeric(self) -> bool {
        matches!(self, Kind::Integer | Kind::Double | Kind::Float)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value of exactly one [`Kind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Value {
    /// String value
    String(String),
    /// Character value
    Character(char),
    /// Integer value
    Integer(i32),
    /// Double value
    Double(f64),
    /// Float value
    Float(f32),
    /// Boolean value
    Boolean(bool),
}

impl Value {
    /// The kind this value belongs to.
    pub const fn kind(&self) -> Kind {
        match self {
            Value::String(_) => Kind::String,
            Value::Character(_) => Kind::Character,
            Value::Integer(_) => Kind::Integer,
            Value::Double(_) => Kind::Double,
            Value::Float(_) => Kind::Float,
            Value::Boolean(_) => Kind::Boolean,
        }
    }

    /// Borrow the string payload.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the character payload.
    pub fn as_char(&self) -> Option<char> {
        match *self {
            Value::Character(c) => Some(c),
            _ => None,
        }
    }

    /// Get the integer payload.
    pub fn as_i32(&self) -> Option<i32> {
        match *self {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// Get the double payload.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Double(d) => Some(d),
            _ => None,
        }
    }

    /// Get the float payload.
    pub fn as_f32(&self) -> Option<f32> {
        match *self {
            Value::Float(f) => Some(f),
            _ => None,
        }
    }

    /// Get the boolean payload.
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Boolean(b) => Some(b),
            _ => None,
        }
    }
}

// Canonical rendering. Finite floating point values are written in plain
// decimal notation with at least one fractional digit ("100.0", "1e20" as
// "100000000000000000000.0"). NaN and infinities keep their `{}` form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Character(c) => write!(f, "{}", c),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Double(d) => write_decimal(f, *d, d.is_finite()),
            Value::Float(x) => write_decimal(f, *x, x.is_finite()),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

fn write_decimal(f: &mut fmt::Formatter<'_>, x: impl fmt::Display, finite: bool) -> fmt::Result {
    let text = x.to_string();
    f.write_str(&text)?;
    if finite && !text.contains('.') {
        f.write_str(".0")?;
    }
    Ok(())
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Character(c)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_are_stable() {
        let names: Vec<&str> = Kind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            ["String", "Character", "Integer", "Double", "Float", "Boolean"]
        );
        assert_eq!(Kind::Double.to_string(), "Double");
    }

    #[test]
    fn test_kind_index_matches_table_order() {
        for (i, kind) in Kind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_kind_from_name() {
        assert_eq!(Kind::from_name("integer"), Some(Kind::Integer));
        assert_eq!(Kind::from_name("BOOLEAN"), Some(Kind::Boolean));
        assert_eq!(Kind::from_name("long"), None);
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::from("hi").kind(), Kind::String);
        assert_eq!(Value::from('h').kind(), Kind::Character);
        assert_eq!(Value::from(7).kind(), Kind::Integer);
        assert_eq!(Value::from(7.0f64).kind(), Kind::Double);
        assert_eq!(Value::from(7.0f32).kind(), Kind::Float);
        assert_eq!(Value::from(true).kind(), Kind::Boolean);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Integer(100).to_string(), "100");
        assert_eq!(Value::Double(100.0).to_string(), "100.0");
        assert_eq!(Value::Float(100.0).to_string(), "100.0");
        assert_eq!(Value::Double(0.5).to_string(), "0.5");
        assert_eq!(Value::Character('h').to_string(), "h");
        assert_eq!(Value::Boolean(false).to_string(), "false");
    }

    #[test]
    fn test_float_display_never_uses_exponent() {
        assert_eq!(Value::Double(1e20).to_string(), "100000000000000000000.0");
        assert_eq!(Value::Double(1e-6).to_string(), "0.000001");
        assert_eq!(Value::Float(1e20).to_string(), "100000000000000000000.0");
        assert_eq!(Value::Float(1e-6).to_string(), "0.000001");
        assert_eq!(Value::Double(-0.0).to_string(), "-0.0");
    }

    #[test]
    fn test_float_display_non_finite() {
        assert_eq!(Value::Double(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Double(f64::INFINITY).to_string(), "inf");
        assert_eq!(Value::Float(f32::NEG_INFINITY).to_string(), "-inf");
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::from(3).as_i32(), Some(3));
        assert_eq!(Value::from(3).as_f64(), None);
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::from(true).as_bool(), Some(true));
    }

    #[test]
    fn test_value_serde_shape() {
        let json = serde_json::to_string(&Value::Integer(255)).unwrap();
        assert_eq!(json, r#"{"kind":"Integer","value":255}"#);

        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Value::Integer(255));
    }
}
