// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Immutable multi-kind value holder.

use crate::convert::matrix;
use crate::error::{Error, Result};
use crate::kind::{Kind, Value};
use serde::{Serialize, Serializer};
use std::fmt;

/// A classified input value.
///
/// A token remembers the kind it was inferred as (its *primary kind*) and
/// projects its value into every kind reachable from there at construction
/// time. All reads afterwards are plain lookups.
///
/// # Example
///
/// ```
/// use typeline::{Kind, Token};
///
/// let token = Token::from(true);
/// assert_eq!(token.as_character(), Some('T'));
/// assert_eq!(token.as_integer(), Some(1));
/// assert!(token.has_kind(Kind::Double));
/// ```
#[derive(Debug, Clone)]
pub struct Token {
    primary: Kind,
    raw: Value,
    projections: [Option<Value>; Kind::COUNT],
}

impl Token {
    /// Create a token whose primary kind is the kind of `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        let raw = value.into();
        let primary = raw.kind();
        let matrix = matrix();

        let projections = Kind::ALL.map(|kind| {
            if kind == primary {
                Some(raw.clone())
            } else {
                matrix.converter(primary, kind).and_then(|convert| convert(&raw))
            }
        });

        Self {
            primary,
            raw,
            projections,
        }
    }

    /// The kind this token was inferred as.
    #[inline]
    pub fn primary_kind(&self) -> Kind {
        self.primary
    }

    /// The value as it was inferred.
    #[inline]
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Consume the token, keeping only its raw value.
    pub fn into_raw(self) -> Value {
        self.raw
    }

    /// Check if the primary kind converts to `kind`.
    #[inline]
    pub fn has_kind(&self, kind: Kind) -> bool {
        matrix().can_convert(self.primary, kind)
    }

    /// The value projected into `kind`, if there is one.
    #[inline]
    pub fn get_as(&self, kind: Kind) -> Option<&Value> {
        self.projections[kind.index()].as_ref()
    }

    /// Like [`get_as`](Self::get_as), but asking for a kind the token can
    /// never hold is an error rather than an absence.
    pub fn try_get_as(&self, kind: Kind) -> Result<Option<&Value>> {
        if !self.has_kind(kind) {
            return Err(Error::invalid_conversion(self.primary, kind));
        }
        Ok(self.get_as(kind))
    }

    /// Every kind this token holds a value for, with the value.
    pub fn projections(&self) -> impl Iterator<Item = (Kind, &Value)> {
        Kind::ALL
            .into_iter()
            .zip(self.projections.iter())
            .filter_map(|(kind, value)| value.as_ref().map(|v| (kind, v)))
    }

    /// Get as string.
    pub fn as_string(&self) -> Option<&str> {
        self.get_as(Kind::String).and_then(Value::as_str)
    }

    /// Get as character.
    pub fn as_character(&self) -> Option<char> {
        self.get_as(Kind::Character).and_then(Value::as_char)
    }

    /// Get as integer.
    pub fn as_integer(&self) -> Option<i32> {
        self.get_as(Kind::Integer).and_then(Value::as_i32)
    }

    /// Get as double.
    pub fn as_double(&self) -> Option<f64> {
        self.get_as(Kind::Double).and_then(Value::as_f64)
    }

    /// Get as float.
    pub fn as_float(&self) -> Option<f32> {
        self.get_as(Kind::Float).and_then(Value::as_f32)
    }

    /// Get as boolean.
    pub fn as_boolean(&self) -> Option<bool> {
        self.get_as(Kind::Boolean).and_then(Value::as_bool)
    }
}

// Structural: two tokens are equal when every projection is.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.projections == other.projections
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token<prim: {}, val: {}>", self.primary, self.raw)
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let projections: std::collections::BTreeMap<&'static str, &Value> = self
            .projections()
            .map(|(kind, value)| (kind.name(), value))
            .collect();

        let mut state = serializer.serialize_struct("Token", 3)?;
        state.serialize_field("primary", &self.primary)?;
        state.serialize_field("raw", &self.raw)?;
        state.serialize_field("projections", &projections)?;
        state.end()
    }
}

impl From<Value> for Token {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<char> for Token {
    fn from(c: char) -> Self {
        Self::new(c)
    }
}

impl From<i32> for Token {
    fn from(i: i32) -> Self {
        Self::new(i)
    }
}

impl From<f64> for Token {
    fn from(d: f64) -> Self {
        Self::new(d)
    }
}

impl From<f32> for Token {
    fn from(f: f32) -> Self {
        Self::new(f)
    }
}

impl From<bool> for Token {
    fn from(b: bool) -> Self {
        Self::new(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_token() {
        let token = Token::from("hello");
        assert_eq!(token.primary_kind(), Kind::String);
        assert_eq!(token.as_string(), Some("hello"));
        assert_eq!(token.as_character(), Some('h'));
        assert_eq!(token.as_boolean(), Some(true));
        assert_eq!(token.as_integer(), None);
        assert_eq!(token.as_double(), None);
        assert_eq!(token.as_float(), None);
    }

    #[test]
    fn test_string_with_whitespace_is_accepted() {
        let token = Token::from("hello world");
        assert_eq!(token.as_string(), Some("hello world"));
    }

    #[test]
    fn test_empty_string_has_no_character() {
        let token = Token::from("");
        assert!(token.has_kind(Kind::Character));
        assert_eq!(token.get_as(Kind::Character), None);
        assert_eq!(token.try_get_as(Kind::Character).unwrap(), None);
        assert_eq!(token.as_boolean(), Some(false));
    }

    #[test]
    fn test_integer_token_projects_everywhere() {
        let token = Token::from(100);
        for kind in Kind::ALL {
            assert!(token.has_kind(kind));
        }
        assert_eq!(token.as_string(), Some("100"));
        assert_eq!(token.as_character(), Some('d'));
        assert_eq!(token.as_integer(), Some(100));
        assert_eq!(token.as_double(), Some(100.0));
        assert_eq!(token.as_float(), Some(100.0));
        assert_eq!(token.as_boolean(), Some(true));
    }

    #[test]
    fn test_get_as_absent_when_kind_missing() {
        let token = Token::from("7");
        for kind in Kind::ALL {
            if !token.has_kind(kind) {
                assert!(token.get_as(kind).is_none());
            }
        }
    }

    #[test]
    fn test_try_get_as_rejects_illegal_kind() {
        let token = Token::from("seven");
        let err = token.try_get_as(Kind::Integer).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConversion {
                from: Kind::String,
                to: Kind::Integer
            }
        ));
        assert!(token.try_get_as(Kind::Boolean).unwrap().is_some());
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(Token::from(1.0f64), Token::from(1.0f64));
        assert_ne!(Token::from(1), Token::from(1.0f64));
        assert_ne!(Token::from(1), Token::from(2));
        assert_eq!(Token::from("a"), Token::from("a".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::from(7).to_string(), "Token<prim: Integer, val: 7>");
        assert_eq!(
            Token::from(2.5f64).to_string(),
            "Token<prim: Double, val: 2.5>"
        );
    }

    #[test]
    fn test_projections_iterator() {
        let token = Token::from("");
        let kinds: Vec<Kind> = token.projections().map(|(k, _)| k).collect();
        // Character is reachable but absent for the empty string
        assert_eq!(kinds, [Kind::String, Kind::Boolean]);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(Token::from('h')).unwrap();
        assert_eq!(json["primary"], "Character");
        assert_eq!(json["raw"]["value"], "h");
        assert_eq!(json["projections"]["Integer"]["value"], 104);
    }
}
