// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! The conversion matrix.
//!
//! Every ordered pair of [`Kind`]s either has a converter in a fixed table or
//! does not interconvert. Identity is implicit and never stored. The table is
//! built once per process and shared read-only:
//!
//! | src -> dst | String | Character | Integer | Double | Float | Boolean |
//! |------------|--------|-----------|---------|--------|-------|---------|
//! | String     | self   | yes       |         |        |       | yes     |
//! | Character  | yes    | self      | yes     | yes    | yes   | yes     |
//! | Integer    | yes    | yes       | self    | yes    | yes   | yes     |
//! | Double     | yes    | yes       | yes     | self   | yes   | yes     |
//! | Float      | yes    | yes       | yes     | yes    | self  | yes     |
//! | Boolean    | yes    | yes       | yes     | yes    | yes   | self    |

use crate::error::{Error, Result};
use crate::kind::{Kind, Value};
use std::sync::OnceLock;
use unicode_general_category::{get_general_category, GeneralCategory};

/// A converter from a value of the source kind into the destination kind.
///
/// `None` means the value exists but has no representation in the
/// destination kind (e.g. the empty string as a character).
pub type Converter = fn(&Value) -> Option<Value>;

/// Fixed table of converters between kinds.
pub struct ConversionMatrix {
    table: [[Option<Converter>; Kind::COUNT]; Kind::COUNT],
}

static MATRIX: OnceLock<ConversionMatrix> = OnceLock::new();

/// Get the process-wide conversion matrix, building it on first use.
pub fn matrix() -> &'static ConversionMatrix {
    MATRIX.get_or_init(ConversionMatrix::build)
}

/// Check whether `from` converts to `to` (identity included).
#[inline]
pub fn can_convert(from: Kind, to: Kind) -> bool {
    matrix().can_convert(from, to)
}

/// Convert `value` from `from` to `to`.
#[inline]
pub fn convert(from: Kind, to: Kind, value: &Value) -> Result<Option<Value>> {
    matrix().convert(from, to, value)
}

impl ConversionMatrix {
    fn build() -> Self {
        use Kind::*;

        let mut matrix = Self {
            table: [[None; Kind::COUNT]; Kind::COUNT],
        };

        matrix.insert(String, Character, string_to_character);
        matrix.insert(String, Boolean, string_to_boolean);

        matrix.insert(Character, String, to_string);
        matrix.insert(Character, Integer, character_to_integer);
        matrix.insert(Character, Double, character_to_double);
        matrix.insert(Character, Float, character_to_float);
        matrix.insert(Character, Boolean, character_to_boolean);

        matrix.insert(Integer, String, to_string);
        matrix.insert(Integer, Character, integer_to_character);
        matrix.insert(Integer, Double, integer_to_double);
        matrix.insert(Integer, Float, integer_to_float);
        matrix.insert(Integer, Boolean, integer_to_boolean);

        matrix.insert(Double, String, to_string);
        matrix.insert(Double, Character, double_to_character);
        matrix.insert(Double, Integer, double_to_integer);
        matrix.insert(Double, Float, double_to_float);
        matrix.insert(Double, Boolean, double_to_boolean);

        matrix.insert(Float, String, to_string);
        matrix.insert(Float, Character, float_to_character);
        matrix.insert(Float, Integer, float_to_integer);
        matrix.insert(Float, Double, float_to_double);
        matrix.insert(Float, Boolean, float_to_boolean);

        matrix.insert(Boolean, String, to_string);
        matrix.insert(Boolean, Character, boolean_to_character);
        matrix.insert(Boolean, Integer, boolean_to_integer);
        matrix.insert(Boolean, Double, boolean_to_double);
        matrix.insert(Boolean, Float, boolean_to_float);

        matrix
    }

    fn insert(&mut self, from: Kind, to: Kind, converter: Converter) {
        debug_assert_ne!(from, to, "identity conversions are implicit");
        self.table[from.index()][to.index()] = Some(converter);
    }

    /// Check whether `from` converts to `to`.
    #[inline]
    pub fn can_convert(&self, from: Kind, to: Kind) -> bool {
        from == to || self.table[from.index()][to.index()].is_some()
    }

    /// Look up the stored converter for a pair. Identity pairs have none.
    #[inline]
    pub fn converter(&self, from: Kind, to: Kind) -> Option<Converter> {
        self.table[from.index()][to.index()]
    }

    /// Convert `value`, which must be of kind `from`, into kind `to`.
    ///
    /// Returns `Ok(None)` when the pair interconverts but this particular
    /// value has no representation in `to`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConversion`] if the pair does not interconvert or if
    /// `value` is not of kind `from`.
    pub fn convert(&self, from: Kind, to: Kind, value: &Value) -> Result<Option<Value>> {
        if value.kind() != from {
            return Err(Error::invalid_conversion(value.kind(), to));
        }
        if from == to {
            return Ok(Some(value.clone()));
        }
        match self.converter(from, to) {
            Some(converter) => Ok(converter(value)),
            None => Err(Error::invalid_conversion(from, to)),
        }
    }

    /// Every kind reachable from `from`, identity included, in table order.
    pub fn targets(&self, from: Kind) -> impl Iterator<Item = Kind> + '_ {
        Kind::ALL
            .into_iter()
            .filter(move |&to| self.can_convert(from, to))
    }
}

// ============================================================================
// Shared helpers
// ============================================================================

fn to_string(value: &Value) -> Option<Value> {
    Some(Value::String(value.to_string()))
}

/// Code point to char. Negative, out-of-range and surrogate ordinals have no
/// character.
fn ordinal_to_character(ordinal: i32) -> Option<Value> {
    u32::try_from(ordinal)
        .ok()
        .and_then(char::from_u32)
        .map(Value::Character)
}

/// Assigned in the Unicode character database: any general category but
/// `Cn`. Private-use characters count as assigned.
fn is_defined(c: char) -> bool {
    get_general_category(c) != GeneralCategory::Unassigned
}

// ============================================================================
// String
// ============================================================================

fn string_to_character(value: &Value) -> Option<Value> {
    let Value::String(s) = value else { return None };
    s.chars().next().map(Value::Character)
}

fn string_to_boolean(value: &Value) -> Option<Value> {
    let Value::String(s) = value else { return None };
    Some(Value::Boolean(!s.is_empty()))
}

// ============================================================================
// Character
// ============================================================================

fn character_to_integer(value: &Value) -> Option<Value> {
    let Value::Character(c) = *value else { return None };
    Some(Value::Integer(c as i32))
}

fn character_to_double(value: &Value) -> Option<Value> {
    let Value::Character(c) = *value else { return None };
    Some(Value::Double(f64::from(c as u32)))
}

fn character_to_float(value: &Value) -> Option<Value> {
    let Value::Character(c) = *value else { return None };
    Some(Value::Float(c as u32 as f32))
}

fn character_to_boolean(value: &Value) -> Option<Value> {
    let Value::Character(c) = *value else { return None };
    Some(Value::Boolean(is_defined(c)))
}

// ============================================================================
// Integer
// ============================================================================

fn integer_to_character(value: &Value) -> Option<Value> {
    let Value::Integer(i) = *value else { return None };
    ordinal_to_character(i)
}

fn integer_to_double(value: &Value) -> Option<Value> {
    let Value::Integer(i) = *value else { return None };
    Some(Value::Double(f64::from(i)))
}

fn integer_to_float(value: &Value) -> Option<Value> {
    let Value::Integer(i) = *value else { return None };
    Some(Value::Float(i as f32))
}

fn integer_to_boolean(value: &Value) -> Option<Value> {
    let Value::Integer(i) = *value else { return None };
    Some(Value::Boolean(i != 0))
}

// ============================================================================
// Double
// ============================================================================

fn double_to_character(value: &Value) -> Option<Value> {
    let Value::Double(d) = *value else { return None };
    ordinal_to_character(d as i32)
}

// `as` truncates toward zero, saturates at the bounds and maps NaN to 0.
fn double_to_integer(value: &Value) -> Option<Value> {
    let Value::Double(d) = *value else { return None };
    Some(Value::Integer(d as i32))
}

fn double_to_float(value: &Value) -> Option<Value> {
    let Value::Double(d) = *value else { return None };
    Some(Value::Float(d as f32))
}

fn double_to_boolean(value: &Value) -> Option<Value> {
    let Value::Double(d) = *value else { return None };
    Some(Value::Boolean(!d.is_nan() && d != 0.0))
}

// ============================================================================
// Float
// ============================================================================

fn float_to_character(value: &Value) -> Option<Value> {
    let Value::Float(f) = *value else { return None };
    ordinal_to_character(f as i32)
}

fn float_to_integer(value: &Value) -> Option<Value> {
    let Value::Float(f) = *value else { return None };
    Some(Value::Integer(f as i32))
}

fn float_to_double(value: &Value) -> Option<Value> {
    let Value::Float(f) = *value else { return None };
    Some(Value::Double(f64::from(f)))
}

fn float_to_boolean(value: &Value) -> Option<Value> {
    let Value::Float(f) = *value else { return None };
    Some(Value::Boolean(!f.is_nan() && f != 0.0))
}

// ============================================================================
// Boolean
// ============================================================================

// Casing is asymmetric on purpose: callers match on 'T' and 'f'.
fn boolean_to_character(value: &Value) -> Option<Value> {
    let Value::Boolean(b) = *value else { return None };
    Some(Value::Character(if b { 'T' } else { 'f' }))
}

fn boolean_to_integer(value: &Value) -> Option<Value> {
    let Value::Boolean(b) = *value else { return None };
    Some(Value::Integer(i32::from(b)))
}

fn boolean_to_double(value: &Value) -> Option<Value> {
    boolean_to_integer(value).and_then(|i| integer_to_double(&i))
}

fn boolean_to_float(value: &Value) -> Option<Value> {
    boolean_to_integer(value).and_then(|i| integer_to_float(&i))
}
