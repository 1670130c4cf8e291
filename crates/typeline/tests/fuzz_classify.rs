// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Property-based tests for the classifier.
//!
//! Uses proptest to verify invariants hold across arbitrary inputs.

use proptest::prelude::*;

use typeline::{classify, materialize, Kind, Token};

// ============================================================================
// Totality
// ============================================================================

proptest! {
    /// Classification never panics and always yields a token whose primary
    /// projection exists.
    #[test]
    fn classify_is_total(text in "\\PC{0,64}") {
        let token = classify(&text);
        prop_assert!(token.get_as(token.primary_kind()).is_some());
    }

    /// Number-shaped noise never panics.
    #[test]
    fn classify_number_noise(text in "[0-9_fxbFXB.a-e]{0,16}") {
        let token = classify(&text);
        let kind = token.primary_kind();
        if kind.is_numeric() || kind == Kind::Boolean {
            // The chosen kind must agree with the materializer.
            prop_assert!(materialize(kind, &text).is_ok(), "{:?} -> {}", text, kind);
        }
    }

    /// Whatever the kind, the String projection of a string token is the input.
    #[test]
    fn string_tokens_keep_text(text in "\\PC{0,64}") {
        let token = classify(&text);
        if token.primary_kind() == Kind::String {
            prop_assert_eq!(token.as_string(), Some(text.as_str()));
        }
    }
}

// ============================================================================
// Round Trips
// ============================================================================

proptest! {
    /// Rendered non-negative integers classify back to themselves.
    #[test]
    fn integer_round_trip(v in 0i32..=i32::MAX) {
        let token = classify(&v.to_string());
        prop_assert_eq!(token.primary_kind(), Kind::Integer);
        prop_assert_eq!(token.as_integer(), Some(v));
    }

    /// Hexadecimal renderings round-trip too.
    #[test]
    fn hex_round_trip(v in 0i32..=i32::MAX) {
        let text = format!("0x{:x}", v);
        // A 'b' digit switches the radix to binary.
        prop_assume!(!text.contains('b'));
        prop_assert_eq!(classify(&text).as_integer(), Some(v));
    }

    /// Binary renderings round-trip.
    #[test]
    fn binary_round_trip(v in 0i32..=i32::MAX) {
        prop_assert_eq!(classify(&format!("0b{:b}", v)).as_integer(), Some(v));
    }

    /// Underscore separators do not change the parsed value.
    #[test]
    fn underscores_are_ignored(whole in 0u32..1_000_000, frac in 0u32..1000) {
        let plain = format!("{}.{:03}", whole, frac);
        let grouped = format!("{}_{}", &plain[..1], &plain[1..]);
        prop_assert_eq!(classify(&grouped).as_double(), classify(&plain).as_double());
    }
}

// ============================================================================
// Whitespace
// ============================================================================

proptest! {
    /// Anything with a space or newline is a string.
    #[test]
    fn whitespace_means_string(
        head in "\\PC{0,16}",
        sep in prop::sample::select(vec![" ", "\n"]),
        tail in "\\PC{0,16}",
    ) {
        let text = format!("{}{}{}", head, sep, tail);
        prop_assert_eq!(classify(&text).primary_kind(), Kind::String);
    }

    /// Re-classifying a token's rendering never narrows a spaced string.
    #[test]
    fn rendering_of_spaced_strings_stays_string(words in prop::collection::vec("[a-z0-9]{1,8}", 2..5)) {
        let token = Token::from(words.join(" "));
        let rendered = token.as_string().unwrap_or_default();
        prop_assert_eq!(classify(rendered).primary_kind(), Kind::String);
    }
}

// ============================================================================
// Token Invariants
// ============================================================================

proptest! {
    /// get_as is absent whenever has_kind is false.
    #[test]
    fn absent_when_unreachable(text in "\\PC{0,32}") {
        let token = classify(&text);
        for kind in Kind::ALL {
            if !token.has_kind(kind) {
                prop_assert!(token.get_as(kind).is_none());
            }
        }
    }

    /// Tokens compare equal to themselves unless NaN is involved.
    #[test]
    fn token_equality_reflexive(v in any::<i32>()) {
        let token = Token::from(v);
        prop_assert_eq!(token.clone(), token);
    }
}
