//! Numeric normalizer.
//!
//! Affiliate feeds publish prices, discounts, sales counts and ratings as a mix
//! of JSON numbers and pre-formatted strings (`"1,234"`, `"12%"`,
//! `"1,234.56"`). Everything here degrades to `0.0` instead of failing.

use serde::{Deserialize, Serialize};

use alyomi_core::ValueObject;

/// A numeric-ish field as it appears in the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    Number(f64),
    Text(String),
    /// Anything else (booleans, objects, arrays). Always normalizes to `0.0`.
    Other(serde_json::Value),
}

impl ValueObject for NumericValue {}

impl NumericValue {
    /// Coerce into a usable number. See [`normalize`].
    pub fn normalize(&self) -> f64 {
        normalize(self)
    }

    /// Empty text, zero or `null`: a value the feed left blank.
    pub fn is_blank(&self) -> bool {
        match self {
            NumericValue::Number(n) => *n == 0.0,
            NumericValue::Text(s) => s.is_empty(),
            NumericValue::Other(v) => v.is_null(),
        }
    }

    /// Whether the published value carries a minus sign. [`normalize`] drops
    /// the sign of text, so callers that care about it ask here.
    pub fn is_negative(&self) -> bool {
        match self {
            NumericValue::Number(n) => *n < 0.0,
            NumericValue::Text(s) => s.trim_start().starts_with('-'),
            NumericValue::Other(_) => false,
        }
    }

    /// The value as it should be shown to a shopper (text is kept verbatim).
    pub fn display(&self) -> String {
        match self {
            NumericValue::Number(n) => n.to_string(),
            NumericValue::Text(s) => s.clone(),
            NumericValue::Other(v) => v.to_string(),
        }
    }
}

impl From<f64> for NumericValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for NumericValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for NumericValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for NumericValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for NumericValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Coerce a numeric-ish value into a number.
///
/// Numbers pass through unchanged unless they are not finite, in which case
/// they become `0.0`. Text is reduced to its digits and decimal points and
/// the leading decimal literal is parsed; no literal means `0.0`.
pub fn normalize(value: &NumericValue) -> f64 {
    match value {
        NumericValue::Number(n) if n.is_finite() => *n,
        NumericValue::Number(_) => 0.0,
        NumericValue::Text(s) => parse_number(s),
        NumericValue::Other(_) => 0.0,
    }
}

/// [`normalize`] for optional fields; absent means `0.0`.
pub fn normalize_opt(value: Option<&NumericValue>) -> f64 {
    value.map(normalize).unwrap_or(0.0)
}

/// Strip everything except digits and `.`, then parse the leading decimal
/// literal (`"1.2.3"` reads as `1.2`).
pub fn parse_number(text: &str) -> f64 {
    let stripped: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut end = 0;
    let mut seen_point = false;
    let mut seen_digit = false;
    for (i, c) in stripped.char_indices() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => break,
        }
        end = i + 1;
    }

    if !seen_digit {
        return 0.0;
    }

    let literal = stripped[..end].trim_end_matches('.');
    let literal = if literal.starts_with('.') {
        format!("0{literal}")
    } else {
        literal.to_string()
    };

    literal
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}
