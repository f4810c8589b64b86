//! Key/value flags.
//!
//! Responsibilities:
//! - Define `Flag`, the generic extensibility slot used on the document, on
//!   endpoints, and as directory items.
//! - Provide lenient conversions of a flag's value to common scalar types.
//!
//! Invariants:
//! - A flag with no value converts to `None` for every type.
//! - A flag with an unparseable value converts to the type's zero value (`Some(0)`,
//!   `Some(false)`, ...), never to an error.

use serde::{Deserialize, Serialize};

/// A key with an optional string value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Flag {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Flag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// The raw value.
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Interprets `1`, `on`, `yes`, `enabled` and `true` (any case) as true and
    /// everything else as false.
    pub fn as_bool(&self) -> Option<bool> {
        let value = self.value.as_deref()?.trim().to_lowercase();
        Some(matches!(
            value.as_str(),
            "1" | "on" | "yes" | "enabled" | "true"
        ))
    }

    /// Decimal integer value.
    pub fn as_int(&self) -> Option<i32> {
        let value = self.value.as_deref()?.trim();
        Some(value.parse().unwrap_or_default())
    }

    /// Integer value; accepts `0x`, `0o` and `0b` prefixes, and a bare leading
    /// `0` means octal (`"010"` is 8).
    pub fn as_int64(&self) -> Option<i64> {
        let value = self.value.as_deref()?.trim();
        Some(parse_int_literal(value).unwrap_or_default())
    }

    pub fn as_float(&self) -> Option<f32> {
        let value = self.value.as_deref()?.trim();
        Some(value.parse().unwrap_or_default())
    }

    pub fn as_float64(&self) -> Option<f64> {
        let value = self.value.as_deref()?.trim();
        Some(value.parse().unwrap_or_default())
    }
}

/// Parses a signed integer literal: optional sign, optional radix prefix,
/// `_` digit separators. A leading `0` without a letter prefix is octal.
fn parse_int_literal(text: &str) -> Option<i64> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if unsigned.starts_with(['+', '-']) {
        return None;
    }

    let lower = unsigned.to_ascii_lowercase();
    let (radix, digits) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest)
    } else if lower.len() > 1
        && let Some(rest) = lower.strip_prefix('0')
    {
        (8, rest)
    } else {
        (10, lower.as_str())
    };

    let digits = digits.replace('_', "");
    if digits.starts_with(['+', '-']) {
        return None;
    }
    let magnitude = i128::from_str_radix(&digits, radix).ok()?;
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}
