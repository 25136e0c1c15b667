//! Slot Value Coercion
//!
//! Slot values arrive as free text. Coercion never fails: text that is not an
//! integer becomes [`Coerced::NotANumber`], which compares like an IEEE-754
//! NaN - every `<`, `<=`, `>`, `>=` and `==` against it is `false`.
//!
//! Range checks written as "reject if out of range" therefore let a
//! non-numeric value through. That leniency is existing behaviour and is kept
//! on purpose until product decides otherwise.

use std::cmp::Ordering;
use std::num::IntErrorKind;

/// Result of coercing a slot value to an integer
#[derive(Clone, Copy, Debug)]
pub enum Coerced {
    Value(i64),
    NotANumber,
}

impl Coerced {
    pub const fn is_nan(self) -> bool {
        matches!(self, Self::NotANumber)
    }

    pub const fn value(self) -> Option<i64> {
        match self {
            Self::Value(v) => Some(v),
            Self::NotANumber => None,
        }
    }
}

impl PartialEq<i64> for Coerced {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Self::Value(v) if v == other)
    }
}

impl PartialOrd<i64> for Coerced {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        match self {
            Self::Value(v) => Some(v.cmp(other)),
            Self::NotANumber => None,
        }
    }
}

/// Best-effort integer parse of a slot value.
///
/// Surrounding whitespace, a leading sign and single `_` separators between
/// digits are accepted. Values beyond the `i64` range saturate, so they still
/// fail range checks instead of turning into `NotANumber`.
pub fn coerce_int(raw: &str) -> Coerced {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);

    if unsigned.starts_with('_') || unsigned.ends_with('_') || unsigned.contains("__") {
        return Coerced::NotANumber;
    }

    let digits: String = trimmed.chars().filter(|c| *c != '_').collect();
    match digits.parse::<i64>() {
        Ok(v) => Coerced::Value(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Coerced::Value(i64::MAX),
            IntErrorKind::NegOverflow => Coerced::Value(i64::MIN),
            _ => Coerced::NotANumber,
        },
    }
}
