// crates/shared-kernel/src/value_objects/bound.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{InvariantResult, InvariantViolation};

/// Number of decimal digits in `value` (`0` has one digit).
#[inline]
pub const fn digit_count(value: u64) -> u32 {
    if value == 0 { 1 } else { value.ilog10() + 1 }
}

/// `10^exp`, or `None` when it does not fit in a `u64`.
#[inline]
pub const fn pow10(exp: u32) -> Option<u64> {
    10u64.checked_pow(exp)
}

/// A range endpoint paired with its decimal digit length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBound")]
pub struct Bound {
    length: u32,
    value: u64,
}

/// Unchecked wire form of [`Bound`].
#[derive(Deserialize)]
struct RawBound {
    length: u32,
    value: u64,
}

impl TryFrom<RawBound> for Bound {
    type Error = InvariantViolation;

    fn try_from(raw: RawBound) -> InvariantResult<Self> {
        Self::new(raw.length, raw.value)
    }
}

impl Bound {
    /// Builds a bound whose textual width is `length`.
    ///
    /// # Errors
    /// Returns an error if `length` is zero or `value` does not have exactly
    /// `length` digits (which is how leading zeros show up).
    pub const fn new(length: u32, value: u64) -> InvariantResult<Self> {
        if length == 0 {
            return Err(InvariantViolation::ZeroLength);
        }
        if digit_count(value) != length {
            return Err(InvariantViolation::LengthMismatch { length, value });
        }
        Ok(Self { length, value })
    }

    /// Builds a bound whose length is derived from the value.
    #[inline]
    pub const fn from_value(value: u64) -> Self {
        Self {
            length: digit_count(value),
            value,
        }
    }

    /// `10^(length - 1)`, the smallest positive value with `length` digits.
    pub const fn min_of_length(length: u32) -> Option<Self> {
        if length == 0 {
            return None;
        }
        match pow10(length - 1) {
            Some(value) => Some(Self { length, value }),
            None => None,
        }
    }

    /// Largest representable value with `length` digits.
    ///
    /// For the widest class this saturates at `u64::MAX`.
    pub const fn max_of_length(length: u32) -> Option<Self> {
        if length == 0 || length > digit_count(u64::MAX) {
            return None;
        }
        let value = match pow10(length) {
            Some(p) => p - 1,
            None => u64::MAX,
        };
        Some(Self { length, value })
    }

    #[inline]
    pub const fn length(self) -> u32 {
        self.length
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.value
    }

    #[inline]
    pub const fn has_even_length(self) -> bool {
        self.length % 2 == 0
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
