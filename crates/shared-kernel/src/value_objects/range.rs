// crates/shared-kernel/src/value_objects/range.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use super::bound::Bound;
use crate::error::{InvariantResult, InvariantViolation};

/// Inclusive range of identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct Range {
    lower: Bound,
    upper: Bound,
}

#[derive(Deserialize)]
struct RawRange {
    lower: Bound,
    upper: Bound,
}

impl TryFrom<RawRange> for Range {
    type Error = InvariantViolation;

    fn try_from(raw: RawRange) -> InvariantResult<Self> {
        Self::new(raw.lower, raw.upper)
    }
}

impl Range {
    /// # Errors
    /// Returns an error if `lower` is greater than `upper`.
    pub const fn new(lower: Bound, upper: Bound) -> InvariantResult<Self> {
        if lower.value() > upper.value() {
            return Err(InvariantViolation::LowerAboveUpper {
                lower: lower.value(),
                upper: upper.value(),
            });
        }
        Ok(Self { lower, upper })
    }

    /// # Errors
    /// Returns an error if `lower > upper`.
    pub const fn from_values(lower: u64, upper: u64) -> InvariantResult<Self> {
        Self::new(Bound::from_value(lower), Bound::from_value(upper))
    }

    #[inline]
    pub const fn lower(&self) -> Bound {
        self.lower
    }

    #[inline]
    pub const fn upper(&self) -> Bound {
        self.upper
    }

    /// `upper - lower`; the number of identifiers in the range minus one.
    #[inline]
    pub const fn span(&self) -> u64 {
        self.upper.value() - self.lower.value()
    }

    #[inline]
    pub const fn contains(&self, value: u64) -> bool {
        self.lower.value() <= value && value <= self.upper.value()
    }

    /// Both ends share one digit length.
    #[inline]
    pub const fn is_uniform(&self) -> bool {
        self.lower.length() == self.upper.length()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lower, self.upper)
    }
}
