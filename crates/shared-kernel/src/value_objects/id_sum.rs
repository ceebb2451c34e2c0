// crates/shared-kernel/src/value_objects/id_sum.rs
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Sum of invalid identifiers.
///
/// Identifiers are `u64`; their sum is kept in 128 bits since a single wide
/// range can hold more than `u64::MAX` worth of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdSum(u128);

impl IdSum {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn value(self) -> u128 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Adds one identifier.
    #[inline]
    pub const fn push(&mut self, id: u64) {
        self.0 += id as u128;
    }
}

impl Default for IdSum {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for IdSum {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for IdSum {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Zero for IdSum {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for IdSum {
    fn from(value: u64) -> Self {
        Self(u128::from(value))
    }
}

impl From<u128> for IdSum {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<IdSum> for u128 {
    fn from(value: IdSum) -> Self {
        value.0
    }
}

impl Sum for IdSum {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for IdSum {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Sum<u64> for IdSum {
    fn sum<I: Iterator<Item = u64>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |mut acc, id| {
            acc.push(id);
            acc
        })
    }
}

impl PartialEq<u128> for IdSum {
    fn eq(&self, other: &u128) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for IdSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
