// crates/engine/src/counter.rs
//! Closed-form enumeration of repeated-digit identifiers.
//!
//! Every identifier of even length `L` is `S * (10^(L/2) + 1)` for some
//! half-sequence `S` of `L/2` digits, so consecutive identifiers of one length
//! are exactly `10^(L/2) + 1` apart. Walking `S` instead of the identifiers
//! themselves keeps the work proportional to the hits, not the span.

use invalid_ids_shared_kernel::{IdSum, Range, digit_count, pow10};

/// Sum of all repeated-digit identifiers inside a normalized window.
///
/// `window` should have both ends at the same even digit length, as produced
/// by [`crate::normalize::windows`]. Any other range yields zero.
pub fn sum_invalid_ids(window: &Range) -> IdSum {
    invalid_ids(window).sum()
}

/// Repeated-digit identifiers inside a normalized window, ascending.
pub fn invalid_ids(window: &Range) -> InvalidIds {
    let length = window.lower().length();
    if !window.is_uniform() || length % 2 != 0 {
        return InvalidIds::exhausted(window);
    }

    let Some(cycle) = pow10(length / 2) else {
        return InvalidIds::exhausted(window);
    };

    let lower = window.lower().value();
    let upper = window.upper().value();

    // The half-sequence aligned with the lower bound's leading digits.
    let first_seq = lower / cycle;
    // Candidates are `cycle + 1` apart, so this never undercounts the loop
    // length needed; it may overshoot by one or two steps.
    let full_cycles = (upper - lower) / cycle;

    InvalidIds {
        lower,
        upper,
        next_seq: first_seq,
        step: cycle + 1,
        remaining: full_cycles + 2,
    }
}

/// Iterator returned by [`invalid_ids`].
#[derive(Debug, Clone)]
pub struct InvalidIds {
    lower: u64,
    upper: u64,
    next_seq: u64,
    step: u64,
    remaining: u64,
}

impl InvalidIds {
    const fn exhausted(window: &Range) -> Self {
        Self {
            lower: window.lower().value(),
            upper: window.upper().value(),
            next_seq: 0,
            step: 0,
            remaining: 0,
        }
    }
}

impl Iterator for InvalidIds {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while self.remaining > 0 {
            self.remaining -= 1;
            let seq = self.next_seq;
            self.next_seq += 1;

            // An overflowing candidate is above every u64 upper bound.
            let Some(candidate) = seq.checked_mul(self.step) else {
                self.remaining = 0;
                return None;
            };
            if candidate < self.lower {
                continue;
            }
            if candidate > self.upper {
                self.remaining = 0;
                return None;
            }
            return Some(candidate);
        }
        None
    }
}

/// Whether `id` is some digit sequence written twice.
pub fn is_invalid_id(id: u64) -> bool {
    let length = digit_count(id);
    if length % 2 != 0 {
        return false;
    }
    pow10(length / 2).is_some_and(|cycle| id / cycle == id % cycle)
}

/// Linear-scan sum over every identifier in `range`.
///
/// Only meant for small ranges: it is the reference the closed form is
/// checked against.
pub fn brute_force(range: &Range) -> IdSum {
    (range.lower().value()..=range.upper().value())
        .filter(|&id| is_invalid_id(id))
        .sum()
}
