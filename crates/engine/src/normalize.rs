// crates/engine/src/normalize.rs
//! Snapping ranges onto even digit lengths.
//!
//! Repeated-digit identifiers only exist at even lengths, so a range is first
//! pulled in from any odd-length end and then cut into windows that each stay
//! inside one even length.

use invalid_ids_shared_kernel::{Bound, Range};

/// Narrow `range` to a single even-length window.
///
/// An odd-length lower end jumps up to the smallest number of the next
/// length; an odd-length upper end drops to the largest number of the
/// previous length. Returns `None` when no even-length value is left, e.g.
/// when both ends share the same odd length, and also when the snapped range
/// still covers more than one even length. Use [`windows`] for those.
pub fn normalize(range: &Range) -> Option<Range> {
    snap(range).filter(Range::is_uniform)
}

/// Split `range` into same-length, even-length windows in ascending order.
pub fn windows(range: &Range) -> Windows {
    match snap(range) {
        Some(snapped) => Windows {
            lower: snapped.lower(),
            upper: snapped.upper(),
            length: snapped.lower().length(),
        },
        None => Windows::empty(),
    }
}

/// Both ends moved onto even lengths; the lengths may still differ.
fn snap(range: &Range) -> Option<Range> {
    let (lower, upper) = (range.lower(), range.upper());

    if !lower.has_even_length() && lower.length() == upper.length() {
        return None;
    }

    let lower = if lower.has_even_length() {
        lower
    } else {
        Bound::min_of_length(lower.length() + 1)?
    };

    let upper = if upper.has_even_length() {
        upper
    } else {
        Bound::max_of_length(upper.length().checked_sub(1)?)?
    };

    Range::new(lower, upper).ok()
}

/// Iterator returned by [`windows`].
#[derive(Debug, Clone)]
pub struct Windows {
    lower: Bound,
    upper: Bound,
    length: u32,
}

impl Windows {
    const fn empty() -> Self {
        let bound = Bound::from_value(0);
        Self {
            lower: bound,
            upper: bound,
            // 0 has one digit; an odd cursor above the upper length ends the walk
            length: 3,
        }
    }
}

impl Iterator for Windows {
    type Item = Range;

    fn next(&mut self) -> Option<Range> {
        while self.length <= self.upper.length() {
            let length = self.length;
            self.length += 2;

            let lower = if length == self.lower.length() {
                self.lower
            } else {
                Bound::min_of_length(length)?
            };
            let upper = if length == self.upper.length() {
                self.upper
            } else {
                Bound::max_of_length(length)?
            };

            if let Ok(window) = Range::new(lower, upper) {
                return Some(window);
            }
        }
        None
    }
}
