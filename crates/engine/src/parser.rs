// crates/engine/src/parser.rs
use crate::error::{BoundSide, ParseError, SegmentError};
use invalid_ids_shared_kernel::{Bound, Range};

/// Lazily parse a comma-separated list of `<lower>-<upper>` segments.
///
/// Line breaks anywhere inside a segment are dropped before parsing, and
/// segments that are blank after that are ignored. Each item carries the
/// zero-based index of its segment in the input text.
pub fn parse_ranges(
    input: &str,
) -> impl Iterator<Item = (usize, Result<Range, SegmentError>)> + '_ {
    input.split(',').enumerate().filter_map(|(index, raw)| {
        let cleaned: String = raw.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
        let segment = cleaned.trim();
        if segment.is_empty() {
            return None;
        }
        Some((index, parse_segment(index, segment)))
    })
}

/// Parse one `<lower>-<upper>` segment.
///
/// # Errors
/// Returns a [`SegmentError`] when the text is malformed or describes a range
/// that breaks the bound/range invariants.
pub fn parse_segment(index: usize, segment: &str) -> Result<Range, SegmentError> {
    let fail = |fault: ParseError| SegmentError::new(index, segment, fault);

    let (lower_text, upper_text) = segment
        .split_once('-')
        .ok_or_else(|| fail(ParseError::MissingSeparator))?;

    let lower = parse_bound(lower_text.trim(), BoundSide::Lower).map_err(fail)?;
    let upper = parse_bound(upper_text.trim(), BoundSide::Upper).map_err(fail)?;

    let lower = Bound::new(lower.0, lower.1).map_err(|e| SegmentError::new(index, segment, e))?;
    let upper = Bound::new(upper.0, upper.1).map_err(|e| SegmentError::new(index, segment, e))?;

    Range::new(lower, upper).map_err(|e| SegmentError::new(index, segment, e))
}

/// Returns `(textual length, value)`.
fn parse_bound(text: &str, side: BoundSide) -> Result<(u32, u64), ParseError> {
    if text.is_empty() {
        return Err(ParseError::MissingBound { side });
    }
    // u64::from_str accepts a leading '+', which has no place in a bound
    if text.starts_with('+') {
        return Err(ParseError::UnexpectedSign {
            side,
            text: text.to_string(),
        });
    }
    let value = text.parse::<u64>().map_err(|source| ParseError::InvalidNumber {
        side,
        text: text.to_string(),
        source,
    })?;
    let length = u32::try_from(text.len()).unwrap_or(u32::MAX);
    Ok((length, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InvariantViolation, SegmentFault};

    fn ranges(input: &str) -> Vec<Range> {
        parse_ranges(input)
            .map(|(_, r)| r.expect("valid segment"))
            .collect()
    }

    #[test]
    fn parses_in_input_order() {
        let parsed = ranges("11-22,95-115,998-1012");
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0], Range::from_values(11, 22).unwrap());
        assert_eq!(parsed[1].lower().length(), 2);
        assert_eq!(parsed[1].upper().length(), 3);
        assert_eq!(parsed[2].upper().value(), 1012);
    }

    #[test]
    fn strips_stray_newlines() {
        let parsed = ranges("11-2\n2,\n95-115\n");
        assert_eq!(parsed[0].upper().value(), 22);
        assert_eq!(parsed[1], Range::from_values(95, 115).unwrap());
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn blank_segments_are_ignored_but_keep_indices() {
        let items: Vec<_> = parse_ranges("11-22,,33-44,").collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].0, 0);
        assert_eq!(items[1].0, 2);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(parse_ranges("").count(), 0);
        assert_eq!(parse_ranges("\n").count(), 0);
    }

    #[test]
    fn missing_separator() {
        let err = parse_segment(4, "1122").unwrap_err();
        assert_eq!(err.index, 4);
        assert_eq!(err.fault, SegmentFault::Parse(ParseError::MissingSeparator));
    }

    #[test]
    fn missing_bounds() {
        let err = parse_segment(0, "-22").unwrap_err();
        assert_eq!(
            err.fault,
            SegmentFault::Parse(ParseError::MissingBound {
                side: BoundSide::Lower
            })
        );
        let err = parse_segment(0, "11-").unwrap_err();
        assert_eq!(
            err.fault,
            SegmentFault::Parse(ParseError::MissingBound {
                side: BoundSide::Upper
            })
        );
    }

    #[test]
    fn non_numeric_bound() {
        let err = parse_segment(1, "11-2x").unwrap_err();
        assert!(matches!(
            err.fault,
            SegmentFault::Parse(ParseError::InvalidNumber {
                side: BoundSide::Upper,
                ..
            })
        ));
        assert!(parse_segment(1, "1-2-3").is_err());
        assert!(parse_segment(1, "+1-2").is_err());
    }

    #[test]
    fn overflowing_bound_is_a_parse_error() {
        let err = parse_segment(0, "1-18446744073709551616").unwrap_err();
        assert!(err.is_parse());
        assert!(parse_segment(0, "1-18446744073709551615").is_ok());
    }

    #[test]
    fn descending_range_is_an_invariant_violation() {
        let err = parse_segment(0, "22-11").unwrap_err();
        assert_eq!(
            err.fault,
            SegmentFault::Invariant(InvariantViolation::LowerAboveUpper {
                lower: 22,
                upper: 11
            })
        );
    }

    #[test]
    fn leading_zero_is_an_invariant_violation() {
        let err = parse_segment(0, "0011-0022").unwrap_err();
        assert_eq!(
            err.fault,
            SegmentFault::Invariant(InvariantViolation::LengthMismatch {
                length: 4,
                value: 11
            })
        );
        assert!(parse_segment(0, "0-9").is_ok());
    }
}
