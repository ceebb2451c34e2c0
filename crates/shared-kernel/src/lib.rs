// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    BoundSide, ErrorContext, InvalidIdsError, InvariantResult, InvariantViolation, ParseError,
    Result, SegmentError, SegmentFault,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{Bound, IdSum, Range, digit_count, pow10};
