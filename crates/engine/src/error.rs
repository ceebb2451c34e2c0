// crates/engine/src/error.rs
pub use invalid_ids_shared_kernel::error::{
    BoundSide, InvalidIdsError, InvariantViolation, ParseError, Result, SegmentError, SegmentFault,
};
