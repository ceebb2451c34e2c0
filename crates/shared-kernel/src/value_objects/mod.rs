// crates/shared-kernel/src/value_objects/mod.rs
pub mod bound;
pub mod id_sum;
pub mod range;

pub use bound::{Bound, digit_count, pow10};
pub use id_sum::IdSum;
pub use range::Range;
