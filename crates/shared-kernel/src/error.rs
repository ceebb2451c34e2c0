// crates/shared-kernel/src/error.rs
use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum InvalidIdsError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<InvalidIdsError>,
    },

    #[error(transparent)]
    Segment(#[from] SegmentError),

    #[error("Verification failed for segment {index} ({range}): closed form gave {actual}, scan gave {expected}")]
    Verification {
        index: usize,
        range: String,
        expected: u128,
        actual: u128,
    },

    #[error("Failed to read input '{path}': {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {source}")]
    OutputWrite {
        #[source]
        source: std::io::Error,
    },

    #[error("Thread pool creation failed: {details}")]
    ThreadPoolCreation { details: String },

    #[error("Failed to serialize {format} output: {details}")]
    Serialization { format: String, details: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

pub type Result<T> = std::result::Result<T, InvalidIdsError>;

/// Which end of a range a bound error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundSide {
    Lower,
    Upper,
}

impl fmt::Display for BoundSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lower => f.write_str("lower"),
            Self::Upper => f.write_str("upper"),
        }
    }
}

/// A segment's text does not have the `<int>-<int>` shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing '-' separator")]
    MissingSeparator,

    #[error("missing {side} bound")]
    MissingBound { side: BoundSide },

    #[error("{side} bound '{text}' must not carry a sign")]
    UnexpectedSign { side: BoundSide, text: String },

    #[error("invalid {side} bound '{text}': {source}")]
    InvalidNumber {
        side: BoundSide,
        text: String,
        #[source]
        source: ParseIntError,
    },
}

/// A structurally valid range that breaks the `Bound`/`Range` contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("lower bound {lower} is greater than upper bound {upper}")]
    LowerAboveUpper { lower: u64, upper: u64 },

    #[error("value {value} does not have exactly {length} digits")]
    LengthMismatch { length: u32, value: u64 },

    #[error("bound length must be positive")]
    ZeroLength,
}

pub type InvariantResult<T> = std::result::Result<T, InvariantViolation>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentFault {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

/// A failure tied to one comma-separated input segment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("segment {index} ('{segment}'): {fault}")]
pub struct SegmentError {
    pub index: usize,
    pub segment: String,
    pub fault: SegmentFault,
}

impl SegmentError {
    pub fn new(index: usize, segment: impl Into<String>, fault: impl Into<SegmentFault>) -> Self {
        Self {
            index,
            segment: segment.into(),
            fault: fault.into(),
        }
    }

    pub const fn is_parse(&self) -> bool {
        matches!(self.fault, SegmentFault::Parse(_))
    }
}

impl From<serde_json::Error> for InvalidIdsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InvalidIdsError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<InvalidIdsError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| InvalidIdsError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| InvalidIdsError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
