//! Error taxonomy for building hour artifacts.
//!
//! Everything here is fail-fast: the core does no I/O, so none of these are
//! retryable. I/O-facing layers wrap them in `anyhow` with path context.

/// Errors raised while validating inputs or materializing an hour artifact.
#[derive(Debug, thiserror::Error)]
pub enum DistributionError {
    /// A numeric key field does not fit the 32-bit field of the export format.
    #[error("{field} value {value} does not fit into a 32-bit wire field")]
    Encoding { field: &'static str, value: i64 },

    /// The content of a node was read before `prepare` completed.
    #[error("content of `{name}` requested before it was prepared")]
    NotPrepared { name: String },

    /// A target hour carried minutes, seconds or sub-second components.
    #[error("{0} is not aligned to a full hour")]
    UnalignedHour(String),

    /// An hours-since-epoch value cannot be represented as a calendar instant.
    #[error("timestamp out of range: {0} hours since epoch")]
    InvalidTimestamp(i64),

    #[error("key data must be {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("region must not be empty")]
    EmptyRegion,
}
