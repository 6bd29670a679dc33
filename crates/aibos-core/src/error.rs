//! # Error Types
//!
//! Defines the error type used by record parsing and domain lookups across
//! AIBOS. All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Projections never surface these errors to their callers. A record that
//!   fails to parse is excluded from the projected output and logged.
//! - Parsing errors carry the offending input verbatim so the log line is
//!   enough to locate the bad record.

use thiserror::Error;

/// Top-level error type for AIBOS record handling.
#[derive(Error, Debug)]
pub enum AibosError {
    /// Timezone identifier unknown to the tz database.
    #[error("invalid timezone identifier: {0:?}")]
    InvalidTimezone(String),

    /// Due date is neither `YYYY-MM-DD` nor an RFC 3339 instant.
    #[error("invalid date {input:?}: {reason}")]
    InvalidDate {
        /// The raw input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Priority label outside `low`/`medium`/`high`/`critical`.
    #[error("unknown priority: {0:?}")]
    UnknownPriority(String),

    /// Status label outside the five statutory statuses.
    #[error("unknown status: {0:?}")]
    UnknownStatus(String),

    /// Recurrence frequency label not recognised.
    #[error("unknown frequency: {0:?}")]
    UnknownFrequency(String),

    /// Region code with no compliance rule table.
    #[error("unknown region code: {0:?}")]
    UnknownRegion(String),

    /// Record did not match the expected shape.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias for results carrying an [`AibosError`].
pub type AibosResult<T> = Result<T, AibosError>;
