//! # Due Dates
//!
//! Statutory due dates arrive as strings in one of two shapes:
//!
//! - a calendar date, `YYYY-MM-DD`, which names the same local day in every
//!   timezone;
//! - an RFC 3339 instant, which names a point in time and must be converted
//!   into the display timezone before its local day is known.
//!
//! [`DueDate::parse`] distinguishes the two. Anything else is rejected, and
//! the caller decides whether that means skipping the record.

use chrono::{DateTime, FixedOffset, NaiveDate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{AibosError, AibosResult};

/// A parsed statutory due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DueDate {
    /// A timezone-free calendar date.
    Date(NaiveDate),
    /// A precise instant with the offset it was recorded in.
    Instant(DateTime<FixedOffset>),
}

impl DueDate {
    /// Parse a due date string.
    ///
    /// Accepts `YYYY-MM-DD` and RFC 3339 (`2025-04-15T23:00:00-04:00`). A
    /// timestamp without an offset names no instant and is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`AibosError::InvalidDate`] for empty or unrecognised input.
    pub fn parse(s: &str) -> AibosResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AibosError::InvalidDate {
                input: s.to_string(),
                reason: "empty".to_string(),
            });
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(Self::Date(date));
        }
        if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self::Instant(instant));
        }

        Err(AibosError::InvalidDate {
            input: s.to_string(),
            reason: "expected YYYY-MM-DD or an RFC 3339 timestamp".to_string(),
        })
    }

    /// The local calendar day this due date falls on in `tz`.
    pub fn local_date_in(&self, tz: Tz) -> NaiveDate {
        match self {
            Self::Date(date) => *date,
            Self::Instant(instant) => instant.with_timezone(&tz).date_naive(),
        }
    }
}

impl std::fmt::Display for DueDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Instant(instant) => f.write_str(&instant.to_rfc3339()),
        }
    }
}
