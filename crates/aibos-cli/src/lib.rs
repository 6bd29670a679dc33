//! # aibos-cli — CLI for AIBOS Compliance Tooling
//!
//! Provides the `aibos` command-line interface over the calendar and
//! hierarchy projections.
//!
//! ## Subcommands
//!
//! - `aibos timezones` — Timezone catalog and host detection.
//! - `aibos calendar` — Month/week/day compliance calendar.
//! - `aibos summary` — Status counts, overdue items, upcoming deadlines.
//! - `aibos hierarchy` — Guarded organization tree rendering.
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | success |
//! | 1 | operational error (bad file, invalid configuration) |
//! | 2 | hierarchy render refused by the kill switch |

pub mod calendar;
pub mod config;
pub mod hierarchy;
pub mod ingest;
pub mod summary;
pub mod timezones;

use anyhow::{Context, Result};
use serde::Serialize;

/// Success.
pub const EXIT_OK: u8 = 0;
/// Operational error.
pub const EXIT_ERROR: u8 = 1;
/// Render refused by the kill switch.
pub const EXIT_REFUSED: u8 = 2;

/// Pretty-print `value` as JSON on stdout.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}
