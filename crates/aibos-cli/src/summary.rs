//! # Summary CLI — compliance status counts.
//!
//! ```bash
//! aibos summary --items items.json
//! aibos summary --items items.json --as-of 2025-05-01T00:00:00Z --json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Utc};
use clap::Args;

use aibos_calendar::{project, ComplianceSummary};
use aibos_core::timezone::{local_date, resolve_or_utc};
use aibos_core::{ItemStatus, Priority};

use crate::config::AibosConfig;
use crate::ingest::load_statutory_items;
use crate::{print_json, EXIT_OK};

/// Arguments for `aibos summary`.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Statutory items file (JSON or YAML array).
    #[arg(long)]
    pub items: PathBuf,

    /// Evaluate as of this RFC 3339 instant instead of now.
    #[arg(long)]
    pub as_of: Option<DateTime<Utc>>,

    /// Override `upcoming_window_days`.
    #[arg(long)]
    pub window_days: Option<u32>,

    /// Emit JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute `aibos summary`.
pub fn run_summary(args: &SummaryArgs, config: &AibosConfig) -> Result<u8> {
    let timezone_id = config.timezone_id();
    let tz = resolve_or_utc(&timezone_id);
    let as_of = args.as_of.unwrap_or_else(Utc::now);
    let window = args.window_days.unwrap_or(config.upcoming_window_days);

    let ingested = load_statutory_items(&args.items)
        .with_context(|| format!("loading statutory items from {}", args.items.display()))?;
    let items = ingested.records;

    // The window may reach into next year's regional deadlines.
    let year = local_date(as_of, tz).year();
    let mut events = project(&items, &config.region, year, &timezone_id);
    events.extend(project(&[], &config.region, year + 1, &timezone_id));

    let summary = ComplianceSummary::compute(&items, &events, as_of, tz, window);

    if args.json {
        print_json(&summary)?;
    } else {
        print!("{}", format_summary(&summary, ingested.skipped, window));
    }
    Ok(EXIT_OK)
}

/// Plain-text rendering of a summary.
pub fn format_summary(summary: &ComplianceSummary, skipped: usize, window_days: u32) -> String {
    let mut out = String::new();
    out.push_str(&format!("Statutory items: {}", summary.total_items));
    if skipped > 0 {
        out.push_str(&format!(" ({skipped} malformed skipped)"));
    }
    out.push_str("\n\nBy status:\n");
    for status in ItemStatus::all() {
        out.push_str(&format!("  {:<12} {}\n", status.as_str(), summary.status_count(*status)));
    }
    out.push_str("\nBy priority:\n");
    for priority in Priority::all().iter().rev() {
        out.push_str(&format!("  {:<12} {}\n", priority.as_str(), summary.priority_count(*priority)));
    }

    if !summary.overdue.is_empty() {
        out.push_str("\nOverdue:\n");
        for id in &summary.overdue {
            out.push_str(&format!("  {}\n", id.as_str()));
        }
    }

    out.push_str(&format!("\nUpcoming ({window_days} days):\n"));
    if summary.upcoming.is_empty() {
        out.push_str("  none\n");
    }
    for event in &summary.upcoming {
        out.push_str(&format!(
            "  {}  [{:<8}] {}\n",
            event.date,
            event.priority.as_str(),
            event.title
        ));
    }
    out
}
