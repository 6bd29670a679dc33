//! # Statutory Event Projection
//!
//! Merges an organization's statutory items with the regional rule table
//! into a single list of [`ComplianceEvent`]s.
//!
//! ## Projection Rules
//!
//! 1. Every item with a parseable due date becomes one all-day event on
//!    its local day in the display timezone.
//! 2. Items without a due date are left off the calendar.
//! 3. Items whose due date cannot be parsed are skipped with a warning.
//!    One bad record never blocks the rest of the calendar.
//! 4. Regional events for `(region, year, timezone)` are appended.
//!
//! No deduplication happens between regional and organization events, even
//! when title and date coincide: they are distinct obligations. The output
//! is unsorted; the view orders events for display.
//!
//! Projection is a pure function of its inputs. Calling it twice with the
//! same arguments yields equal results.

use serde::Serialize;

use aibos_core::timezone::resolve_or_utc;
use aibos_core::StatutoryItem;

use crate::event::{ComplianceEvent, EventSource};
use crate::regional::events_for_region;

/// Counts describing one projection pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectionStats {
    /// Events built from statutory items.
    pub statutory_events: usize,
    /// Events built from the regional table.
    pub regional_events: usize,
    /// Items skipped because they have no due date.
    pub undated_items: usize,
    /// Items skipped because their due date is malformed.
    pub malformed_items: usize,
}

/// Project statutory items and regional templates into calendar events.
pub fn project(
    items: &[StatutoryItem],
    region_code: &str,
    year: i32,
    timezone_id: &str,
) -> Vec<ComplianceEvent> {
    project_with_stats(items, region_code, year, timezone_id).0
}

/// [`project`], also returning what was included and skipped.
pub fn project_with_stats(
    items: &[StatutoryItem],
    region_code: &str,
    year: i32,
    timezone_id: &str,
) -> (Vec<ComplianceEvent>, ProjectionStats) {
    let tz = resolve_or_utc(timezone_id);
    let mut stats = ProjectionStats::default();
    let mut events = Vec::with_capacity(items.len());

    for item in items {
        let due = match item.parsed_due_date() {
            None => {
                stats.undated_items += 1;
                continue;
            }
            Some(Err(e)) => {
                tracing::warn!(item = %item.id, error = %e, "skipping statutory item with malformed due date");
                stats.malformed_items += 1;
                continue;
            }
            Some(Ok(due)) => due,
        };

        events.push(ComplianceEvent::all_day(
            format!("statutory-{}", item.id.as_str()),
            item.title.clone(),
            due.local_date_in(tz),
            tz,
            item.priority,
            item.category.clone(),
            item.description.clone(),
            EventSource::Statutory {
                item_id: item.id.clone(),
                organization_id: item.organization_id.clone(),
            },
        ));
    }
    stats.statutory_events = events.len();

    let regional = events_for_region(region_code, year, timezone_id);
    stats.regional_events = regional.len();
    events.extend(regional);

    tracing::debug!(
        statutory = stats.statutory_events,
        regional = stats.regional_events,
        skipped = stats.malformed_items,
        "projected compliance events"
    );
    (events, stats)
}
