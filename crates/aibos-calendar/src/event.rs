//! # Compliance Events
//!
//! A [`ComplianceEvent`] is a display-ready calendar entry. Events are built
//! fresh on every projection pass and discarded when the inputs change;
//! nothing in the workspace mutates or persists them.

use chrono::{DateTime, FixedOffset, NaiveDate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use aibos_core::timezone::local_midnight;
use aibos_core::{OrganizationId, Priority, StatutoryItemId};

use crate::regional::RegionCode;

/// Where a projected event came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventSource {
    /// An organization's own statutory item.
    Statutory {
        /// The originating item.
        item_id: StatutoryItemId,
        /// The organization it belongs to.
        organization_id: OrganizationId,
    },
    /// A regional rule-table template.
    Regional {
        /// Region whose table produced the event.
        region: RegionCode,
        /// Template key, unique within the region.
        template: String,
    },
}

/// A calendar event projected from a statutory item or regional template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceEvent {
    /// Event identifier, unique within one projection.
    pub id: String,
    /// Title shown on the calendar.
    pub title: String,
    /// Start of the event in the display timezone.
    pub start: DateTime<FixedOffset>,
    /// End of the event. Equal to `start` for all-day events.
    pub end: DateTime<FixedOffset>,
    /// Whether the event has no time-of-day component.
    pub all_day: bool,
    /// Local calendar day the event falls on.
    pub date: NaiveDate,
    /// Priority, drives styling.
    pub priority: Priority,
    /// Category label.
    pub category: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Back-reference to the originating record or template.
    pub source: EventSource,
}

impl ComplianceEvent {
    /// Build an all-day event on `date` in `tz`.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn all_day(
        id: String,
        title: String,
        date: NaiveDate,
        tz: Tz,
        priority: Priority,
        category: String,
        description: Option<String>,
        source: EventSource,
    ) -> Self {
        let start = local_midnight(date, tz);
        Self {
            id,
            title,
            start,
            end: start,
            all_day: true,
            date,
            priority,
            category,
            description,
            source,
        }
    }

    /// Whether the event falls on `date`.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}
