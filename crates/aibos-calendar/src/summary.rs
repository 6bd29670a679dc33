//! Dashboard counts over an organization's statutory items.
//!
//! Status counts use [`StatutoryItem::effective_status`], so `overdue` is
//! always derived from the due date at `as_of` and never read from the
//! stored status.

use std::collections::BTreeMap;

use chrono::{DateTime, Days, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use aibos_core::timezone::local_date;
use aibos_core::{ItemStatus, Priority, StatutoryItem, StatutoryItemId};

use crate::event::ComplianceEvent;

/// Aggregate compliance state at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceSummary {
    /// Total statutory items considered.
    pub total_items: usize,
    /// Items per effective status. Every status is present, possibly zero.
    pub by_status: BTreeMap<ItemStatus, usize>,
    /// Items per priority. Every priority is present, possibly zero.
    pub by_priority: BTreeMap<Priority, usize>,
    /// Items that are overdue at `as_of`, in input order.
    pub overdue: Vec<StatutoryItemId>,
    /// Events within the upcoming window, by date then urgency.
    pub upcoming: Vec<ComplianceEvent>,
}

impl ComplianceSummary {
    /// Summarize `items` and the projected `events` as of `as_of`.
    ///
    /// `upcoming` holds events dated from today through `window_days` days
    /// ahead, both inclusive, with today taken in `tz`.
    pub fn compute(
        items: &[StatutoryItem],
        events: &[ComplianceEvent],
        as_of: DateTime<Utc>,
        tz: Tz,
        window_days: u32,
    ) -> Self {
        let mut by_status: BTreeMap<ItemStatus, usize> =
            ItemStatus::all().iter().map(|s| (*s, 0)).collect();
        let mut by_priority: BTreeMap<Priority, usize> =
            Priority::all().iter().map(|p| (*p, 0)).collect();
        let mut overdue = Vec::new();

        for item in items {
            let status = item.effective_status(as_of, tz);
            *by_status.entry(status).or_default() += 1;
            *by_priority.entry(item.priority).or_default() += 1;
            if status == ItemStatus::Overdue {
                overdue.push(item.id.clone());
            }
        }

        let today = local_date(as_of, tz);
        let horizon = today
            .checked_add_days(Days::new(u64::from(window_days)))
            .unwrap_or(today);
        let mut upcoming: Vec<ComplianceEvent> = events
            .iter()
            .filter(|e| today <= e.date && e.date <= horizon)
            .cloned()
            .collect();
        upcoming.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| b.priority.cmp(&a.priority))
                .then_with(|| a.title.cmp(&b.title))
        });

        if !overdue.is_empty() {
            tracing::info!(overdue = overdue.len(), total = items.len(), "overdue statutory items");
        }

        Self {
            total_items: items.len(),
            by_status,
            by_priority,
            overdue,
            upcoming,
        }
    }

    /// Count for one effective status.
    pub fn status_count(&self, status: ItemStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    /// Count for one priority.
    pub fn priority_count(&self, priority: Priority) -> usize {
        self.by_priority.get(&priority).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regional::events_for_region;
    use aibos_core::{Frequency, OrganizationId};
    use chrono::TimeZone;

    fn item(id: &str, due: Option<&str>, status: ItemStatus, priority: Priority) -> StatutoryItem {
        StatutoryItem {
            id: StatutoryItemId::new(id),
            organization_id: OrganizationId::new("acme"),
            category: "Tax & Finance".to_string(),
            subcategory: None,
            title: format!("Item {id}"),
            description: None,
            due_date: due.map(str::to_string),
            frequency: Frequency::Annual,
            status,
            priority,
            assigned_to: None,
            completed_at: None,
            completed_by: None,
        }
    }

    #[test]
    fn overdue_is_derived_not_stored() {
        let as_of = Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap();
        let items = vec![
            item("late", Some("2025-04-15"), ItemStatus::Pending, Priority::High),
            item("done", Some("2025-04-15"), ItemStatus::Completed, Priority::High),
            item("stale", Some("2025-06-01"), ItemStatus::Overdue, Priority::Low),
            item("open", None, ItemStatus::InProgress, Priority::Critical),
        ];
        let summary = ComplianceSummary::compute(&items, &[], as_of, Tz::UTC, 30);

        assert_eq!(summary.total_items, 4);
        assert_eq!(summary.overdue, vec![StatutoryItemId::new("late")]);
        assert_eq!(summary.status_count(ItemStatus::Overdue), 1);
        assert_eq!(summary.status_count(ItemStatus::Pending), 1);
        assert_eq!(summary.status_count(ItemStatus::Completed), 1);
        assert_eq!(summary.status_count(ItemStatus::InProgress), 1);
        assert_eq!(summary.status_count(ItemStatus::Cancelled), 0);
        assert_eq!(summary.priority_count(Priority::High), 2);
        assert_eq!(summary.by_status.len(), ItemStatus::all().len());
    }

    #[test]
    fn upcoming_window_is_inclusive_and_sorted() {
        let as_of = Utc.with_ymd_and_hms(2025, 4, 1, 12, 0, 0).unwrap();
        let events = events_for_region("US", 2025, "UTC");
        let summary = ComplianceSummary::compute(&[], &events, as_of, Tz::UTC, 30);
        let titles: Vec<&str> = summary.upcoming.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Tax Filing Deadline", "Form 941 Quarterly Payroll Return (Q1)"]
        );
    }

    #[test]
    fn today_follows_display_timezone() {
        // 2025-04-15 02:00 UTC is still April 14 in New York.
        let as_of = Utc.with_ymd_and_hms(2025, 4, 15, 2, 0, 0).unwrap();
        let items = vec![item("x", Some("2025-04-14"), ItemStatus::Pending, Priority::Medium)];
        let ny: Tz = "America/New_York".parse().unwrap();
        assert!(ComplianceSummary::compute(&items, &[], as_of, ny, 0).overdue.is_empty());
        assert_eq!(ComplianceSummary::compute(&items, &[], as_of, Tz::UTC, 0).overdue.len(), 1);
    }
}
