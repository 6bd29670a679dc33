//! # Projection Properties
//!
//! End-to-end checks over the public calendar API: projection is a pure
//! function, malformed records are contained, the regional tables resolve
//! to the right local days, and the calendar state machine stays on valid
//! ranges under arbitrary navigation.

use aibos_calendar::{
    events_for_region, priority_color, project, project_with_stats, transition, CalendarAction,
    CalendarState, ViewMode,
};
use aibos_core::{Frequency, ItemStatus, OrganizationId, Priority, StatutoryItem, StatutoryItemId};
use chrono::NaiveDate;
use proptest::prelude::*;

fn item(id: &str, due: Option<String>, priority: Priority) -> StatutoryItem {
    StatutoryItem {
        id: StatutoryItemId::new(id),
        organization_id: OrganizationId::new("acme"),
        category: "Regulatory Compliance".to_string(),
        subcategory: None,
        title: format!("Obligation {id}"),
        description: None,
        due_date: due,
        frequency: Frequency::OneTime,
        status: ItemStatus::Pending,
        priority,
        assigned_to: None,
        completed_at: None,
        completed_by: None,
    }
}

// ---------------------------------------------------------------------------
// Regional tables
// ---------------------------------------------------------------------------

#[test]
fn us_tax_filing_deadline_in_new_york() {
    let events = events_for_region("US", 2025, "America/New_York");
    let tax = events
        .iter()
        .find(|e| e.title == "Tax Filing Deadline")
        .expect("tax filing deadline present");
    assert_eq!(tax.date, NaiveDate::from_ymd_opt(2025, 4, 15).unwrap());
    assert_eq!(tax.start.to_rfc3339(), "2025-04-15T00:00:00-04:00");
}

#[test]
fn unknown_region_is_empty() {
    assert!(events_for_region("ZZ", 2025, "UTC").is_empty());
    assert!(project(&[], "ZZ", 2025, "UTC").is_empty());
}

#[test]
fn every_priority_has_a_color() {
    for p in Priority::all() {
        assert!(priority_color(*p).background.starts_with('#'));
    }
}

// ---------------------------------------------------------------------------
// Malformed records
// ---------------------------------------------------------------------------

#[test]
fn malformed_due_date_is_excluded_and_the_rest_survive() {
    let items = vec![
        item("a", Some("2025-02-01".into()), Priority::Low),
        item("b", Some("not-a-date".into()), Priority::High),
        item("c", Some("2025-02-03T09:30:00+01:00".into()), Priority::Critical),
    ];
    let (events, stats) = project_with_stats(&items, "UK", 2025, "Europe/London");

    assert!(events.iter().any(|e| e.id == "statutory-a"));
    assert!(events.iter().any(|e| e.id == "statutory-c"));
    assert!(!events.iter().any(|e| e.id == "statutory-b"));
    assert_eq!(stats.malformed_items, 1);
    assert_eq!(stats.statutory_events + stats.regional_events, events.len());
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

fn arb_due() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        (2020i32..2030, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| Some(format!("{y:04}-{m:02}-{d:02}"))),
        (2020i32..2030, 1u32..=12, 1u32..=28, 0u32..24)
            .prop_map(|(y, m, d, h)| Some(format!("{y:04}-{m:02}-{d:02}T{h:02}:15:00Z"))),
        "[a-z ]{0,12}".prop_map(Some),
    ]
}

fn arb_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Medium),
        Just(Priority::High),
        Just(Priority::Critical),
    ]
}

fn arb_items() -> impl Strategy<Value = Vec<StatutoryItem>> {
    prop::collection::vec((arb_due(), arb_priority()), 0..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (due, priority))| item(&i.to_string(), due, priority))
            .collect()
    })
}

fn arb_action() -> impl Strategy<Value = CalendarAction> {
    prop_oneof![
        Just(CalendarAction::Previous),
        Just(CalendarAction::Next),
        Just(CalendarAction::SwitchView(ViewMode::Month)),
        Just(CalendarAction::SwitchView(ViewMode::Week)),
        Just(CalendarAction::SwitchView(ViewMode::Day)),
        (2000i32..2100, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
            CalendarAction::Today(NaiveDate::from_ymd_opt(y, m, d).unwrap())
        }),
    ]
}

proptest! {
    #[test]
    fn projection_is_idempotent(
        items in arb_items(),
        region in prop_oneof![Just("US"), Just("CA"), Just("EU"), Just("UK"), Just("ZZ")],
        tz in prop_oneof![Just("UTC"), Just("America/New_York"), Just("Asia/Kolkata"), Just("Bogus/Zone")],
    ) {
        let first = project(&items, region, 2025, tz);
        let second = project(&items, region, 2025, tz);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn projection_accounts_for_every_item(items in arb_items()) {
        let (events, stats) = project_with_stats(&items, "US", 2025, "UTC");
        prop_assert_eq!(
            stats.statutory_events + stats.undated_items + stats.malformed_items,
            items.len()
        );
        prop_assert_eq!(events.len(), stats.statutory_events + stats.regional_events);
    }

    #[test]
    fn navigation_keeps_cursor_visible(actions in prop::collection::vec(arb_action(), 0..40)) {
        let start = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();
        let state = actions
            .into_iter()
            .fold(CalendarState::new(start), transition);
        let range = state.visible_range();
        prop_assert!(range.contains(state.cursor));
        prop_assert!(range.start <= range.end);
        if state.mode == ViewMode::Month {
            prop_assert_eq!(range.days().count() % 7, 0);
        }
    }
}
