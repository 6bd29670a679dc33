//! # aibos-calendar — Compliance Calendar
//!
//! Turns statutory items and regional rule tables into calendar events, and
//! models the calendar surface that displays them.
//!
//! ## Architecture
//!
//! - **Event** (`event.rs`): the projected, never-persisted
//!   [`ComplianceEvent`] and its back-reference to the record or template it
//!   came from.
//!
//! - **Regional** (`regional.rs`): closed per-region tables of recurring
//!   statutory deadlines (North America, EU, UK) resolved against a year
//!   and timezone.
//!
//! - **Projector** (`projector.rs`): merges organization-specific statutory
//!   items with the regional events into one list. Malformed items are
//!   skipped, never fatal.
//!
//! - **Style** (`style.rs`): exhaustive priority → color mapping.
//!
//! - **View** (`view.rs`): the month/week/day state machine as pure
//!   `(state, action) -> state` transitions, the grid renderer, and the
//!   selection callbacks.
//!
//! - **Summary** (`summary.rs`): dashboard counts with derived `overdue`.
//!
//! ## Crate Policy
//!
//! - Depends only on `aibos-core` internally.
//! - Every public entry point is total. Bad input degrades the output; it
//!   never aborts a projection.

pub mod event;
pub mod projector;
pub mod regional;
pub mod style;
pub mod summary;
pub mod view;

pub use event::{ComplianceEvent, EventSource};
pub use projector::{project, project_with_stats, ProjectionStats};
pub use regional::{events_for_region, RegionCode, RegionalComplianceTemplate};
pub use style::{priority_color, EventColor};
pub use summary::ComplianceSummary;
pub use view::{
    transition, CalendarAction, CalendarHandler, CalendarRender, CalendarState, CalendarView,
    DateRange, ViewMode,
};
