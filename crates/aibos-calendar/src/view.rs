//! # Calendar View
//!
//! The calendar surface is split in two:
//!
//! - [`CalendarState`]: view mode and navigation cursor. Transitions are
//!   pure functions `(state, action) -> state`, so the state machine is
//!   testable without any renderer.
//! - [`CalendarView`]: a borrowed window over projected events that renders
//!   a grid for a given state and dispatches selection callbacks. It owns
//!   no data and has no side effects beyond the callbacks.
//!
//! ## State Machine
//!
//! ```text
//!            SwitchView(m)
//!   Month ◀───────────────▶ Week ◀──────▶ Day      (initial: Month)
//!
//!   cursor: Today(d) → d
//!           Previous / Next → ±1 month | ±7 days | ±1 day (by mode)
//! ```
//!
//! There is no terminal state. Month navigation clamps the day of month
//! (Jan 31 → Feb 28), matching how calendar widgets behave.
//!
//! Weeks start on Sunday.

use chrono::{Datelike, Days, Months, NaiveDate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use aibos_core::timezone::{display_label, today_in};
use aibos_core::Priority;

use crate::event::ComplianceEvent;
use crate::style::{priority_color, EventColor};

// ─── State ───────────────────────────────────────────────────────────

/// Granularity of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Whole weeks covering one month.
    #[default]
    Month,
    /// Sunday to Saturday.
    Week,
    /// A single day.
    Day,
}

/// User actions that drive the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarAction {
    /// Jump to the given date (the current day in the display timezone).
    Today(NaiveDate),
    /// Move one period back.
    Previous,
    /// Move one period forward.
    Next,
    /// Change the view mode, keeping the cursor.
    SwitchView(ViewMode),
}

impl CalendarAction {
    /// `Today` for the current day in `tz`.
    pub fn today(tz: Tz) -> Self {
        Self::Today(today_in(tz))
    }
}

/// View mode plus the date the displayed period is anchored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarState {
    /// Current view mode.
    pub mode: ViewMode,
    /// Anchor date of the displayed period.
    pub cursor: NaiveDate,
}

impl CalendarState {
    /// Initial state: month view anchored on `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            mode: ViewMode::Month,
            cursor: today,
        }
    }

    /// Dates covered by the grid in the current mode.
    pub fn visible_range(&self) -> DateRange {
        match self.mode {
            ViewMode::Month => {
                let period = self.period();
                DateRange {
                    start: week_start(period.start),
                    end: week_end(period.end),
                }
            }
            ViewMode::Week | ViewMode::Day => self.period(),
        }
    }

    /// Dates that belong to the displayed period itself. For month view
    /// this excludes the leading and trailing days of adjacent months.
    pub fn period(&self) -> DateRange {
        match self.mode {
            ViewMode::Month => {
                let first = self.cursor.with_day(1).unwrap_or(self.cursor);
                let last = first
                    .checked_add_months(Months::new(1))
                    .and_then(|next| next.pred_opt())
                    .unwrap_or(first);
                DateRange { start: first, end: last }
            }
            ViewMode::Week => DateRange {
                start: week_start(self.cursor),
                end: week_end(self.cursor),
            },
            ViewMode::Day => DateRange {
                start: self.cursor,
                end: self.cursor,
            },
        }
    }
}

/// Apply `action` to `state`.
///
/// Navigation past the supported date range leaves the cursor unchanged.
pub fn transition(state: CalendarState, action: CalendarAction) -> CalendarState {
    let next = match action {
        CalendarAction::Today(today) => CalendarState {
            cursor: today,
            ..state
        },
        CalendarAction::SwitchView(mode) => CalendarState { mode, ..state },
        CalendarAction::Previous => CalendarState {
            cursor: step(state.cursor, state.mode, false).unwrap_or(state.cursor),
            ..state
        },
        CalendarAction::Next => CalendarState {
            cursor: step(state.cursor, state.mode, true).unwrap_or(state.cursor),
            ..state
        },
    };
    tracing::debug!(?action, mode = ?next.mode, cursor = %next.cursor, "calendar transition");
    next
}

fn step(cursor: NaiveDate, mode: ViewMode, forward: bool) -> Option<NaiveDate> {
    match (mode, forward) {
        (ViewMode::Month, true) => cursor.checked_add_months(Months::new(1)),
        (ViewMode::Month, false) => cursor.checked_sub_months(Months::new(1)),
        (ViewMode::Week, true) => cursor.checked_add_days(Days::new(7)),
        (ViewMode::Week, false) => cursor.checked_sub_days(Days::new(7)),
        (ViewMode::Day, true) => cursor.succ_opt(),
        (ViewMode::Day, false) => cursor.pred_opt(),
    }
}

fn week_start(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

fn week_end(date: NaiveDate) -> NaiveDate {
    let forward = u64::from(6 - date.weekday().num_days_from_sunday());
    date.checked_add_days(Days::new(forward)).unwrap_or(date)
}

/// An inclusive range of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First date.
    pub start: NaiveDate,
    /// Last date, inclusive.
    pub end: NaiveDate,
}

impl DateRange {
    /// Whether `date` lies within the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Iterate every date in the range.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

// ─── Rendering ───────────────────────────────────────────────────────

/// An event as drawn in a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEvent {
    /// Event id, passed back on selection.
    pub id: String,
    /// Title.
    pub title: String,
    /// Priority.
    pub priority: Priority,
    /// Colors derived from the priority.
    pub color: EventColor,
}

/// One day cell of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    /// The day.
    pub date: NaiveDate,
    /// False for leading/trailing days of adjacent months in month view.
    pub in_period: bool,
    /// Whether this is the current day.
    pub is_today: bool,
    /// Events on this day, most urgent first, then by title.
    pub events: Vec<RenderedEvent>,
}

/// A rendered calendar grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarRender {
    /// Period title, e.g. `April 2025`.
    pub title: String,
    /// Timezone and region, e.g. `America/New_York (EDT) | US`.
    pub subtitle: String,
    /// Mode the grid was rendered in.
    pub mode: ViewMode,
    /// Dates covered by `cells`.
    pub range: DateRange,
    /// Day cells in date order.
    pub cells: Vec<CalendarCell>,
}

/// Callbacks the host application receives from the calendar.
pub trait CalendarHandler {
    /// An event was activated.
    fn on_event_select(&mut self, event: &ComplianceEvent);

    /// An empty slot was selected, usually to create an item on that date.
    fn on_date_select(&mut self, date: NaiveDate);
}

/// A read-only calendar surface over projected events.
#[derive(Debug, Clone, Copy)]
pub struct CalendarView<'a> {
    events: &'a [ComplianceEvent],
    timezone_id: &'a str,
    region: &'a str,
}

impl<'a> CalendarView<'a> {
    /// Create a view. `timezone_id` and `region` only label the output.
    pub fn new(events: &'a [ComplianceEvent], timezone_id: &'a str, region: &'a str) -> Self {
        Self {
            events,
            timezone_id,
            region,
        }
    }

    /// Render the grid for `state`, marking `today`.
    pub fn render(&self, state: &CalendarState, today: NaiveDate) -> CalendarRender {
        let range = state.visible_range();
        let period = state.period();

        let cells = range
            .days()
            .map(|date| {
                let mut on_day: Vec<&ComplianceEvent> =
                    self.events.iter().filter(|e| e.occurs_on(date)).collect();
                on_day.sort_by(|a, b| b.priority.cmp(&a.priority).then_with(|| a.title.cmp(&b.title)));

                CalendarCell {
                    date,
                    in_period: period.contains(date),
                    is_today: date == today,
                    events: on_day
                        .into_iter()
                        .map(|e| RenderedEvent {
                            id: e.id.clone(),
                            title: e.title.clone(),
                            priority: e.priority,
                            color: priority_color(e.priority),
                        })
                        .collect(),
                }
            })
            .collect();

        CalendarRender {
            title: period_title(state, period),
            subtitle: format!("{} | {}", display_label(self.timezone_id), self.region),
            mode: state.mode,
            range,
            cells,
        }
    }

    /// Events within the visible range of `state`, sorted by date then urgency.
    pub fn visible_events(&self, state: &CalendarState) -> Vec<&'a ComplianceEvent> {
        let range = state.visible_range();
        let mut visible: Vec<&ComplianceEvent> =
            self.events.iter().filter(|e| range.contains(e.date)).collect();
        visible.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| b.priority.cmp(&a.priority))
                .then_with(|| a.title.cmp(&b.title))
        });
        visible
    }

    /// Dispatch `on_event_select` for the event with `event_id`.
    ///
    /// Returns `false` without calling the handler when no such event exists.
    pub fn select_event(&self, event_id: &str, handler: &mut impl CalendarHandler) -> bool {
        match self.events.iter().find(|e| e.id == event_id) {
            Some(event) => {
                handler.on_event_select(event);
                true
            }
            None => false,
        }
    }

    /// Dispatch `on_date_select` for `date`.
    pub fn select_date(&self, date: NaiveDate, handler: &mut impl CalendarHandler) {
        handler.on_date_select(date);
    }
}

fn period_title(state: &CalendarState, period: DateRange) -> String {
    match state.mode {
        ViewMode::Month => state.cursor.format("%B %Y").to_string(),
        ViewMode::Week => format!(
            "{} - {}",
            period.start.format("%b %-d"),
            period.end.format("%b %-d, %Y")
        ),
        ViewMode::Day => state.cursor.format("%A, %B %-d, %Y").to_string(),
    }
}
