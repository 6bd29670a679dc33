//! # Calendar CLI — render the compliance calendar.
//!
//! Projects statutory items plus the configured region's rule table and
//! prints one period of the calendar.
//!
//! ```bash
//! aibos calendar --items items.json
//! aibos --timezone Europe/London --region UK calendar --view week --date 2025-07-06
//! aibos calendar --items items.yaml --next 2 --json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::{Args, ValueEnum};

use aibos_calendar::view::CalendarCell;
use aibos_calendar::{
    project_with_stats, transition, CalendarAction, CalendarRender, CalendarState, CalendarView,
    ViewMode,
};
use aibos_core::timezone::{resolve_or_utc, today_in};
use aibos_core::StatutoryItem;

use crate::config::AibosConfig;
use crate::ingest::load_statutory_items;
use crate::{print_json, EXIT_OK};

/// Calendar granularity on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewArg {
    /// Whole weeks covering one month.
    Month,
    /// Sunday to Saturday.
    Week,
    /// One day.
    Day,
}

impl From<ViewArg> for ViewMode {
    fn from(v: ViewArg) -> Self {
        match v {
            ViewArg::Month => ViewMode::Month,
            ViewArg::Week => ViewMode::Week,
            ViewArg::Day => ViewMode::Day,
        }
    }
}

/// Arguments for `aibos calendar`.
#[derive(Args, Debug)]
pub struct CalendarArgs {
    /// Statutory items file (JSON or YAML array). Regional events only when omitted.
    #[arg(long)]
    pub items: Option<PathBuf>,

    /// View mode.
    #[arg(long, value_enum, default_value = "month")]
    pub view: ViewArg,

    /// Anchor date (YYYY-MM-DD). Defaults to today in the display timezone.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Move this many periods forward from the anchor.
    #[arg(long, default_value_t = 0, conflicts_with = "previous")]
    pub next: u32,

    /// Move this many periods back from the anchor.
    #[arg(long, default_value_t = 0)]
    pub previous: u32,

    /// Emit the rendered grid as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute `aibos calendar`.
pub fn run_calendar(args: &CalendarArgs, config: &AibosConfig) -> Result<u8> {
    let timezone_id = config.timezone_id();
    let tz = resolve_or_utc(&timezone_id);
    let today = today_in(tz);

    let items: Vec<StatutoryItem> = match &args.items {
        Some(path) => {
            load_statutory_items(path)
                .with_context(|| format!("loading statutory items from {}", path.display()))?
                .records
        }
        None => Vec::new(),
    };

    let state = navigate(args, today);
    let range = state.visible_range();

    // A month grid can straddle a year boundary.
    let mut events = Vec::new();
    for year in range.start.year()..=range.end.year() {
        let (mut projected, stats) = project_with_stats(&items, &config.region, year, &timezone_id);
        // Statutory events are independent of the year; keep one copy.
        if year != range.start.year() {
            projected = projected.split_off(stats.statutory_events);
        }
        events.append(&mut projected);
    }

    let view = CalendarView::new(&events, &timezone_id, &config.region);
    let render = view.render(&state, today);

    if args.json {
        print_json(&render)?;
    } else {
        print!("{}", format_render(&render));
    }
    Ok(EXIT_OK)
}

/// Apply the requested view and navigation to the initial state.
pub fn navigate(args: &CalendarArgs, today: NaiveDate) -> CalendarState {
    let mut state = CalendarState::new(today);
    if let Some(date) = args.date {
        state = transition(state, CalendarAction::Today(date));
    }
    state = transition(state, CalendarAction::SwitchView(args.view.into()));
    for _ in 0..args.next {
        state = transition(state, CalendarAction::Next);
    }
    for _ in 0..args.previous {
        state = transition(state, CalendarAction::Previous);
    }
    state
}

/// Plain-text rendering: header, then one line per event.
pub fn format_render(render: &CalendarRender) -> String {
    let mut out = String::new();
    out.push_str(&render.title);
    out.push('\n');
    out.push_str(&render.subtitle);
    out.push_str("\n\n");

    let with_events: Vec<&CalendarCell> = render
        .cells
        .iter()
        .filter(|c| c.in_period && !c.events.is_empty())
        .collect();
    if with_events.is_empty() {
        out.push_str("  (no compliance events)\n");
        return out;
    }
    for cell in with_events {
        let marker = if cell.is_today { '*' } else { ' ' };
        for (i, event) in cell.events.iter().enumerate() {
            let date = if i == 0 {
                cell.date.format("%a %Y-%m-%d").to_string()
            } else {
                String::new()
            };
            out.push_str(&format!(
                "{marker} {date:<14}  [{:<8}] {}\n",
                event.priority.as_str(),
                event.title
            ));
        }
    }
    out
}
