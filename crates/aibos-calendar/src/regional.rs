//! # Regional Compliance Rule Tables
//!
//! Hardcoded statutory deadlines that apply to every organization in a
//! region, independent of the organization's own tracked items.
//!
//! ## Data Model
//!
//! - [`RegionCode`]: the closed set of regions with a rule table.
//! - [`MonthDay`] / [`DayOfMonth`]: the yearly recurrence pattern.
//! - [`RegionalComplianceTemplate`]: one recurring obligation.
//!
//! The tables themselves live in the per-region submodules. Adding a
//! deadline is a data change in one of those files; adding a region means a
//! new [`RegionCode`] variant, which the compiler then forces through
//! [`templates_for`].
//!
//! Unknown region codes are not an error: they simply have no templates.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use aibos_core::timezone::resolve_or_utc;
use aibos_core::{AibosError, Priority};

use crate::event::{ComplianceEvent, EventSource};

pub mod eu;
pub mod north_america;
pub mod uk;

// ─── Region Codes ────────────────────────────────────────────────────

/// Regions with a compliance rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RegionCode {
    /// United States federal deadlines.
    Us,
    /// Canadian federal deadlines.
    Ca,
    /// European Union deadlines common to member states.
    Eu,
    /// United Kingdom deadlines.
    Uk,
}

impl RegionCode {
    /// All regions with a table.
    pub fn all() -> &'static [RegionCode] {
        &[Self::Us, Self::Ca, Self::Eu, Self::Uk]
    }

    /// Parse a region code, case-insensitively. `GB` is accepted for the UK.
    ///
    /// Returns `None` for regions without a table.
    pub fn parse(code: &str) -> Option<Self> {
        code.parse().ok()
    }

    /// The canonical upper-case code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Ca => "CA",
            Self::Eu => "EU",
            Self::Uk => "UK",
        }
    }
}

impl FromStr for RegionCode {
    type Err = AibosError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim().to_ascii_uppercase().as_str() {
            "US" => Ok(Self::Us),
            "CA" => Ok(Self::Ca),
            "EU" => Ok(Self::Eu),
            "UK" | "GB" => Ok(Self::Uk),
            _ => Err(AibosError::UnknownRegion(code.to_string())),
        }
    }
}

impl std::fmt::Display for RegionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Templates ───────────────────────────────────────────────────────

/// Day-of-month part of a yearly pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOfMonth {
    /// A fixed day, clamped to the month's length (Feb 29 → Feb 28 in common years).
    Fixed(u32),
    /// The last day of the month.
    Last,
}

/// A yearly month-day recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDay {
    /// Month, 1-12.
    pub month: u32,
    /// Day within the month.
    pub day: DayOfMonth,
}

impl MonthDay {
    /// A fixed month and day.
    pub const fn fixed(month: u32, day: u32) -> Self {
        Self {
            month,
            day: DayOfMonth::Fixed(day),
        }
    }

    /// The last day of `month`.
    pub const fn last_of(month: u32) -> Self {
        Self {
            month,
            day: DayOfMonth::Last,
        }
    }

    /// Resolve the pattern in `year`. `None` if the month is out of range
    /// or the year is outside chrono's supported range.
    pub fn resolve(&self, year: i32) -> Option<NaiveDate> {
        let first = NaiveDate::from_ymd_opt(year, self.month, 1)?;
        let last = last_day_of_month(first)?;
        match self.day {
            DayOfMonth::Last => Some(last),
            DayOfMonth::Fixed(day) => first.with_day(day.clamp(1, last.day())),
        }
    }
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}

/// One recurring regional obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionalComplianceTemplate {
    /// Key, unique within the region.
    pub key: &'static str,
    /// Event title.
    pub title: &'static str,
    /// Yearly due date.
    pub due: MonthDay,
    /// Default priority.
    pub priority: Priority,
    /// Category label.
    pub category: &'static str,
    /// One-line description.
    pub description: &'static str,
}

/// The rule table for `region`.
pub fn templates_for(region: RegionCode) -> &'static [RegionalComplianceTemplate] {
    match region {
        RegionCode::Us => north_america::US_TEMPLATES,
        RegionCode::Ca => north_america::CA_TEMPLATES,
        RegionCode::Eu => eu::EU_TEMPLATES,
        RegionCode::Uk => uk::UK_TEMPLATES,
    }
}

/// Concrete all-day events for every template of `region_code` in `year`,
/// anchored in `timezone_id`.
///
/// Unknown regions yield an empty list; unknown timezones fall back to UTC.
pub fn events_for_region(region_code: &str, year: i32, timezone_id: &str) -> Vec<ComplianceEvent> {
    let region = match region_code.parse::<RegionCode>() {
        Ok(region) => region,
        Err(e) => {
            tracing::debug!(error = %e, "no compliance rule table for region");
            return Vec::new();
        }
    };
    let tz = resolve_or_utc(timezone_id);

    templates_for(region)
        .iter()
        .filter_map(|template| {
            let date = template.due.resolve(year)?;
            Some(ComplianceEvent::all_day(
                format!("regional-{}-{year}-{}", region.as_str().to_ascii_lowercase(), template.key),
                template.title.to_string(),
                date,
                tz,
                template.priority,
                template.category.to_string(),
                Some(template.description.to_string()),
                EventSource::Regional {
                    region,
                    template: template.key.to_string(),
                },
            ))
        })
        .collect()
}
