//! # Timezone Resolution
//!
//! Converts IANA timezone identifiers into display labels, UTC offsets,
//! and local calendar days. Every other component goes through these
//! helpers, so none of them may fail: an unknown identifier resolves to
//! UTC, and a formatting failure falls back to the bare identifier.
//!
//! ## Enumeration
//!
//! [`list_supported_timezones`] walks the compiled tz database once and
//! caches the catalog for the lifetime of the process. If the database
//! yields nothing the catalog is built from [`FALLBACK_TIMEZONES`].
//!
//! ## DST
//!
//! Local midnight does not exist on some transition days (for example
//! `America/Santiago` springs forward at 00:00). [`local_midnight`]
//! returns the first valid local instant of the day in that case.

use std::fmt::Write as _;
use std::sync::OnceLock;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{AibosError, AibosResult};

/// Timezone used whenever detection or resolution fails.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Common zones offered when the tz database cannot be enumerated.
pub const FALLBACK_TIMEZONES: &[&str] = &[
    "UTC",
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "America/Toronto",
    "Europe/London",
    "Europe/Paris",
    "Europe/Berlin",
    "Asia/Tokyo",
    "Asia/Singapore",
    "Australia/Sydney",
];

/// One entry of the timezone catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimezoneInfo {
    /// IANA identifier, e.g. `Europe/Paris`.
    pub id: String,
    /// `id (abbreviation)` at the time the catalog was built.
    pub display_label: String,
    /// Human label of the identifier's region prefix.
    pub region_group: &'static str,
}

static CATALOG: OnceLock<Vec<TimezoneInfo>> = OnceLock::new();

/// All timezones known to the tz database, sorted by identifier.
///
/// Computed on first call and cached afterwards.
pub fn list_supported_timezones() -> &'static [TimezoneInfo] {
    CATALOG.get_or_init(|| {
        let catalog = build_catalog(chrono_tz::TZ_VARIANTS.iter().map(|tz| tz.name()), Utc::now());
        tracing::debug!(count = catalog.len(), "timezone catalog built");
        catalog
    })
}

/// Build a sorted catalog from `ids`, falling back to
/// [`FALLBACK_TIMEZONES`] when `ids` is empty.
fn build_catalog<'a>(ids: impl IntoIterator<Item = &'a str>, at: DateTime<Utc>) -> Vec<TimezoneInfo> {
    let mut names: Vec<&str> = ids.into_iter().collect();
    if names.is_empty() {
        tracing::warn!("tz database enumeration returned nothing; using fallback list");
        names = FALLBACK_TIMEZONES.to_vec();
    }
    names.sort_unstable();
    names.dedup();

    names
        .into_iter()
        .map(|id| TimezoneInfo {
            id: id.to_string(),
            display_label: display_label_at(id, at),
            region_group: region_group_of(id),
        })
        .collect()
}

/// Map a timezone identifier's region prefix to a human label.
///
/// Total: unknown or malformed identifiers map to `"Other"`.
pub fn region_group_of(timezone_id: &str) -> &'static str {
    if timezone_id == "UTC" || timezone_id.starts_with("Etc/") {
        return "UTC";
    }
    let Some((prefix, rest)) = timezone_id.split_once('/') else {
        return "Other";
    };
    if rest.is_empty() {
        return "Other";
    }
    match prefix {
        "Africa" => "Africa",
        "America" => "Americas",
        "Antarctica" => "Antarctica",
        "Arctic" => "Arctic",
        "Asia" => "Asia",
        "Atlantic" => "Atlantic",
        "Australia" => "Australia",
        "Europe" => "Europe",
        "Indian" => "Indian Ocean",
        "Pacific" => "Pacific",
        _ => "Other",
    }
}

/// `"id (abbreviation)"` at the current instant.
pub fn display_label(timezone_id: &str) -> String {
    display_label_at(timezone_id, Utc::now())
}

/// `"id (abbreviation)"` at `at`, or the bare id when it cannot be formatted.
pub fn display_label_at(timezone_id: &str, at: DateTime<Utc>) -> String {
    let Ok(tz) = resolve(timezone_id) else {
        return timezone_id.to_string();
    };

    let mut abbreviation = String::new();
    if write!(abbreviation, "{}", at.with_timezone(&tz).format("%Z")).is_err()
        || abbreviation.is_empty()
    {
        return timezone_id.to_string();
    }
    format!("{timezone_id} ({abbreviation})")
}

/// Whether `timezone_id` names a zone in the tz database.
pub fn is_valid(timezone_id: &str) -> bool {
    resolve(timezone_id).is_ok()
}

/// Parse a timezone identifier.
///
/// # Errors
///
/// Returns [`AibosError::InvalidTimezone`] for identifiers outside the tz database.
pub fn resolve(timezone_id: &str) -> AibosResult<Tz> {
    timezone_id
        .trim()
        .parse::<Tz>()
        .map_err(|_| AibosError::InvalidTimezone(timezone_id.to_string()))
}

/// Parse a timezone identifier, falling back to UTC.
pub fn resolve_or_utc(timezone_id: &str) -> Tz {
    resolve(timezone_id).unwrap_or_else(|_| {
        tracing::warn!(timezone = timezone_id, "unknown timezone, falling back to UTC");
        Tz::UTC
    })
}

/// The host's timezone, or `"UTC"` when it cannot be detected.
pub fn current_timezone() -> String {
    match iana_time_zone::get_timezone() {
        Ok(id) if is_valid(&id) => id,
        Ok(id) => {
            tracing::warn!(timezone = %id, "host timezone not in tz database, using UTC");
            DEFAULT_TIMEZONE.to_string()
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not detect host timezone, using UTC");
            DEFAULT_TIMEZONE.to_string()
        }
    }
}

/// UTC offset of `tz` at `at`, formatted as `UTC+05:30` / `UTC-04:00`.
pub fn utc_offset_label(tz: Tz, at: DateTime<Utc>) -> String {
    let seconds = tz.offset_from_utc_datetime(&at.naive_utc()).fix().local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.abs() / 60;
    format!("UTC{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}

/// The local calendar day of `at` in `tz`.
pub fn local_date(at: DateTime<Utc>, tz: Tz) -> NaiveDate {
    at.with_timezone(&tz).date_naive()
}

/// Today's date in `tz`.
pub fn today_in(tz: Tz) -> NaiveDate {
    local_date(Utc::now(), tz)
}

/// The first instant of `date` in `tz`.
///
/// Usually local midnight. When midnight falls into a DST gap the first
/// valid quarter-hour after it is used; when midnight is ambiguous the
/// earlier instant wins.
pub fn local_midnight(date: NaiveDate, tz: Tz) -> DateTime<FixedOffset> {
    let midnight = date.and_time(NaiveTime::MIN);
    for step in 0..=96 {
        let candidate = midnight + Duration::minutes(15 * step);
        if let Some(instant) = tz.from_local_datetime(&candidate).earliest() {
            return instant.fixed_offset();
        }
    }
    midnight.and_utc().fixed_offset()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn catalog_is_sorted_and_memoized() {
        let first = list_supported_timezones();
        let second = list_supported_timezones();
        assert!(std::ptr::eq(first, second));
        assert!(first.len() > FALLBACK_TIMEZONES.len());
        assert!(first.windows(2).all(|w| w[0].id < w[1].id));
        assert!(first.iter().any(|tz| tz.id == "America/New_York"));
    }

    #[test]
    fn empty_enumeration_uses_fallback() {
        let catalog = build_catalog(std::iter::empty(), at(2025, 1, 15, 12));
        assert_eq!(catalog.len(), FALLBACK_TIMEZONES.len());
        assert!(catalog.iter().any(|tz| tz.id == "Europe/London"));
    }

    #[test]
    fn region_groups() {
        assert_eq!(region_group_of("America/New_York"), "Americas");
        assert_eq!(region_group_of("Europe/Paris"), "Europe");
        assert_eq!(region_group_of("Indian/Maldives"), "Indian Ocean");
        assert_eq!(region_group_of("UTC"), "UTC");
        assert_eq!(region_group_of("Mars/Olympus_Mons"), "Other");
        assert_eq!(region_group_of("garbage"), "Other");
        assert_eq!(region_group_of("Europe/"), "Other");
        assert_eq!(region_group_of(""), "Other");
    }

    #[test]
    fn display_label_uses_abbreviation_for_instant() {
        assert_eq!(
            display_label_at("America/New_York", at(2025, 1, 15, 12)),
            "America/New_York (EST)"
        );
        assert_eq!(
            display_label_at("America/New_York", at(2025, 7, 15, 12)),
            "America/New_York (EDT)"
        );
    }

    #[test]
    fn display_label_falls_back_to_raw_id() {
        assert_eq!(display_label("Not/AZone"), "Not/AZone");
    }

    #[test]
    fn validity() {
        assert!(is_valid("Europe/London"));
        assert!(is_valid("UTC"));
        assert!(!is_valid("Europe/Atlantis"));
        assert!(!is_valid(""));
    }

    #[test]
    fn unknown_zone_resolves_to_utc() {
        assert_eq!(resolve_or_utc("Nowhere/Special"), Tz::UTC);
        assert_eq!(resolve_or_utc("Asia/Tokyo"), chrono_tz::Asia::Tokyo);
    }

    #[test]
    fn current_timezone_is_always_valid() {
        assert!(is_valid(&current_timezone()));
    }

    #[test]
    fn offset_labels() {
        assert_eq!(
            utc_offset_label(chrono_tz::America::New_York, at(2025, 4, 15, 12)),
            "UTC-04:00"
        );
        assert_eq!(
            utc_offset_label(chrono_tz::Asia::Kolkata, at(2025, 4, 15, 12)),
            "UTC+05:30"
        );
        assert_eq!(utc_offset_label(Tz::UTC, at(2025, 4, 15, 12)), "UTC+00:00");
    }

    #[test]
    fn local_date_crosses_midnight() {
        let instant = at(2025, 4, 16, 2);
        assert_eq!(
            local_date(instant, chrono_tz::America::New_York),
            NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()
        );
    }

    #[test]
    fn local_midnight_regular_day() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();
        let start = local_midnight(date, chrono_tz::America::New_York);
        assert_eq!(start.to_rfc3339(), "2025-04-15T00:00:00-04:00");
    }

    #[test]
    fn local_midnight_in_dst_gap() {
        // Santiago skipped 2024-09-08T00:00 local.
        let date = NaiveDate::from_ymd_opt(2024, 9, 8).unwrap();
        let start = local_midnight(date, chrono_tz::America::Santiago);
        assert_eq!(start.date_naive(), date);
        assert_eq!(start.to_rfc3339(), "2024-09-08T01:00:00-03:00");
    }
}
