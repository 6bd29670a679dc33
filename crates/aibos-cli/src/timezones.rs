//! # Timezones CLI — list the timezone catalog.
//!
//! ```bash
//! aibos timezones
//! aibos timezones --group Europe
//! aibos timezones --current
//! ```

use anyhow::Result;
use chrono::Utc;
use clap::Args;

use aibos_core::timezone::{
    current_timezone, display_label, list_supported_timezones, resolve_or_utc, utc_offset_label,
};
use aibos_core::TimezoneInfo;

use crate::{print_json, EXIT_OK};

/// Arguments for `aibos timezones`.
#[derive(Args, Debug)]
pub struct TimezonesArgs {
    /// Only list zones in this region group (e.g. "Americas", "Europe", "UTC").
    /// A raw tz prefix such as "America" also matches.
    #[arg(long)]
    pub group: Option<String>,

    /// Print only the detected host timezone.
    #[arg(long)]
    pub current: bool,

    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Execute `aibos timezones`.
pub fn run_timezones(args: &TimezonesArgs) -> Result<u8> {
    if args.current {
        let id = current_timezone();
        if args.json {
            print_json(&serde_json::json!({
                "id": id,
                "display_label": display_label(&id),
                "utc_offset": utc_offset_label(resolve_or_utc(&id), Utc::now()),
            }))?;
        } else {
            println!("{}  {}", display_label(&id), utc_offset_label(resolve_or_utc(&id), Utc::now()));
        }
        return Ok(EXIT_OK);
    }

    let zones = filter_group(list_supported_timezones(), args.group.as_deref());
    if args.json {
        print_json(&zones)?;
        return Ok(EXIT_OK);
    }

    for tz in &zones {
        println!("  {:<12} {}", tz.region_group, tz.display_label);
    }
    println!();
    println!("Total: {} timezones", zones.len());
    Ok(EXIT_OK)
}

fn filter_group<'a>(catalog: &'a [TimezoneInfo], group: Option<&str>) -> Vec<&'a TimezoneInfo> {
    catalog
        .iter()
        .filter(|tz| {
            group.map_or(true, |g| {
                let prefix = tz.id.split_once('/').map_or(tz.id.as_str(), |(p, _)| p);
                tz.region_group.eq_ignore_ascii_case(g) || prefix.eq_ignore_ascii_case(g)
            })
        })
        .collect()
}
