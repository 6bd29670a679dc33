//! # aibos CLI entry point
//!
//! Parses command-line arguments, installs logging, layers configuration,
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use aibos_cli::calendar::{run_calendar, CalendarArgs};
use aibos_cli::config::AibosConfig;
use aibos_cli::hierarchy::{run_hierarchy, HierarchyArgs};
use aibos_cli::summary::{run_summary, SummaryArgs};
use aibos_cli::timezones::{run_timezones, TimezonesArgs};
use aibos_cli::EXIT_ERROR;

/// AIBOS compliance toolkit.
///
/// Projects statutory items and regional deadlines onto a compliance
/// calendar, summarizes compliance status, and renders organization
/// hierarchies under configurable safety budgets.
#[derive(Parser, Debug)]
#[command(name = "aibos", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (YAML or JSON).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Display timezone, overriding configuration and environment.
    #[arg(long, global = true)]
    timezone: Option<String>,

    /// Region code, overriding configuration and environment.
    #[arg(long, global = true)]
    region: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List supported timezones or show the detected host timezone.
    Timezones(TimezonesArgs),

    /// Render the compliance calendar for one month, week, or day.
    Calendar(CalendarArgs),

    /// Summarize statutory item status and upcoming deadlines.
    Summary(SummaryArgs),

    /// Project and render the organization hierarchy.
    Hierarchy(HierarchyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    tracing::debug!("aibos CLI starting");

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let result = match &cli.command {
        Commands::Timezones(args) => run_timezones(args),
        Commands::Calendar(args) => run_calendar(args, &config),
        Commands::Summary(args) => run_summary(args, &config),
        Commands::Hierarchy(args) => run_hierarchy(args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// `RUST_LOG` wins when set; otherwise verbosity picks the level.
fn init_tracing(verbose: u8, json: bool) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<AibosConfig> {
    let mut config = AibosConfig::load(cli.config.as_deref())?;
    if let Some(tz) = &cli.timezone {
        config.timezone = Some(tz.clone());
    }
    if let Some(region) = &cli.region {
        config.region = region.clone();
    }

    let problems = config.validate();
    if !problems.is_empty() {
        anyhow::bail!("invalid configuration: {}", problems.join("; "));
    }
    tracing::debug!(
        timezone = config.timezone.as_deref().unwrap_or("<host>"),
        region = %config.region,
        kill_switch = config.safety_limits.kill_switch,
        "configuration resolved"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_timezones() {
        let cli = Cli::try_parse_from(["aibos", "timezones", "--group", "Europe"]).unwrap();
        if let Commands::Timezones(args) = cli.command {
            assert_eq!(args.group.as_deref(), Some("Europe"));
            assert!(!args.current);
        } else {
            panic!("expected timezones");
        }
    }

    #[test]
    fn cli_parse_calendar_with_view_and_date() {
        let cli = Cli::try_parse_from([
            "aibos", "calendar", "--view", "week", "--date", "2025-04-15", "--next", "2",
        ])
        .unwrap();
        if let Commands::Calendar(args) = cli.command {
            assert_eq!(args.view, aibos_cli::calendar::ViewArg::Week);
            assert_eq!(args.date, chrono::NaiveDate::from_ymd_opt(2025, 4, 15));
            assert_eq!(args.next, 2);
            assert!(args.items.is_none());
        } else {
            panic!("expected calendar");
        }
    }

    #[test]
    fn cli_parse_calendar_rejects_next_and_previous() {
        let result = Cli::try_parse_from(["aibos", "calendar", "--next", "1", "--previous", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_calendar_rejects_bad_date() {
        assert!(Cli::try_parse_from(["aibos", "calendar", "--date", "15/04/2025"]).is_err());
    }

    #[test]
    fn cli_parse_summary_requires_items() {
        assert!(Cli::try_parse_from(["aibos", "summary"]).is_err());
        let cli = Cli::try_parse_from([
            "aibos",
            "summary",
            "--items",
            "items.json",
            "--as-of",
            "2025-05-01T00:00:00Z",
        ])
        .unwrap();
        if let Commands::Summary(args) = cli.command {
            assert_eq!(args.items, PathBuf::from("items.json"));
            assert!(args.as_of.is_some());
        } else {
            panic!("expected summary");
        }
    }

    #[test]
    fn cli_parse_hierarchy_flags() {
        let cli = Cli::try_parse_from([
            "aibos",
            "hierarchy",
            "--orgs",
            "orgs.yaml",
            "--max-nodes",
            "10",
            "--kill-switch",
            "--fps",
            "24.5",
        ])
        .unwrap();
        if let Commands::Hierarchy(args) = cli.command {
            assert_eq!(args.max_nodes, Some(10));
            assert!(args.kill_switch);
            assert_eq!(args.fps, Some(24.5));
        } else {
            panic!("expected hierarchy");
        }
    }

    #[test]
    fn cli_parse_global_options() {
        let cli = Cli::try_parse_from([
            "aibos",
            "-vv",
            "--config",
            "aibos.yaml",
            "--timezone",
            "Asia/Tokyo",
            "--region",
            "UK",
            "--log-json",
            "timezones",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("aibos.yaml")));
        assert_eq!(cli.timezone.as_deref(), Some("Asia/Tokyo"));
        assert_eq!(cli.region.as_deref(), Some("UK"));
        assert!(cli.log_json);
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["aibos", "timezones", "--region", "EU", "-v"]).unwrap();
        assert_eq!(cli.region.as_deref(), Some("EU"));
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["aibos"]).is_err());
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aibos.yaml");
        std::fs::write(&path, "timezone: UTC\nregion: CA\n").unwrap();
        let path_str = path.to_string_lossy().to_string();
        let cli = Cli::try_parse_from([
            "aibos",
            "--config",
            &path_str,
            "--region",
            "EU",
            "timezones",
        ])
        .unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.region, "EU");
    }

    #[test]
    fn invalid_limits_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aibos.yaml");
        std::fs::write(&path, "safety_limits:\n  max_nodes: 0\n").unwrap();
        let path_str = path.to_string_lossy().to_string();
        let cli = Cli::try_parse_from(["aibos", "--config", &path_str, "timezones"]).unwrap();
        let err = load_config(&cli).unwrap_err();
        assert!(err.to_string().contains("max_nodes"));
    }
}
