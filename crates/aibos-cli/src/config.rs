//! # Configuration
//!
//! `AibosConfig` is layered, lowest precedence first:
//!
//! 1. Built-in defaults.
//! 2. The file given by `--config` (YAML, or JSON when the extension is
//!    `.json`). Every field is optional.
//! 3. Environment: `AIBOS_TIMEZONE`, `AIBOS_REGION`, `AIBOS_KILL_SWITCH`.
//! 4. Command-line flags, applied by the caller.
//!
//! ```yaml
//! timezone: America/New_York
//! region: US
//! upcoming_window_days: 45
//! safety_limits:
//!   max_nodes: 200
//!   kill_switch: true
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use aibos_core::timezone::{current_timezone, is_valid};
use aibos_hierarchy::SafetyLimits;

/// Environment variable overriding `timezone`.
pub const ENV_TIMEZONE: &str = "AIBOS_TIMEZONE";
/// Environment variable overriding `region`.
pub const ENV_REGION: &str = "AIBOS_REGION";
/// Environment variable overriding `safety_limits.kill_switch`.
pub const ENV_KILL_SWITCH: &str = "AIBOS_KILL_SWITCH";

/// Runtime configuration for the `aibos` CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AibosConfig {
    /// Display timezone. Detected from the host when unset.
    pub timezone: Option<String>,
    /// Region code selecting the regional rule table.
    pub region: String,
    /// Hierarchy render budgets.
    pub safety_limits: SafetyLimits,
    /// Days ahead included in the summary's upcoming list.
    pub upcoming_window_days: u32,
}

impl Default for AibosConfig {
    fn default() -> Self {
        Self {
            timezone: None,
            region: "US".to_string(),
            safety_limits: SafetyLimits::default(),
            upcoming_window_days: 30,
        }
    }
}

impl AibosConfig {
    /// Defaults, overlaid with `path` if given, overlaid with the process
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        };
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Overlay environment variables read through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(tz) = lookup(ENV_TIMEZONE).filter(|v| !v.trim().is_empty()) {
            self.timezone = Some(tz.trim().to_string());
        }
        if let Some(region) = lookup(ENV_REGION).filter(|v| !v.trim().is_empty()) {
            self.region = region.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_KILL_SWITCH) {
            match parse_flag(&raw) {
                Some(on) => self.safety_limits.kill_switch = on,
                None => tracing::warn!(value = %raw, "ignoring unrecognised {ENV_KILL_SWITCH}"),
            }
        }
    }

    /// The configured timezone, or the host's when unset.
    ///
    /// Unknown identifiers are returned as-is; every consumer resolves them
    /// to UTC with a warning.
    pub fn timezone_id(&self) -> String {
        match &self.timezone {
            Some(tz) => tz.clone(),
            None => current_timezone(),
        }
    }

    /// Configuration problems that prevent running.
    ///
    /// An unknown timezone or region is not a problem: both degrade to UTC
    /// and an empty rule table respectively. They are logged here instead.
    pub fn validate(&self) -> Vec<String> {
        if let Some(tz) = &self.timezone {
            if !is_valid(tz) {
                tracing::warn!(timezone = %tz, "unknown timezone, UTC will be used");
            }
        }
        if let Err(e) = self.region.parse::<aibos_calendar::RegionCode>() {
            tracing::warn!(error = %e, "no compliance rule table for region");
        }

        let mut problems: Vec<String> = self
            .safety_limits
            .validate()
            .into_iter()
            .map(|p| format!("safety_limits: {p}"))
            .collect();
        if self.upcoming_window_days > 366 {
            problems.push(format!(
                "upcoming_window_days ({}) exceeds one year",
                self.upcoming_window_days
            ));
        }
        problems
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let c = AibosConfig::default();
        assert_eq!(c.region, "US");
        assert_eq!(c.upcoming_window_days, 30);
        assert_eq!(c.safety_limits, SafetyLimits::default());
        assert!(c.validate().is_empty());
    }

    #[test]
    fn yaml_file_with_partial_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aibos.yaml");
        std::fs::write(
            &path,
            "timezone: Europe/London\nregion: UK\nsafety_limits:\n  max_nodes: 10\n  kill_switch: true\n",
        )
        .unwrap();
        let c = AibosConfig::from_file(&path).unwrap();
        assert_eq!(c.timezone.as_deref(), Some("Europe/London"));
        assert_eq!(c.region, "UK");
        assert_eq!(c.safety_limits.max_nodes, 10);
        assert!(c.safety_limits.kill_switch);
        assert_eq!(c.safety_limits.min_fps, 30);
        assert_eq!(c.upcoming_window_days, 30);
    }

    #[test]
    fn json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aibos.json");
        std::fs::write(&path, r#"{"region": "EU", "upcoming_window_days": 7}"#).unwrap();
        let c = AibosConfig::from_file(&path).unwrap();
        assert_eq!(c.region, "EU");
        assert_eq!(c.upcoming_window_days, 7);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aibos.yaml");
        std::fs::write(&path, "regoin: US\n").unwrap();
        assert!(AibosConfig::from_file(&path).is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = AibosConfig::from_file(Path::new("/nonexistent/aibos.yaml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/aibos.yaml"));
    }

    #[test]
    fn env_overrides_file() {
        let mut c = AibosConfig {
            timezone: Some("UTC".to_string()),
            ..AibosConfig::default()
        };
        c.apply_env(env(&[
            (ENV_TIMEZONE, "Asia/Tokyo"),
            (ENV_REGION, "ca"),
            (ENV_KILL_SWITCH, "TRUE"),
        ]));
        assert_eq!(c.timezone.as_deref(), Some("Asia/Tokyo"));
        assert_eq!(c.region, "ca");
        assert!(c.safety_limits.kill_switch);
    }

    #[test]
    fn bad_kill_switch_value_is_ignored() {
        let mut c = AibosConfig::default();
        c.apply_env(env(&[(ENV_KILL_SWITCH, "maybe")]));
        assert!(!c.safety_limits.kill_switch);
    }

    #[test]
    fn validation_collects_limit_problems() {
        let c = AibosConfig {
            safety_limits: SafetyLimits {
                min_fps: 120,
                ..SafetyLimits::default()
            },
            upcoming_window_days: 1000,
            ..AibosConfig::default()
        };
        let problems = c.validate();
        assert_eq!(problems.len(), 2);
        assert!(problems[0].starts_with("safety_limits:"));
    }

    #[test]
    fn unknown_region_is_not_a_problem() {
        let c = AibosConfig {
            region: "ZZ".to_string(),
            timezone: Some("Not/AZone".to_string()),
            ..AibosConfig::default()
        };
        assert!(c.validate().is_empty());
    }
}
