//! # Compliance Domains
//!
//! The closed value sets a statutory item draws from: priority, status,
//! and recurrence frequency. Every `match` on these enums is exhaustive,
//! so extending a domain is a compile error until each consumer handles
//! the new variant.
//!
//! Categories are free text on the record, but the UI offers a fixed list
//! ([`STATUTORY_CATEGORIES`]). Ingestion warns on anything outside it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AibosError;

// ─── Priority ────────────────────────────────────────────────────────

/// Priority of a compliance obligation.
///
/// Ordered from least to most urgent, so `Priority::Critical > Priority::Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Informational; no penalty exposure.
    Low,
    /// Routine filing with moderate consequences.
    Medium,
    /// Penalties or licence impact if missed.
    High,
    /// Regulatory breach if missed.
    Critical,
}

impl Priority {
    /// All priorities, least urgent first.
    pub fn all() -> &'static [Priority] {
        &[Self::Low, Self::Medium, Self::High, Self::Critical]
    }

    /// The snake_case label, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = AibosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(AibosError::UnknownPriority(s.to_string())),
        }
    }
}

// ─── Status ──────────────────────────────────────────────────────────

/// Lifecycle status of a statutory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Not started.
    Pending,
    /// Work on the filing has begun.
    InProgress,
    /// Filed or otherwise satisfied.
    Completed,
    /// Due date passed without completion.
    Overdue,
    /// Obligation withdrawn.
    Cancelled,
}

impl ItemStatus {
    /// All statuses in display order.
    pub fn all() -> &'static [ItemStatus] {
        &[
            Self::Pending,
            Self::InProgress,
            Self::Completed,
            Self::Overdue,
            Self::Cancelled,
        ]
    }

    /// Whether the obligation is finished and can no longer become overdue.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// The snake_case label, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = AibosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "overdue" => Ok(Self::Overdue),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(AibosError::UnknownStatus(s.to_string())),
        }
    }
}

// ─── Frequency ───────────────────────────────────────────────────────

/// How often a statutory obligation recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// Once per year.
    Annual,
    /// Once per quarter.
    Quarterly,
    /// Once per month.
    Monthly,
    /// A single obligation with no recurrence.
    #[serde(alias = "one-time")]
    OneTime,
}

impl Frequency {
    /// The snake_case label, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarterly => "quarterly",
            Self::Monthly => "monthly",
            Self::OneTime => "one_time",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = AibosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "annual" => Ok(Self::Annual),
            "quarterly" => Ok(Self::Quarterly),
            "monthly" => Ok(Self::Monthly),
            "one_time" => Ok(Self::OneTime),
            _ => Err(AibosError::UnknownFrequency(s.to_string())),
        }
    }
}

// ─── Categories ──────────────────────────────────────────────────────

/// Categories offered when a statutory item is created.
pub const STATUTORY_CATEGORIES: &[&str] = &[
    "Corporate Governance",
    "Tax & Finance",
    "Employment & Labor",
    "Health & Safety",
    "Data Protection",
    "Environmental",
    "Licensing & Permits",
    "Industry Specific",
];

/// Whether `category` is one of [`STATUTORY_CATEGORIES`] (case-insensitive).
pub fn is_known_category(category: &str) -> bool {
    STATUTORY_CATEGORIES
        .iter()
        .any(|known| known.eq_ignore_ascii_case(category.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_ordering_follows_urgency() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::High < Priority::Critical);
    }

    #[test]
    fn priority_parse_is_case_insensitive() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" critical ".parse::<Priority>().unwrap(), Priority::Critical);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn priority_labels_match_serde() {
        for p in Priority::all() {
            let json = serde_json::to_string(p).unwrap();
            assert_eq!(json, format!("\"{}\"", p.as_str()));
        }
    }

    #[test]
    fn status_parse_accepts_hyphenated() {
        assert_eq!(
            "in-progress".parse::<ItemStatus>().unwrap(),
            ItemStatus::InProgress
        );
    }

    #[test]
    fn closed_statuses() {
        assert!(ItemStatus::Completed.is_closed());
        assert!(ItemStatus::Cancelled.is_closed());
        assert!(!ItemStatus::Overdue.is_closed());
        assert!(!ItemStatus::Pending.is_closed());
    }

    #[test]
    fn frequency_serde_alias() {
        let f: Frequency = serde_json::from_str("\"one-time\"").unwrap();
        assert_eq!(f, Frequency::OneTime);
        assert_eq!(f.as_str(), "one_time");
    }

    #[test]
    fn known_categories() {
        assert!(is_known_category("tax & finance"));
        assert!(!is_known_category("Astrology"));
    }
}
