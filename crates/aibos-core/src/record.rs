//! # Input Records
//!
//! Typed shapes of the rows supplied by the persistence layer. Field names
//! follow the stored column names so a query result deserializes directly.
//!
//! Required fields are plain; anything the store allows to be null is an
//! `Option`. The due date stays a raw string here: it is parsed during
//! projection, where a malformed value excludes only that one item.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::domain::{Frequency, ItemStatus, Priority};
use crate::error::AibosResult;
use crate::identity::{OrganizationId, StatutoryItemId};
use crate::temporal::DueDate;

/// An organization-scoped compliance obligation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatutoryItem {
    /// Item identifier.
    pub id: StatutoryItemId,
    /// Owning organization.
    pub organization_id: OrganizationId,
    /// Category, normally one of [`crate::STATUTORY_CATEGORIES`].
    pub category: String,
    /// Optional finer-grained category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Obligation title.
    pub title: String,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw due date, see [`DueDate::parse`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Recurrence.
    #[serde(default = "default_frequency")]
    pub frequency: Frequency,
    /// Last stored status. A hint only; see [`StatutoryItem::effective_status`].
    #[serde(default = "default_status")]
    pub status: ItemStatus,
    /// Priority.
    #[serde(default = "default_priority")]
    pub priority: Priority,
    /// Assignee user id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// Completion timestamp as stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    /// User who completed the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<String>,
}

fn default_frequency() -> Frequency {
    Frequency::OneTime
}

fn default_status() -> ItemStatus {
    ItemStatus::Pending
}

fn default_priority() -> Priority {
    Priority::Medium
}

impl StatutoryItem {
    /// Deserialize one loosely-typed record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AibosError::Serialization`] when required fields are
    /// missing or an enumerated field holds an unknown label.
    pub fn from_value(value: serde_json::Value) -> AibosResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Parse the due date, if one is present.
    ///
    /// `None` means no due date; `Some(Err(_))` means the stored value is
    /// malformed.
    pub fn parsed_due_date(&self) -> Option<AibosResult<DueDate>> {
        self.due_date.as_deref().map(DueDate::parse)
    }

    /// The status as of `as_of`, with `overdue` derived rather than trusted.
    ///
    /// - Completed and cancelled items keep their stored status.
    /// - An open item whose due date lies strictly before `as_of` is
    ///   `Overdue`. Calendar dates compare against the local day of `as_of`
    ///   in `tz`; instants compare directly.
    /// - An item stored as `Overdue` whose due date is no longer in the
    ///   past reverts to `Pending`.
    /// - Without a parseable due date the stored status is returned.
    pub fn effective_status(&self, as_of: DateTime<Utc>, tz: Tz) -> ItemStatus {
        if self.status.is_closed() {
            return self.status;
        }

        let due = match self.parsed_due_date() {
            Some(Ok(due)) => due,
            _ => return self.status,
        };

        let past_due = match due {
            DueDate::Date(date) => date < as_of.with_timezone(&tz).date_naive(),
            DueDate::Instant(instant) => instant.with_timezone(&Utc) < as_of,
        };

        match (past_due, self.status) {
            (true, _) => ItemStatus::Overdue,
            (false, ItemStatus::Overdue) => ItemStatus::Pending,
            (false, status) => status,
        }
    }
}

/// An organization as far as hierarchy rendering is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization identifier.
    pub id: OrganizationId,
    /// Display name.
    pub name: String,
    /// Parent organization, if this is a subsidiary.
    #[serde(default, alias = "parent_organization_id", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<OrganizationId>,
    /// Organization type (holding, subsidiary, branch, ...).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub org_type: Option<String>,
    /// Industry sector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Operating status as stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Organization {
    /// Minimal organization with no parent.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: OrganizationId::new(id),
            name: name.into(),
            parent_id: None,
            org_type: None,
            industry: None,
            status: None,
        }
    }

    /// Set the parent organization.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_id = Some(OrganizationId::new(parent));
        self
    }

    /// Deserialize one loosely-typed record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AibosError::Serialization`] when `id` or `name` is
    /// missing or mistyped.
    pub fn from_value(value: serde_json::Value) -> AibosResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}
