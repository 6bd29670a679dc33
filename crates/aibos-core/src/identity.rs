//! # Identifier Newtypes
//!
//! Newtype wrappers for the record identifiers handed to AIBOS by the
//! persistence layer. They prevent passing an organization id where a
//! statutory item id is expected, and vice versa.
//!
//! Identifiers are opaque strings (the backing store issues UUIDs, but the
//! projections never rely on that format).

use serde::{Deserialize, Serialize};

/// Identifier of an organization (company, subsidiary, branch).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationId(pub String);

/// Identifier of a statutory compliance item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatutoryItemId(pub String);

impl OrganizationId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl StatutoryItemId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "org:{}", self.0)
    }
}

impl std::fmt::Display for StatutoryItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "statutory:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_namespaced() {
        assert_eq!(OrganizationId::new("acme").to_string(), "org:acme");
        assert_eq!(StatutoryItemId::new("42").to_string(), "statutory:42");
    }

    #[test]
    fn serializes_as_bare_string() {
        let json = serde_json::to_string(&OrganizationId::new("acme")).unwrap();
        assert_eq!(json, "\"acme\"");
    }
}
