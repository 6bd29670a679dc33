//! # Record Ingestion
//!
//! Reads statutory items and organizations from JSON or YAML files. A file
//! must hold a top-level array. Each element is deserialized on its own, so
//! one malformed record is skipped with a warning and the rest load.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;

use aibos_core::{is_known_category, AibosResult, Organization, StatutoryItem};

/// Records that loaded, and how many were skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingested<T> {
    /// Records in file order.
    pub records: Vec<T>,
    /// Elements that did not deserialize.
    pub skipped: usize,
}

/// Load statutory items from `path`.
pub fn load_statutory_items(path: &Path) -> Result<Ingested<StatutoryItem>> {
    let ingested = load_with(path, StatutoryItem::from_value)?;
    for item in &ingested.records {
        if !is_known_category(&item.category) {
            tracing::warn!(item = %item.id, category = %item.category, "unrecognised statutory category");
        }
    }
    Ok(ingested)
}

/// Load organizations from `path`.
pub fn load_organizations(path: &Path) -> Result<Ingested<Organization>> {
    load_with(path, Organization::from_value)
}

fn load_with<T>(path: &Path, parse: impl Fn(Value) -> AibosResult<T>) -> Result<Ingested<T>> {
    let rows = read_array(path)?;
    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0;
    for (index, row) in rows.into_iter().enumerate() {
        match parse(row) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(file = %path.display(), index, error = %e, "skipping malformed record");
                skipped += 1;
            }
        }
    }
    tracing::debug!(file = %path.display(), loaded = records.len(), skipped, "ingested records");
    Ok(Ingested { records, skipped })
}

fn read_array(path: &Path) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let value: Value = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON: {}", path.display()))?
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML: {}", path.display()))?
    };
    match value {
        Value::Array(rows) => Ok(rows),
        other => bail!(
            "{}: expected a top-level array of records, found {}",
            path.display(),
            kind(&other)
        ),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
