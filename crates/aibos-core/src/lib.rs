//! # aibos-core — Foundational Types for AIBOS Compliance Tooling
//!
//! This crate is the leaf of the AIBOS workspace. It defines the record
//! types that arrive from the persistence layer, the closed domains they
//! draw from, and the timezone primitives every projection relies on.
//! Every other crate in the workspace depends on `aibos-core`; it depends
//! on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Explicit record shapes.** `StatutoryItem` and `Organization` make
//!    required vs. optional fields visible in the type. Loosely-typed input
//!    is deserialized record-by-record at the boundary; a record that does
//!    not fit the shape never reaches a projection.
//!
//! 2. **Closed domains.** `Priority`, `ItemStatus`, and `Frequency` are
//!    enums matched exhaustively everywhere. Adding a priority forces every
//!    consumer (color mapping, summary counts) to handle it at compile time.
//!
//! 3. **Best-effort timezones.** Nothing in [`timezone`] returns an error to
//!    its caller. Unknown zones resolve to UTC, formatting failures fall back
//!    to the raw identifier.
//!
//! 4. **Derived status.** `overdue` is computed at read time from the due
//!    date and an explicit `as_of` instant; the stored status is a hint.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `aibos-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod domain;
pub mod error;
pub mod identity;
pub mod record;
pub mod temporal;
pub mod timezone;

// Re-export primary types for ergonomic imports.
pub use domain::{is_known_category, Frequency, ItemStatus, Priority, STATUTORY_CATEGORIES};
pub use error::{AibosError, AibosResult};
pub use identity::{OrganizationId, StatutoryItemId};
pub use record::{Organization, StatutoryItem};
pub use temporal::DueDate;
pub use timezone::{TimezoneInfo, DEFAULT_TIMEZONE};
