//! # aibos-hierarchy — Organization Hierarchy
//!
//! Projects a flat list of organizations into a single-rooted tree and
//! decides whether, and how, that tree may be drawn.
//!
//! ## Architecture
//!
//! - **Projector** (`projector.rs`): id lookup, parent linking, and an
//!   iterative traversal with a visited set. Dangling parents, self
//!   parents, duplicate ids, and cycles are all recovered locally; the
//!   projection always terminates and always returns one root.
//!
//! - **Guard** (`guard.rs`): checks node, memory, and frame-rate budgets
//!   before rendering. Throttle mode degrades to a simplified render;
//!   kill-switch mode refuses with a [`GuardError`].
//!
//! - **Telemetry** (`fps.rs`): the read-only runtime signals the guard
//!   consumes, and a rolling-window [`FrameRateMeter`].
//!
//! - **Layout** (`layout.rs`): turns a tree into [`DrawPrimitive`]s behind
//!   the [`TreeLayout`] trait, so nothing here depends on a drawing engine.
//!
//! - **View** (`view.rs`): node selection callbacks.
//!
//! ## Crate Policy
//!
//! - Depends only on `aibos-core` internally.
//! - No recursion on tree depth. Every walk uses an explicit stack, so a
//!   degenerate chain of organizations cannot overflow the call stack.

pub mod error;
pub mod fps;
pub mod guard;
pub mod layout;
pub mod projector;
pub mod view;

pub use error::GuardError;
pub use fps::{FrameRateMeter, NoTelemetry, RuntimeTelemetry, StaticTelemetry};
pub use guard::{HierarchyRenderGuard, RenderDetail, RenderPlan, SafetyLimits};
pub use layout::{DrawPrimitive, TidyTreeLayout, TreeLayout};
pub use projector::{project, OrganizationHierarchyNode, SYNTHETIC_ROOT_NAME};
pub use view::{HierarchyHandler, HierarchyView};
