//! # Hierarchy Render Guard
//!
//! A policy wrapped around the layout step. Before a tree is drawn the
//! guard checks three budgets against [`SafetyLimits`]:
//!
//! | Budget | Limit | Signal |
//! |--------|-------|--------|
//! | nodes  | `max_nodes` (500) | organizations in the tree |
//! | memory | `max_memory_mb` (50) | [`RuntimeTelemetry::heap_used_bytes`] |
//! | fps    | `min_fps` (30) | [`RuntimeTelemetry::frames_per_second`] |
//!
//! Missing telemetry skips that budget. The synthetic root is not an
//! organization and is not counted.
//!
//! ## Modes
//!
//! - **Throttle** (`kill_switch: false`, the default): every violation is
//!   logged at `warn` and the render proceeds. A frame rate under
//!   `min_fps` drops the render to [`RenderDetail::Simplified`].
//! - **Kill switch** (`kill_switch: true`): the first violation is logged
//!   at `error` and returned as a [`GuardError`]. The layout is never
//!   invoked.

use serde::{Deserialize, Serialize};

use crate::error::GuardError;
use crate::fps::RuntimeTelemetry;
use crate::layout::{DrawPrimitive, TreeLayout};
use crate::projector::OrganizationHierarchyNode;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

// ─── Limits ──────────────────────────────────────────────────────────

/// Render budgets and the violation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyLimits {
    /// Maximum organizations drawn.
    pub max_nodes: usize,
    /// Maximum host heap usage, megabytes.
    pub max_memory_mb: u64,
    /// Frame rate the render aims for.
    pub target_fps: u32,
    /// Frame rate under which the render degrades (or is refused).
    pub min_fps: u32,
    /// Refuse instead of degrading.
    pub kill_switch: bool,
}

impl Default for SafetyLimits {
    fn default() -> Self {
        Self {
            max_nodes: 500,
            max_memory_mb: 50,
            target_fps: 60,
            min_fps: 30,
            kill_switch: false,
        }
    }
}

impl SafetyLimits {
    /// Problems with this configuration; empty when it is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.max_nodes == 0 {
            problems.push("max_nodes must be at least 1".to_string());
        }
        if self.max_memory_mb == 0 {
            problems.push("max_memory_mb must be at least 1".to_string());
        }
        if self.target_fps == 0 {
            problems.push("target_fps must be at least 1".to_string());
        }
        if self.min_fps > self.target_fps {
            problems.push(format!(
                "min_fps ({}) exceeds target_fps ({})",
                self.min_fps, self.target_fps
            ));
        }
        problems
    }
}

// ─── Plan ────────────────────────────────────────────────────────────

/// How much of the tree to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderDetail {
    /// Boxes, labels, and edges.
    Full,
    /// Boxes and edges only.
    Simplified,
}

/// The guard's verdict for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    /// Detail to render at.
    pub detail: RenderDetail,
    /// Organizations counted against the node budget.
    pub nodes: usize,
    /// Budgets exceeded but tolerated (throttle mode only).
    pub violations: Vec<GuardError>,
}

// ─── Guard ───────────────────────────────────────────────────────────

/// Budget checks in front of a [`TreeLayout`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HierarchyRenderGuard {
    limits: SafetyLimits,
}

impl HierarchyRenderGuard {
    /// A guard enforcing `limits`.
    pub fn new(limits: SafetyLimits) -> Self {
        Self { limits }
    }

    /// Check `tree` against the budgets.
    ///
    /// # Errors
    ///
    /// In kill-switch mode, the first budget exceeded, in table order.
    pub fn check(
        &self,
        tree: &OrganizationHierarchyNode,
        telemetry: &impl RuntimeTelemetry,
    ) -> Result<RenderPlan, GuardError> {
        let nodes = tree.organization_count();
        let violations = self.violations(nodes, telemetry);

        if self.limits.kill_switch {
            if let Some(first) = violations.into_iter().next() {
                tracing::error!(budget = first.budget(), error = %first, "hierarchy render refused");
                return Err(first);
            }
            return Ok(RenderPlan {
                detail: RenderDetail::Full,
                nodes,
                violations: Vec::new(),
            });
        }

        for v in &violations {
            tracing::warn!(budget = v.budget(), warning = %v, "hierarchy render budget exceeded");
        }
        let detail = if violations
            .iter()
            .any(|v| matches!(v, GuardError::FrameRateBelowMinimum { .. }))
        {
            RenderDetail::Simplified
        } else {
            RenderDetail::Full
        };
        Ok(RenderPlan {
            detail,
            nodes,
            violations,
        })
    }

    /// Check `tree`, then lay it out at the permitted detail.
    ///
    /// # Errors
    ///
    /// As [`HierarchyRenderGuard::check`]; `layout` is not called on error.
    pub fn render(
        &self,
        tree: &OrganizationHierarchyNode,
        layout: &impl TreeLayout,
        telemetry: &impl RuntimeTelemetry,
    ) -> Result<Vec<DrawPrimitive>, GuardError> {
        let plan = self.check(tree, telemetry)?;
        Ok(layout.layout(tree, plan.detail))
    }

    fn violations(&self, nodes: usize, telemetry: &impl RuntimeTelemetry) -> Vec<GuardError> {
        let mut out = Vec::new();
        if nodes > self.limits.max_nodes {
            out.push(GuardError::NodeBudgetExceeded {
                nodes,
                limit: self.limits.max_nodes,
            });
        }
        if let Some(bytes) = telemetry.heap_used_bytes() {
            let used_mb = bytes as f64 / BYTES_PER_MB;
            if used_mb > self.limits.max_memory_mb as f64 {
                out.push(GuardError::MemoryBudgetExceeded {
                    used_mb,
                    limit_mb: self.limits.max_memory_mb,
                });
            }
        }
        if let Some(fps) = telemetry.frames_per_second() {
            if fps < f64::from(self.limits.min_fps) {
                out.push(GuardError::FrameRateBelowMinimum {
                    fps,
                    limit: self.limits.min_fps,
                });
            }
        }
        out
    }
}
