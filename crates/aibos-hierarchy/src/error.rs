//! # Error Types
//!
//! Budget violations reported by the render guard. In kill-switch mode the
//! first violation is returned to the caller as one of these; in throttle
//! mode they are collected on the [`crate::RenderPlan`] and logged.

use thiserror::Error;

/// A render budget the hierarchy exceeded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GuardError {
    /// More organizations than `max_nodes`.
    #[error("hierarchy has {nodes} organizations, exceeding the node budget of {limit}")]
    NodeBudgetExceeded {
        /// Organizations in the tree, synthetic root excluded.
        nodes: usize,
        /// Configured `max_nodes`.
        limit: usize,
    },

    /// Host heap usage above `max_memory_mb`.
    #[error("memory usage of {used_mb:.1} MB exceeds the budget of {limit_mb} MB")]
    MemoryBudgetExceeded {
        /// Observed heap usage in megabytes.
        used_mb: f64,
        /// Configured `max_memory_mb`.
        limit_mb: u64,
    },

    /// Measured frame rate under `min_fps`.
    #[error("frame rate of {fps:.1} fps is below the minimum of {limit} fps")]
    FrameRateBelowMinimum {
        /// Observed frames per second.
        fps: f64,
        /// Configured `min_fps`.
        limit: u32,
    },
}

impl GuardError {
    /// Short name of the budget, for log fields.
    pub fn budget(&self) -> &'static str {
        match self {
            Self::NodeBudgetExceeded { .. } => "nodes",
            Self::MemoryBudgetExceeded { .. } => "memory",
            Self::FrameRateBelowMinimum { .. } => "fps",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_budget() {
        let e = GuardError::NodeBudgetExceeded { nodes: 11, limit: 10 };
        assert_eq!(
            e.to_string(),
            "hierarchy has 11 organizations, exceeding the node budget of 10"
        );
        assert_eq!(e.budget(), "nodes");

        let e = GuardError::MemoryBudgetExceeded { used_mb: 64.25, limit_mb: 50 };
        assert!(e.to_string().contains("64.2 MB") || e.to_string().contains("64.3 MB"));

        let e = GuardError::FrameRateBelowMinimum { fps: 12.0, limit: 30 };
        assert_eq!(e.to_string(), "frame rate of 12.0 fps is below the minimum of 30 fps");
    }
}
