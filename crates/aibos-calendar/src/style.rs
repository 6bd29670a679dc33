//! # Event Styling
//!
//! Priority decides how an event is drawn. The mapping is a total function
//! over [`Priority`]: a fifth priority cannot be added without extending
//! [`priority_color`].
//!
//! Labels that arrive as raw strings go through [`color_for_label`]. An
//! unrecognised label is a programming error: debug builds panic, release
//! builds log and draw the event in [`NEUTRAL_COLOR`].

use serde::Serialize;

use aibos_core::Priority;

/// Colors used to draw one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventColor {
    /// Fill color.
    pub background: &'static str,
    /// Border color.
    pub border: &'static str,
    /// Text color on top of the fill.
    pub text: &'static str,
}

/// Green.
pub const LOW_COLOR: EventColor = EventColor {
    background: "#22c55e",
    border: "#16a34a",
    text: "#ffffff",
};

/// Amber.
pub const MEDIUM_COLOR: EventColor = EventColor {
    background: "#f59e0b",
    border: "#d97706",
    text: "#1f2937",
};

/// Red.
pub const HIGH_COLOR: EventColor = EventColor {
    background: "#ef4444",
    border: "#dc2626",
    text: "#ffffff",
};

/// Purple.
pub const CRITICAL_COLOR: EventColor = EventColor {
    background: "#8b5cf6",
    border: "#7c3aed",
    text: "#ffffff",
};

/// Gray, for labels outside the priority domain.
pub const NEUTRAL_COLOR: EventColor = EventColor {
    background: "#6b7280",
    border: "#4b5563",
    text: "#ffffff",
};

/// The color of an event with priority `priority`.
pub fn priority_color(priority: Priority) -> EventColor {
    match priority {
        Priority::Low => LOW_COLOR,
        Priority::Medium => MEDIUM_COLOR,
        Priority::High => HIGH_COLOR,
        Priority::Critical => CRITICAL_COLOR,
    }
}

/// The color for a raw priority label.
///
/// # Panics
///
/// In debug builds, panics when `label` is not a known priority.
pub fn color_for_label(label: &str) -> EventColor {
    match label.parse::<Priority>() {
        Ok(priority) => priority_color(priority),
        Err(e) => {
            tracing::error!(label, "no color for unrecognised priority");
            debug_assert!(false, "{e}");
            NEUTRAL_COLOR
        }
    }
}
