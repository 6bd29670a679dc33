//! # Tree Layout
//!
//! Converts a projected tree into engine-neutral [`DrawPrimitive`]s. A
//! host renders the primitives however it likes; nothing here knows about
//! pixels beyond abstract coordinates.

use serde::Serialize;

use aibos_core::OrganizationId;

use crate::guard::RenderDetail;
use crate::projector::OrganizationHierarchyNode;

/// One drawable element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawPrimitive {
    /// A node box centered on `(x, y)`.
    Node {
        /// Pre-order position, referenced by edges.
        index: usize,
        /// Organization id; `None` for the synthetic root.
        id: Option<OrganizationId>,
        /// Horizontal center.
        x: f64,
        /// Vertical center.
        y: f64,
        /// Text label, omitted in simplified renders.
        label: Option<String>,
    },
    /// A parent-child connector between two node indices.
    Edge {
        /// Parent node index.
        from: usize,
        /// Child node index.
        to: usize,
    },
}

/// Lays a tree out as primitives.
pub trait TreeLayout {
    /// Nodes first, in pre-order, then edges.
    fn layout(&self, tree: &OrganizationHierarchyNode, detail: RenderDetail) -> Vec<DrawPrimitive>;
}

/// Layered layout: leaves evenly spaced left to right in pre-order,
/// parents centered over their children, one row per depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TidyTreeLayout {
    /// Horizontal distance between adjacent leaves.
    pub node_spacing: f64,
    /// Vertical distance between depths.
    pub level_height: f64,
}

impl Default for TidyTreeLayout {
    fn default() -> Self {
        Self {
            node_spacing: 120.0,
            level_height: 80.0,
        }
    }
}

impl TreeLayout for TidyTreeLayout {
    fn layout(&self, tree: &OrganizationHierarchyNode, detail: RenderDetail) -> Vec<DrawPrimitive> {
        // Flatten in pre-order: (node, parent index, depth).
        let mut flat: Vec<(&OrganizationHierarchyNode, Option<usize>, usize)> = Vec::new();
        let mut stack = vec![(tree, None, 0usize)];
        while let Some((node, parent, depth)) = stack.pop() {
            let index = flat.len();
            flat.push((node, parent, depth));
            stack.extend(node.children.iter().rev().map(|c| (c, Some(index), depth + 1)));
        }

        let mut child_index: Vec<Vec<usize>> = vec![Vec::new(); flat.len()];
        for (i, (_, parent, _)) in flat.iter().enumerate() {
            if let Some(p) = parent {
                child_index[*p].push(i);
            }
        }

        // Leaves take the next slot; reverse pre-order visits children
        // before their parent, so parents can average them.
        let mut x = vec![0.0f64; flat.len()];
        let mut next_leaf = 0.0f64;
        for (i, kids) in child_index.iter().enumerate() {
            if kids.is_empty() {
                x[i] = next_leaf * self.node_spacing;
                next_leaf += 1.0;
            }
        }
        for i in (0..flat.len()).rev() {
            if let (Some(first), Some(last)) = (child_index[i].first(), child_index[i].last()) {
                x[i] = (x[*first] + x[*last]) / 2.0;
            }
        }

        let mut out = Vec::with_capacity(flat.len() * 2);
        for (i, (node, _, depth)) in flat.iter().enumerate() {
            out.push(DrawPrimitive::Node {
                index: i,
                id: node.id.clone(),
                x: x[i],
                y: *depth as f64 * self.level_height,
                label: match detail {
                    RenderDetail::Full => Some(node.name.clone()),
                    RenderDetail::Simplified => None,
                },
            });
        }
        for (i, (_, parent, _)) in flat.iter().enumerate() {
            if let Some(p) = parent {
                out.push(DrawPrimitive::Edge { from: *p, to: i });
            }
        }
        out
    }
}
