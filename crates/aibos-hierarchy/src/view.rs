//! Node selection on a rendered hierarchy.

use aibos_core::OrganizationId;

use crate::projector::OrganizationHierarchyNode;

/// Callback the host receives when a node is activated.
pub trait HierarchyHandler {
    /// An organization node was selected.
    fn on_node_select(&mut self, id: &OrganizationId);
}

/// A read-only view over a projected tree.
#[derive(Debug, Clone, Copy)]
pub struct HierarchyView<'a> {
    tree: &'a OrganizationHierarchyNode,
}

impl<'a> HierarchyView<'a> {
    /// Wrap `tree`.
    pub fn new(tree: &'a OrganizationHierarchyNode) -> Self {
        Self { tree }
    }

    /// Dispatch `on_node_select` if `id` is in the tree.
    ///
    /// The synthetic root has no id and cannot be selected.
    pub fn select_node(&self, id: &OrganizationId, handler: &mut impl HierarchyHandler) -> bool {
        match self.tree.find(id).and_then(|n| n.id.as_ref()) {
            Some(found) => {
                handler.on_node_select(found);
                true
            }
            None => false,
        }
    }
}
