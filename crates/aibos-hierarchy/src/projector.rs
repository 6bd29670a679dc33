//! # Organization Hierarchy Projection
//!
//! Builds one tree from a flat organization list.
//!
//! ## Algorithm
//!
//! 1. Index organizations by id. The first occurrence of an id wins; later
//!    duplicates are dropped with a warning.
//! 2. Link each organization under its parent. Organizations with no
//!    parent, a parent outside the input set, or themselves as parent are
//!    root candidates.
//! 3. Walk from each root candidate in input order with an explicit stack
//!    and a visited set. A node is attached under the first parent that
//!    reaches it and never twice.
//! 4. Organizations the walk never reached sit on a parent cycle. The
//!    first of them in input order is promoted to a root and walked; this
//!    repeats until every organization is placed.
//! 5. Owned nodes are assembled in reverse pre-order, so every child is
//!    complete before its parent takes it.
//!
//! Exactly one root is returned as-is. Zero or several roots are wrapped
//! in a synthetic node named [`SYNTHETIC_ROOT_NAME`] whose `id` is `None`.
//!
//! Every step is linear in the number of organizations and none recurses,
//! so neither cycles nor long chains can hang or overflow the projection.
//! The node type keeps that property for its whole life: `Drop` and `Debug`
//! are written by hand and neither walks the tree recursively.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use aibos_core::{Organization, OrganizationId};

/// Name of the node that wraps multiple roots.
pub const SYNTHETIC_ROOT_NAME: &str = "Organizations";

/// One organization in the projected tree.
pub struct OrganizationHierarchyNode {
    /// Organization id. `None` only for the synthetic root.
    pub id: Option<OrganizationId>,
    /// Display name.
    pub name: String,
    /// Display attributes: `id`, and `type`, `industry`, `status` when set.
    pub attributes: BTreeMap<String, String>,
    /// Subsidiaries, in input order.
    pub children: Vec<OrganizationHierarchyNode>,
}

impl OrganizationHierarchyNode {
    fn from_org(org: &Organization, children: Vec<OrganizationHierarchyNode>) -> Self {
        let mut attributes = BTreeMap::new();
        attributes.insert("id".to_string(), org.id.as_str().to_string());
        for (key, value) in [
            ("type", &org.org_type),
            ("industry", &org.industry),
            ("status", &org.status),
        ] {
            if let Some(v) = value {
                attributes.insert(key.to_string(), v.clone());
            }
        }
        Self {
            id: Some(org.id.clone()),
            name: org.name.clone(),
            attributes,
            children,
        }
    }

    fn synthetic(children: Vec<OrganizationHierarchyNode>) -> Self {
        Self {
            id: None,
            name: SYNTHETIC_ROOT_NAME.to_string(),
            attributes: BTreeMap::new(),
            children,
        }
    }

    /// Whether this is the synthetic wrapper rather than an organization.
    pub fn is_synthetic(&self) -> bool {
        self.id.is_none()
    }

    /// Nodes in the tree, this one included.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Organization nodes in the tree, the synthetic root excluded.
    pub fn organization_count(&self) -> usize {
        self.iter().filter(|n| !n.is_synthetic()).count()
    }

    /// Depth of the deepest node; a lone root has depth 0.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(node.children.iter().map(|c| (c, depth + 1)));
        }
        max
    }

    /// Find the node for `id`.
    pub fn find(&self, id: &OrganizationId) -> Option<&OrganizationHierarchyNode> {
        self.iter().find(|n| n.id.as_ref() == Some(id))
    }

    /// Pre-order iterator over the tree.
    pub fn iter(&self) -> impl Iterator<Item = &OrganizationHierarchyNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

impl Drop for OrganizationHierarchyNode {
    fn drop(&mut self) {
        // Detach descendants onto a heap stack so each node drops childless.
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

impl fmt::Debug for OrganizationHierarchyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrganizationHierarchyNode")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("attributes", &self.attributes)
            .field("children", &self.children.len())
            .finish()
    }
}

/// Project `organizations` into a single-rooted tree.
pub fn project(organizations: &[Organization]) -> OrganizationHierarchyNode {
    // Index, first occurrence wins.
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(organizations.len());
    let mut orgs: Vec<&Organization> = Vec::with_capacity(organizations.len());
    for org in organizations {
        if index.contains_key(org.id.as_str()) {
            tracing::warn!(organization = %org.id, "dropping duplicate organization id");
            continue;
        }
        index.insert(org.id.as_str(), orgs.len());
        orgs.push(org);
    }

    // Parent links.
    let n = orgs.len();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut roots: Vec<usize> = Vec::new();
    for (i, org) in orgs.iter().enumerate() {
        match org.parent_id.as_ref() {
            None => roots.push(i),
            Some(parent) if parent == &org.id => {
                tracing::warn!(organization = %org.id, "organization is its own parent; treating as root");
                roots.push(i);
            }
            Some(parent) => match index.get(parent.as_str()) {
                Some(&p) => children[p].push(i),
                None => {
                    tracing::warn!(
                        organization = %org.id,
                        parent = %parent,
                        "parent not in input set; treating as root"
                    );
                    roots.push(i);
                }
            },
        }
    }

    // Traversal.
    let mut visited = vec![false; n];
    let mut tree_children: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut order: Vec<usize> = Vec::with_capacity(n);
    for &root in &roots {
        walk(root, &children, &mut visited, &mut tree_children, &mut order);
    }
    let mut promoted = 0usize;
    for i in 0..n {
        if !visited[i] {
            tracing::warn!(organization = %orgs[i].id, "breaking parent cycle; promoting to root");
            roots.push(i);
            promoted += 1;
            walk(i, &children, &mut visited, &mut tree_children, &mut order);
        }
    }

    // Assembly.
    let mut built: Vec<Option<OrganizationHierarchyNode>> =
        std::iter::repeat_with(|| None).take(n).collect();
    for &u in order.iter().rev() {
        let kids = tree_children[u]
            .iter()
            .filter_map(|c| built[*c].take())
            .collect();
        built[u] = Some(OrganizationHierarchyNode::from_org(orgs[u], kids));
    }
    let mut top: Vec<OrganizationHierarchyNode> =
        roots.iter().filter_map(|r| built[*r].take()).collect();

    tracing::debug!(
        organizations = n,
        roots = top.len(),
        cycles_broken = promoted,
        "projected organization hierarchy"
    );

    match top.len() {
        1 => top.remove(0),
        _ => OrganizationHierarchyNode::synthetic(top),
    }
}

fn walk(
    root: usize,
    children: &[Vec<usize>],
    visited: &mut [bool],
    tree_children: &mut [Vec<usize>],
    order: &mut Vec<usize>,
) {
    if visited[root] {
        return;
    }
    visited[root] = true;
    let mut stack = vec![root];
    while let Some(u) = stack.pop() {
        order.push(u);
        for &c in &children[u] {
            if !visited[c] {
                visited[c] = true;
                tree_children[u].push(c);
            }
        }
        stack.extend(tree_children[u].iter().rev());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(id: &str, parent: Option<&str>) -> Organization {
        let o = Organization::new(id, format!("Org {id}"));
        match parent {
            Some(p) => o.with_parent(p),
            None => o,
        }
    }

    fn ids(node: &OrganizationHierarchyNode) -> Vec<String> {
        node.children
            .iter()
            .map(|c| c.id.as_ref().map(|i| i.as_str().to_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn single_root_is_returned_directly() {
        let tree = project(&[
            org("hold", None),
            org("sub-a", Some("hold")),
            org("sub-b", Some("hold")),
            org("branch", Some("sub-a")),
        ]);
        assert_eq!(tree.id, Some(OrganizationId::new("hold")));
        assert_eq!(ids(&tree), vec!["sub-a", "sub-b"]);
        assert_eq!(ids(&tree.children[0]), vec!["branch"]);
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn multiple_roots_get_synthetic_wrapper() {
        let tree = project(&[org("a", None), org("b", None), org("c", Some("a"))]);
        assert!(tree.is_synthetic());
        assert_eq!(tree.name, SYNTHETIC_ROOT_NAME);
        assert_eq!(ids(&tree), vec!["a", "b"]);
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.organization_count(), 3);
    }

    #[test]
    fn empty_input_is_an_empty_synthetic_root() {
        let tree = project(&[]);
        assert!(tree.is_synthetic());
        assert!(tree.children.is_empty());
    }

    #[test]
    fn dangling_parent_becomes_root() {
        let tree = project(&[org("a", None), org("orphan", Some("missing"))]);
        assert_eq!(ids(&tree), vec!["a", "orphan"]);
    }

    #[test]
    fn self_parent_becomes_root() {
        let tree = project(&[org("loop", Some("loop"))]);
        assert_eq!(tree.id, Some(OrganizationId::new("loop")));
        assert!(tree.children.is_empty());
    }

    #[test]
    fn two_cycle_terminates_with_both_present() {
        let tree = project(&[org("a", Some("b")), org("b", Some("a"))]);
        assert_eq!(tree.organization_count(), 2);
        assert_eq!(tree.id, Some(OrganizationId::new("a")));
        assert_eq!(ids(&tree), vec!["b"]);
    }

    #[test]
    fn cycle_hanging_off_a_tree_is_reached_normally() {
        // c -> b -> a is fine; d <-> e is a separate cycle.
        let tree = project(&[
            org("a", None),
            org("b", Some("a")),
            org("c", Some("b")),
            org("d", Some("e")),
            org("e", Some("d")),
        ]);
        assert!(tree.is_synthetic());
        assert_eq!(ids(&tree), vec!["a", "d"]);
        assert_eq!(tree.organization_count(), 5);
    }

    #[test]
    fn duplicates_keep_first() {
        let mut second = org("a", None);
        second.name = "Impostor".to_string();
        let tree = project(&[org("a", None), second, org("b", Some("a"))]);
        assert_eq!(tree.name, "Org a");
        assert_eq!(tree.organization_count(), 2);
    }

    #[test]
    fn attributes_carry_optional_fields() {
        let mut o = org("a", None);
        o.org_type = Some("holding".to_string());
        o.industry = Some("fintech".to_string());
        let tree = project(&[o]);
        assert_eq!(tree.attributes.get("type").map(String::as_str), Some("holding"));
        assert_eq!(tree.attributes.get("industry").map(String::as_str), Some("fintech"));
        assert_eq!(tree.attributes.get("id").map(String::as_str), Some("a"));
        assert!(!tree.attributes.contains_key("status"));
    }

    #[test]
    fn deep_chain_projects_and_drops_without_recursion() {
        const DEPTH: usize = 300_000;
        let mut orgs = vec![org("0", None)];
        for i in 1..DEPTH {
            orgs.push(org(&i.to_string(), Some(&(i - 1).to_string())));
        }
        let tree = project(&orgs);
        assert_eq!(tree.node_count(), DEPTH);
        assert_eq!(tree.depth(), DEPTH - 1);
        assert_eq!(format!("{tree:?}").matches("children: 1").count(), 1);
        drop(tree);
    }

    #[test]
    fn find_locates_nested_node() {
        let tree = project(&[org("a", None), org("b", Some("a")), org("c", Some("b"))]);
        let c = tree.find(&OrganizationId::new("c")).unwrap();
        assert_eq!(c.name, "Org c");
        assert!(tree.find(&OrganizationId::new("zz")).is_none());
    }
}
