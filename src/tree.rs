mod closure;
mod intersect;
mod node;

pub use intersect::intersect_tidsets;
pub use node::ItNode;

use crate::{
    error::TreeError,
    itemset::Itemset,
    types::{NodeId, Tidset},
};

/// Itemset/tidset search tree used by Eclat and Charm.
///
/// Nodes live in an arena and refer to each other through [`NodeId`]s. A
/// parent handle never owns anything; a subtree that is detached from its
/// parent stays in the arena until [`ItTree::retain_subtrees`] reclaims it.
///
/// The tree does not check that children extend their parent by exactly one
/// item. Keeping that shape is up to the miner growing the tree.
#[derive(Debug, Clone, Default)]
pub struct ItTree {
    nodes: Vec<ItNode>,
}

impl ItTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a parentless node with an unset tidset.
    pub fn add_node(&mut self, itemset: Itemset) -> NodeId {
        self.nodes.push(ItNode::new(itemset));
        self.nodes.len() - 1
    }

    /// Adds a node and attaches it under `parent` in one step.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        itemset: Itemset,
        tidset: Tidset,
    ) -> Result<NodeId, TreeError> {
        self.node(parent)?;
        let child = self.add_node(itemset);
        self.nodes[child].tidset = Some(tidset);
        self.attach_child(parent, child)?;
        Ok(child)
    }

    pub fn node(&self, node: NodeId) -> Result<&ItNode, TreeError> {
        self.nodes.get(node).ok_or(TreeError::UnknownNode(node))
    }

    fn node_mut(&mut self, node: NodeId) -> Result<&mut ItNode, TreeError> {
        self.nodes.get_mut(node).ok_or(TreeError::UnknownNode(node))
    }

    pub fn itemset(&self, node: NodeId) -> Result<&Itemset, TreeError> {
        Ok(&self.node(node)?.itemset)
    }

    pub fn itemset_mut(&mut self, node: NodeId) -> Result<&mut Itemset, TreeError> {
        Ok(&mut self.node_mut(node)?.itemset)
    }

    pub fn set_itemset(&mut self, node: NodeId, itemset: Itemset) -> Result<(), TreeError> {
        self.node_mut(node)?.itemset = itemset;
        Ok(())
    }

    pub fn tidset(&self, node: NodeId) -> Result<Option<&Tidset>, TreeError> {
        Ok(self.node(node)?.tidset.as_ref())
    }

    pub fn set_tidset(&mut self, node: NodeId, tidset: Tidset) -> Result<(), TreeError> {
        self.node_mut(node)?.tidset = Some(tidset);
        Ok(())
    }

    pub fn support(&self, node: NodeId) -> Result<Option<usize>, TreeError> {
        Ok(self.node(node)?.support())
    }

    pub fn parent(&self, node: NodeId) -> Result<Option<NodeId>, TreeError> {
        Ok(self.node(node)?.parent)
    }

    pub fn children(&self, node: NodeId) -> Result<&[NodeId], TreeError> {
        Ok(&self.node(node)?.children)
    }

    /// Links `child` under `parent`, appending it to the parent's children.
    ///
    /// # Errors
    ///
    /// - If either id is unknown.
    /// - If `child` already has a parent.
    /// - If `child` is `parent` or one of its ancestors.
    pub fn attach_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.node(parent)?;
        if let Some(current) = self.node(child)?.parent {
            return Err(TreeError::AlreadyAttached {
                child,
                parent: current,
            });
        }
        if self.ancestors_and_self(parent).any(|ancestor| ancestor == child) {
            return Err(TreeError::Cycle { parent, child });
        }

        ftlog::trace!("Attaching node {} under node {}", child, parent);
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
        Ok(())
    }

    /// Unlinks `child` from `parent`. The detached subtree keeps its shape and
    /// becomes a root.
    pub fn detach_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let position = self
            .node(parent)?
            .children
            .iter()
            .position(|&c| c == child)
            .ok_or(TreeError::NotAChild { parent, child })?;

        ftlog::trace!("Detaching node {} from node {}", child, parent);
        self.nodes[parent].children.remove(position);
        self.nodes[child].parent = None;
        Ok(())
    }

    /// Moves `node` under `parent`, or makes it a root when `parent` is `None`.
    /// The node keeps its own subtree and is appended to the new parent's
    /// children.
    ///
    /// # Errors
    ///
    /// - If either id is unknown.
    /// - If `parent` is `node` or one of its descendants.
    pub fn set_parent(&mut self, node: NodeId, parent: Option<NodeId>) -> Result<(), TreeError> {
        let current = self.node(node)?.parent;
        if let Some(parent) = parent {
            self.node(parent)?;
            if self.ancestors_and_self(parent).any(|ancestor| ancestor == node) {
                return Err(TreeError::Cycle {
                    parent,
                    child: node,
                });
            }
        }
        if current == parent {
            return Ok(());
        }

        if let Some(current) = current {
            self.detach_child(current, node)?;
        }
        if let Some(parent) = parent {
            self.attach_child(parent, node)?;
        }
        Ok(())
    }

    /// Nodes without a parent, in creation order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(id, _)| id)
    }

    /// Depth-first, pre-order walk of the subtree below `node`, excluding `node`.
    pub fn descendants(&self, node: NodeId) -> Result<Descendants<'_>, TreeError> {
        let stack = self.node(node)?.children.iter().rev().copied().collect();
        Ok(Descendants { tree: self, stack })
    }

    /// Whether two nodes hold the same items, regardless of order.
    pub fn has_same_itemset(&self, a: NodeId, b: NodeId) -> Result<bool, TreeError> {
        Ok(self.itemset(a)?.same_items(self.itemset(b)?))
    }

    /// Drops every node outside the subtrees rooted at `keep` and renumbers the
    /// survivors, preserving their relative order.
    ///
    /// Returns the new id of each old id, `None` for reclaimed nodes. A kept
    /// node that still had a parent outside the kept set becomes a root.
    pub fn retain_subtrees(&mut self, keep: &[NodeId]) -> Result<Vec<Option<NodeId>>, TreeError> {
        let mut reachable = vec![false; self.nodes.len()];
        let mut stack = Vec::with_capacity(keep.len());
        for &root in keep {
            self.node(root)?;
            stack.push(root);
        }
        while let Some(id) = stack.pop() {
            if reachable[id] {
                continue;
            }
            reachable[id] = true;
            stack.extend(self.nodes[id].children.iter().copied());
        }

        let mut remap = vec![None; self.nodes.len()];
        let mut next = 0;
        for (old, &alive) in reachable.iter().enumerate() {
            if alive {
                remap[old] = Some(next);
                next += 1;
            }
        }

        let before = self.nodes.len();
        let nodes = std::mem::take(&mut self.nodes);
        self.nodes = nodes
            .into_iter()
            .zip(reachable.iter())
            .filter(|(_, alive)| **alive)
            .map(|(mut node, _)| {
                node.parent = node.parent.and_then(|parent| remap[parent]);
                node.children = node
                    .children
                    .iter()
                    .filter_map(|&child| remap[child])
                    .collect();
                node
            })
            .collect();

        ftlog::debug!(
            "Reclaimed {} of {} nodes, {} remain",
            before - self.nodes.len(),
            before,
            self.nodes.len()
        );
        Ok(remap)
    }

    fn ancestors_and_self(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(node), move |&id| self.nodes[id].parent)
    }
}

/// Iterator returned by [`ItTree::descendants`].
pub struct Descendants<'a> {
    tree: &'a ItTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.nodes[id].children.iter().rev().copied());
        Some(id)
    }
}
