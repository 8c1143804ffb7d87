use super::ItTree;
use crate::{error::TreeError, itemset::Itemset, types::NodeId};

impl ItTree {
    /// Adds every item of `replacement` to the itemsets of all descendants of
    /// `node`, at every depth. `node` itself is left as is.
    ///
    /// Used by Charm once it has found that `replacement` occurs in every
    /// transaction of the subtree. Tidsets and links are not touched, and items
    /// already present are skipped, so calling it again is a no-op.
    ///
    /// Returns how many itemsets gained at least one item.
    pub fn replace_in_children(
        &mut self,
        node: NodeId,
        replacement: &Itemset,
    ) -> Result<usize, TreeError> {
        let mut stack: Vec<NodeId> = self.node(node)?.children.iter().rev().copied().collect();
        if replacement.is_empty() {
            return Ok(0);
        }

        let mut widened = 0;
        while let Some(id) = stack.pop() {
            let child = &mut self.nodes[id];
            if child.itemset.extend_with(replacement) > 0 {
                widened += 1;
            }
            stack.extend(child.children.iter().rev().copied());
        }

        ftlog::debug!(
            "Merged {} into the subtree of node {}: {} itemsets widened",
            replacement,
            node,
            widened
        );
        Ok(widened)
    }
}
