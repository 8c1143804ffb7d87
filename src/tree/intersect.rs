use rayon::prelude::*;

use super::ItTree;
use crate::{
    error::TreeError,
    types::{MinSupportCount, NodeId, Tidset},
};

/// Intersects two tidsets, giving up as soon as `min_support` is out of reach.
///
/// The smaller set is scanned and probed against the other one; on equal
/// sizes `this` is scanned. Each scanned tid lowers the number of tids left
/// to look at, and once `left + common < min_support` no outcome of the rest
/// of the scan can reach the threshold, so `None` is returned.
///
/// A `Some` result is exactly `this ∩ other`. Callers still compare its
/// cardinality against `min_support` before growing the tree with it.
pub fn intersect_tidsets(
    this: &Tidset,
    other: &Tidset,
    min_support: MinSupportCount,
) -> Option<Tidset> {
    let (scanned, probed) = if other.len() < this.len() {
        (other, this)
    } else {
        (this, other)
    };

    let mut remaining = scanned.len();
    if remaining < min_support {
        ftlog::trace!(
            "Pruned before scanning: {} tids, min support {}",
            remaining,
            min_support
        );
        return None;
    }

    let mut common = Tidset::with_capacity(remaining);
    for tid in scanned {
        if probed.contains(tid) {
            common.insert(*tid);
        }
        remaining -= 1;
        if remaining + common.len() < min_support {
            ftlog::trace!(
                "Pruned after {} of {} tids, {} common, min support {}",
                scanned.len() - remaining,
                scanned.len(),
                common.len(),
                min_support
            );
            return None;
        }
    }

    Some(common)
}

impl ItTree {
    fn tidset_of(&self, node: NodeId) -> Result<&Tidset, TreeError> {
        self.node(node)?
            .tidset
            .as_ref()
            .ok_or(TreeError::MissingTidset(node))
    }

    /// Tidset of the union of the itemsets of `node` and `sibling`.
    ///
    /// `Ok(None)` means the union provably occurs in fewer than `min_support`
    /// transactions and the branch can be pruned. See [`intersect_tidsets`].
    ///
    /// # Errors
    ///
    /// - If either node is unknown or has no tidset yet.
    pub fn intersect(
        &self,
        node: NodeId,
        sibling: NodeId,
        min_support: MinSupportCount,
    ) -> Result<Option<Tidset>, TreeError> {
        Ok(intersect_tidsets(
            self.tidset_of(node)?,
            self.tidset_of(sibling)?,
            min_support,
        ))
    }

    /// Intersects `node` with each of `siblings` on the rayon pool. Results
    /// come back in the order of `siblings`.
    pub fn intersect_with_siblings(
        &self,
        node: NodeId,
        siblings: &[NodeId],
        min_support: MinSupportCount,
    ) -> Result<Vec<Option<Tidset>>, TreeError> {
        let tidset = self.tidset_of(node)?;
        siblings
            .par_iter()
            .map(|&sibling| {
                self.tidset_of(sibling)
                    .map(|other| intersect_tidsets(tidset, other, min_support))
            })
            .collect()
    }
}
