use crate::{
    itemset::Itemset,
    types::{NodeId, Tidset},
};

/// A node of the IT-tree: an itemset paired with the transactions it occurs in.
#[derive(Debug, Clone)]
pub struct ItNode {
    pub(crate) itemset: Itemset,
    pub(crate) tidset: Option<Tidset>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl ItNode {
    /// Node with no parent, no children and no tidset yet.
    pub fn new(itemset: Itemset) -> Self {
        Self {
            itemset,
            tidset: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn itemset(&self) -> &Itemset {
        &self.itemset
    }

    pub fn tidset(&self) -> Option<&Tidset> {
        self.tidset.as_ref()
    }

    /// Number of transactions containing the itemset, once the tidset is known.
    pub fn support(&self) -> Option<usize> {
        self.tidset.as_ref().map(|tidset| tidset.len())
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
