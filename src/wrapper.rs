use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::TreeError;
use crate::itemset::Itemset;
use crate::tree::ItTree as Tree;
use crate::types::{ItemId, MinSupportCount, NodeId, Tidset};

impl From<TreeError> for PyErr {
    fn from(err: TreeError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Tidset intersection with early exit once `min_support` is out of reach.
#[pyfunction]
#[pyo3(text_signature = "(this, other, min_support, /)")]
pub fn intersect_tidsets(
    this: Tidset,
    other: Tidset,
    min_support: MinSupportCount,
) -> Option<Tidset> {
    crate::tree::intersect_tidsets(&this, &other, min_support)
}

/// Itemset/tidset search tree.
#[pyclass]
#[derive(Default)]
pub struct ItTree {
    tree: Tree,
}

#[pymethods]
impl ItTree {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    fn len(&self) -> usize {
        self.tree.len()
    }

    fn add_node(&mut self, items: Vec<ItemId>) -> NodeId {
        self.tree.add_node(Itemset::from(items))
    }

    fn add_child(&mut self, parent: NodeId, items: Vec<ItemId>, tidset: Tidset) -> PyResult<NodeId> {
        Ok(self.tree.add_child(parent, Itemset::from(items), tidset)?)
    }

    fn attach_child(&mut self, parent: NodeId, child: NodeId) -> PyResult<()> {
        Ok(self.tree.attach_child(parent, child)?)
    }

    fn detach_child(&mut self, parent: NodeId, child: NodeId) -> PyResult<()> {
        Ok(self.tree.detach_child(parent, child)?)
    }

    fn set_tidset(&mut self, node: NodeId, tidset: Tidset) -> PyResult<()> {
        Ok(self.tree.set_tidset(node, tidset)?)
    }

    fn itemset(&self, node: NodeId) -> PyResult<Vec<ItemId>> {
        Ok(self.tree.itemset(node)?.items().to_vec())
    }

    fn tidset(&self, node: NodeId) -> PyResult<Option<Tidset>> {
        Ok(self.tree.tidset(node)?.cloned())
    }

    fn parent(&self, node: NodeId) -> PyResult<Option<NodeId>> {
        Ok(self.tree.parent(node)?)
    }

    fn children(&self, node: NodeId) -> PyResult<Vec<NodeId>> {
        Ok(self.tree.children(node)?.to_vec())
    }

    fn intersect(
        &self,
        node: NodeId,
        sibling: NodeId,
        min_support: MinSupportCount,
    ) -> PyResult<Option<Tidset>> {
        Ok(self.tree.intersect(node, sibling, min_support)?)
    }

    fn replace_in_children(&mut self, node: NodeId, replacement: Vec<ItemId>) -> PyResult<usize> {
        Ok(self
            .tree
            .replace_in_children(node, &Itemset::from(replacement))?)
    }
}
