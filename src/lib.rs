//! Itemset/tidset search tree (IT-tree) for Eclat and Charm style miners.
//!
//! The tree holds candidate itemsets together with the transactions they occur
//! in. Miners grow it by intersecting sibling tidsets with
//! [`ItTree::intersect`], which prunes as soon as a minimum support count can
//! no longer be reached, and Charm folds co-occurring items into whole
//! subtrees with [`ItTree::replace_in_children`].

pub mod error;
pub mod itemset;
pub mod tree;
pub mod types;
#[cfg(feature = "python")]
mod wrapper;

pub use error::TreeError;
pub use itemset::Itemset;
pub use tree::{intersect_tidsets, Descendants, ItNode, ItTree};
pub use types::{ItemId, MinSupportCount, NodeId, Tidset, TransactionId};

#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::wrap_pyfunction;

#[cfg(feature = "python")]
#[pymodule]
fn ittree(_: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(wrapper::intersect_tidsets, m)?)?;
    m.add_class::<wrapper::ItTree>()?;
    Ok(())
}
