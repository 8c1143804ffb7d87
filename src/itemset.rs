use itertools::Itertools;
use std::fmt::{Display, Formatter, Result};

use crate::types::ItemId;

/// Ordered collection of distinct items.
///
/// Insertion order is kept so that output stays deterministic. `==` compares
/// the ordered sequence, [`Itemset::same_items`] compares contents only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Itemset {
    items: Vec<ItemId>,
}

impl Itemset {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn single(item: ItemId) -> Self {
        Self { items: vec![item] }
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    /// Appends `item` unless it is already present. Returns whether it was added.
    pub fn add_item(&mut self, item: ItemId) -> bool {
        if self.contains(item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Appends every item of `other` not already present, in `other`'s order.
    /// Returns the number of items added.
    pub fn extend_with(&mut self, other: &Itemset) -> usize {
        let mut added = 0;
        for &item in other {
            if self.add_item(item) {
                added += 1;
            }
        }
        added
    }

    pub fn is_subset_of(&self, other: &Itemset) -> bool {
        self.len() <= other.len() && self.iter().all(|&item| other.contains(item))
    }

    pub fn same_items(&self, other: &Itemset) -> bool {
        self.len() == other.len() && self.is_subset_of(other)
    }
}

impl From<Vec<ItemId>> for Itemset {
    /// Duplicates are dropped, first occurrence wins.
    fn from(items: Vec<ItemId>) -> Self {
        Self {
            items: items.into_iter().unique().collect(),
        }
    }
}

impl std::iter::FromIterator<ItemId> for Itemset {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().unique().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Itemset {
    type Item = &'a ItemId;
    type IntoIter = std::slice::Iter<'a, ItemId>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Display for Itemset {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{{{}}}", self.items.iter().join(", "))
    }
}
