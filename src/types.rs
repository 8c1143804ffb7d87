use std::collections::HashSet;

pub type ItemId = usize;
pub type TransactionId = usize;

/// Transactions in which an itemset occurs.
pub type Tidset = HashSet<TransactionId>;

/// Handle of a node inside an [`ItTree`](crate::ItTree) arena.
pub type NodeId = usize;

/// Minimum number of transactions an itemset must occur in.
pub type MinSupportCount = usize;
