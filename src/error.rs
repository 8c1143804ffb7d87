use std::fmt::{Display, Formatter, Result};

use crate::types::NodeId;

/// Caller contract violations detected by [`ItTree`](crate::ItTree).
///
/// A pruned intersection is not an error, it comes back as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    UnknownNode(NodeId),
    MissingTidset(NodeId),
    AlreadyAttached { child: NodeId, parent: NodeId },
    Cycle { parent: NodeId, child: NodeId },
    NotAChild { parent: NodeId, child: NodeId },
}

impl Display for TreeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            TreeError::UnknownNode(node) => write!(f, "Unknown node {}", node),
            TreeError::MissingTidset(node) => write!(f, "Node {} has no tidset", node),
            TreeError::AlreadyAttached { child, parent } => {
                write!(f, "Node {} is already a child of node {}", child, parent)
            }
            TreeError::Cycle { parent, child } => write!(
                f,
                "Attaching node {} under node {} would create a cycle",
                child, parent
            ),
            TreeError::NotAChild { parent, child } => {
                write!(f, "Node {} is not a child of node {}", child, parent)
            }
        }
    }
}

impl std::error::Error for TreeError {}
