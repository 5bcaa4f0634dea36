//! Tree nodes and their payloads.

use core::fmt;

/// Handle to a node inside a [`BinaryTree`](super::BinaryTree).
///
/// Handles are only meaningful for the tree that issued them. Merging a tree
/// into another re-issues the absorbed tree's handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its tree's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in a binary tree.
///
/// The tree owns its nodes; `parent` is a back-reference used only for
/// upward navigation.
#[derive(Debug, Clone)]
pub struct TreeNode<T> {
    pub(crate) data: T,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> TreeNode<T> {
    pub(crate) fn new(data: T) -> Self {
        Self {
            data,
            parent: None,
            left: None,
            right: None,
        }
    }

    /// Payload stored at this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Parent node, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Left child, if any.
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Right child, if any.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// True when the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Payload of a dendrogram node.
///
/// Leaves carry the object identifier, internal nodes carry the distance at
/// which their two subtrees were joined.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeContent {
    /// An original object.
    Leaf(String),
    /// A merge event.
    Merge(f64),
}

impl NodeContent {
    /// Object identifier if this is a leaf.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            NodeContent::Leaf(name) => Some(name),
            NodeContent::Merge(_) => None,
        }
    }

    /// Merge distance if this is an internal node.
    pub fn as_merge(&self) -> Option<f64> {
        match self {
            NodeContent::Merge(d) => Some(*d),
            NodeContent::Leaf(_) => None,
        }
    }
}

impl fmt::Display for NodeContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeContent::Leaf(name) => f.write_str(name),
            NodeContent::Merge(d) => write!(f, "Distance: {d:.4}"),
        }
    }
}
