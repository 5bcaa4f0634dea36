//! Dendrogram produced by agglomerative clustering.
//!
//! A dendrogram is a [`BinaryTree`] whose leaves carry object identifiers
//! and whose internal nodes carry the distance at which their two subtrees
//! were merged. Every internal node has exactly two children, so a
//! dendrogram over `n` objects has `2n - 1` nodes.

use super::node::{NodeContent, NodeId};
use super::tree::BinaryTree;
use crate::error::{Error, Result};

/// A flat cluster: object identifiers in left-to-right leaf order.
pub type Cluster = Vec<String>;

/// Binary merge tree over named objects.
#[derive(Debug, Clone, Default)]
pub struct Dendrogram {
    tree: BinaryTree<NodeContent>,
}

impl Dendrogram {
    /// Create an empty dendrogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a one-leaf dendrogram holding `name`.
    pub fn leaf(name: impl Into<String>) -> Result<Self> {
        let mut tree = BinaryTree::new();
        tree.create_root(NodeContent::Leaf(name.into()))?;
        Ok(Self { tree })
    }

    /// Wrap an existing tree.
    ///
    /// Every node must be a leaf holding [`NodeContent::Leaf`] or an
    /// internal node with two children holding [`NodeContent::Merge`].
    pub fn from_tree(tree: BinaryTree<NodeContent>) -> Result<Self> {
        for (id, _) in tree.preorder(tree.root()) {
            let well_formed = match tree.data(id) {
                Some(NodeContent::Leaf(_)) => tree.is_external(id),
                Some(NodeContent::Merge(d)) => {
                    tree.has_left(id) && tree.has_right(id) && *d >= 0.0
                }
                None => false,
            };
            if !well_formed {
                return Err(Error::invalid_op(
                    "from_tree",
                    "leaves must hold names and internal nodes two children and a distance",
                ));
            }
        }
        Ok(Self { tree })
    }

    /// Join `other` under a new root at `distance`; this dendrogram's old
    /// root becomes the left child. `other` is left empty.
    ///
    /// `distance` must be non-negative; NaN is rejected.
    pub fn merge(&mut self, other: &mut Dendrogram, distance: f64) -> Result<NodeId> {
        if !(distance >= 0.0) {
            return Err(Error::invalid_op(
                "merge",
                "merge distance must be a non-negative number",
            ));
        }
        self.tree
            .merge_trees(&mut other.tree, NodeContent::Merge(distance))
    }

    /// The underlying binary tree.
    pub fn tree(&self) -> &BinaryTree<NodeContent> {
        &self.tree
    }

    /// Consume the dendrogram, returning its tree.
    pub fn into_tree(self) -> BinaryTree<NodeContent> {
        self.tree
    }

    /// Root node.
    pub fn root(&self) -> Option<NodeId> {
        self.tree.root()
    }

    /// Number of nodes (leaves plus merges).
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// True if the dendrogram holds no object.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Number of original objects.
    pub fn n_items(&self) -> usize {
        self.tree.n_leaves()
    }

    /// Number of merges recorded.
    pub fn n_merges(&self) -> usize {
        self.len() - self.n_items()
    }

    /// Longest root-to-leaf path, in edges.
    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    /// Merge distance at `node`, `None` for leaves.
    pub fn distance(&self, node: NodeId) -> Option<f64> {
        self.tree.data(node).and_then(NodeContent::as_merge)
    }

    /// Object identifier at `node`, `None` for internal nodes.
    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.tree.data(node).and_then(NodeContent::as_leaf)
    }

    /// Object identifiers under `node`, left to right.
    pub fn leaves(&self, node: NodeId) -> impl Iterator<Item = &str> + '_ {
        self.tree
            .leaves(Some(node))
            .filter_map(|(_, content)| content.as_leaf())
    }

    /// Every object identifier, left to right.
    pub fn names(&self) -> Vec<&str> {
        match self.root() {
            Some(root) => self.leaves(root).collect(),
            None => Vec::new(),
        }
    }

    /// Cluster formed by the leaves under `node`.
    pub(crate) fn cluster_at(&self, node: NodeId) -> Cluster {
        self.leaves(node).map(str::to_owned).collect()
    }

    /// Merge distances in pre-order.
    pub fn distances(&self) -> Vec<f64> {
        self.tree
            .preorder(self.root())
            .filter_map(|(id, _)| self.distance(id))
            .collect()
    }
}
