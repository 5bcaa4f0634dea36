//! Arena-backed binary tree.
//!
//! Nodes live in a `Vec` owned by the tree and refer to each other through
//! [`NodeId`] indices. Children are owned by the tree, never by their parent
//! node, so dropping the tree releases every node at once and the `parent`
//! back-index never takes part in ownership.
//!
//! ```text
//!            root (id 2)
//!           /         \
//!     left (id 0)   right (id 1)
//! ```
//!
//! Read accessors treat an unknown [`NodeId`] as absent. Mutating
//! operations reject it with [`Error::InvalidOperation`].

use super::node::{NodeId, TreeNode};
use crate::error::{Error, Result};

/// A binary tree whose nodes carry a payload of type `T`.
#[derive(Debug, Clone)]
pub struct BinaryTree<T> {
    nodes: Vec<TreeNode<T>>,
    root: Option<NodeId>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryTree<T> {
    /// Create a tree without any node.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    fn alloc(&mut self, data: T) -> Result<NodeId> {
        self.nodes
            .try_reserve(1)
            .map_err(|_| Error::OutOfMemory { what: "tree node" })?;
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode::new(data));
        Ok(id)
    }

    fn node_mut(&mut self, op: &'static str, id: NodeId) -> Result<&mut TreeNode<T>> {
        self.nodes
            .get_mut(id.0)
            .ok_or_else(|| Error::invalid_op(op, "node does not belong to this tree"))
    }

    /// Add a root holding `data`. Fails if the tree already has one.
    pub fn create_root(&mut self, data: T) -> Result<NodeId> {
        if self.root.is_some() {
            return Err(Error::invalid_op("create_root", "tree already has a root"));
        }
        let id = self.alloc(data)?;
        self.root = Some(id);
        Ok(id)
    }

    /// Attach a new left child holding `data` under `node`.
    pub fn insert_left(&mut self, node: NodeId, data: T) -> Result<NodeId> {
        if self.node_mut("insert_left", node)?.left.is_some() {
            return Err(Error::invalid_op("insert_left", "node already has a left child"));
        }
        let id = self.alloc(data)?;
        self.nodes[id.0].parent = Some(node);
        self.nodes[node.0].left = Some(id);
        Ok(id)
    }

    /// Attach a new right child holding `data` under `node`.
    pub fn insert_right(&mut self, node: NodeId, data: T) -> Result<NodeId> {
        if self.node_mut("insert_right", node)?.right.is_some() {
            return Err(Error::invalid_op("insert_right", "node already has a right child"));
        }
        let id = self.alloc(data)?;
        self.nodes[id.0].parent = Some(node);
        self.nodes[node.0].right = Some(id);
        Ok(id)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree has no node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The root node.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Borrow a node.
    pub fn get(&self, node: NodeId) -> Option<&TreeNode<T>> {
        self.nodes.get(node.0)
    }

    /// Left child of `node`.
    pub fn left(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|n| n.left)
    }

    /// Right child of `node`.
    pub fn right(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|n| n.right)
    }

    /// Parent of `node`.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|n| n.parent)
    }

    /// Payload at `node`.
    pub fn data(&self, node: NodeId) -> Option<&T> {
        self.get(node).map(|n| &n.data)
    }

    /// True if `node` is the root of this tree.
    pub fn is_root(&self, node: NodeId) -> bool {
        self.root == Some(node)
    }

    /// True if `node` has at least one child.
    pub fn is_internal(&self, node: NodeId) -> bool {
        self.get(node).is_some_and(|n| !n.is_leaf())
    }

    /// True if `node` has no child.
    pub fn is_external(&self, node: NodeId) -> bool {
        self.get(node).is_some_and(TreeNode::is_leaf)
    }

    /// True if `node` has a left child.
    pub fn has_left(&self, node: NodeId) -> bool {
        self.left(node).is_some()
    }

    /// True if `node` has a right child.
    pub fn has_right(&self, node: NodeId) -> bool {
        self.right(node).is_some()
    }

    /// Leaves of the subtree rooted at `node`, left to right.
    ///
    /// Each call starts a fresh traversal. `None` yields nothing.
    pub fn leaves(&self, node: Option<NodeId>) -> Leaves<'_, T> {
        let stack = node.filter(|n| n.0 < self.nodes.len()).into_iter().collect();
        Leaves { tree: self, stack }
    }

    /// Call `f` on the payload of every leaf under `node`, left to right.
    pub fn map_leaves<F>(&self, node: Option<NodeId>, mut f: F)
    where
        F: FnMut(&T),
    {
        for (_, data) in self.leaves(node) {
            f(data);
        }
    }

    /// Pre-order walk of the subtree rooted at `node`, yielding each node
    /// with its depth below `node`.
    pub fn preorder(&self, node: Option<NodeId>) -> Preorder<'_, T> {
        let stack = node
            .filter(|n| n.0 < self.nodes.len())
            .map(|n| (n, 0))
            .into_iter()
            .collect();
        Preorder { tree: self, stack }
    }

    /// Number of leaves in the tree.
    pub fn n_leaves(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Longest root-to-leaf path, in edges. Zero for a single node or an
    /// empty tree.
    pub fn depth(&self) -> usize {
        self.preorder(self.root).map(|(_, d)| d).max().unwrap_or(0)
    }

    /// Give this tree a new root holding `data`, with the previous root as
    /// its left child and the root of `other` as its right child.
    ///
    /// Every node of `other` moves into this tree; `other` is left empty.
    /// Returns the new root.
    pub fn merge_trees(&mut self, other: &mut BinaryTree<T>, data: T) -> Result<NodeId> {
        let (Some(left_root), Some(right_root)) = (self.root, other.root) else {
            return Err(Error::invalid_op("merge_trees", "cannot merge an empty tree"));
        };
        self.nodes
            .try_reserve(other.nodes.len() + 1)
            .map_err(|_| Error::OutOfMemory { what: "tree node" })?;

        let offset = self.nodes.len();
        let shift = |id: Option<NodeId>| id.map(|n| NodeId(n.0 + offset));
        for node in other.nodes.drain(..) {
            self.nodes.push(TreeNode {
                data: node.data,
                parent: shift(node.parent),
                left: shift(node.left),
                right: shift(node.right),
            });
        }
        other.root = None;

        let right_root = NodeId(right_root.0 + offset);
        let new_root = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            data,
            parent: None,
            left: Some(left_root),
            right: Some(right_root),
        });
        self.nodes[left_root.0].parent = Some(new_root);
        self.nodes[right_root.0].parent = Some(new_root);
        self.root = Some(new_root);
        Ok(new_root)
    }

    /// Release the tree, handing every payload to `release`.
    ///
    /// Plain `drop` already releases nodes and payloads; this is for payloads
    /// that need explicit disposal.
    pub fn free_with<F>(self, mut release: F)
    where
        F: FnMut(T),
    {
        for node in self.nodes {
            release(node.data);
        }
    }
}

/// Iterator over the leaves of a subtree. See [`BinaryTree::leaves`].
#[derive(Debug)]
pub struct Leaves<'a, T> {
    tree: &'a BinaryTree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> Iterator for Leaves<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            let node = &self.tree.nodes[id.0];
            if node.is_leaf() {
                return Some((id, &node.data));
            }
            self.stack.extend(node.right);
            self.stack.extend(node.left);
        }
        None
    }
}

/// Pre-order iterator. See [`BinaryTree::preorder`].
#[derive(Debug)]
pub struct Preorder<'a, T> {
    tree: &'a BinaryTree<T>,
    stack: Vec<(NodeId, usize)>,
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        let node = &self.tree.nodes[id.0];
        self.stack.extend(node.right.map(|r| (r, depth + 1)));
        self.stack.extend(node.left.map(|l| (l, depth + 1)));
        Some((id, depth))
    }
}
