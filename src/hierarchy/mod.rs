//! Binary merge trees and the flat clusterings cut from them.
//!
//! # Structure
//!
//! Agglomerative clustering records every merge as a new internal node whose
//! two children are the clusters that were joined:
//!
//! ```text
//!            Distance 10.0
//!           /             \
//!     Distance 1.0     Distance 2.0
//!      /     \          /      \
//!     A       B        C        D      (leaves = objects)
//! ```
//!
//! - [`BinaryTree`]: generic arena tree with parent back-indices, subtree
//!   merge and left-to-right leaf traversal.
//! - [`Dendrogram`]: a `BinaryTree` of [`NodeContent`], names at leaves and
//!   merge distances at internal nodes.
//!
//! # Cutting
//!
//! | Cut | Keeps | Use when |
//! |-----|-------|----------|
//! | [`Dendrogram::cut_at_distance`] | merges `<= threshold` | a natural distance scale exists |
//! | [`Dendrogram::cut_to_k`] | all but the `k - 1` widest merges | the number of groups is known |
//!
//! # Rendering
//!
//! `Dendrogram` implements `Display` as an indented pre-order listing; see
//! [`Dendrogram::render`].

mod cut;
mod dendrogram;
mod node;
mod render;
pub mod tree;

pub use dendrogram::{Cluster, Dendrogram};
pub use node::{NodeContent, NodeId, TreeNode};
pub use tree::{BinaryTree, Leaves, Preorder};
