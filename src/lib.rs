//! # dendro
//!
//! Single-link agglomerative clustering of named objects into a dendrogram,
//! with threshold and k-cluster cuts and an indented text rendering.
//!
//! ```rust
//! use dendro::build_dendrogram;
//!
//! let dist = |a: &str, b: &str| if a.starts_with('x') == b.starts_with('x') { 1.0 } else { 5.0 };
//! let dendro = build_dendrogram(&["x1", "y1", "x2", "y2"], &dist).unwrap();
//!
//! assert_eq!(dendro.cut_to_k(2).unwrap().len(), 2);
//! print!("{dendro}");
//! ```

pub mod cluster;
pub mod distance;
/// Error types used across `dendro`.
pub mod error;
pub mod hierarchy;
pub mod input;

pub use cluster::{build_dendrogram, Distance, HierarchicalClustering, NonFinite, TieBreak};
pub use error::{Error, Result};
pub use hierarchy::{BinaryTree, Cluster, Dendrogram, NodeContent, NodeId};
