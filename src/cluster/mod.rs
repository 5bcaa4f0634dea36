//! Agglomerative clustering of named objects.
//!
//! Bottom-up: start with each object as its own cluster, repeatedly merge
//! the two closest clusters until one remains. The merge history forms a
//! **dendrogram**, a binary tree you can cut at any height to get flat
//! clusters (see [`crate::hierarchy`]).
//!
//! ## Linkage
//!
//! Only single linkage is provided: the distance between two clusters is
//! the smallest distance between any of their members. It is what you get
//! by merging along the globally smallest unresolved pair, and it tends to
//! chain elongated groups together.
//!
//! ## Distances
//!
//! Objects are plain string identifiers. The metric is any [`Distance`],
//! including closures, so the caller keeps the data (feature vectors, DNA
//! sequences, ...) and the engine only sees names.
//!
//! ## Usage
//!
//! ```rust
//! use dendro::cluster::{HierarchicalClustering, TieBreak};
//!
//! let positions = [("a", 0.0_f64), ("b", 0.5), ("c", 9.0)];
//! let lookup = |name: &str| positions.iter().find(|(n, _)| *n == name).map(|(_, x)| *x);
//! let dist = |a: &str, b: &str| match (lookup(a), lookup(b)) {
//!     (Some(x), Some(y)) => (x - y).abs(),
//!     _ => dendro::distance::SATURATED_DISTANCE,
//! };
//!
//! let dendro = HierarchicalClustering::new()
//!     .with_tie_break(TieBreak::PairOrder)
//!     .fit_dendrogram(&["a", "b", "c"], &dist)
//!     .unwrap();
//! assert_eq!(dendro.cut_at_distance(1.0).unwrap(), vec![vec!["a", "b"], vec!["c"]]);
//! ```

mod hierarchical;
mod registry;
mod traits;

pub use hierarchical::{
    build_dendrogram, HierarchicalClustering, MergeCandidate, NonFinite, TieBreak,
};
pub use registry::{ClusterHandle, ClusterRegistry};
pub use traits::Distance;
