//! Flat clusterings extracted from a dendrogram.
//!
//! Two cuts are supported:
//!
//! - [`Dendrogram::cut_at_distance`]: sever every merge above a threshold.
//! - [`Dendrogram::cut_to_k`]: split the highest merges until `k` clusters
//!   remain.
//!
//! ```text
//!            10.0                cut_at_distance(1.5) -> [A B] [C] [D]
//!          /      \              cut_to_k(2)          -> [A B] [C D]
//!       1.0        2.0
//!      /   \      /   \
//!     A     B    C     D
//! ```
//!
//! Both return clusters in pre-order of the node each cluster hangs from,
//! so every object appears in exactly one cluster.

use super::dendrogram::{Cluster, Dendrogram};
use super::node::NodeId;
use crate::error::{Error, Result};

impl Dendrogram {
    /// Clusters obtained by cutting every merge whose distance exceeds
    /// `threshold`.
    ///
    /// Walking down from the root, the first merge with distance
    /// `<= threshold` on each path starts a cluster made of all leaves
    /// below it. A leaf reached without passing such a merge is a singleton.
    pub fn cut_at_distance(&self, threshold: f64) -> Result<Vec<Cluster>> {
        if threshold.is_nan() {
            return Err(Error::InvalidParameter {
                name: "threshold",
                message: "must not be NaN",
            });
        }

        let tree = self.tree();
        let mut clusters = Vec::new();
        let mut stack: Vec<NodeId> = self.root().into_iter().collect();

        while let Some(node) = stack.pop() {
            let below = self.distance(node).map_or(true, |d| d <= threshold);
            if below {
                clusters.push(self.cluster_at(node));
                continue;
            }
            stack.extend(tree.right(node));
            stack.extend(tree.left(node));
        }

        Ok(clusters)
    }

    /// Exactly `k` clusters, or one per object when `k` exceeds the number
    /// of objects.
    ///
    /// Starting from the root, the boundary merge with the largest distance
    /// is repeatedly replaced by its two children. Ties go to the merge
    /// found first in pre-order.
    pub fn cut_to_k(&self, k: usize) -> Result<Vec<Cluster>> {
        if k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }

        let tree = self.tree();
        // Kept in pre-order: a split replaces a node by its children in place.
        let mut boundary: Vec<NodeId> = self.root().into_iter().collect();

        while boundary.len() < k {
            let mut widest: Option<(usize, f64)> = None;
            for (pos, &node) in boundary.iter().enumerate() {
                if let Some(d) = self.distance(node) {
                    if widest.map_or(true, |(_, best)| d > best) {
                        widest = Some((pos, d));
                    }
                }
            }
            let Some((pos, _)) = widest else {
                break;
            };

            let node = boundary[pos];
            let children: Vec<NodeId> = tree
                .left(node)
                .into_iter()
                .chain(tree.right(node))
                .collect();
            boundary.splice(pos..=pos, children);
        }

        Ok(boundary
            .into_iter()
            .map(|node| self.cluster_at(node))
            .collect())
    }
}
