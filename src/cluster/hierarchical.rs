//! Single-link agglomerative clustering over named objects.
//!
//! Builds a [`Dendrogram`] bottom-up:
//!
//! 1. Seed one single-leaf cluster per object and register it.
//! 2. Evaluate the distance of every unordered object pair once.
//! 3. Sort the pairs by distance.
//! 4. Walk the sorted pairs; whenever the two objects still belong to
//!    different clusters, merge those clusters at the pair's distance.
//!
//! This is Kruskal's algorithm over the complete distance graph: the merge
//! heights are the edges of a minimum spanning tree, which is exactly
//! single linkage.
//!
//! ```text
//! pairs (sorted)      merges
//! A-B 1.0             A+B         @ 1.0
//! C-D 2.0             C+D         @ 2.0
//! A-C 10.0            (AB)+(CD)   @ 10.0
//! A-D 10.0            skipped, same cluster
//! ```
//!
//! # Cost
//!
//! `O(n²)` distance evaluations and `O(n² log n)` for the sort. Cluster
//! membership is resolved through a hash map, so skipping a stale pair is
//! `O(1)`; each merge moves the absorbed cluster's nodes, `O(n)`.
//!
//! # Ties
//!
//! Equal distances are consumed in the order chosen by [`TieBreak`]. The
//! order changes the shape of the tree, never the set of merge heights.

use tracing::{debug, trace, warn};

use super::registry::{ClusterHandle, ClusterRegistry};
use super::traits::Distance;
use crate::error::{Error, Result};
use crate::hierarchy::Dendrogram;

/// Order in which equally distant pairs are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Pair generation order: `(i, j)` by object position, `i < j`.
    #[default]
    PairOrder,
    /// By the pair's identifiers, compared as strings.
    Lexicographic,
}

/// Treatment of NaN or infinite distances.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NonFinite {
    /// Drop the pair. The objects can still merge through other pairs;
    /// if they cannot, the run ends with several clusters.
    #[default]
    Skip,
    /// Replace the distance with the given value.
    Clamp(f64),
}

/// A pair of objects and their distance, consumed at most once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeCandidate<'a> {
    /// Object appearing first in the input.
    pub object1: &'a str,
    /// Object appearing second in the input.
    pub object2: &'a str,
    /// Distance between them.
    pub distance: f64,
}

/// Single-link hierarchical clustering.
#[derive(Debug, Clone, Default)]
pub struct HierarchicalClustering {
    tie_break: TieBreak,
    non_finite: NonFinite,
}

impl HierarchicalClustering {
    /// Create a clusterer with pair-order tie-breaking that skips
    /// non-finite distances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tie-break rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Set the treatment of non-finite distances.
    pub fn with_non_finite(mut self, non_finite: NonFinite) -> Self {
        self.non_finite = non_finite;
        self
    }

    /// Fit and return the full dendrogram.
    ///
    /// Fails with [`Error::IncompleteClustering`] if the distances left
    /// more than one cluster; use [`fit_forest`](Self::fit_forest) to get
    /// the partial result instead.
    pub fn fit_dendrogram<S, D>(&self, objects: &[S], distance: &D) -> Result<Dendrogram>
    where
        S: AsRef<str>,
        D: Distance + ?Sized,
    {
        let mut forest = self.fit_forest(objects, distance)?;
        let clusters = forest.len();
        match forest.pop() {
            Some(dendro) if clusters == 1 => Ok(dendro),
            _ => Err(Error::IncompleteClustering { clusters }),
        }
    }

    /// Fit and return every cluster left when merging stopped, ordered by
    /// the input position of the earliest object each cluster contains.
    ///
    /// With finite distances this is always a single dendrogram.
    pub fn fit_forest<S, D>(&self, objects: &[S], distance: &D) -> Result<Vec<Dendrogram>>
    where
        S: AsRef<str>,
        D: Distance + ?Sized,
    {
        if objects.is_empty() {
            return Err(Error::EmptyInput);
        }
        self.validate()?;

        let n = objects.len();
        let mut registry = ClusterRegistry::with_capacity(n)?;
        let mut slots: Vec<Option<Dendrogram>> = Vec::new();
        slots
            .try_reserve(n)
            .map_err(|_| Error::OutOfMemory { what: "cluster slots" })?;
        for (i, name) in objects.iter().enumerate() {
            let name = name.as_ref();
            registry.register(name, ClusterHandle(i))?;
            slots.push(Some(Dendrogram::leaf(name)?));
        }

        let candidates = self.candidates(objects, distance)?;
        debug!(
            n_objects = n,
            n_candidates = candidates.len(),
            "merging single-link clusters"
        );

        let mut active = n;
        for candidate in &candidates {
            if active == 1 {
                break;
            }
            let (Some(keep), Some(absorb)) = (
                registry.lookup(candidate.object1),
                registry.lookup(candidate.object2),
            ) else {
                continue;
            };
            if keep == absorb {
                continue;
            }

            let mut absorbed = slots[absorb.0]
                .take()
                .ok_or_else(|| Error::invalid_op("merge", "cluster slot is empty"))?;
            let target = slots[keep.0]
                .as_mut()
                .ok_or_else(|| Error::invalid_op("merge", "cluster slot is empty"))?;
            let root = target.merge(&mut absorbed, candidate.distance)?;

            let moved = target.tree().right(root);
            for (_, content) in target.tree().leaves(moved) {
                if let Some(name) = content.as_leaf() {
                    registry.repoint(name, keep)?;
                }
            }
            active -= 1;

            trace!(
                a = candidate.object1,
                b = candidate.object2,
                distance = candidate.distance,
                active,
                "merged"
            );
        }

        if active > 1 {
            warn!(
                clusters = active,
                "merge candidates exhausted before a single cluster remained"
            );
        }
        debug_assert_eq!(registry.n_clusters(), active);

        // Emit each surviving cluster when its first object comes up, so the
        // forest follows input order rather than slot order.
        let mut forest = Vec::with_capacity(active);
        for name in objects {
            if let Some(handle) = registry.lookup(name.as_ref()) {
                forest.extend(slots[handle.0].take());
            }
        }
        Ok(forest)
    }

    /// Every admissible object pair with its distance, sorted ascending by
    /// distance and then by the configured [`TieBreak`].
    pub fn candidates<'a, S, D>(
        &self,
        objects: &'a [S],
        distance: &D,
    ) -> Result<Vec<MergeCandidate<'a>>>
    where
        S: AsRef<str>,
        D: Distance + ?Sized,
    {
        let n = objects.len();
        let n_pairs = n
            .checked_mul(n.saturating_sub(1))
            .map(|p| p / 2)
            .ok_or(Error::OutOfMemory {
                what: "merge candidates",
            })?;
        let mut out = Vec::new();
        out.try_reserve(n_pairs).map_err(|_| Error::OutOfMemory {
            what: "merge candidates",
        })?;

        for (i, a) in objects.iter().enumerate() {
            let a = a.as_ref();
            for b in &objects[i + 1..] {
                let b = b.as_ref();
                if let Some(d) = self.admit(a, b, distance.distance(a, b))? {
                    out.push(MergeCandidate {
                        object1: a,
                        object2: b,
                        distance: d,
                    });
                }
            }
        }

        // Both sorts are stable, so pair order survives within equal keys.
        match self.tie_break {
            TieBreak::PairOrder => out.sort_by(|x, y| x.distance.total_cmp(&y.distance)),
            TieBreak::Lexicographic => out.sort_by(|x, y| {
                x.distance
                    .total_cmp(&y.distance)
                    .then_with(|| x.object1.cmp(y.object1))
                    .then_with(|| x.object2.cmp(y.object2))
            }),
        }
        Ok(out)
    }

    fn admit(&self, a: &str, b: &str, value: f64) -> Result<Option<f64>> {
        if value.is_finite() {
            if value < 0.0 {
                return Err(Error::InvalidDistance {
                    a: a.to_owned(),
                    b: b.to_owned(),
                    value,
                });
            }
            // -0.0 would sort before 0.0 under total_cmp.
            return Ok(Some(value + 0.0));
        }
        match self.non_finite {
            NonFinite::Skip => {
                warn!(a, b, value, "dropping pair with non-finite distance");
                Ok(None)
            }
            NonFinite::Clamp(x) => Ok(Some(x)),
        }
    }

    fn validate(&self) -> Result<()> {
        if let NonFinite::Clamp(x) = self.non_finite {
            if !x.is_finite() || x < 0.0 {
                return Err(Error::InvalidParameter {
                    name: "non_finite",
                    message: "clamp value must be finite and non-negative",
                });
            }
        }
        Ok(())
    }
}

/// Build a single-link dendrogram with default settings.
///
/// ```rust
/// use dendro::build_dendrogram;
///
/// let objects = ["A", "B", "C", "D"];
/// let dist = |a: &str, b: &str| match (a.min(b), a.max(b)) {
///     ("A", "B") => 1.0,
///     ("C", "D") => 2.0,
///     _ => 10.0,
/// };
/// let dendro = build_dendrogram(&objects, &dist).unwrap();
/// assert_eq!(dendro.len(), 7);
/// assert_eq!(dendro.cut_to_k(2).unwrap(), vec![vec!["A", "B"], vec!["C", "D"]]);
/// ```
pub fn build_dendrogram<S, D>(objects: &[S], distance: &D) -> Result<Dendrogram>
where
    S: AsRef<str>,
    D: Distance + ?Sized,
{
    HierarchicalClustering::new().fit_dendrogram(objects, distance)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn abcd_distance(a: &str, b: &str) -> f64 {
        match (a.min(b), a.max(b)) {
            ("A", "B") => 1.0,
            ("C", "D") => 2.0,
            _ => 10.0,
        }
    }

    fn uniform(_: &str, _: &str) -> f64 {
        1.0
    }

    #[test]
    fn test_hierarchical_basic() {
        let dendro = build_dendrogram(&["A", "B", "C", "D"], &abcd_distance).unwrap();

        assert_eq!(dendro.n_items(), 4);
        assert_eq!(dendro.n_merges(), 3);
        assert_eq!(dendro.len(), 7);
        assert_eq!(dendro.names(), vec!["A", "B", "C", "D"]);
        // Pre-order: root, then the (A, B) merge, then the (C, D) merge.
        assert_eq!(dendro.distances(), vec![10.0, 1.0, 2.0]);
        assert_eq!(
            dendro.cut_at_distance(1.5).unwrap(),
            vec![vec!["A", "B"], vec!["C"], vec!["D"]]
        );
        assert_eq!(
            dendro.cut_to_k(2).unwrap(),
            vec![vec!["A", "B"], vec!["C", "D"]]
        );
    }

    #[test]
    fn test_single_object() {
        let dendro = build_dendrogram(&["X"], &uniform).unwrap();
        assert_eq!(dendro.len(), 1);
        assert_eq!(dendro.names(), vec!["X"]);
        assert_eq!(dendro.cut_at_distance(0.0).unwrap(), vec![vec!["X"]]);
        assert_eq!(dendro.cut_to_k(1).unwrap(), vec![vec!["X"]]);
    }

    #[test]
    fn test_empty_input() {
        let objects: [&str; 0] = [];
        assert!(matches!(
            build_dendrogram(&objects, &uniform),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn test_duplicate_object() {
        let err = build_dendrogram(&["a", "b", "a"], &uniform).unwrap_err();
        assert!(matches!(err, Error::DuplicateObject(name) if name == "a"));
    }

    #[test]
    fn test_identifiers_are_case_sensitive() {
        let dendro = build_dendrogram(&["a", "A"], &uniform).unwrap();
        assert_eq!(dendro.n_items(), 2);
    }

    #[test]
    fn test_negative_distance_rejected() {
        let err = build_dendrogram(&["a", "b"], &|_: &str, _: &str| -1.0).unwrap_err();
        assert!(matches!(err, Error::InvalidDistance { value, .. } if value == -1.0));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let dendro = build_dendrogram(&["a", "b"], &|_: &str, _: &str| -0.0).unwrap();
        let d = dendro.distances()[0];
        assert!(d == 0.0 && d.is_sign_positive());
    }

    #[test]
    fn test_nan_distances_leave_forest() {
        // "z" is unreachable from the rest.
        let dist = |a: &str, b: &str| if a == "z" || b == "z" { f64::NAN } else { 1.0 };
        let hc = HierarchicalClustering::new();

        let forest = hc.fit_forest(&["x", "y", "z"], &dist).unwrap();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].names(), vec!["x", "y"]);
        assert_eq!(forest[1].names(), vec!["z"]);

        assert!(matches!(
            hc.fit_dendrogram(&["x", "y", "z"], &dist),
            Err(Error::IncompleteClustering { clusters: 2 })
        ));
    }

    #[test]
    fn test_forest_follows_first_object() {
        // x0-x3 merge into x0's slot, then x2 absorbs that cluster; x1 is isolated.
        let dist = |a: &str, b: &str| match (a.min(b), a.max(b)) {
            ("x0", "x3") => 1.0,
            ("x2", "x3") => 2.0,
            _ => f64::NAN,
        };
        let forest = HierarchicalClustering::new()
            .fit_forest(&["x0", "x1", "x2", "x3"], &dist)
            .unwrap();

        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].names(), vec!["x2", "x0", "x3"]);
        assert_eq!(forest[1].names(), vec!["x1"]);
    }

    #[test]
    fn test_clamped_distances_complete() {
        let dist = |a: &str, b: &str| if a == "z" || b == "z" { f64::INFINITY } else { 1.0 };
        let dendro = HierarchicalClustering::new()
            .with_non_finite(NonFinite::Clamp(1000.0))
            .fit_dendrogram(&["x", "y", "z"], &dist)
            .unwrap();
        assert_eq!(dendro.distances(), vec![1000.0, 1.0]);
    }

    #[test]
    fn test_invalid_clamp_rejected() {
        let hc = HierarchicalClustering::new().with_non_finite(NonFinite::Clamp(f64::NAN));
        assert!(matches!(
            hc.fit_dendrogram(&["a", "b"], &uniform),
            Err(Error::InvalidParameter { name: "non_finite", .. })
        ));
    }

    #[test]
    fn test_tie_break_shapes() {
        let objects = ["C", "A", "B"];

        let pair_order = HierarchicalClustering::new()
            .fit_dendrogram(&objects, &uniform)
            .unwrap();
        let root = pair_order.root().unwrap();
        // (C, A) merges first, then B joins.
        assert!(pair_order.tree().is_internal(pair_order.tree().left(root).unwrap()));
        assert_eq!(pair_order.names(), vec!["C", "A", "B"]);

        let lexicographic = HierarchicalClustering::new()
            .with_tie_break(TieBreak::Lexicographic)
            .fit_dendrogram(&objects, &uniform)
            .unwrap();
        let root = lexicographic.root().unwrap();
        // (A, B) merges first, then C takes it as its right subtree.
        let left = lexicographic.tree().left(root).unwrap();
        assert_eq!(lexicographic.name(left), Some("C"));
        assert_eq!(lexicographic.names(), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_candidates_sorted_and_complete() {
        let objects = ["A", "B", "C", "D"];
        let cands = HierarchicalClustering::new()
            .candidates(&objects, &abcd_distance)
            .unwrap();

        assert_eq!(cands.len(), 6);
        assert_eq!(
            cands[0],
            MergeCandidate {
                object1: "A",
                object2: "B",
                distance: 1.0
            }
        );
        assert_eq!((cands[1].object1, cands[1].object2), ("C", "D"));
        // Ties keep generation order.
        let rest: Vec<_> = cands[2..].iter().map(|c| (c.object1, c.object2)).collect();
        assert_eq!(rest, vec![("A", "C"), ("A", "D"), ("B", "C"), ("B", "D")]);
    }

    #[test]
    fn test_owned_string_objects() {
        let objects: Vec<String> = (0..5).map(|i| format!("obj{i}")).collect();
        let dist = |a: &str, b: &str| {
            let x: f64 = a[3..].parse().unwrap();
            let y: f64 = b[3..].parse().unwrap();
            (x - y).abs()
        };
        let dendro = build_dendrogram(&objects, &dist).unwrap();
        assert_eq!(dendro.len(), 9);
        assert!(dendro.distances().iter().all(|&d| d == 1.0));
    }

    proptest! {
        #[test]
        fn dendrogram_has_2n_minus_1_nodes(
            points in proptest::collection::vec(-100.0f64..100.0, 1..40),
        ) {
            let names: Vec<String> = (0..points.len()).map(|i| format!("p{i}")).collect();
            let dist = |a: &str, b: &str| {
                let i: usize = a[1..].parse().unwrap();
                let j: usize = b[1..].parse().unwrap();
                (points[i] - points[j]).abs()
            };
            let dendro = build_dendrogram(&names, &dist).unwrap();
            let n = points.len();

            prop_assert_eq!(dendro.len(), 2 * n - 1);
            prop_assert_eq!(dendro.n_items(), n);
            prop_assert_eq!(dendro.n_merges(), n - 1);

            let mut seen: Vec<&str> = dendro.names();
            seen.sort_unstable();
            let mut expected: Vec<&str> = names.iter().map(String::as_str).collect();
            expected.sort_unstable();
            prop_assert_eq!(seen, expected);
        }
    }
}
