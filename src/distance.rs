//! Distance metrics for the two supported object kinds.
//!
//! - Numeric feature vectors: [`euclidean`], wrapped by [`FeatureDistance`].
//! - DNA sequences: [`nucleotide`], wrapped by [`SequenceDistance`].
//!
//! ## Public invariants
//!
//! - Every metric is symmetric and non-negative.
//! - Keyed wrappers never fail: an unknown identifier, a dimension mismatch
//!   or a saturated log yields [`SATURATED_DISTANCE`], so such objects merge
//!   last instead of aborting the run.

use std::collections::HashMap;

use crate::cluster::Distance;

/// Distance reported when two objects cannot be compared.
pub const SATURATED_DISTANCE: f64 = 1000.0;

/// Euclidean distance between two feature vectors.
///
/// Vectors of different length are compared over their common prefix.
#[inline]
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

fn is_purine(base: u8) -> bool {
    matches!(base, b'A' | b'G')
}

fn is_pyrimidine(base: u8) -> bool {
    matches!(base, b'C' | b'T')
}

/// Evolutionary distance between two DNA sequences.
///
/// Over the shared prefix of length `n`, mismatches are split into
/// transitions (purine to purine, pyrimidine to pyrimidine) and
/// transversions (everything else). With `Q` and `P` their rates:
///
/// ```text
/// d = -1/2 ln(1 - 2P - Q) - 1/4 ln(1 - 2Q)
/// ```
///
/// An empty shared prefix gives `0.0`. When either log argument is not
/// positive the sequences are too divergent and [`SATURATED_DISTANCE`] is
/// returned.
pub fn nucleotide(a: &str, b: &str) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }

    let (mut transitions, mut transversions) = (0usize, 0usize);
    for (x, y) in a.bytes().zip(b.bytes()) {
        if x == y {
            continue;
        }
        if (is_purine(x) && is_purine(y)) || (is_pyrimidine(x) && is_pyrimidine(y)) {
            transitions += 1;
        } else {
            transversions += 1;
        }
    }

    let q = transitions as f64 / n as f64;
    let p = transversions as f64 / n as f64;
    let arg1 = 1.0 - 2.0 * p - q;
    let arg2 = 1.0 - 2.0 * q;
    if arg1 <= 0.0 || arg2 <= 0.0 {
        return SATURATED_DISTANCE;
    }

    let d = -0.5 * arg1.ln() - 0.25 * arg2.ln();
    if d > 0.0 {
        d
    } else {
        0.0
    }
}

/// Euclidean distance between named feature vectors.
#[derive(Debug, Clone, Default)]
pub struct FeatureDistance {
    features: HashMap<String, Vec<f64>>,
}

impl FeatureDistance {
    /// Wrap a name-to-vector table.
    pub fn new(features: HashMap<String, Vec<f64>>) -> Self {
        Self { features }
    }

    /// Feature vector of `name`.
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.features.get(name).map(Vec::as_slice)
    }
}

impl Distance for FeatureDistance {
    fn distance(&self, a: &str, b: &str) -> f64 {
        match (self.get(a), self.get(b)) {
            (Some(x), Some(y)) if x.len() == y.len() => euclidean(x, y),
            _ => SATURATED_DISTANCE,
        }
    }
}

/// Nucleotide distance between named DNA sequences.
#[derive(Debug, Clone, Default)]
pub struct SequenceDistance {
    sequences: HashMap<String, String>,
}

impl SequenceDistance {
    /// Wrap a name-to-sequence table.
    pub fn new(sequences: HashMap<String, String>) -> Self {
        Self { sequences }
    }

    /// Sequence of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.sequences.get(name).map(String::as_str)
    }
}

impl Distance for SequenceDistance {
    fn distance(&self, a: &str, b: &str) -> f64 {
        match (self.get(a), self.get(b)) {
            (Some(x), Some(y)) => nucleotide(x, y),
            _ => SATURATED_DISTANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean() {
        assert_eq!(euclidean(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
        assert_eq!(euclidean(&[1.5], &[1.5]), 0.0);
        assert_eq!(euclidean(&[], &[]), 0.0);
    }

    #[test]
    fn test_nucleotide_identical() {
        let d = nucleotide("ACGT", "ACGT");
        assert_eq!(d, 0.0);
        assert!(d.is_sign_positive());
    }

    #[test]
    fn test_nucleotide_empty_prefix() {
        assert_eq!(nucleotide("", "ACGT"), 0.0);
    }

    #[test]
    fn test_nucleotide_transition() {
        // One A<->G transition over 4 bases: Q = 0.25, P = 0.
        let d = nucleotide("ACGT", "GCGT");
        let expected = -0.5 * (0.75f64).ln() - 0.25 * (0.5f64).ln();
        assert!((d - expected).abs() < 1e-12);
    }

    #[test]
    fn test_nucleotide_transversion() {
        // One A<->C transversion over 4 bases: Q = 0, P = 0.25.
        let d = nucleotide("ACGT", "CCGT");
        let expected = -0.5 * (0.5f64).ln();
        assert!((d - expected).abs() < 1e-12);
    }

    #[test]
    fn test_nucleotide_saturates() {
        assert_eq!(nucleotide("AAAA", "CCCC"), SATURATED_DISTANCE);
        assert_eq!(nucleotide("AG", "GA"), SATURATED_DISTANCE);
    }

    #[test]
    fn test_nucleotide_symmetric_over_shared_prefix() {
        assert_eq!(nucleotide("ACGTAA", "GCGT"), nucleotide("GCGT", "ACGTAA"));
        assert_eq!(nucleotide("ACGTAA", "GCGT"), nucleotide("ACGT", "GCGT"));
    }

    #[test]
    fn test_keyed_missing_is_saturated() {
        let features = FeatureDistance::new(
            [("a".to_string(), vec![0.0, 0.0]), ("b".to_string(), vec![0.0, 1.0])]
                .into_iter()
                .collect(),
        );
        assert_eq!(features.distance("a", "b"), 1.0);
        assert_eq!(features.distance("a", "zz"), SATURATED_DISTANCE);

        let seqs = SequenceDistance::new(
            [("x".to_string(), "ACGT".to_string())].into_iter().collect(),
        );
        assert_eq!(seqs.distance("x", "x"), 0.0);
        assert_eq!(seqs.distance("x", "y"), SATURATED_DISTANCE);
    }

    #[test]
    fn test_keyed_dimension_mismatch_is_saturated() {
        let features = FeatureDistance::new(
            [("a".to_string(), vec![0.0]), ("b".to_string(), vec![0.0, 1.0])]
                .into_iter()
                .collect(),
        );
        assert_eq!(features.distance("a", "b"), SATURATED_DISTANCE);
    }
}
