//! Clustering traits.

/// Dissimilarity between two named objects.
///
/// Implementations must be symmetric and total over the identifiers handed
/// to the clustering engine. When the data behind an identifier is missing,
/// return a large sentinel (see [`crate::distance::SATURATED_DISTANCE`])
/// instead of failing, so that malformed records merge last.
///
/// Any `Fn(&str, &str) -> f64` closure is a `Distance`; capture whatever
/// context the metric needs.
pub trait Distance {
    /// Distance between objects `a` and `b`. Non-negative.
    fn distance(&self, a: &str, b: &str) -> f64;
}

impl<F> Distance for F
where
    F: Fn(&str, &str) -> f64,
{
    fn distance(&self, a: &str, b: &str) -> f64 {
        self(a, b)
    }
}
