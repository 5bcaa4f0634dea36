use thiserror::Error;

/// Result alias for `dendro`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the tree, clustering, and input primitives.
#[derive(Debug, Error)]
pub enum Error {
    /// An allocation could not be satisfied.
    #[error("out of memory while allocating {what}")]
    OutOfMemory {
        /// What was being allocated.
        what: &'static str,
    },

    /// A tree precondition was violated (re-rooting, double insert,
    /// merging an empty tree, unknown node).
    #[error("invalid operation '{op}': {reason}")]
    InvalidOperation {
        /// Operation name.
        op: &'static str,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// No objects were supplied.
    #[error("empty input provided")]
    EmptyInput,

    /// Candidates were exhausted while more than one cluster remained.
    #[error("clustering stopped with {clusters} disjoint clusters")]
    IncompleteClustering {
        /// Number of clusters left when merging stopped.
        clusters: usize,
    },

    /// The same object identifier was supplied twice.
    #[error("object '{0}' appears more than once")]
    DuplicateObject(String),

    /// The distance function returned a value outside its contract.
    #[error("distance between '{a}' and '{b}' is invalid: {value}")]
    InvalidDistance {
        /// First object.
        a: String,
        /// Second object.
        b: String,
        /// Offending value.
        value: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },

    /// Malformed input record.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong.
        message: String,
    },

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_op(op: &'static str, reason: &'static str) -> Self {
        Error::InvalidOperation { op, reason }
    }
}
