use thiserror::Error;

/// Failure modes of a closest-pair run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClosestPairError {
    /// Fewer than two points: no pair exists.
    #[error("closest pair needs at least 2 points, got {len}")]
    InsufficientInput { len: usize },

    /// Every candidate distance was NaN.
    #[error("no pair with a comparable (non-NaN) distance")]
    NoComparablePair,

    /// The visualization port returned `Step::Stop`.
    #[error("run cancelled by the visualization port")]
    Cancelled,
}
