use thiserror::Error;

/// Input validation failures shared by both solvers.
///
/// All legitimate path weights are non-negative, so these conditions are
/// reported as a distinguished error type rather than a sentinel weight
/// that a caller could mistake for a result.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    #[error("number of nodes is odd and cannot be split into pairs")]
    OddNodeCount,
    #[error("matrix has no nodes")]
    EmptyGraph,
}

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: std::error::Error> {
    fn is_correct(&self) -> Result<(), E>;
}
