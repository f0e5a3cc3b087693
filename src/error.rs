use thiserror::Error;

/// Top-level error type for the Plankit floor-plan engine.
#[derive(Debug, Error)]
pub enum PlankitError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to the plan graph.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("hole offset {0} is outside [0, 1]")]
    OffsetOutOfRange(f64),

    #[error("inconsistent graph: {0}")]
    Inconsistent(String),
}

/// Errors related to adapter and query operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`PlankitError`].
pub type Result<T> = std::result::Result<T, PlankitError>;
