use thiserror::Error;

/// Top-level error type for the pipeworks mesh generator.
#[derive(Debug, Error)]
pub enum PipeworksError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("unable to achieve intersection between segment {segment} and segment {neighbor}")]
    NoIntersection { segment: usize, neighbor: usize },
}

/// Errors related to mesh building operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised while writing a model out.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write model: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::io::Error> for PipeworksError {
    fn from(err: std::io::Error) -> Self {
        Self::Export(ExportError::Io(err))
    }
}

/// Convenience type alias for results using [`PipeworksError`].
pub type Result<T> = std::result::Result<T, PipeworksError>;
