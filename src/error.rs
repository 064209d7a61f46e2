use thiserror::Error;

/// Top-level error type for the polybool kernel.
#[derive(Debug, Error)]
pub enum PolyboolError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl PolyboolError {
    /// Returns `true` if the error is an [`OperationError::InvalidInput`].
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Operation(OperationError::InvalidInput(_)))
    }

    /// Returns `true` if the error is an [`OperationError::EmptyResult`].
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::Operation(OperationError::EmptyResult(_)))
    }
}

/// Errors related to polygon geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("polygon has {count} points, at least 3 required")]
    TooFewPoints { count: usize },

    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to boolean operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("empty result: {0}")]
    EmptyResult(String),
}

/// Errors raised while converting application shapes into polygons.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("shape size {width} x {height} must be finite and positive")]
    InvalidSize { width: f64, height: f64 },

    #[error("freeform shape is not closed (first and last point are {gap} apart)")]
    NotClosed { gap: f64 },

    #[error("freeform shape has {count} points, at least 3 required")]
    TooFewPoints { count: usize },
}

/// Convenience type alias for results using [`PolyboolError`].
pub type Result<T> = std::result::Result<T, PolyboolError>;
