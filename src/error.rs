//! Error handling for Layermaze
//!
//! Every fallible operation in the crate returns [`Result`].

use thiserror::Error;

/// Result type alias for Layermaze operations
pub type Result<T> = std::result::Result<T, MazeError>;

/// Main error type for Layermaze operations
#[derive(Error, Debug)]
pub enum MazeError {
    // Input Errors
    #[error("Invalid dimension: {reason}")]
    InvalidDimension { reason: String },

    #[error("Invalid coordinate: {what} index {index} is out of range (size {bound})")]
    InvalidCoordinate {
        what: String,
        index: usize,
        bound: usize,
    },

    // Invariant Errors
    #[error("Layer {layer} has no registered cells to continue from")]
    EmptyPredecessorLayer { layer: usize },

    #[error("Source count mismatch: expected {expected} starting cells on layer 0, found {found}")]
    SourceCountMismatch { expected: usize, found: usize },

    // Persistence Errors
    #[error("Corrupt maze dump: {reason}")]
    CorruptDump { reason: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MazeError {
    /// Build an `InvalidCoordinate` error for `index` checked against `bound`
    pub(crate) fn coordinate(what: impl Into<String>, index: usize, bound: usize) -> Self {
        MazeError::InvalidCoordinate {
            what: what.into(),
            index,
            bound,
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            MazeError::InvalidDimension { .. } => "INVALID_DIMENSION",
            MazeError::InvalidCoordinate { .. } => "INVALID_COORDINATE",
            MazeError::EmptyPredecessorLayer { .. } => "EMPTY_PREDECESSOR_LAYER",
            MazeError::SourceCountMismatch { .. } => "SOURCE_COUNT_MISMATCH",
            MazeError::CorruptDump { .. } => "CORRUPT_DUMP",
            MazeError::Io(_) => "IO_ERROR",
            MazeError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error signals a broken internal invariant
    ///
    /// Defects are never retried; they point at a bug in generation.
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            MazeError::EmptyPredecessorLayer { .. } | MazeError::SourceCountMismatch { .. }
        )
    }
}
