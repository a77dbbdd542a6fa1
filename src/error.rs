//! Error types for the checked (view-based) API.
//!
//! The raw kernels never return errors; shapes there are caller-guaranteed.

/// A buffer or view whose shape does not fit the requested operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("{name}: {rows}x{cols} complex matrix needs {expected} f32 values, got {actual}")]
    BufferLength {
        name: &'static str,
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    #[error("contraction dimension mismatch: A has {a_cols} columns, B has {b_cols}")]
    ContractionMismatch { a_cols: usize, b_cols: usize },

    #[error("output shape mismatch: expected {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    OutputShape {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },
}

/// Returned when parsing a [`Strategy`](crate::Strategy) label fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy '{0}' (expected one of: basic, tiled, avx2, auto)")]
pub struct UnknownStrategy(pub String);

/// Convenience alias for `Result<T, ShapeError>`.
pub type Result<T> = std::result::Result<T, ShapeError>;
