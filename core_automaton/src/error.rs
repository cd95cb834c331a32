use thiserror::Error;

/// Construction-time invariant violations. Nothing else in the engine fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AutomatonError {
    #[error("grid dimensions must be positive and addressable, got {rows}x{columns}")]
    InvalidDimension { rows: usize, columns: usize },
}
