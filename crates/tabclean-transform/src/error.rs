//! Error types for table cleaning.

use tabclean_model::ModelError;
use thiserror::Error;

/// Errors raised while assembling a cleaned table.
///
/// Individual cells never fail; only structural problems surface here.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("failed to build cleaned table: {0}")]
    Table(#[from] ModelError),
}
