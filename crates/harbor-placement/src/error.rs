use thiserror::Error;

use crate::dimensions::ValidationError;

#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("unknown dimension: {0}")]
    UnknownDimension(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
