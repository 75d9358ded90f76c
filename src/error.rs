use crate::validation::ValidationError;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cart content is invalid: {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("Cart total overflowed")]
    TotalOverflow,
}
