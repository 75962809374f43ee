//! Rendering errors
//!
//! Missing decorative assets are deliberately absent here; they degrade to
//! placeholders inside the renderer and are never errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering or writing a document
#[derive(Debug, Error)]
pub enum RenderError {
    /// The documentary total cannot be spelled out
    #[error("total amount out of range for spelling: {0}")]
    AmountOutOfRange(String),

    /// Writing the finished document failed
    #[error("failed to write document {path}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
