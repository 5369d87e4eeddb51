//! Error types for PPTX export.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, PptxError>;

/// Errors raised while assembling or writing a presentation package.
#[derive(Error, Debug)]
pub enum PptxError {
    /// Filesystem error while writing the exported file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The ZIP container could not be written.
    #[error("package error: {0}")]
    Zip(#[from] zip::result::ZipError),
}
