//! Error types for the vgproj-xvgi crate.
//!
//! Serialization itself is total; the only failure class is writing the
//! produced text to a stream. Write failures propagate unchanged and a
//! partially written file is left for the caller to deal with.

use thiserror::Error;

/// Error writing an XVGI project file.
#[derive(Debug, Error)]
pub enum XvgiError {
    /// The destination stream rejected a write.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for XVGI operations.
pub type Result<T> = std::result::Result<T, XvgiError>;
