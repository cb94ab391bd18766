//! Error types for maandkal-pdf.

use std::path::PathBuf;

/// Error type for all fallible operations in the maandkal-pdf crate.
///
/// This enum covers failures reported by the PDF rendering engine and I/O
/// failures while writing the output file.
#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    /// Wraps an error reported by the PDF rendering engine.
    #[error("pdf render error: {reason}")]
    Render {
        /// Description of the underlying engine failure.
        reason: String,
    },

    /// Returned when the output file cannot be written.
    #[error("failed to write {}: {reason}", path.display())]
    Write {
        /// Path that could not be written.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },
}
