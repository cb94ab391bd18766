//! HTML to PDF conversion via the printpdf engine.

use std::collections::BTreeMap;
use std::path::Path;

use printpdf::{GeneratePdfOptions, PdfDocument, PdfSaveOptions};
use tracing::debug;

use crate::error::PdfError;

/// Document metadata applied to the generated PDF.
#[derive(Debug, Clone, Default)]
pub struct DocumentMeta {
    /// PDF document title.
    pub title: String,
    /// PDF author.
    pub author: String,
}

/// Renders an HTML document to PDF bytes.
///
/// The calendar markup embeds no images and uses the engine's built-in
/// fonts, so empty resource maps are passed. Engine warnings are logged at
/// debug level.
///
/// # Errors
///
/// Returns [`PdfError::Render`] if the engine rejects the HTML.
pub fn render_pdf(html: &str, meta: &DocumentMeta) -> Result<Vec<u8>, PdfError> {
    let images = BTreeMap::new();
    let fonts = BTreeMap::new();
    let options = GeneratePdfOptions::default();

    let mut warnings = Vec::new();
    let mut doc = PdfDocument::from_html(html, &images, &fonts, &options, &mut warnings)
        .map_err(|e| PdfError::Render {
            reason: e.to_string(),
        })?;
    for warning in &warnings {
        debug!(?warning, "pdf generation warning");
    }

    doc.metadata.info.document_title = meta.title.clone();
    doc.metadata.info.author = meta.author.clone();

    let mut save_warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut save_warnings);
    for warning in &save_warnings {
        debug!(?warning, "pdf save warning");
    }
    Ok(bytes)
}

/// Writes rendered PDF bytes to `path`.
///
/// # Errors
///
/// Returns [`PdfError::Write`] with the path and underlying reason if the
/// file cannot be written.
pub fn write_pdf(path: &Path, bytes: &[u8]) -> Result<(), PdfError> {
    std::fs::write(path, bytes).map_err(|e| PdfError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
