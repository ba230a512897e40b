//! Text extraction from uploaded resume documents.
//!
//! Upstream of the analyzer: everything downstream operates on plain text.
//! Extraction failures are reported to the caller and analysis is skipped;
//! scoring never runs silently on empty or undecodable content.

use thiserror::Error;

use crate::errors::AppError;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported document format '{0}' (expected .pdf or .txt)")]
    UnsupportedFormat(String),

    #[error("failed to extract text from PDF: {0}")]
    Pdf(String),

    #[error("document is not valid UTF-8 text")]
    InvalidUtf8,

    #[error("document contains no extractable text")]
    EmptyDocument,
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::UnsupportedFormat(_) => AppError::UnsupportedFormat(err.to_string()),
            other => AppError::Extraction(other.to_string()),
        }
    }
}

/// Extracts plain text from an uploaded document, dispatching on the file
/// extension of the supplied name.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    let extension = file_extension(filename);
    let text = match extension.as_str() {
        "pdf" => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractError::Pdf(e.to_string()))?,
        "txt" => String::from_utf8(bytes.to_vec()).map_err(|_| ExtractError::InvalidUtf8)?,
        other => return Err(ExtractError::UnsupportedFormat(format!(".{other}"))),
    };

    if text.trim().is_empty() {
        return Err(ExtractError::EmptyDocument);
    }
    Ok(text)
}

fn file_extension(filename: &str) -> String {
    std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
}
