//! PDF embedded-text extraction.
//!
//! Text-based PDFs carry their content directly; extracting it is both
//! faster and more accurate than rasterizing and running OCR.

use tracing::debug;

use crate::error::PdfError;

/// Check whether a buffer starts with the PDF magic.
pub fn looks_like_pdf(buffer: &[u8]) -> bool {
    buffer.starts_with(b"%PDF-")
}

/// Extract embedded text from a PDF buffer.
pub fn extract_embedded_text(buffer: &[u8]) -> Result<String, PdfError> {
    let text = pdf_extract::extract_text_from_mem(buffer)
        .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(PdfError::NoText);
    }

    debug!(chars = text.len(), "extracted embedded PDF text");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_magic_detection() {
        assert!(looks_like_pdf(b"%PDF-1.7\n..."));
        assert!(!looks_like_pdf(b"\x89PNG\r\n\x1a\n"));
        assert!(!looks_like_pdf(b""));
    }

    #[test]
    fn test_garbage_buffer_is_extraction_error() {
        let err = extract_embedded_text(b"%PDF-not really a pdf").unwrap_err();
        assert!(matches!(err, PdfError::TextExtraction(_)));
    }
}
