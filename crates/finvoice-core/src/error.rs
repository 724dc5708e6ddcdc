//! Error types for the finvoice-core library.

use thiserror::Error;

/// Main error type for the finvoice library.
#[derive(Error, Debug)]
pub enum FinvoiceError {
    /// OCR text extraction error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Invoice parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by the text extraction engine.
#[derive(Error, Debug, Clone)]
pub enum OcrError {
    /// Failed to initialize the OCR engine.
    #[error("failed to initialize OCR engine: {0}")]
    Init(String),

    /// The buffer is not a recognizable raster image.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// The engine failed while recognizing text.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// Recognition exceeded the configured timeout.
    #[error("recognition timed out after {0}ms")]
    Timeout(u64),
}

/// Errors raised by the invoice field parser.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Invoice number, vendor, and total amount were all unrecoverable.
    #[error("could not extract essential invoice information")]
    NoEssentialFields,
}

/// Errors related to the PDF embedded-text fast path.
#[derive(Error, Debug)]
pub enum PdfError {
    /// The buffer does not carry the PDF magic.
    #[error("input is not a text-based PDF")]
    NotPdf,

    /// Failed to extract embedded text from the PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF contains no usable embedded text.
    #[error("PDF has no embedded text")]
    NoText,
}

/// Result type for the finvoice library.
pub type Result<T> = std::result::Result<T, FinvoiceError>;
