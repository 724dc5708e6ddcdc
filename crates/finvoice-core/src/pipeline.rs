//! End-to-end invoice processing pipeline.
//!
//! Wires text extraction (PDF embedded text or OCR) to invoice parsing
//! behind a single entry point.

use tracing::{debug, info, warn};

use crate::error::{PdfError, Result};
use crate::invoice::{HeuristicInvoiceParser, InvoiceParser};
use crate::models::config::{FinvoiceConfig, OcrConfig, PdfConfig};
use crate::models::invoice::InvoiceData;
use crate::ocr::{OcrBackend, TextExtractor};
use crate::pdf;

/// Invoice processing pipeline.
///
/// Owns the OCR engine lifecycle through its [`TextExtractor`]; one
/// pipeline instance serves many documents and the engine is initialized
/// on first use. Call [`cleanup`](Self::cleanup) when the pipeline is
/// idle to release native resources.
pub struct InvoicePipeline<B: OcrBackend> {
    extractor: TextExtractor<B>,
    parser: HeuristicInvoiceParser,
    pdf: PdfConfig,
}

impl<B: OcrBackend> InvoicePipeline<B> {
    /// Build a pipeline with an explicit OCR backend factory.
    pub fn new(
        config: FinvoiceConfig,
        factory: impl Fn(&OcrConfig) -> std::result::Result<B, crate::error::OcrError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            extractor: TextExtractor::new(config.ocr, factory),
            parser: HeuristicInvoiceParser::new(),
            pdf: config.pdf,
        }
    }

    /// Process a document buffer into structured invoice data.
    ///
    /// PDF buffers take the embedded-text path when it yields enough
    /// text; everything else goes through OCR. Extraction and parse
    /// errors propagate unchanged so callers can tell a bad scan from an
    /// unparseable invoice.
    pub async fn process_document(&self, buffer: &[u8]) -> Result<InvoiceData> {
        let text = self.extract_text(buffer).await?;
        let data = self.parser.parse(&text)?;
        info!(
            invoice_number = ?data.invoice_number,
            line_items = data.line_items.len(),
            "invoice processed"
        );
        Ok(data)
    }

    /// Parse already-extracted text, skipping the extraction stage.
    pub fn process_text(&self, text: &str) -> Result<InvoiceData> {
        Ok(self.parser.parse(text)?)
    }

    /// Process a PDF using only its embedded text, never the OCR engine.
    ///
    /// Fails on non-PDF input and on PDFs without embedded text; the
    /// minimum-length gate does not apply since there is no OCR fallback.
    pub fn process_text_only(&self, buffer: &[u8]) -> Result<InvoiceData> {
        if !pdf::looks_like_pdf(buffer) {
            return Err(PdfError::NotPdf.into());
        }

        let text = pdf::extract_embedded_text(buffer)?;
        Ok(self.parser.parse(&text)?)
    }

    async fn extract_text(&self, buffer: &[u8]) -> Result<String> {
        if pdf::looks_like_pdf(buffer) && self.pdf.prefer_embedded_text {
            match pdf::extract_embedded_text(buffer) {
                Ok(text) if text.trim().len() >= self.pdf.min_text_length => {
                    debug!("using embedded PDF text");
                    return Ok(text);
                }
                Ok(_) => {
                    // Likely a scanned PDF; the raster path handles it if
                    // the buffer is image data, otherwise rejects it there.
                    warn!("embedded PDF text too short, falling back to OCR");
                }
                Err(e) => {
                    warn!(error = %e, "embedded PDF text extraction failed, falling back to OCR");
                }
            }
        }

        Ok(self.extractor.extract_text(buffer).await?)
    }

    /// Release the OCR engine. The pipeline stays usable; the next
    /// document re-initializes the engine.
    pub async fn cleanup(&self) {
        self.extractor.cleanup().await;
    }
}

#[cfg(feature = "tesseract")]
impl InvoicePipeline<crate::ocr::TesseractBackend> {
    /// Build a pipeline backed by a native Tesseract installation.
    pub fn with_tesseract(config: FinvoiceConfig) -> Self {
        Self::new(config, crate::ocr::TesseractBackend::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FinvoiceError, OcrError, ParseError};
    use pretty_assertions::assert_eq;

    const PNG_STUB: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\x00";

    struct FakeBackend {
        output: std::result::Result<String, OcrError>,
    }

    impl OcrBackend for FakeBackend {
        fn recognize(&mut self, _image: &[u8]) -> std::result::Result<String, OcrError> {
            self.output.clone()
        }
    }

    fn pipeline_with_output(
        output: std::result::Result<&str, OcrError>,
    ) -> InvoicePipeline<FakeBackend> {
        let output = output.map(str::to_string);
        InvoicePipeline::new(FinvoiceConfig::default(), move |_config| {
            Ok(FakeBackend {
                output: output.clone(),
            })
        })
    }

    #[tokio::test]
    async fn test_image_to_invoice_end_to_end() {
        let pipeline = pipeline_with_output(Ok("ACME SUPPLIES LLC\n\
                                                Invoice #INV-2024-001\n\
                                                Date: 01/15/2024\n\
                                                Widget A 2 10.00 20.00\n\
                                                Total: $70.00"));

        let data = pipeline.process_document(PNG_STUB).await.unwrap();
        assert_eq!(data.invoice_number, Some("INV-2024-001".to_string()));
        assert_eq!(data.vendor, Some("ACME SUPPLIES LLC".to_string()));
        assert_eq!(data.line_items.len(), 1);
    }

    #[tokio::test]
    async fn test_extraction_error_propagates() {
        let pipeline =
            pipeline_with_output(Err(OcrError::Recognition("engine fault".to_string())));

        let err = pipeline.process_document(PNG_STUB).await.unwrap_err();
        assert!(matches!(
            err,
            FinvoiceError::Ocr(OcrError::Recognition(_))
        ));
    }

    #[tokio::test]
    async fn test_parse_error_propagates() {
        let pipeline = pipeline_with_output(Ok("nothing useful here"));

        let err = pipeline.process_document(PNG_STUB).await.unwrap_err();
        assert!(matches!(
            err,
            FinvoiceError::Parse(ParseError::NoEssentialFields)
        ));
    }

    #[tokio::test]
    async fn test_cleanup_then_reuse() {
        let pipeline = pipeline_with_output(Ok("Total: $5.00"));

        pipeline.process_document(PNG_STUB).await.unwrap();
        pipeline.cleanup().await;
        let data = pipeline.process_document(PNG_STUB).await.unwrap();
        assert!(data.total_amount.is_some());
    }

    #[test]
    fn test_text_only_rejects_non_pdf() {
        let pipeline = pipeline_with_output(Ok("Total: $5.00"));

        let err = pipeline.process_text_only(PNG_STUB).unwrap_err();
        assert!(matches!(err, FinvoiceError::Pdf(PdfError::NotPdf)));
    }

    #[test]
    fn test_text_only_never_falls_back_to_ocr() {
        // A PDF magic with no real document body has no embedded text; the
        // text-only path must error instead of reaching the OCR engine.
        let pipeline =
            pipeline_with_output(Err(OcrError::Init("never constructed".to_string())));

        let err = pipeline.process_text_only(b"%PDF-1.7 junk").unwrap_err();
        assert!(matches!(
            err,
            FinvoiceError::Pdf(PdfError::TextExtraction(_) | PdfError::NoText)
        ));
    }

    #[test]
    fn test_process_text_skips_extraction() {
        let pipeline =
            pipeline_with_output(Err(OcrError::Init("never constructed".to_string())));

        let data = pipeline.process_text("Total Due: $1,234.56").unwrap();
        assert!(data.total_amount.is_some());
    }
}
