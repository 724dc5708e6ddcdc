//! # finvoice-core
//!
//! Invoice OCR extraction and parsing.
//!
//! Takes uploaded invoice documents (scanned images or PDFs) and turns
//! them into structured data: invoice number, date, vendor, total, and
//! arithmetically verified line items. Extraction failures and
//! unparseable invoices surface as distinct errors so callers can react
//! accordingly.
//!
//! ## Quick start
//!
//! ```no_run
//! use finvoice_core::models::config::FinvoiceConfig;
//! use finvoice_core::pipeline::InvoicePipeline;
//!
//! # #[cfg(feature = "tesseract")]
//! # async fn run() -> finvoice_core::error::Result<()> {
//! let pipeline = InvoicePipeline::with_tesseract(FinvoiceConfig::default());
//! let buffer = std::fs::read("invoice.png")?;
//! let data = pipeline.process_document(&buffer).await?;
//! println!("invoice {:?} total {:?}", data.invoice_number, data.total_amount);
//! pipeline.cleanup().await;
//! # Ok(())
//! # }
//! ```
//!
//! OCR requires a native Tesseract installation and is gated behind the
//! `tesseract` feature; the parser and PDF paths work without it.

pub mod error;
pub mod invoice;
pub mod models;
pub mod ocr;
pub mod pdf;
pub mod pipeline;

pub use error::{FinvoiceError, Result};
pub use invoice::{HeuristicInvoiceParser, InvoiceParser, parse_invoice_data};
pub use models::invoice::{InvoiceData, InvoiceLineItem, MONETARY_TOLERANCE};
pub use ocr::{OcrBackend, TextExtractor};
pub use pipeline::InvoicePipeline;
