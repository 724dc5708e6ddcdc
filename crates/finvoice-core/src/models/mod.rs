//! Data models for extracted invoices and pipeline configuration.

pub mod config;
pub mod invoice;

pub use config::{FinvoiceConfig, OcrConfig, PdfConfig};
pub use invoice::{InvoiceData, InvoiceLineItem, MONETARY_TOLERANCE};
