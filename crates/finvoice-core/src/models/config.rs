//! Configuration structures for the invoice OCR pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{FinvoiceError, Result};

/// Main configuration for the finvoice pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinvoiceConfig {
    /// OCR engine configuration.
    pub ocr: OcrConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,
}

/// OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Tesseract language model.
    pub language: String,

    /// Page segmentation mode. 6 treats the page as a single uniform
    /// block of text, which works best for invoice scans.
    pub page_seg_mode: u32,

    /// Restricted recognition character set. Limiting the alphabet to
    /// digits, letters, and common invoice punctuation reduces
    /// misrecognition noise.
    pub char_whitelist: String,

    /// Timeout for a single recognition call, in milliseconds. OCR can
    /// hang on malformed input.
    pub recognition_timeout_ms: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: "eng".to_string(),
            page_seg_mode: 6,
            char_whitelist:
                "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz .,$/()-:"
                    .to_string(),
            recognition_timeout_ms: 30_000,
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Try to extract embedded text before falling back to OCR.
    pub prefer_embedded_text: bool,

    /// Minimum embedded text length to skip the OCR path.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            prefer_embedded_text: true,
            min_text_length: 50,
        }
    }
}

impl FinvoiceConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| FinvoiceError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| FinvoiceError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
