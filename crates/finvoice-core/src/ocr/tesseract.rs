//! Tesseract OCR backend via leptess.

use leptess::{LepTess, Variable};
use tracing::debug;

use super::OcrBackend;
use crate::error::OcrError;
use crate::models::config::OcrConfig;

/// Tesseract-backed recognition engine.
///
/// Configured for the invoice domain: English model, single-block page
/// segmentation, and a restricted character whitelist.
pub struct TesseractBackend {
    engine: LepTess,
}

impl TesseractBackend {
    /// Initialize Tesseract with the given configuration.
    pub fn new(config: &OcrConfig) -> Result<Self, OcrError> {
        let mut engine = LepTess::new(None, &config.language)
            .map_err(|e| OcrError::Init(e.to_string()))?;

        engine
            .set_variable(
                Variable::TesseditPagesegMode,
                &config.page_seg_mode.to_string(),
            )
            .map_err(|e| OcrError::Init(e.to_string()))?;
        engine
            .set_variable(Variable::TesseditCharWhitelist, &config.char_whitelist)
            .map_err(|e| OcrError::Init(e.to_string()))?;

        debug!(
            language = %config.language,
            psm = config.page_seg_mode,
            "Tesseract engine ready"
        );

        Ok(Self { engine })
    }
}

// LepTess wraps raw Tesseract pointers. The extractor owns exactly one
// backend at a time and moves it wholesale onto a blocking thread, so the
// engine is never touched from two threads at once.
unsafe impl Send for TesseractBackend {}

impl OcrBackend for TesseractBackend {
    fn recognize(&mut self, image: &[u8]) -> Result<String, OcrError> {
        self.engine
            .set_image_from_mem(image)
            .map_err(|e| OcrError::InvalidImage(e.to_string()))?;
        self.engine
            .get_utf8_text()
            .map_err(|e| OcrError::Recognition(e.to_string()))
    }
}
