//! OCR text extraction with a lazily-initialized, reusable engine.

#[cfg(feature = "tesseract")]
mod tesseract;

#[cfg(feature = "tesseract")]
pub use tesseract::TesseractBackend;

use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::OcrError;
use crate::models::config::OcrConfig;

/// A recognition engine that turns raster image bytes into text.
///
/// Implementations are moved onto a blocking thread for recognition, so
/// they must be `Send`. Test doubles implement this to exercise the
/// extractor without a native OCR installation.
pub trait OcrBackend: Send + 'static {
    /// Recognize text in an encoded image (JPEG/PNG/GIF/TIFF/BMP bytes).
    fn recognize(&mut self, image: &[u8]) -> Result<String, OcrError>;
}

type BackendFactory<B> = Box<dyn Fn(&OcrConfig) -> Result<B, OcrError> + Send + Sync>;

/// Text extraction engine wrapping an [`OcrBackend`] lifecycle.
///
/// The backend is expensive to start, so it is created lazily on the
/// first `extract_text` call and reused until [`cleanup`](Self::cleanup).
/// First-time initialization is serialized behind the engine mutex, so
/// exactly one backend is created regardless of concurrent callers.
///
/// After a recognition timeout the stale backend stays owned by its
/// detached blocking task until that recognition returns, while the next
/// call initializes a replacement. The overlap is bounded to that one
/// stale engine; blocking threads cannot be cancelled mid-recognition.
pub struct TextExtractor<B: OcrBackend> {
    engine: Mutex<Option<B>>,
    factory: BackendFactory<B>,
    config: OcrConfig,
}

impl<B: OcrBackend> TextExtractor<B> {
    /// Create an extractor with a backend factory. The factory is invoked
    /// at most once per engine lifetime.
    pub fn new(
        config: OcrConfig,
        factory: impl Fn(&OcrConfig) -> Result<B, OcrError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            engine: Mutex::new(None),
            factory: Box::new(factory),
            config,
        }
    }

    /// Extract plain text from an image buffer.
    ///
    /// The returned text is trimmed per line with internal line breaks
    /// preserved; the field parser depends on line-oriented patterns.
    /// Failures are terminal for the upload, not retry conditions.
    pub async fn extract_text(&self, buffer: &[u8]) -> Result<String, OcrError> {
        validate_image_format(buffer)?;

        let mut slot = self.engine.lock().await;
        let mut engine = match slot.take() {
            Some(engine) => engine,
            None => {
                debug!(language = %self.config.language, "initializing OCR engine");
                (self.factory)(&self.config)?
            }
        };

        let owned = buffer.to_vec();
        let task = tokio::task::spawn_blocking(move || {
            let text = engine.recognize(&owned);
            (engine, text)
        });

        let timeout = Duration::from_millis(self.config.recognition_timeout_ms);
        match tokio::time::timeout(timeout, task).await {
            Ok(Ok((engine, text))) => {
                *slot = Some(engine);
                let text = text?;
                let cleaned = clean_text(&text);
                debug!(chars = cleaned.len(), "OCR extraction complete");
                Ok(cleaned)
            }
            Ok(Err(join_err)) => Err(OcrError::Recognition(join_err.to_string())),
            Err(_) => {
                // The detached task still owns the engine and drops it when
                // recognition eventually returns; the empty slot makes the
                // next call re-initialize.
                warn!(
                    timeout_ms = self.config.recognition_timeout_ms,
                    "OCR recognition timed out"
                );
                Err(OcrError::Timeout(self.config.recognition_timeout_ms))
            }
        }
    }

    /// Release the engine handle. Idempotent; a subsequent `extract_text`
    /// re-initializes cleanly.
    pub async fn cleanup(&self) {
        let mut slot = self.engine.lock().await;
        if slot.take().is_some() {
            debug!("OCR engine released");
        }
    }
}

/// Reject buffers that are not a recognizable raster image.
fn validate_image_format(buffer: &[u8]) -> Result<(), OcrError> {
    let format = image::guess_format(buffer)
        .map_err(|_| OcrError::InvalidImage("unrecognized image format".to_string()))?;

    match format {
        image::ImageFormat::Jpeg
        | image::ImageFormat::Png
        | image::ImageFormat::Gif
        | image::ImageFormat::Tiff
        | image::ImageFormat::Bmp => Ok(()),
        other => Err(OcrError::InvalidImage(format!(
            "unsupported image format: {:?}",
            other
        ))),
    }
}

/// Trim each line and drop empty ones, keeping line break structure.
fn clean_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<&str>>()
        .join("\n")
}
