//! Seam for the external OCR collaborator.
//!
//! The pipeline does not bundle a recognition engine. Anything that can
//! turn a scanned bill into an ordered sequence of text fragments (one
//! per detected line/region, top to bottom) can drive it by
//! implementing [`OcrEngine`]. Engine options such as language set and
//! GPU use live in [`crate::models::config::OcrConfig`].

use std::path::Path;

use crate::error::OcrError;

/// An optical character recognition engine.
pub trait OcrEngine {
    /// Recognize text in the given image.
    ///
    /// Returns the detected fragments in reading order; the pipeline
    /// joins them with line breaks to form its raw input text.
    fn read_text(&self, image: &Path) -> Result<Vec<String>, OcrError>;
}
