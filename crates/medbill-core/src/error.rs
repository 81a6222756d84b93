//! Error types for the medbill-core library.
//!
//! The extraction stages themselves are total - noisy input degrades to
//! sentinel values in the output rather than raising. Errors only occur
//! at the seams: the external OCR collaborator, configuration files,
//! and I/O.

use thiserror::Error;

/// Main error type for the medbill library.
#[derive(Error, Debug)]
pub enum MedbillError {
    /// Error from the external OCR collaborator.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors reported by an OCR engine implementation.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The engine failed to run.
    #[error("engine failure: {0}")]
    Engine(String),

    /// The input image could not be read or decoded.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// A requested recognition language is not available.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Result type for the medbill library.
pub type Result<T> = std::result::Result<T, MedbillError>;
