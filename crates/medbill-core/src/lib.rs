//! Core library for hospital bill OCR processing.
//!
//! This crate provides:
//! - Text normalization of raw OCR output
//! - Header field extraction (hospital, dates, patient, invoice number)
//! - Line item and grand total extraction
//! - Bill data models with a sentinel-based "Not Found" convention

pub mod error;
pub mod extract;
pub mod models;
pub mod ocr;

pub use error::{MedbillError, OcrError, Result};
pub use extract::{
    ExtractionResult, GrandTotalExtractor, HeaderFieldExtractor, InvoicePipeline,
    LineItemExtractor, TextNormalizer,
};
pub use models::config::{ExtractionConfig, MedbillConfig, OcrConfig};
pub use models::record::{GrandTotal, HeaderFields, InvoiceRecord, LineItem};
pub use ocr::OcrEngine;
