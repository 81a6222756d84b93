//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::record::NOT_FOUND;

/// Main configuration for the medbill pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MedbillConfig {
    /// External OCR collaborator configuration.
    pub ocr: OcrConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Configuration handed to the external OCR engine.
///
/// The extraction core never reads this; it exists so callers can
/// configure whatever engine sits behind [`crate::ocr::OcrEngine`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Recognition language codes.
    pub languages: Vec<String>,

    /// Use GPU acceleration if the engine supports it.
    pub use_gpu: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            languages: vec!["en".to_string()],
            use_gpu: false,
        }
    }
}

/// Tunables for the extraction stages.
///
/// The skip-keyword list and sentinel string are named configuration,
/// not literals baked into the extractors, so they can be adjusted per
/// document template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Lines containing any of these words (case-insensitive) are
    /// treated as table header/footer noise, never as billable rows.
    pub skip_keywords: Vec<String>,

    /// Sentinel value for fields with no matching pattern.
    pub not_found: String,

    /// Currency code stamped on every assembled record.
    pub currency: String,

    /// City/state pair anchoring the facility address block.
    pub address_anchor: AddressAnchor,

    /// Minimum description length for a row to count as a line item.
    pub min_description_len: usize,

    /// Minimum numeric tokens for a row to count as a line item.
    pub min_numeric_tokens: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            skip_keywords: ["description", "qty", "rate", "total", "grand"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            not_found: NOT_FOUND.to_string(),
            currency: "INR".to_string(),
            address_anchor: AddressAnchor::default(),
            min_description_len: 3,
            min_numeric_tokens: 2,
        }
    }
}

/// Start and end tokens bounding the facility address in the text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressAnchor {
    /// Token the address block starts at.
    pub city: String,

    /// Token the address block ends at.
    pub state: String,
}

impl Default for AddressAnchor {
    fn default() -> Self {
        Self {
            city: "Kochi".to_string(),
            state: "Kerala".to_string(),
        }
    }
}

impl MedbillConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_extraction_config() {
        let config = ExtractionConfig::default();

        assert_eq!(
            config.skip_keywords,
            vec!["description", "qty", "rate", "total", "grand"]
        );
        assert_eq!(config.not_found, "Not Found");
        assert_eq!(config.currency, "INR");
        assert_eq!(config.address_anchor.city, "Kochi");
        assert_eq!(config.address_anchor.state, "Kerala");
        assert_eq!(config.min_description_len, 3);
        assert_eq!(config.min_numeric_tokens, 2);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: MedbillConfig =
            serde_json::from_str(r#"{"extraction": {"currency": "USD"}}"#).unwrap();

        assert_eq!(config.extraction.currency, "USD");
        assert_eq!(config.extraction.not_found, "Not Found");
        assert_eq!(config.ocr.languages, vec!["en"]);
        assert!(!config.ocr.use_gpu);
    }
}
