//! Grand total extraction.

use super::patterns::GRAND_TOTAL;
use crate::models::record::GrandTotal;

/// Locates the document's grand total amount.
pub struct GrandTotalExtractor;

impl GrandTotalExtractor {
    pub fn new() -> Self {
        Self
    }

    /// First case-insensitive "Grand Total" label, skipping any
    /// non-digit characters (currency markers, punctuation) before the
    /// amount.
    pub fn extract(&self, text: &str) -> GrandTotal {
        GRAND_TOTAL
            .captures(text)
            .and_then(|caps| parse_amount(&caps[1]))
            .map(GrandTotal::Amount)
            .unwrap_or(GrandTotal::NotFound)
    }
}

impl Default for GrandTotalExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a digit run with embedded commas to an integer.
fn parse_amount(token: &str) -> Option<i64> {
    let digits: String = token.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extracts_amount_after_label() {
        let extractor = GrandTotalExtractor::new();
        assert_eq!(
            extractor.extract("Grand Total: Rs. 12,345"),
            GrandTotal::Amount(12345)
        );
    }

    #[test]
    fn test_label_is_case_insensitive() {
        let extractor = GrandTotalExtractor::new();
        assert_eq!(
            extractor.extract("GRAND TOTAL ₹ 4,800"),
            GrandTotal::Amount(4800)
        );
    }

    #[test]
    fn test_first_match_wins() {
        let extractor = GrandTotalExtractor::new();
        assert_eq!(
            extractor.extract("Grand Total 100 Grand Total 200"),
            GrandTotal::Amount(100)
        );
    }

    #[test]
    fn test_missing_label_is_not_found() {
        let extractor = GrandTotalExtractor::new();
        assert_eq!(extractor.extract("Total: 4,800"), GrandTotal::NotFound);
        assert_eq!(extractor.extract(""), GrandTotal::NotFound);
    }
}
