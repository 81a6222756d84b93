//! Text normalization for raw OCR output.

/// The one non-ASCII character that survives normalization.
pub const RUPEE_SIGN: char = '₹';

/// Cleans recognized text into a canonical search surface.
///
/// Every character outside the printable ASCII range becomes a space,
/// except the preserved currency symbol; whitespace runs collapse to a
/// single space. Total over any input and idempotent.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    /// Currency symbol exempt from the ASCII filter.
    keep: char,
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self { keep: RUPEE_SIGN }
    }

    /// Preserve a different currency symbol.
    pub fn with_symbol(mut self, symbol: char) -> Self {
        self.keep = symbol;
        self
    }

    /// Normalize into a single line: all line breaks collapse to spaces.
    ///
    /// This is the search surface for the header and grand-total
    /// extractors.
    pub fn flatten(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        self.clean_into(text, &mut out);
        out
    }

    /// Normalize each line separately, preserving line breaks.
    ///
    /// The line-item extractor depends on the original line structure,
    /// so it must not see the flattened form.
    pub fn normalize_lines(&self, text: &str) -> String {
        let lines: Vec<String> = text
            .lines()
            .map(|line| {
                let mut out = String::with_capacity(line.len());
                self.clean_into(line, &mut out);
                out
            })
            .collect();
        lines.join("\n")
    }

    fn clean_into(&self, text: &str, out: &mut String) {
        let mut pending_space = false;
        for c in text.chars() {
            if c == self.keep || c.is_ascii_graphic() {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_space = false;
                out.push(c);
            } else {
                // Whitespace, control characters and stripped non-ASCII
                // all collapse into one separating space.
                pending_space = true;
            }
        }
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collapses_whitespace_and_trims() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.flatten("  City   Hospital \n Kochi\t Kerala  "),
            "City Hospital Kochi Kerala"
        );
    }

    #[test]
    fn test_strips_non_ascii_but_keeps_rupee() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.flatten("Grand Total ₹ 12,345 é—ç"),
            "Grand Total ₹ 12,345"
        );
    }

    #[test]
    fn test_is_idempotent() {
        let normalizer = TextNormalizer::new();
        for text in ["", "plain", "  a\u{00a0}b ₹ c \n d ", "é é é"] {
            let once = normalizer.flatten(text);
            assert_eq!(normalizer.flatten(&once), once);
        }
    }

    #[test]
    fn test_ascii_text_is_identity_up_to_whitespace() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.flatten("already clean"), "already clean");
        assert_eq!(normalizer.flatten(""), "");
    }

    #[test]
    fn test_normalize_lines_keeps_breaks() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.normalize_lines("Room  Rent é 2  1500\nX-Ray   400"),
            "Room Rent 2 1500\nX-Ray 400"
        );
    }

    #[test]
    fn test_custom_symbol() {
        let normalizer = TextNormalizer::new().with_symbol('€');
        assert_eq!(normalizer.flatten("Total € 10 ₹"), "Total € 10");
    }
}
