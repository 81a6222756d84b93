//! Line item extraction from the line-oriented bill text.

use super::patterns::NUMERIC_TOKEN;
use crate::models::config::ExtractionConfig;
use crate::models::record::LineItem;

/// Scans text lines for rows that look like billable items.
///
/// A best-effort row parser: lines that do not qualify are silently
/// dropped, which is the filtering mechanism against OCR noise. Output
/// preserves original line order; no deduplication.
pub struct LineItemExtractor {
    skip_keywords: Vec<String>,
    min_description_len: usize,
    min_numeric_tokens: usize,
}

impl LineItemExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            skip_keywords: config
                .skip_keywords
                .iter()
                .map(|k| k.to_lowercase())
                .collect(),
            min_description_len: config.min_description_len,
            min_numeric_tokens: config.min_numeric_tokens,
        }
    }

    /// Parse every qualifying line of the given text.
    ///
    /// The text must retain its original line breaks; the flattened
    /// search surface used by the header extractors is unsuitable here.
    pub fn extract(&self, text: &str) -> Vec<LineItem> {
        text.lines()
            .filter_map(|line| self.parse_line(line))
            .collect()
    }

    fn parse_line(&self, line: &str) -> Option<LineItem> {
        let line = line.trim();

        let lowered = line.to_lowercase();
        if self.skip_keywords.iter().any(|k| lowered.contains(k)) {
            return None;
        }

        let (numbers, description) = self.tokenize(line);

        if numbers.len() < self.min_numeric_tokens {
            return None;
        }

        // Canonical row shapes over the numeric tail:
        //   [desc, rate, total]       -> no quantity column
        //   [desc, qty, rate, total]  -> quantity is third from the end
        let (quantity, rate, total) = match numbers.as_slice() {
            [] | [_] => return None,
            [rate, total] => (None, *rate, *total),
            [.., qty, rate, total] => (Some(*qty), *rate, *total),
        };

        if description.chars().count() < self.min_description_len {
            // Too short to be a real row; OCR noise.
            return None;
        }

        Some(LineItem {
            description,
            quantity,
            rate,
            total,
        })
    }

    /// Split a line into its numeric values and the remaining text.
    ///
    /// Numeric tokens are digit runs with embedded thousands-separator
    /// commas; all tokenized runs are removed from the description,
    /// which is then trimmed of surrounding spaces and hyphens.
    fn tokenize(&self, line: &str) -> (Vec<i64>, String) {
        let mut numbers = Vec::new();
        let mut description = String::with_capacity(line.len());
        let mut last = 0;

        for m in NUMERIC_TOKEN.find_iter(line) {
            description.push_str(&line[last..m.start()]);
            last = m.end();

            let digits: String = m
                .as_str()
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            if digits.is_empty() {
                // A bare comma run; not a number.
                continue;
            }
            if let Ok(value) = digits.parse::<i64>() {
                numbers.push(value);
            }
        }
        description.push_str(&line[last..]);

        let description = description
            .trim_matches(|c| c == ' ' || c == '-')
            .to_string();

        (numbers, description)
    }
}
