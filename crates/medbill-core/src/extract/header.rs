//! Header field extraction from normalized bill text.

use chrono::NaiveDate;
use regex::Regex;

use super::patterns::{
    ADMISSION_DATE, DISCHARGE_DATE, HOSPITAL_NAME, INVOICE_DATE, INVOICE_NUMBER, PATIENT_NAME,
};
use crate::models::config::ExtractionConfig;
use crate::models::record::HeaderFields;

/// Date layout used on the bills: two-digit day, three-letter month
/// abbreviation, four-digit year.
const DATE_FORMAT: &str = "%d-%b-%Y";

/// Extracts the seven named header fields.
///
/// Each field is an independent first-match search over the flattened
/// text; absence degrades to the configured sentinel and never affects
/// another field.
pub struct HeaderFieldExtractor {
    location: Regex,
    sentinel: String,
}

impl HeaderFieldExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        // Address block runs from the configured city token to the
        // first following state token.
        let anchor = &config.address_anchor;
        let location = Regex::new(&format!(
            "({}.*?{})",
            regex::escape(&anchor.city),
            regex::escape(&anchor.state)
        ))
        .unwrap();

        Self {
            location,
            sentinel: config.not_found.clone(),
        }
    }

    pub fn extract(&self, text: &str) -> HeaderFields {
        HeaderFields {
            hospital_name: self.first_capture(&HOSPITAL_NAME, text),
            location: self.first_capture(&self.location, text),
            invoice_number: self.first_capture(&INVOICE_NUMBER, text),
            invoice_date: self.first_valid_date(&INVOICE_DATE, text),
            patient_name: self.patient_name(text),
            admission_date: self.first_valid_date(&ADMISSION_DATE, text),
            discharge_date: self.first_valid_date(&DISCHARGE_DATE, text),
        }
    }

    fn first_capture(&self, pattern: &Regex, text: &str) -> String {
        pattern
            .captures(text)
            .map(|caps| caps[1].to_string())
            .unwrap_or_else(|| self.sentinel.clone())
    }

    fn patient_name(&self, text: &str) -> String {
        PATIENT_NAME
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
            .unwrap_or_else(|| self.sentinel.clone())
    }

    /// First capture that is a real calendar date.
    ///
    /// The regex accepts any three letters as a month, so matches like
    /// "99-Zzz-2024" are rejected here and fall through to later
    /// matches or the sentinel.
    fn first_valid_date(&self, pattern: &Regex, text: &str) -> String {
        pattern
            .captures_iter(text)
            .map(|caps| caps[1].to_string())
            .find(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).is_ok())
            .unwrap_or_else(|| self.sentinel.clone())
    }
}
