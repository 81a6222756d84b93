//! Regex patterns for hospital bill field extraction.
//!
//! Only patterns with fixed labels live here; the location pattern is
//! built at runtime from the configured address anchor.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Longest prefix ending in the word "Hospital".
    pub static ref HOSPITAL_NAME: Regex = Regex::new(r"(.*Hospital)").unwrap();

    // Invoice number: uppercase letters, digits and slashes.
    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"Invoice No[:\s]*([A-Z0-9/]+)"
    ).unwrap();

    // Dates in DD-MMM-YYYY form, following their labels.
    pub static ref INVOICE_DATE: Regex = Regex::new(
        r"Invoice Date[:\s]*(\d{2}-[A-Za-z]{3}-\d{4})"
    ).unwrap();

    pub static ref ADMISSION_DATE: Regex = Regex::new(
        r"(?i)Admission[:\s]*(\d{2}-[A-Za-z]{3}-\d{4})"
    ).unwrap();

    pub static ref DISCHARGE_DATE: Regex = Regex::new(
        r"(?i)Discharge[:\s]*(\d{2}-[A-Za-z]{3}-\d{4})"
    ).unwrap();

    // Patient name: letters and spaces after the label.
    pub static ref PATIENT_NAME: Regex = Regex::new(
        r"Patient[:\s]*([A-Za-z ]+)"
    ).unwrap();

    // Grand total: first digit run after the label, commas allowed.
    pub static ref GRAND_TOTAL: Regex = Regex::new(
        r"(?i)Grand Total[^\d]*(\d[\d,]*)"
    ).unwrap();

    // Digit runs with embedded thousands-separator commas. A match may
    // be a bare comma; token parsing skips matches without digits.
    pub static ref NUMERIC_TOKEN: Regex = Regex::new(r"[\d,]+").unwrap();
}
