//! Bill data models serialized for downstream billing tools.

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Sentinel string used for any field with no matching pattern.
pub const NOT_FOUND: &str = "Not Found";

/// The seven named header fields of a hospital bill.
///
/// Every key is always present; a value is either the matched string or
/// the "Not Found" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderFields {
    /// Hospital name (prefix of the text ending in "Hospital").
    pub hospital_name: String,

    /// Facility address block between the configured city/state anchors.
    pub location: String,

    /// Invoice number, e.g. "KOC/2023/0456".
    pub invoice_number: String,

    /// Invoice date in DD-MMM-YYYY form.
    pub invoice_date: String,

    /// Patient name.
    pub patient_name: String,

    /// Admission date in DD-MMM-YYYY form.
    pub admission_date: String,

    /// Discharge date in DD-MMM-YYYY form.
    pub discharge_date: String,
}

impl HeaderFields {
    /// Create a header with every field set to the given sentinel.
    pub fn all_missing(sentinel: &str) -> Self {
        Self {
            hospital_name: sentinel.to_string(),
            location: sentinel.to_string(),
            invoice_number: sentinel.to_string(),
            invoice_date: sentinel.to_string(),
            patient_name: sentinel.to_string(),
            admission_date: sentinel.to_string(),
            discharge_date: sentinel.to_string(),
        }
    }
}

impl Default for HeaderFields {
    fn default() -> Self {
        Self::all_missing(NOT_FOUND)
    }
}

/// A single billed row: description, optional quantity, rate and total.
///
/// Created once per qualifying text line, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Row description with numeric tokens stripped.
    pub description: String,

    /// Billed quantity; absent when the row carried only rate and total.
    pub quantity: Option<i64>,

    /// Unit rate in whole rupees.
    pub rate: i64,

    /// Row total in whole rupees.
    pub total: i64,
}

/// The document's grand total: an amount or the absence sentinel.
///
/// Serializes as a JSON number, or as the string `"Not Found"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrandTotal {
    Amount(i64),
    NotFound,
}

impl GrandTotal {
    /// The extracted amount, if any.
    pub fn amount(&self) -> Option<i64> {
        match self {
            GrandTotal::Amount(v) => Some(*v),
            GrandTotal::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, GrandTotal::Amount(_))
    }
}

impl Serialize for GrandTotal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GrandTotal::Amount(v) => serializer.serialize_i64(*v),
            GrandTotal::NotFound => serializer.serialize_str(NOT_FOUND),
        }
    }
}

impl<'de> Deserialize<'de> for GrandTotal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Amount(i64),
            Sentinel(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Amount(v) => Ok(GrandTotal::Amount(v)),
            Raw::Sentinel(s) if s == NOT_FOUND => Ok(GrandTotal::NotFound),
            Raw::Sentinel(s) => Err(D::Error::custom(format!(
                "expected an amount or \"{NOT_FOUND}\", got \"{s}\""
            ))),
        }
    }
}

/// The complete extraction output for one bill.
///
/// Serializes as a flat mapping: the seven header keys, `items`,
/// `grand_total` and `currency`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    #[serde(flatten)]
    pub header: HeaderFields,

    /// Billed rows in original document order.
    pub items: Vec<LineItem>,

    /// Grand total amount.
    pub grand_total: GrandTotal,

    /// Fixed currency code, "INR" by default.
    pub currency: String,
}

impl InvoiceRecord {
    /// Compose the extractor outputs into one record.
    ///
    /// Pure composition: no cross-check of item totals against the
    /// grand total is performed.
    pub fn assemble(
        header: HeaderFields,
        items: Vec<LineItem>,
        grand_total: GrandTotal,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            header,
            items,
            grand_total,
            currency: currency.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_header_is_all_sentinel() {
        let header = HeaderFields::default();
        assert_eq!(header.hospital_name, NOT_FOUND);
        assert_eq!(header.location, NOT_FOUND);
        assert_eq!(header.invoice_number, NOT_FOUND);
        assert_eq!(header.invoice_date, NOT_FOUND);
        assert_eq!(header.patient_name, NOT_FOUND);
        assert_eq!(header.admission_date, NOT_FOUND);
        assert_eq!(header.discharge_date, NOT_FOUND);
    }

    #[test]
    fn test_grand_total_serialization() {
        assert_eq!(
            serde_json::to_string(&GrandTotal::Amount(12345)).unwrap(),
            "12345"
        );
        assert_eq!(
            serde_json::to_string(&GrandTotal::NotFound).unwrap(),
            "\"Not Found\""
        );
    }

    #[test]
    fn test_grand_total_round_trip() {
        let found: GrandTotal = serde_json::from_str("12345").unwrap();
        assert_eq!(found, GrandTotal::Amount(12345));

        let missing: GrandTotal = serde_json::from_str("\"Not Found\"").unwrap();
        assert_eq!(missing, GrandTotal::NotFound);

        assert!(serde_json::from_str::<GrandTotal>("\"garbage\"").is_err());
    }

    #[test]
    fn test_record_json_layout() {
        let record = InvoiceRecord::assemble(
            HeaderFields::default(),
            vec![LineItem {
                description: "Consultation Fee".to_string(),
                quantity: None,
                rate: 500,
                total: 1000,
            }],
            GrandTotal::Amount(1000),
            "INR",
        );

        let json = serde_json::to_value(&record).unwrap();
        let object = json.as_object().unwrap();

        for key in [
            "hospital_name",
            "location",
            "invoice_number",
            "invoice_date",
            "patient_name",
            "admission_date",
            "discharge_date",
            "items",
            "grand_total",
            "currency",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }

        // Absent quantity serializes as an explicit null.
        assert_eq!(json["items"][0]["quantity"], serde_json::Value::Null);
        assert_eq!(json["grand_total"], 1000);
        assert_eq!(json["currency"], "INR");
    }
}
