//! TLV encoding of the ZATCA e-invoice fields
//!
//! The payload is five `tag || length || value` records concatenated in
//! fixed tag order (1..=5): seller name, VAT registration number, timestamp,
//! invoice total, VAT total. Length is the UTF-8 byte count of the value,
//! held in a single byte.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::NaiveDateTime;

use crate::{Result, ZatcaError};

/// TLV tag for the seller (organization) name
pub const TAG_SELLER_NAME: u8 = 1;
/// TLV tag for the seller VAT registration number
pub const TAG_VAT_NUMBER: u8 = 2;
/// TLV tag for the invoice timestamp (`YYYY-MM-DD HH:MM:SS`)
pub const TAG_TIMESTAMP: u8 = 3;
/// TLV tag for the invoice total, VAT inclusive
pub const TAG_INVOICE_TOTAL: u8 = 4;
/// TLV tag for the VAT amount
pub const TAG_VAT_TOTAL: u8 = 5;

/// Maximum encodable value size; the TLV length field is one byte
pub const MAX_VALUE_LEN: usize = 255;

/// Placeholder used when no VAT registration number is on record
const VAT_NUMBER_FALLBACK: &str = "N/A";
/// Placeholder used when no VAT amount is on record
const VAT_TOTAL_FALLBACK: &str = "0.00";

/// The five ZATCA compliance fields of one tax document
///
/// Seller name, timestamp, and invoice total are mandatory; VAT number and
/// VAT total fall back to placeholders when absent. Amounts are taken as
/// pre-formatted strings exactly as the document displays them; no rounding
/// happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZatcaFields {
    pub seller_name: String,
    pub vat_number: Option<String>,
    pub timestamp: String,
    pub invoice_total: String,
    pub vat_total: Option<String>,
}

impl ZatcaFields {
    /// Create the mandatory field set
    pub fn new(
        seller_name: impl Into<String>,
        timestamp: impl Into<String>,
        invoice_total: impl Into<String>,
    ) -> Self {
        Self {
            seller_name: seller_name.into(),
            vat_number: None,
            timestamp: timestamp.into(),
            invoice_total: invoice_total.into(),
            vat_total: None,
        }
    }

    /// Set the seller VAT registration number
    pub fn vat_number(mut self, vat_number: impl Into<String>) -> Self {
        self.vat_number = Some(vat_number.into());
        self
    }

    /// Set the VAT amount
    pub fn vat_total(mut self, vat_total: impl Into<String>) -> Self {
        self.vat_total = Some(vat_total.into());
        self
    }

    /// The five `(tag, value)` pairs in wire order, fallbacks applied
    fn tagged_values(&self) -> [(u8, &str); 5] {
        [
            (TAG_SELLER_NAME, self.seller_name.as_str()),
            (
                TAG_VAT_NUMBER,
                self.vat_number.as_deref().unwrap_or(VAT_NUMBER_FALLBACK),
            ),
            (TAG_TIMESTAMP, self.timestamp.as_str()),
            (TAG_INVOICE_TOTAL, self.invoice_total.as_str()),
            (
                TAG_VAT_TOTAL,
                self.vat_total.as_deref().unwrap_or(VAT_TOTAL_FALLBACK),
            ),
        ]
    }

    /// Check the mandatory fields before encoding
    fn validate(&self) -> Result<()> {
        if self.seller_name.is_empty() {
            return Err(ZatcaError::MissingField("seller name"));
        }
        let date = self.timestamp.split(' ').next().unwrap_or("");
        if date.is_empty() {
            return Err(ZatcaError::MissingField("timestamp"));
        }
        if self.invoice_total.is_empty() {
            return Err(ZatcaError::MissingField("invoice total"));
        }
        Ok(())
    }

    /// Encode the fields as a raw TLV byte buffer
    pub fn encode(&self) -> Result<Vec<u8>> {
        self.validate()?;

        let mut buf = Vec::new();
        for (tag, value) in self.tagged_values() {
            let bytes = value.as_bytes();
            if bytes.len() > MAX_VALUE_LEN {
                return Err(ZatcaError::FieldTooLong {
                    tag,
                    len: bytes.len(),
                });
            }
            buf.push(tag);
            buf.push(bytes.len() as u8);
            buf.extend_from_slice(bytes);
        }
        Ok(buf)
    }

    /// Encode the fields and base64 the TLV buffer (the QR payload)
    pub fn to_base64(&self) -> Result<String> {
        Ok(BASE64.encode(self.encode()?))
    }
}

/// Format a date-time the way the TLV timestamp field expects it
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format an amount as the fixed two-decimal string a document displays
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Decode a TLV buffer back into `(tag, value)` pairs
///
/// The inverse of [`ZatcaFields::encode`]; used by verification tooling and
/// round-trip tests.
pub fn decode_tlv(buf: &[u8]) -> Result<Vec<(u8, String)>> {
    let mut records = Vec::new();
    let mut pos = 0;

    while pos < buf.len() {
        if pos + 2 > buf.len() {
            return Err(ZatcaError::TruncatedPayload(pos));
        }
        let tag = buf[pos];
        let len = buf[pos + 1] as usize;
        pos += 2;

        if pos + len > buf.len() {
            return Err(ZatcaError::TruncatedPayload(pos));
        }
        let value = std::str::from_utf8(&buf[pos..pos + len])
            .map_err(|_| ZatcaError::InvalidValue(tag))?;
        records.push((tag, value.to_string()));
        pos += len;
    }

    Ok(records)
}
