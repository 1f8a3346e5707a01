//! ZATCA QR - e-invoice compliance QR payloads
//!
//! This crate provides:
//! - TLV (tag-length-value) encoding of the five mandatory ZATCA fields
//! - Base64 wire encoding of the TLV payload
//! - QR raster image generation (PNG bytes or `data:` URL) for embedding
//!   into a rendered document
//!
//! Everything is pure computation: identical fields always produce
//! byte-identical TLV, base64, and PNG output.
//!
//! # Example
//!
//! ```
//! use zatca_qr::ZatcaFields;
//!
//! let fields = ZatcaFields::new("Test Company", "2024-01-15 10:30:00", "100.50")
//!     .vat_number("1234567890")
//!     .vat_total("15.08");
//!
//! let payload = fields.to_base64()?;
//! assert!(payload.starts_with("AQx"));
//!
//! let qr = zatca_qr::zatca_qr_data_url(&fields)?;
//! assert!(qr.starts_with("data:image/png;base64,"));
//! # Ok::<(), zatca_qr::ZatcaError>(())
//! ```

mod qr;
mod tlv;

pub use qr::{qr_data_url, qr_png, zatca_qr_data_url, ErrorCorrection, DEFAULT_QR_SIZE};
pub use tlv::{
    decode_tlv, format_amount, format_timestamp, ZatcaFields, MAX_VALUE_LEN, TAG_INVOICE_TOTAL,
    TAG_SELLER_NAME, TAG_TIMESTAMP, TAG_VAT_NUMBER, TAG_VAT_TOTAL,
};

use thiserror::Error;

/// Errors that can occur while building a compliance QR payload
#[derive(Debug, Error)]
pub enum ZatcaError {
    /// A mandatory field is empty. VAT number and VAT total are not
    /// mandatory; they fall back to placeholder values instead.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field with tag {tag} is {len} bytes; TLV length is a single byte (max {MAX_VALUE_LEN})")]
    FieldTooLong { tag: u8, len: usize },

    #[error("Truncated TLV payload at offset {0}")]
    TruncatedPayload(usize),

    #[error("TLV value for tag {0} is not valid UTF-8")]
    InvalidValue(u8),

    #[error("QR encoding failed: {0}")]
    QrError(String),

    #[error("Image encoding failed: {0}")]
    ImageError(String),
}

/// Result type for ZATCA QR operations
pub type Result<T> = std::result::Result<T, ZatcaError>;
