//! QR image generation

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::Luma;
use qrcode::{EcLevel, QrCode};

use crate::tlv::ZatcaFields;
use crate::{Result, ZatcaError};

/// Default QR width/height in pixels for embedded document images
pub const DEFAULT_QR_SIZE: u32 = 150;

/// QR code error correction level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorCorrection {
    L,
    /// Level mandated for ZATCA payloads
    #[default]
    M,
    Q,
    H,
}

impl ErrorCorrection {
    fn ec_level(self) -> EcLevel {
        match self {
            ErrorCorrection::L => EcLevel::L,
            ErrorCorrection::M => EcLevel::M,
            ErrorCorrection::Q => EcLevel::Q,
            ErrorCorrection::H => EcLevel::H,
        }
    }
}

/// Generate a QR code for a payload as PNG bytes
///
/// Black modules on a white background, scaled so the image is at least
/// `size` pixels wide.
pub fn qr_png(payload: &str, size: u32, ec: ErrorCorrection) -> Result<Vec<u8>> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), ec.ec_level())
        .map_err(|e| ZatcaError::QrError(e.to_string()))?;

    let image = code.render::<Luma<u8>>().min_dimensions(size, size).build();

    let mut bytes: Vec<u8> = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut bytes);

    image::DynamicImage::ImageLuma8(image)
        .write_to(&mut cursor, image::ImageFormat::Png)
        .map_err(|e| ZatcaError::ImageError(e.to_string()))?;

    Ok(bytes)
}

/// Generate a QR code for a payload as a `data:image/png;base64,` URL
///
/// The result drops straight into an `<img src="...">` attribute of a
/// rendered document.
pub fn qr_data_url(payload: &str, size: u32, ec: ErrorCorrection) -> Result<String> {
    let png = qr_png(payload, size, ec)?;
    Ok(format!("data:image/png;base64,{}", BASE64.encode(png)))
}

/// Encode compliance fields and render their QR image in one call
///
/// TLV -> base64 -> QR at the default size and level M. This is the path
/// the document pipeline uses before rendering a tax invoice template.
pub fn zatca_qr_data_url(fields: &ZatcaFields) -> Result<String> {
    let payload = fields.to_base64()?;
    qr_data_url(&payload, DEFAULT_QR_SIZE, ErrorCorrection::M)
}
