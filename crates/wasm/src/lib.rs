//! WASM bindings for docgen
//!
//! This crate provides a JavaScript-friendly API for:
//! - Rendering receipt/invoice templates against a data object
//! - Building ZATCA-compliant QR data URLs for tax documents
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { renderTemplate, zatcaQrDataUrl, CompiledTemplate } from 'docgen-wasm';
//!
//! await init();
//!
//! const qrCodeUrl = zatcaQrDataUrl(
//!   "Test Company", "1234567890", "2024-01-15 10:30:00", "100.50", "15.08");
//!
//! const html = renderTemplate(templateContent, { companyName: "Test Company", qrCodeUrl });
//!
//! // Or parse once and render many times
//! const tpl = CompiledTemplate.fromJson(templateDocJson);
//! const html2 = tpl.render({ companyName: "Test Company" });
//! ```

use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render template markup against a data object
///
/// @param content - Template markup with directives
/// @param data - Data object for substitution
/// @returns Rendered markup string
#[wasm_bindgen(js_name = renderTemplate)]
pub fn render_template(content: &str, data: JsValue) -> Result<String, JsValue> {
    let data_value: serde_json::Value = serde_wasm_bindgen::from_value(data)?;
    Ok(template::render_str(content, &data_value))
}

/// Build a ZATCA QR code as a PNG data URL
///
/// @param sellerName - Organization name (required)
/// @param vatNumber - VAT registration number (optional, falls back to "N/A")
/// @param timestamp - "YYYY-MM-DD HH:MM:SS" (required)
/// @param invoiceTotal - Invoice total as displayed, e.g. "100.50" (required)
/// @param vatTotal - VAT amount (optional, falls back to "0.00")
/// @param size - Image width in pixels (optional, defaults to 150)
/// @returns data:image/png;base64 URL for an <img> element
#[wasm_bindgen(js_name = zatcaQrDataUrl)]
pub fn zatca_qr_data_url(
    seller_name: &str,
    vat_number: Option<String>,
    timestamp: &str,
    invoice_total: &str,
    vat_total: Option<String>,
    size: Option<u32>,
) -> Result<String, JsValue> {
    let mut fields = zatca_qr::ZatcaFields::new(seller_name, timestamp, invoice_total);
    if let Some(vat_number) = vat_number {
        fields = fields.vat_number(vat_number);
    }
    if let Some(vat_total) = vat_total {
        fields = fields.vat_total(vat_total);
    }

    let payload = fields.to_base64().map_err(to_js_error)?;
    zatca_qr::qr_data_url(
        &payload,
        size.unwrap_or(zatca_qr::DEFAULT_QR_SIZE),
        zatca_qr::ErrorCorrection::M,
    )
    .map_err(to_js_error)
}

/// A parsed template document, reusable across render calls
#[wasm_bindgen]
pub struct CompiledTemplate {
    template: template::Template,
}

#[wasm_bindgen]
impl CompiledTemplate {
    /// Parse a stored template document from JSON
    ///
    /// @param json - Template document ({ content, isDefault, type })
    /// @returns CompiledTemplate instance
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<CompiledTemplate, JsValue> {
        let template = template::Template::from_json(json).map_err(to_js_error)?;
        Ok(CompiledTemplate { template })
    }

    /// Create from raw template markup
    ///
    /// @param content - Template markup with directives
    #[wasm_bindgen(js_name = fromContent)]
    pub fn from_content(content: &str) -> CompiledTemplate {
        CompiledTemplate {
            template: template::Template::from_content(content),
        }
    }

    /// Whether this template is the organization's default for its kind
    #[wasm_bindgen(js_name = isDefault)]
    pub fn is_default(&self) -> bool {
        self.template.is_default
    }

    /// CSS text direction hint ("ltr" or "rtl")
    pub fn direction(&self) -> String {
        self.template.kind.direction().to_string()
    }

    /// Whether the template targets a thermal roll printer
    #[wasm_bindgen(js_name = isThermal)]
    pub fn is_thermal(&self) -> bool {
        self.template.kind.is_thermal()
    }

    /// Render the template with data
    ///
    /// @param data - Data object for substitution
    /// @returns Rendered markup string
    pub fn render(&self, data: JsValue) -> Result<String, JsValue> {
        let data_value: serde_json::Value = serde_wasm_bindgen::from_value(data)?;
        let renderer = template::TemplateRenderer::new(&self.template);
        Ok(renderer.render(&data_value))
    }
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}
