//! Render a thermal receipt with an embedded ZATCA QR code
//!
//! ```sh
//! cargo run -p template --example thermal_receipt > receipt.html
//! ```

use serde_json::json;
use template::{render_str, TemplateKind};
use zatca_qr::{zatca_qr_data_url, ZatcaFields};

const TEMPLATE: &str = r#"<html>
<body style="width: {{pageWidthMm}}mm" dir="{{direction}}">
  <h2>{{companyName}}</h2>
  {{#vatNumber}}<p>VAT No: {{vatNumber}}</p>{{/vatNumber}}
  <p>{{date}} &mdash; Order {{orderNumber}}</p>
  <table>
    {{#each items}}<tr><td>{{@index}}</td><td>{{name}}</td><td>{{quantity}}</td><td>{{total}}</td></tr>
    {{/each}}
  </table>
  <p>Subtotal: {{subtotal}}</p>
  <p>VAT: {{vatTotal}}</p>
  <p><b>Total: {{total}}</b></p>
  <img src="{{qrCodeUrl}}" width="150" height="150"/>
</body>
</html>"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fields = ZatcaFields::new("Test Company", "2024-01-15 10:30:00", "25.30")
        .vat_number("1234567890")
        .vat_total("3.30");
    let qr_code_url = zatca_qr_data_url(&fields)?;

    let kind = TemplateKind::Thermal;
    let data = json!({
        "pageWidthMm": kind.page_width_mm(),
        "direction": kind.direction(),
        "companyName": "Test Company",
        "vatNumber": "1234567890",
        "orderNumber": "A-42",
        "date": "2024-01-15",
        "items": [
            { "name": "Tea", "quantity": 2, "total": "10.00" },
            { "name": "Cake", "quantity": 1, "total": "12.00" },
        ],
        "subtotal": "22.00",
        "vatTotal": "3.30",
        "total": "25.30",
        "qrCodeUrl": qr_code_url,
    });

    println!("{}", render_str(TEMPLATE, &data));
    Ok(())
}
