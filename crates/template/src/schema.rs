//! Template document schema types

use serde::{Deserialize, Serialize};

use crate::{Result, TemplateError};

/// A stored template document
///
/// `content` is the markup with directives; the other attributes are hints
/// for the caller (template pickers, print dialogs) and never influence the
/// render algorithm itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Markup with embedded directives
    pub content: String,

    /// Selection hint: the organization's default template for its kind
    #[serde(rename = "isDefault")]
    #[serde(default)]
    pub is_default: bool,

    /// Format hint (paper size and text direction)
    #[serde(rename = "type")]
    #[serde(default)]
    pub kind: TemplateKind,
}

impl Template {
    /// Create a template from raw markup with default hints
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_default: false,
            kind: TemplateKind::default(),
        }
    }

    /// Parse a stored template document from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| TemplateError::ParseError(e.to_string()))
    }
}

/// Template format hint: paper layout and language direction
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    /// 80mm thermal receipt, left-to-right
    #[default]
    Thermal,
    /// 80mm thermal receipt, Arabic right-to-left
    ThermalAr,
    /// A4 document, left-to-right
    A4,
    /// A4 document, Arabic right-to-left
    A4Ar,
}

impl TemplateKind {
    /// Whether this kind targets a thermal roll printer
    pub fn is_thermal(&self) -> bool {
        matches!(self, TemplateKind::Thermal | TemplateKind::ThermalAr)
    }

    /// CSS text direction for the surrounding print document
    pub fn direction(&self) -> &'static str {
        match self {
            TemplateKind::ThermalAr | TemplateKind::A4Ar => "rtl",
            TemplateKind::Thermal | TemplateKind::A4 => "ltr",
        }
    }

    /// Paper width in millimetres
    pub fn page_width_mm(&self) -> u32 {
        if self.is_thermal() {
            80
        } else {
            210
        }
    }
}
