//! Template Engine - directive parsing and rendering for printable documents
//!
//! This crate provides:
//! - Template document schema types (`content`, `isDefault`, `type`)
//! - Directive parsing (`{{field}}`, `{{#field}}...{{/field}}`,
//!   `{{#each items}}...{{/each}}`) into a node list
//! - Rendering a data context against the parsed nodes
//!
//! Rendering is best-effort by design: a field missing from the context
//! substitutes as the empty string and a malformed directive is kept as
//! literal text, so a partially filled record still yields a usable preview.
//!
//! # Example
//!
//! ```
//! use template::render_str;
//! use serde_json::json;
//!
//! let out = render_str(
//!     "Hello {{name}}, total: {{total}}",
//!     &json!({ "name": "Ali", "total": "42.00" }),
//! );
//! assert_eq!(out, "Hello Ali, total: 42.00");
//! ```

pub mod context;
pub mod parser;
mod renderer;
mod schema;

pub use context::{is_truthy, scalar_to_string, Scope};
pub use parser::{parse, Node};
pub use renderer::{render_str, TemplateRenderer};
pub use schema::{Template, TemplateKind};

use thiserror::Error;

/// Errors that can occur during template processing
///
/// Rendering itself never fails; only loading a stored template document can.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to parse template document: {0}")]
    ParseError(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
