//! Data context resolution
//!
//! A data context is a fully resolved `serde_json::Value` object supplied by
//! the caller: scalars for substitution, arrays of objects for iteration,
//! nested objects reachable through iteration scopes.

use serde_json::Value;

/// Resolution scope for a render pass
///
/// Inside an `{{#each}}` block the current element shadows the top-level
/// context; a field missing from the element falls back to the outer
/// context, which matches how top-level fields behave inside loop bodies.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    root: &'a Value,
    element: Option<&'a Value>,
    /// 1-based position within the enclosing `{{#each}}`, if any
    index: Option<usize>,
}

impl<'a> Scope<'a> {
    /// Create the top-level scope for a data context
    pub fn root(data: &'a Value) -> Self {
        Self {
            root: data,
            element: None,
            index: None,
        }
    }

    /// Derive the scope for one iteration element
    pub fn element(&self, element: &'a Value, position: usize) -> Self {
        Self {
            root: self.root,
            element: Some(element),
            index: Some(position),
        }
    }

    /// 1-based loop position, if inside an iteration block
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Resolve a field name, element scope first, then the top-level context
    pub fn lookup(&self, name: &str) -> Option<&'a Value> {
        if let Some(element) = self.element {
            if let Some(value) = element.get(name) {
                return Some(value);
            }
        }
        self.root.get(name)
    }
}

/// Convert a scalar value to its substituted text
///
/// Arrays and objects are not substituted inline (they are iteration and
/// scoping material), so they render as the empty string.
pub fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Conditional truthiness for `{{#field}}` blocks
///
/// Numbers are always truthy: a zero amount (numeric `0` or a formatted
/// `"0.00"` string) must still render its block. Only absence, `null`,
/// `false`, the empty string, and an empty array suppress a block.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(_)) => true,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(_)) => true,
    }
}
