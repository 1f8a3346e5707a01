//! Template rendering

use serde_json::Value;

use crate::context::{is_truthy, scalar_to_string, Scope};
use crate::parser::{parse, Node};
use crate::schema::Template;

/// Synthetic 1-based loop position tag inside `{{#each}}` bodies
const INDEX_TAG: &str = "@index";

/// Template renderer
///
/// Parses the template content once on construction; `render` can then be
/// called repeatedly with different data contexts.
pub struct TemplateRenderer<'a> {
    /// The template being rendered
    template: &'a Template,
    /// Parsed node list of `template.content`
    nodes: Vec<Node>,
}

impl<'a> TemplateRenderer<'a> {
    /// Create a new renderer for a template
    pub fn new(template: &'a Template) -> Self {
        Self {
            template,
            nodes: parse(&template.content),
        }
    }

    /// The underlying template document (for format hints)
    pub fn template(&self) -> &Template {
        self.template
    }

    /// Render a data context to final markup
    ///
    /// Never fails: a field absent from the context substitutes as the empty
    /// string and its conditional blocks are stripped, so partially filled
    /// records still produce a usable document.
    pub fn render(&self, data: &Value) -> String {
        let mut out = String::with_capacity(self.template.content.len());
        render_nodes(&self.nodes, Scope::root(data), &mut out);
        out
    }
}

/// Render raw template markup against a data context in one call
pub fn render_str(content: &str, data: &Value) -> String {
    let nodes = parse(content);
    let mut out = String::with_capacity(content.len());
    render_nodes(&nodes, Scope::root(data), &mut out);
    out
}

fn render_nodes(nodes: &[Node], scope: Scope<'_>, out: &mut String) {
    for node in nodes {
        match node {
            Node::Literal(text) => out.push_str(text),
            Node::Tag(name) => {
                if name == INDEX_TAG {
                    if let Some(position) = scope.index() {
                        out.push_str(&position.to_string());
                    }
                } else if let Some(value) = scope.lookup(name) {
                    out.push_str(&scalar_to_string(value));
                }
            }
            Node::Section { name, body } => {
                if is_truthy(scope.lookup(name)) {
                    render_nodes(body, scope, out);
                }
            }
            Node::Each { name, body } => {
                if let Some(Value::Array(items)) = scope.lookup(name) {
                    for (i, item) in items.iter().enumerate() {
                        render_nodes(body, scope.element(item, i + 1), out);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_render_substitution() {
        let out = render_str(
            "Hello {{name}}, total: {{total}}",
            &json!({ "name": "Ali", "total": "42.00" }),
        );
        assert_eq!(out, "Hello Ali, total: 42.00");
    }

    #[test]
    fn test_render_substitution_is_global() {
        let out = render_str(
            "{{name}} and {{name}} again",
            &json!({ "name": "Ali" }),
        );
        assert_eq!(out, "Ali and Ali again");
    }

    #[test]
    fn test_render_missing_field_is_empty() {
        let out = render_str("a{{missing}}b", &json!({}));
        assert_eq!(out, "ab");
    }

    #[test]
    fn test_render_each() {
        let out = render_str(
            "{{#each items}}{{name}}:{{total}} {{/each}}",
            &json!({
                "items": [
                    { "name": "Tea", "total": "5.00" },
                    { "name": "Cake", "total": "12.00" },
                ]
            }),
        );
        assert_eq!(out, "Tea:5.00 Cake:12.00 ");
    }

    #[test]
    fn test_render_each_empty_sequence() {
        let out = render_str("<ul>{{#each items}}<li>{{name}}</li>{{/each}}</ul>", &json!({ "items": [] }));
        assert_eq!(out, "<ul></ul>");
    }

    #[test]
    fn test_render_each_missing_sequence() {
        let out = render_str("<ul>{{#each items}}<li>{{name}}</li>{{/each}}</ul>", &json!({}));
        assert_eq!(out, "<ul></ul>");
    }

    #[test]
    fn test_render_each_non_array_field() {
        let out = render_str("{{#each items}}x{{/each}}", &json!({ "items": "oops" }));
        assert_eq!(out, "");
    }

    #[test]
    fn test_render_each_index() {
        let out = render_str(
            "{{#each items}}{{@index}}.{{name}} {{/each}}",
            &json!({ "items": [{ "name": "Tea" }, { "name": "Cake" }] }),
        );
        assert_eq!(out, "1.Tea 2.Cake ");
    }

    #[test]
    fn test_render_each_outer_context_fallback() {
        let out = render_str(
            "{{#each items}}{{name}} ({{currency}}) {{/each}}",
            &json!({ "currency": "SAR", "items": [{ "name": "Tea" }] }),
        );
        assert_eq!(out, "Tea (SAR) ");
    }

    #[test]
    fn test_render_index_outside_each_is_empty() {
        let out = render_str("pos {{@index}}", &json!({}));
        assert_eq!(out, "pos ");
    }

    #[test]
    fn test_render_conditional_kept() {
        let out = render_str(
            "{{#vatNumber}}VAT: {{vatNumber}}{{/vatNumber}}",
            &json!({ "vatNumber": "1234567890" }),
        );
        assert_eq!(out, "VAT: 1234567890");
    }

    #[test]
    fn test_render_conditional_stripped() {
        let data = json!({ "vatNumber": "" });
        assert_eq!(render_str("x{{#vatNumber}}VAT{{/vatNumber}}y", &data), "xy");
        assert_eq!(render_str("x{{#vatNumber}}VAT{{/vatNumber}}y", &json!({})), "xy");
    }

    #[test]
    fn test_render_conditional_zero_amount_still_renders() {
        // Zero amounts are truthy whether numeric or pre-formatted
        let out = render_str(
            "{{#vatTotal}}VAT: {{vatTotal}}{{/vatTotal}}",
            &json!({ "vatTotal": "0.00" }),
        );
        assert_eq!(out, "VAT: 0.00");

        let out = render_str("{{#vat}}VAT: {{vat}}{{/vat}}", &json!({ "vat": 0 }));
        assert_eq!(out, "VAT: 0");
    }

    #[test]
    fn test_render_conditional_false_is_stripped() {
        let out = render_str("{{#paid}}PAID{{/paid}}", &json!({ "paid": false }));
        assert_eq!(out, "");
    }

    #[test]
    fn test_render_unterminated_directive_is_literal() {
        let out = render_str("Hi {{name}} {{#each items}}{{name}}", &json!({ "name": "Ali" }));
        assert_eq!(out, "Hi Ali {{#each items}}Ali");
    }

    #[test]
    fn test_renderer_reuse() {
        let template = Template::from_content("Order {{orderNumber}}");
        let renderer = TemplateRenderer::new(&template);

        assert_eq!(renderer.render(&json!({ "orderNumber": "A-1" })), "Order A-1");
        assert_eq!(renderer.render(&json!({ "orderNumber": "A-2" })), "Order A-2");
    }
}
