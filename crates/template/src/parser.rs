//! Directive parsing
//!
//! Templates are parsed once into an ordered node list; rendering folds a
//! data context over the nodes. Malformed directives never fail the parse:
//! an unterminated block or stray close tag is kept as literal text so a
//! cosmetic template bug cannot block document printing.

use log::warn;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// One parsed template segment
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal markup, emitted verbatim
    Literal(String),
    /// `{{field}}` substitution
    Tag(String),
    /// `{{#field}}...{{/field}}` conditional block
    Section { name: String, body: Vec<Node> },
    /// `{{#each items}}...{{/each}}` iteration block
    Each { name: String, body: Vec<Node> },
}

/// Parse template markup into a node list
pub fn parse(input: &str) -> Vec<Node> {
    let mut pos = 0;
    let (nodes, _) = parse_until(input, &mut pos, None);
    nodes
}

/// Parse nodes until the expected closing directive (`{{/close}}`) or the
/// end of input. Returns the nodes and whether the close was found.
fn parse_until(input: &str, pos: &mut usize, close: Option<&str>) -> (Vec<Node>, bool) {
    let mut nodes = Vec::new();

    loop {
        let rest = &input[*pos..];
        let Some(open_rel) = rest.find(OPEN) else {
            if !rest.is_empty() {
                nodes.push(Node::Literal(rest.to_string()));
            }
            *pos = input.len();
            return (nodes, false);
        };

        if open_rel > 0 {
            nodes.push(Node::Literal(rest[..open_rel].to_string()));
        }

        let tag_start = *pos + open_rel;
        let after_open = tag_start + OPEN.len();
        let Some(close_rel) = input[after_open..].find(CLOSE) else {
            // Opening braces with no closing braces: the rest is literal
            nodes.push(Node::Literal(input[tag_start..].to_string()));
            *pos = input.len();
            return (nodes, false);
        };

        let inner_end = after_open + close_rel;
        let tag_end = inner_end + CLOSE.len();
        let inner = input[after_open..inner_end].trim();
        *pos = tag_end;

        if let Some(name) = inner.strip_prefix("#each ") {
            let name = name.trim().to_string();
            let (body, closed) = parse_until(input, pos, Some("each"));
            if closed {
                nodes.push(Node::Each { name, body });
            } else {
                warn!("unterminated {{{{#each {name}}}}}; keeping directive as literal text");
                nodes.push(Node::Literal(input[tag_start..tag_end].to_string()));
                nodes.extend(body);
            }
        } else if let Some(name) = inner.strip_prefix('#') {
            let name = name.trim().to_string();
            let (body, closed) = parse_until(input, pos, Some(name.as_str()));
            if closed {
                nodes.push(Node::Section { name, body });
            } else {
                warn!("unterminated {{{{#{name}}}}}; keeping directive as literal text");
                nodes.push(Node::Literal(input[tag_start..tag_end].to_string()));
                nodes.extend(body);
            }
        } else if let Some(name) = inner.strip_prefix('/') {
            let name = name.trim();
            if close == Some(name) {
                return (nodes, true);
            }
            warn!("stray closing directive {{{{/{name}}}}}; keeping it as literal text");
            nodes.push(Node::Literal(input[tag_start..tag_end].to_string()));
        } else {
            nodes.push(Node::Tag(inner.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal_only() {
        let nodes = parse("<p>plain markup</p>");
        assert_eq!(nodes, vec![Node::Literal("<p>plain markup</p>".to_string())]);
    }

    #[test]
    fn test_parse_tag() {
        let nodes = parse("Hello {{name}}!");
        assert_eq!(
            nodes,
            vec![
                Node::Literal("Hello ".to_string()),
                Node::Tag("name".to_string()),
                Node::Literal("!".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_section() {
        let nodes = parse("{{#vatNumber}}VAT: {{vatNumber}}{{/vatNumber}}");
        assert_eq!(
            nodes,
            vec![Node::Section {
                name: "vatNumber".to_string(),
                body: vec![
                    Node::Literal("VAT: ".to_string()),
                    Node::Tag("vatNumber".to_string()),
                ],
            }]
        );
    }

    #[test]
    fn test_parse_each() {
        let nodes = parse("{{#each items}}{{name}} {{/each}}done");
        assert_eq!(
            nodes,
            vec![
                Node::Each {
                    name: "items".to_string(),
                    body: vec![Node::Tag("name".to_string()), Node::Literal(" ".to_string())],
                },
                Node::Literal("done".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_unterminated_each_is_literal() {
        let nodes = parse("a{{#each items}}{{name}}");
        assert_eq!(
            nodes,
            vec![
                Node::Literal("a".to_string()),
                Node::Literal("{{#each items}}".to_string()),
                Node::Tag("name".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_unterminated_section_is_literal() {
        let nodes = parse("{{#note}}text");
        assert_eq!(
            nodes,
            vec![
                Node::Literal("{{#note}}".to_string()),
                Node::Literal("text".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_stray_close_is_literal() {
        let nodes = parse("x{{/each}}y");
        assert_eq!(
            nodes,
            vec![
                Node::Literal("x".to_string()),
                Node::Literal("{{/each}}".to_string()),
                Node::Literal("y".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_open_braces_without_close() {
        let nodes = parse("total: {{total");
        assert_eq!(
            nodes,
            vec![
                Node::Literal("total: ".to_string()),
                Node::Literal("{{total".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_mismatched_close_inside_section() {
        // {{/b}} does not close {{#a}}, and {{#a}} itself never closes
        let nodes = parse("{{#a}}x{{/b}}");
        assert_eq!(
            nodes,
            vec![
                Node::Literal("{{#a}}".to_string()),
                Node::Literal("x".to_string()),
                Node::Literal("{{/b}}".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_whitespace_in_tag() {
        let nodes = parse("{{ name }}");
        assert_eq!(nodes, vec![Node::Tag("name".to_string())]);
    }
}
