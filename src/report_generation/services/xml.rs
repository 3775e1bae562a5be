//! Namespace-agnostic XML access.
//!
//! NuGet manifests show up with the nuspec namespace as default, aliased to a
//! prefix, or with no namespace at all. Every lookup here goes through the
//! element's local name, so the namespace URI and prefix never take part in a
//! match.

use crate::shared::Result;
use roxmltree::{Document, Node};

/// Parses XML text, tolerating a leading byte order mark
pub fn parse_document(text: &str) -> Result<Document<'_>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    Document::parse(text).map_err(|e| anyhow::anyhow!("Invalid XML: {}", e))
}

/// True when the node is an element with the given local name
pub fn is_element_named(node: &Node<'_, '_>, local_name: &str) -> bool {
    node.is_element() && node.tag_name().name() == local_name
}

/// Child elements of `node` with the given local name, in document order
pub fn child_elements<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    local_name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |child| is_element_named(child, local_name))
}

/// First child element with the given local name
pub fn first_child<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    local_name: &'a str,
) -> Option<Node<'a, 'input>> {
    child_elements(node, local_name).next()
}

/// Attribute value looked up by local name, whatever namespace it carries
pub fn attribute<'a>(node: &Node<'a, '_>, local_name: &str) -> Option<&'a str> {
    node.attributes()
        .find(|attr| attr.name() == local_name)
        .map(|attr| attr.value())
}

/// Concatenated text content of the element and its descendants, trimmed
pub fn text_content(node: &Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect::<String>()
        .trim()
        .to_string()
}
