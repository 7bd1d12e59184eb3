//! Markup writer and the process-wide void-element registry.
//!
//! The writer serializes elements back to tag text for two purposes: to
//! reconstruct a matched node's original span (the substitution key) and to
//! build the replacement markup. Policy: void elements self-close with
//! ` />`, attribute values are double-quoted and escaped, text content is
//! entity-escaped, and everything is UTF-8.

use std::collections::HashSet;

use lazy_static::lazy_static;
use parking_lot::RwLock;
use scraper::ElementRef;

/// Elements that are void per the HTML spec and always serialize self-closed.
const HTML_VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

lazy_static! {
    /// Custom element names registered as void-equivalent at runtime.
    ///
    /// Shared across the whole process, like the serializer flag table it
    /// re-models. Guarded check-before-insert so concurrent first calls
    /// racing to register the same name are harmless.
    static ref CUSTOM_VOID_ELEMENTS: RwLock<HashSet<String>> = RwLock::new(HashSet::new());
}

/// Register a custom element name as void-equivalent, once per process.
/// Idempotent: repeated and concurrent registrations of the same name are
/// no-ops after the first.
pub fn register_void_element(name: &str) {
    if CUSTOM_VOID_ELEMENTS.read().contains(name) {
        return;
    }
    CUSTOM_VOID_ELEMENTS.write().insert(name.to_string());
}

/// Whether `name` serializes as a void element (built-in or registered).
pub fn is_void_element(name: &str) -> bool {
    HTML_VOID_ELEMENTS.contains(&name) || CUSTOM_VOID_ELEMENTS.read().contains(name)
}

/// Build a start tag from a name and an attribute list in source order.
///
/// Attribute values are double-quoted and escaped. `self_close` emits the
/// writer's configured self-closed form (` />`).
pub(crate) fn start_tag(name: &str, attrs: &[(String, String)], self_close: bool) -> String {
    let mut tag = String::with_capacity(name.len() + 16 * attrs.len() + 4);
    tag.push('<');
    tag.push_str(name);
    for (attr_name, attr_value) in attrs {
        tag.push(' ');
        tag.push_str(attr_name);
        tag.push_str("=\"");
        tag.push_str(&html_escape::encode_double_quoted_attribute(attr_value));
        tag.push('"');
    }
    tag.push_str(if self_close { " />" } else { ">" });
    tag
}

/// Escape text content for element bodies.
pub(crate) fn text_content(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Collect an element's attributes in source order as owned pairs.
pub(crate) fn attribute_list(element: &ElementRef) -> Vec<(String, String)> {
    element
        .value()
        .attrs()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Re-serialize a matched non-void node to its textual form: start tag from
/// the parsed attribute list in source order, inner content, end tag.
pub(crate) fn outer_html(element: &ElementRef) -> String {
    let name = element.value().name();
    let attrs = attribute_list(element);
    let mut markup = start_tag(name, &attrs, false);
    markup.push_str(&element.inner_html());
    markup.push_str("</");
    markup.push_str(name);
    markup.push('>');
    markup
}

/// Candidate textual forms for a matched void element, most specific first:
/// the writer's self-closed form, the plain form, then the tight self-closed
/// form. The first candidate that occurs in the working string is the span.
pub(crate) fn void_span_candidates(element: &ElementRef) -> Vec<String> {
    let name = element.value().name();
    let attrs = attribute_list(element);
    let self_closed = start_tag(name, &attrs, true);
    let plain = start_tag(name, &attrs, false);
    let tight = format!("{}/>", plain.strip_suffix('>').unwrap_or(plain.as_str()));
    vec![self_closed, plain, tight]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_void_elements() {
        assert!(is_void_element("img"));
        assert!(is_void_element("br"));
        assert!(!is_void_element("iframe"));
        assert!(!is_void_element("p"));
    }

    #[test]
    fn test_register_void_element_is_idempotent() {
        register_void_element("amp-test-element");
        register_void_element("amp-test-element");
        assert!(is_void_element("amp-test-element"));
    }

    #[test]
    fn test_start_tag_escapes_attribute_values() {
        let attrs = vec![("alt".to_string(), r#"a "quoted" value"#.to_string())];
        let tag = start_tag("img", &attrs, true);
        assert_eq!(tag, r#"<img alt="a &quot;quoted&quot; value" />"#);
    }

    #[test]
    fn test_start_tag_preserves_attribute_order() {
        let attrs = vec![
            ("src".to_string(), "a.png".to_string()),
            ("alt".to_string(), "x".to_string()),
        ];
        assert_eq!(
            start_tag("amp-img", &attrs, true),
            r#"<amp-img src="a.png" alt="x" />"#
        );
    }
}
