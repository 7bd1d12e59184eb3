//! Frame rewriter pass: replaces embedded frames with links to their source.
//!
//! Every `iframe` carrying a `src` attribute becomes a paragraph wrapping an
//! anchor whose href, title, and visible text are all the literal source
//! URL. Frames with no `src` are left untouched. Mutation is a span-keyed
//! rewrite: each matched node is re-serialized to its original span and that
//! span is substituted globally across the whole working string, so
//! byte-identical duplicate frames collapse on the first substitution.

use lazy_static::lazy_static;
use scraper::Selector;

use super::{document, markup};
use crate::error::AmpResult;

lazy_static! {
    static ref IFRAME_SELECTOR: Selector =
        Selector::parse("iframe").expect("BUG: hardcoded selector 'iframe' is invalid");
}

/// Replace every `iframe[src]` in `html` with a paragraph-wrapped link.
///
/// Elements whose re-serialized span does not occur in the working string
/// are skipped silently; the output is then byte-identical for them.
pub fn rewrite_frames(html: String) -> AmpResult<String> {
    let doc = document::load(&html)?;

    let mut rules: Vec<(String, String)> = Vec::new();
    for element in doc.select(&IFRAME_SELECTOR) {
        let Some(src) = element.value().attr("src") else {
            continue;
        };
        rules.push((markup::outer_html(&element), link_paragraph(src)));
    }

    let total = rules.len();
    let mut working = html;
    let mut applied = 0usize;
    for (span, replacement) in rules {
        if working.contains(&span) {
            working = working.replace(&span, &replacement);
            applied += 1;
        } else {
            log::debug!("iframe span not found in working string, element left untouched");
        }
    }
    if total > 0 {
        log::debug!("frame rewrite: substituted {applied} of {total} iframe elements");
    }

    Ok(working)
}

/// Build `<p><a href=SRC title=SRC>SRC</a></p>` for a frame source URL.
fn link_paragraph(src: &str) -> String {
    let anchor_attrs = vec![
        ("href".to_string(), src.to_string()),
        ("title".to_string(), src.to_string()),
    ];
    let mut markup = String::from("<p>");
    markup.push_str(&markup::start_tag("a", &anchor_attrs, false));
    markup.push_str(&markup::text_content(src));
    markup.push_str("</a></p>");
    markup
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_with_source_becomes_link() {
        let input = r#"<iframe src="https://ex.com/v"></iframe>"#.to_string();
        let output = rewrite_frames(input).expect("rewrite failed");
        assert_eq!(
            output,
            r#"<p><a href="https://ex.com/v" title="https://ex.com/v">https://ex.com/v</a></p>"#
        );
    }

    #[test]
    fn test_frame_without_source_untouched() {
        let input = r#"<div><iframe width="300"></iframe></div>"#.to_string();
        let output = rewrite_frames(input.clone()).expect("rewrite failed");
        assert_eq!(output, input);
    }

    #[test]
    fn test_surrounding_markup_survives_byte_for_byte() {
        let input = "<!-- keep -->\n<div>  <iframe src=\"https://a.io\"></iframe>  </div>\n"
            .to_string();
        let output = rewrite_frames(input).expect("rewrite failed");
        assert!(output.starts_with("<!-- keep -->\n<div>  "));
        assert!(output.ends_with("  </div>\n"));
        assert!(output.contains(r#"<p><a href="https://a.io" title="https://a.io">https://a.io</a></p>"#));
    }

    #[test]
    fn test_duplicate_frames_collapse_on_first_substitution() {
        let input = concat!(
            r#"<iframe src="https://ex.com/v"></iframe>"#,
            "<hr>",
            r#"<iframe src="https://ex.com/v"></iframe>"#
        )
        .to_string();
        let output = rewrite_frames(input).expect("rewrite failed");
        assert!(!output.contains("<iframe"));
        // Global substitution rewrote both occurrences from one rule.
        assert_eq!(output.matches("<p><a href=").count(), 2);
    }

    #[test]
    fn test_unmatchable_span_is_silent_non_mutation() {
        // Single-quoted attribute: the writer's double-quoted span never
        // occurs in the source, so the element stays as-is.
        let input = "<iframe src='https://q.io'></iframe>".to_string();
        let output = rewrite_frames(input.clone()).expect("rewrite failed");
        assert_eq!(output, input);
    }
}
