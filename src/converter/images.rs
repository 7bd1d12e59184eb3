//! Image adapter pass: replaces native images with `amp-img`.
//!
//! Every `img` becomes an `amp-img` with the same attribute list minus any
//! `caption` attribute. The custom element name is registered once per
//! process as void-equivalent so the writer self-closes it. With no images
//! present the input is returned unchanged and unmoved.

use lazy_static::lazy_static;
use scraper::Selector;

use super::{document, markup};
use crate::error::AmpResult;

/// The adaptive image element substituted for native images.
pub const AMP_IMG: &str = "amp-img";

lazy_static! {
    static ref IMG_SELECTOR: Selector =
        Selector::parse("img").expect("BUG: hardcoded selector 'img' is invalid");
}

/// Replace every `img` in `html` with an `amp-img`, dropping the `caption`
/// attribute.
///
/// Span resolution probes the writer's self-closed form first, then the
/// plain form, then the tight self-closed form; the first form present in
/// the working string is the substitution key. Elements matching none of
/// the forms are skipped silently. Duplicate byte-identical images collapse
/// on the first substitution, as in the frame pass.
pub fn adapt_images(html: String) -> AmpResult<String> {
    let doc = document::load(&html)?;

    let elements: Vec<_> = doc.select(&IMG_SELECTOR).collect();

    // Short-circuit: no images means no work and no re-serialization, the
    // caller gets the very same string back.
    if elements.is_empty() {
        return Ok(html);
    }

    markup::register_void_element(AMP_IMG);

    let mut rules: Vec<(Vec<String>, String)> = Vec::new();
    for element in elements {
        let mut attrs = markup::attribute_list(&element);
        attrs.retain(|(name, _)| name != "caption");
        rules.push((
            markup::void_span_candidates(&element),
            markup::start_tag(AMP_IMG, &attrs, markup::is_void_element(AMP_IMG)),
        ));
    }

    let total = rules.len();
    let mut working = html;
    let mut applied = 0usize;
    for (candidates, replacement) in rules {
        match candidates.iter().find(|span| working.contains(span.as_str())) {
            Some(span) => {
                working = working.replace(span, &replacement);
                applied += 1;
            }
            None => {
                log::debug!("img span not found in working string, element left untouched");
            }
        }
    }
    log::debug!("image adaptation: substituted {applied} of {total} img elements");

    Ok(working)
}
