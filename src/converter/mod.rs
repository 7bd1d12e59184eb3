//! HTML AMP transformer: two sequential rewrite passes over one string.
//!
//! The converter parses the document to *find* elements but mutates by
//! *textual substitution* against the original source string, so whitespace,
//! comments, and unrelated markup survive byte-for-byte. Each pass computes
//! (span, replacement) pairs from a structural match and applies them as
//! global string substitutions in match order; duplicate spans collapse on
//! the first substitution.
//!
//! Pipeline: input string → frame rewriter → intermediate string → image
//! adapter → output string. No state survives a call.

pub mod document;
pub mod frames;
pub mod images;
pub mod markup;

pub use document::MAX_INPUT_BYTES;
pub use frames::rewrite_frames;
pub use images::{AMP_IMG, adapt_images};
pub use markup::{is_void_element, register_void_element};

use crate::error::AmpResult;

/// Converts an HTML string into the AMP-compatible dialect.
///
/// # Examples
///
/// ```
/// let html = r#"<img src="a.png" caption="c" />"#;
/// let amp = ampify::AmpConverter::new(html).convert()?;
/// assert_eq!(amp, r#"<amp-img src="a.png" />"#);
/// # Ok::<(), ampify::AmpError>(())
/// ```
pub struct AmpConverter {
    source: String,
}

impl AmpConverter {
    /// Create a converter over a complete, in-memory HTML string.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Run both passes and return the converted string.
    pub fn convert(self) -> AmpResult<String> {
        let intermediate = rewrite_frames(self.source)?;
        adapt_images(intermediate)
    }
}

/// One-shot entry point, equivalent to `AmpConverter::new(source).convert()`.
pub fn convert(source: impl Into<String>) -> AmpResult<String> {
    AmpConverter::new(source).convert()
}
