//! Shared document loader for the two rewrite passes.
//!
//! Both passes parse their own working string fresh, because the frame pass
//! mutates the string before the image pass begins. Parsing is permissive:
//! html5ever builds a best-effort tree and never fails on malformed markup,
//! so the only hard failure here is the input-size cap.

use scraper::Html;

use crate::error::{AmpError, AmpResult};

/// Maximum accepted input size. Inputs beyond this are rejected rather than
/// parsed, bounding memory for the parse tree and the substitution passes.
pub const MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;

/// Parse a working string into a document tree.
///
/// The tree is used only as an index into the string: matched nodes are
/// re-serialized to locate their original spans, and all mutation happens
/// textually against the string itself.
pub(crate) fn load(html: &str) -> AmpResult<Html> {
    if html.len() > MAX_INPUT_BYTES {
        return Err(AmpError::ParseFailure(format!(
            "input is {} bytes, exceeds the {} byte limit",
            html.len(),
            MAX_INPUT_BYTES
        )));
    }

    Ok(Html::parse_document(html))
}
