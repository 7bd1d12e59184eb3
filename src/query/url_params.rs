//! Whole-URL query parameter editing built on [`QueryString`].

use url::Url;

use super::QueryString;
use crate::error::{AmpError, AmpResult};

/// Set (add or replace) a query parameter on a URL.
///
/// The URL is parsed, its query run through [`QueryString::set`], and the
/// whole thing reassembled. Unparseable URLs fail with
/// [`AmpError::InvalidArgument`].
pub fn set_url_param(url: &str, name: &str, value: &str) -> AmpResult<String> {
    let mut parsed = parse_url(url)?;
    let mut query = QueryString::parse(parsed.query().unwrap_or(""));
    query.set(name, value);
    apply_query(&mut parsed, &query);
    Ok(parsed.into())
}

/// Remove a query parameter from a URL.
///
/// Removes every pair with `name`; a URL without that parameter passes
/// through with only its query re-serialized.
pub fn remove_url_param(url: &str, name: &str) -> AmpResult<String> {
    let mut parsed = parse_url(url)?;
    let mut query = QueryString::parse(parsed.query().unwrap_or(""));
    query.remove(name);
    apply_query(&mut parsed, &query);
    Ok(parsed.into())
}

fn parse_url(url: &str) -> AmpResult<Url> {
    Url::parse(url).map_err(|e| AmpError::InvalidArgument(format!("invalid URL '{url}': {e}")))
}

fn apply_query(url: &mut Url, query: &QueryString) {
    if query.is_empty() {
        url.set_query(None);
    } else {
        url.set_query(Some(&query.to_query_string(false)));
    }
}
