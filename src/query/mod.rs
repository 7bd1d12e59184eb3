//! Query-string parsing and editing.
//!
//! [`QueryString`] keeps an ordered list of name/value pairs (duplicate
//! names allowed), supports get/append/set/remove/clear, and re-serializes
//! to a URL-encoded `name=value&...` string, optionally omitting pairs with
//! empty values. Typed reads go through [`QueryString::get_parsed`] rather
//! than any dynamic conversion.

pub mod url_params;

pub use url_params::{remove_url_param, set_url_param};

use std::fmt;
use std::str::FromStr;

use url::form_urlencoded;

/// An editable, ordered query-string collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    /// Create an empty query string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query component into ordered name/value pairs.
    ///
    /// A leading `?` is accepted and ignored. Percent-encoding and `+` are
    /// decoded; duplicate names are kept in order.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();
        Self { pairs }
    }

    /// Get the value for `name`, or `None` if absent.
    ///
    /// Duplicate names are comma-joined into one value, matching the
    /// classic query-collection lookup this module re-models.
    pub fn get(&self, name: &str) -> Option<String> {
        let values: Vec<&str> = self
            .pairs
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect();
        if values.is_empty() {
            None
        } else {
            Some(values.join(","))
        }
    }

    /// Get the value for `name` parsed as `T`; `None` if the name is absent
    /// or the value does not parse.
    pub fn get_parsed<T: FromStr>(&self, name: &str) -> Option<T> {
        self.get(name).and_then(|value| value.parse().ok())
    }

    /// Get the value for `name` parsed as `T`, or `default` if the name is
    /// absent or the value does not parse.
    pub fn get_parsed_or<T: FromStr>(&self, name: &str, default: T) -> T {
        self.get_parsed(name).unwrap_or(default)
    }

    /// Whether a pair with `name` exists.
    pub fn contains_name(&self, name: &str) -> bool {
        self.pairs.iter().any(|(n, _)| n == name)
    }

    /// Append a pair, keeping any existing pairs with the same name.
    pub fn append(&mut self, name: &str, value: &str) {
        self.pairs.push((name.to_string(), value.to_string()));
    }

    /// Add or replace: the first pair with `name` takes the new value and
    /// any later duplicates are dropped (last write wins). Absent names are
    /// appended.
    pub fn set(&mut self, name: &str, value: &str) {
        match self.pairs.iter().position(|(n, _)| n == name) {
            Some(index) => {
                self.pairs[index].1 = value.to_string();
                let mut kept_first = false;
                self.pairs.retain(|(n, _)| {
                    if n == name {
                        if kept_first {
                            return false;
                        }
                        kept_first = true;
                    }
                    true
                });
            }
            None => self.append(name, value),
        }
    }

    /// Remove every pair named `name`.
    pub fn remove(&mut self, name: &str) {
        self.pairs.retain(|(n, _)| n != name);
    }

    /// Remove every pair whose value equals `value`; returns the count
    /// removed.
    pub fn remove_by_value(&mut self, value: &str) -> usize {
        let before = self.pairs.len();
        self.pairs.retain(|(_, v)| v != value);
        before - self.pairs.len()
    }

    /// Remove all pairs.
    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate the pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Serialize to a URL-encoded `name=value&...` string. With
    /// `omit_empty`, pairs whose value is empty are left out.
    pub fn to_query_string(&self, omit_empty: bool) -> String {
        let encode = |s: &str| form_urlencoded::byte_serialize(s.as_bytes()).collect::<String>();
        self.pairs
            .iter()
            .filter(|(_, value)| !omit_empty || !value.is_empty())
            .map(|(name, value)| format!("{}={}", encode(name), encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query_string(false))
    }
}
