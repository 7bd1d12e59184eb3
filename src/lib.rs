//! ampify: AMP-compatible HTML rewriting with span-keyed substitution.
//!
//! The [`converter`] module turns arbitrary HTML into a restricted dialect
//! by rewriting embedded frames into links and native images into `amp-img`
//! elements, leaving every other byte of the document untouched. It parses
//! the document to find elements, then mutates by literal string
//! substitution against the original source, so formatting, comments, and
//! unrelated markup survive byte-for-byte.
//!
//! The [`pagination`] and [`query`] modules carry the companion utilities:
//! page-window computation over in-memory collections, and an ordered
//! query-string editor with whole-URL parameter helpers.

pub mod converter;
pub mod error;
pub mod pagination;
pub mod query;

pub use converter::{AmpConverter, adapt_images, convert, rewrite_frames};
pub use error::{AmpError, AmpResult};
pub use pagination::{PaginationControl, Paginator, bind_pagination};
pub use query::{QueryString, remove_url_param, set_url_param};
