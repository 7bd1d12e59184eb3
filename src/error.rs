//! Error types for AMP conversion and the companion utilities.
//!
//! The converter deliberately keeps its failure surface tiny: malformed HTML
//! is parsed permissively and substitution misses are silent non-mutation,
//! so only genuine contract violations and irrecoverable parse conditions
//! surface as errors.

use thiserror::Error;

/// Result type alias for AMP conversion operations
pub type AmpResult<T> = Result<T, AmpError>;

/// Error types for AMP conversion operations
#[derive(Debug, Error)]
pub enum AmpError {
    /// Caller violated an API contract (zero page size, unparseable URL)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input could not be parsed (exceeds the documented size cap)
    #[error("Parse failure: {0}")]
    ParseFailure(String),
}
