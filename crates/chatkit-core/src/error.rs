//! Error types for chatkit-core

use thiserror::Error;

/// Result type alias using the chatkit-core Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced through the engine contract.
///
/// The store itself never returns errors: empty submissions and unknown-id
/// lookups are silent no-ops, and error *state* is the caller-driven
/// [`Phase::Error`](crate::Phase::Error) value.
#[derive(Error, Debug)]
pub enum Error {
    /// The response engine failed to produce or continue a stream
    #[error("engine error: {0}")]
    Engine(String),

    /// A generic error
    #[error("{0}")]
    Other(String),
}
