//! Error types for the interaction engine.
//!
//! The engine itself never fails at runtime: stale or out-of-range input
//! events are local no-ops. The only fallible surface is construction-time
//! configuration validation.

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised when validating a widget configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `min_query_len` was zero.
    #[error("minimum query length must be at least 1: an empty query never matches")]
    ZeroMinQueryLength,
}
