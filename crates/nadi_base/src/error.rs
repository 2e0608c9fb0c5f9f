//! Error types for KP chart calculations.
//!
//! Three categories, matching how failures must be handled:
//! - `InvalidInput`: malformed caller data, reported back verbatim.
//! - `Inconsistency`: an internal invariant broke mid-computation; the
//!   chart must be aborted, never partially returned.
//! - `UnknownConfig`: an unrecognized convention name. Rejected rather
//!   than silently defaulted, since a chart computed under the wrong
//!   convention is meaningless.

use thiserror::Error;

/// Errors from KP chart calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum NadiError {
    /// Malformed input (unparsable date, out-of-range coordinate, bad cusps).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Internal invariant violation. Fatal for the current computation.
    #[error("internal inconsistency: {0}")]
    Inconsistency(&'static str),
    /// Unrecognized configuration value (ayanamsa, house system, mode name).
    #[error("unknown configuration value: {0}")]
    UnknownConfig(String),
}
