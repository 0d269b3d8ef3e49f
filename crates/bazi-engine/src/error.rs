//! Error types for bazi-engine operations.

use thiserror::Error;

/// Input errors.
///
/// Profile computation halts only on `IncompleteInput` and `InvalidYear`.
/// The other variants come from the strict parsers ([`crate::build_instant`],
/// [`crate::parse_utc_offset`], `LocalZone::from_str`). Past the validation
/// gate, unreadable instant text is substituted and a missing or failing
/// calendar converter degrades to the stub pillars, reported through
/// [`crate::pillars::FallbackReason`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Incomplete input: {0}")]
    IncompleteInput(String),

    #[error("Invalid year: {0}")]
    InvalidYear(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid UTC offset: {0}")]
    InvalidOffset(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

/// Failures reported by a calendar converter or its loader.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConverterError {
    #[error("calling convention not supported by this converter")]
    Unsupported,

    #[error("no calendar record for {0}")]
    NotFound(String),

    #[error("conversion failed: {0}")]
    Failed(String),

    #[error("converter failed to load: {0}")]
    Load(String),

    #[error("converter did not load within {0} ms")]
    Timeout(u128),
}

pub type Result<T> = std::result::Result<T, ProfileError>;
