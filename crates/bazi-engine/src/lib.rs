//! # bazi-engine
//!
//! Four Pillars birth profiles from a birth date, time and optional UTC
//! offset.
//!
//! The engine turns raw input text into an absolute instant, asks an
//! optional external calendar converter for the year, month, day and hour
//! pillars, and falls back to a deterministic stub when the converter is
//! missing or unhelpful. The day pillar drives a simple five-element
//! analysis; the local calendar day picks a solar zodiac sign.
//!
//! ## Modules
//!
//! - [`validate`]: Input completeness and four-digit year check
//! - [`instant`]: Date/time/offset text → absolute instant
//! - [`converter`]: Calendar converter capability, loaders, bounded acquisition
//! - [`pillars`]: Converter output normalization and stub fallback
//! - [`analysis`]: Day-master element, strength and favorable element
//! - [`zodiac`]: Solar zodiac sign by month and day
//! - [`profile`]: End-to-end pipeline and output record
//! - [`error`]: Error types

pub mod analysis;
pub mod converter;
pub mod error;
pub mod instant;
pub mod pillars;
pub mod profile;
pub mod validate;
pub mod zodiac;

pub use analysis::{analyze, Element, ElementAnalysis, Strength};
pub use converter::{
    acquire_converter, CalendarConverter, CapabilityLoader, ConverterRecord, TableConverter,
    TableLoader,
};
pub use error::{ConverterError, ProfileError};
pub use instant::{
    birth_instant, build_instant, build_instant_local, parse_utc_offset, Instant, LocalFields,
    LocalZone,
};
pub use pillars::{
    normalize_record, resolve_pillars, stub_pillars, FallbackReason, PillarResolution, PillarSet,
    UNKNOWN_PILLAR,
};
pub use profile::{build_profile, compute_profile, Profile, ProfileOptions, DEFAULT_LOAD_GRACE};
pub use validate::{validate, validate_year, BirthInput};
pub use zodiac::{zodiac_for, ZodiacElement, ZodiacInfo, ZodiacSign};
