//! Input gate run before any computation.

use crate::error::{ProfileError, Result};

/// Lowest accepted birth year.
pub const MIN_YEAR: i64 = 1000;
/// Highest accepted birth year.
pub const MAX_YEAR: i64 = 9999;

/// Raw, unvalidated birth data as collected from the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthInput {
    pub name: String,
    /// `YYYY-MM-DD`.
    pub date_text: String,
    /// `HH:MM`.
    pub time_text: String,
    /// `±HH:MM`; empty or absent means local time.
    pub utc_offset_text: Option<String>,
}

impl BirthInput {
    pub fn new(
        name: impl Into<String>,
        date_text: impl Into<String>,
        time_text: impl Into<String>,
        utc_offset_text: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date_text: date_text.into(),
            time_text: time_text.into(),
            utc_offset_text,
        }
    }

    /// The offset text, with empty strings treated as absent.
    pub fn utc_offset(&self) -> Option<&str> {
        self.utc_offset_text
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Check that every required field is present, at least one focus area is
/// selected, and the year is a four-digit number.
///
/// # Errors
///
/// [`ProfileError::IncompleteInput`] for missing fields or no focus areas,
/// [`ProfileError::InvalidYear`] for a year outside `1000..=9999`.
pub fn validate<S: AsRef<str>>(input: &BirthInput, focus_areas: &[S]) -> Result<()> {
    let mut missing = Vec::new();
    if input.name.trim().is_empty() {
        missing.push("name");
    }
    if input.date_text.trim().is_empty() {
        missing.push("birth date");
    }
    if input.time_text.trim().is_empty() {
        missing.push("birth time");
    }
    if !focus_areas.iter().any(|f| !f.as_ref().trim().is_empty()) {
        missing.push("at least one focus area");
    }
    if !missing.is_empty() {
        return Err(ProfileError::IncompleteInput(format!(
            "please provide {}",
            missing.join(", ")
        )));
    }

    if !validate_year(&input.date_text) {
        return Err(ProfileError::InvalidYear(format!(
            "birth year in '{}' must be a four-digit number between {MIN_YEAR} and {MAX_YEAR}",
            input.date_text.trim()
        )));
    }

    Ok(())
}

/// Whether the year component of a `YYYY-MM-DD` string is an integer in
/// `1000..=9999`.
pub fn validate_year(date_text: &str) -> bool {
    date_text
        .trim()
        .split('-')
        .next()
        .and_then(|year| year.trim().parse::<i64>().ok())
        .is_some_and(|year| (MIN_YEAR..=MAX_YEAR).contains(&year))
}
