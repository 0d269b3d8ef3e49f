//! End-to-end profile assembly.
//!
//! [`build_profile`] is the entry point for a front end: it validates the
//! raw input, waits a bounded time for an optional converter, and then runs
//! the synchronous pipeline in [`compute_profile`]. Once validation passes a
//! profile is always produced: unreadable instant text is substituted and
//! converter trouble only shows up as [`Profile::used_fallback`].

use std::time::Duration;

use serde::Serialize;
use tracing::info;

use crate::analysis::{analyze, ElementAnalysis};
use crate::converter::{acquire_converter, CalendarConverter, CapabilityLoader, ConverterRecord};
use crate::error::Result;
use crate::instant::{birth_instant, Instant, LocalZone};
use crate::pillars::{resolve_pillars, FallbackReason, PillarSet};
use crate::validate::{validate, BirthInput};
use crate::zodiac::{zodiac_for, ZodiacInfo};

/// How long [`build_profile`] waits for a converter by default.
pub const DEFAULT_LOAD_GRACE: Duration = Duration::from_millis(300);

/// Options for [`compute_profile`] and [`build_profile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileOptions {
    /// Zone used for offset-less input and for local calendar fields.
    pub zone: LocalZone,
    /// Upper bound on converter acquisition.
    pub load_grace: Duration,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            zone: LocalZone::System,
            load_grace: DEFAULT_LOAD_GRACE,
        }
    }
}

/// The combined result handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub instant: Instant,
    pub pillars: PillarSet,
    pub zodiac: ZodiacInfo,
    pub analysis: ElementAnalysis,
    pub used_fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<FallbackReason>,
    pub selected_focus_areas: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converter_record: Option<ConverterRecord>,
}

impl Profile {
    /// One-line reading of the analysis, e.g.
    /// "Day master 丙 (fire) is dominant; favour water to restore balance. Focus: career".
    pub fn summary(&self) -> String {
        let a = &self.analysis;
        format!(
            "Day master {} ({}) is {}; favour {} to restore balance. Focus: {}",
            a.day_master,
            a.element,
            a.strength,
            a.favorable_element,
            self.selected_focus_areas.join(", ")
        )
    }
}

/// Validate, acquire a converter from `loader`, and compute the profile.
///
/// # Errors
///
/// Only the validation gate can fail: see [`validate`]. Unreadable date, time
/// or offset text past the gate degrades as described in [`birth_instant`].
pub async fn build_profile<S: AsRef<str>>(
    input: &BirthInput,
    focus_areas: &[S],
    loader: Option<&dyn CapabilityLoader>,
    options: &ProfileOptions,
) -> Result<Profile> {
    validate(input, focus_areas)?;
    let instant = birth_instant(
        &input.date_text,
        &input.time_text,
        input.utc_offset(),
        &options.zone,
    );
    let converter = acquire_converter(loader, options.load_grace).await;
    Ok(assemble(input, instant, focus_areas, converter.as_deref(), options))
}

/// Synchronous pipeline with an already-acquired (or absent) converter.
///
/// # Errors
///
/// Same as [`build_profile`].
///
/// # Examples
///
/// ```
/// use bazi_engine::profile::{compute_profile, ProfileOptions};
/// use bazi_engine::validate::BirthInput;
///
/// let input = BirthInput::new("A", "1990-05-15", "08:30", Some("+08:00".to_string()));
/// let profile = compute_profile(&input, &["career"], None, &ProfileOptions::default()).unwrap();
/// assert!(profile.used_fallback);
/// assert_eq!(profile.zodiac.sign.name(), "Taurus");
/// ```
pub fn compute_profile<S: AsRef<str>>(
    input: &BirthInput,
    focus_areas: &[S],
    converter: Option<&dyn CalendarConverter>,
    options: &ProfileOptions,
) -> Result<Profile> {
    validate(input, focus_areas)?;
    let instant = birth_instant(
        &input.date_text,
        &input.time_text,
        input.utc_offset(),
        &options.zone,
    );
    Ok(assemble(input, instant, focus_areas, converter, options))
}

fn assemble<S: AsRef<str>>(
    input: &BirthInput,
    instant: Instant,
    focus_areas: &[S],
    converter: Option<&dyn CalendarConverter>,
    options: &ProfileOptions,
) -> Profile {
    let resolution = resolve_pillars(&instant, converter, &options.zone);
    let analysis = analyze(&resolution.pillars);
    let local = instant.local_fields(&options.zone);
    let zodiac = zodiac_for(local.month, local.day);

    info!(
        %instant,
        zone = %options.zone,
        used_fallback = resolution.used_fallback(),
        "profile computed"
    );

    Profile {
        name: input.name.trim().to_string(),
        instant,
        used_fallback: resolution.used_fallback(),
        fallback_reason: resolution.fallback,
        pillars: resolution.pillars,
        converter_record: resolution.record,
        zodiac,
        analysis,
        selected_focus_areas: selected_focus_areas(focus_areas),
    }
}

/// Trimmed, non-empty focus areas in first-seen order without duplicates.
fn selected_focus_areas<S: AsRef<str>>(focus_areas: &[S]) -> Vec<String> {
    let mut selected: Vec<String> = Vec::new();
    for area in focus_areas.iter().map(|f| f.as_ref().trim()) {
        if !area.is_empty() && !selected.iter().any(|s| s == area) {
            selected.push(area.to_string());
        }
    }
    selected
}
