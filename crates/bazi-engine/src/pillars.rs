//! Four Pillars resolution with converter fallback.
//!
//! [`resolve_pillars`] asks an optional [`CalendarConverter`] for a record,
//! trying the instant-based convention first and the decomposed-date one
//! second, and normalizes whatever comes back through an ordered alias
//! table. When no converter is available or neither call yields a usable
//! record, the deterministic [`stub_pillars`] are used instead. Resolution
//! never fails.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::converter::{CalendarConverter, ConverterRecord};
use crate::error::ConverterError;
use crate::instant::{Instant, LocalZone};

/// Placeholder for a pillar no source could provide.
pub const UNKNOWN_PILLAR: &str = "—";

/// Cyclic labels used by the stub algorithm.
pub const STUB_SEQUENCE: [&str; 10] = [
    "甲子", "乙丑", "丙寅", "丁卯", "戊辰", "己巳", "庚午", "辛未", "壬申", "癸酉",
];

/// Field names probed for each pillar, highest priority first.
const YEAR_ALIASES: &[&str] = &[
    "GanZhiYear",
    "ganZhiYear",
    "yearGanZhi",
    "year",
    "yearCn",
    "GanZhi",
    "ganZhi",
];
const MONTH_ALIASES: &[&str] = &["GanZhiMonth", "ganZhiMonth", "month", "monthCn"];
const DAY_ALIASES: &[&str] = &["GanZhiDay", "ganZhiDay", "day", "dayCn"];
const HOUR_ALIASES: &[&str] = &["GanZhiHour", "ganZhiHour", "hour"];

/// The year, month, day and hour pillar labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarSet {
    pub year_pillar: String,
    pub month_pillar: String,
    pub day_pillar: String,
    pub hour_pillar: String,
}

impl PillarSet {
    /// All four pillars set to [`UNKNOWN_PILLAR`].
    pub fn unknown() -> Self {
        Self {
            year_pillar: UNKNOWN_PILLAR.to_string(),
            month_pillar: UNKNOWN_PILLAR.to_string(),
            day_pillar: UNKNOWN_PILLAR.to_string(),
            hour_pillar: UNKNOWN_PILLAR.to_string(),
        }
    }

    /// Number of pillars that hold a real label.
    pub fn known_count(&self) -> usize {
        [
            &self.year_pillar,
            &self.month_pillar,
            &self.day_pillar,
            &self.hour_pillar,
        ]
        .into_iter()
        .filter(|p| p.as_str() != UNKNOWN_PILLAR)
        .count()
    }
}

/// Why the stub pillars were used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// No converter was loaded.
    CapabilityUnavailable,
    /// A converter was loaded but neither calling convention produced a
    /// usable record.
    ConversionFailed,
}

/// Outcome of [`resolve_pillars`].
#[derive(Debug, Clone, PartialEq)]
pub struct PillarResolution {
    pub pillars: PillarSet,
    pub fallback: Option<FallbackReason>,
    /// The converter record the pillars came from, if any.
    pub record: Option<ConverterRecord>,
}

impl PillarResolution {
    pub fn used_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    fn stub(year: i32, reason: FallbackReason) -> Self {
        Self {
            pillars: stub_pillars(year),
            fallback: Some(reason),
            record: None,
        }
    }
}

/// Resolve the four pillars for `instant`.
///
/// The local year, month and day used by the decomposed-date call and by
/// the stub are taken from `zone`.
pub fn resolve_pillars(
    instant: &Instant,
    converter: Option<&dyn CalendarConverter>,
    zone: &LocalZone,
) -> PillarResolution {
    let local = instant.local_fields(zone);

    let Some(converter) = converter else {
        info!(year = local.year, "no calendar converter; using stub pillars");
        return PillarResolution::stub(local.year, FallbackReason::CapabilityUnavailable);
    };

    if let Some(resolution) = try_convention("instant", || converter.convert_instant(instant)) {
        return resolution;
    }
    if let Some(resolution) = try_convention("date", || {
        converter.convert_date(local.year, local.month, local.day)
    }) {
        return resolution;
    }

    warn!(
        instant = %instant,
        "calendar conversion failed on both calling conventions; using stub pillars"
    );
    PillarResolution::stub(local.year, FallbackReason::ConversionFailed)
}

fn try_convention<F>(convention: &str, call: F) -> Option<PillarResolution>
where
    F: FnOnce() -> Result<ConverterRecord, ConverterError>,
{
    match call() {
        Ok(record) => {
            let pillars = normalize_record(&record);
            if pillars.known_count() == 0 {
                debug!(convention, "converter returned no recognizable pillars");
                return None;
            }
            debug!(convention, "converter produced pillars");
            Some(PillarResolution {
                pillars,
                fallback: None,
                record: Some(record),
            })
        }
        Err(e) => {
            debug!(convention, error = %e, "converter call failed");
            None
        }
    }
}

/// Map an arbitrarily-shaped converter record onto a [`PillarSet`].
///
/// Non-empty strings are taken as-is and numbers are rendered in decimal.
/// Anything else (null, booleans, arrays, objects, empty strings) counts as
/// absent. A record that is not an object yields [`PillarSet::unknown`].
pub fn normalize_record(record: &Value) -> PillarSet {
    let Value::Object(map) = record else {
        return PillarSet::unknown();
    };

    let probe = |aliases: &[&str]| {
        aliases
            .iter()
            .find_map(|alias| map.get(*alias).and_then(pillar_text))
            .unwrap_or_else(|| UNKNOWN_PILLAR.to_string())
    };

    PillarSet {
        year_pillar: probe(YEAR_ALIASES),
        month_pillar: probe(MONTH_ALIASES),
        day_pillar: probe(DAY_ALIASES),
        hour_pillar: probe(HOUR_ALIASES),
    }
}

fn pillar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Deterministic pillars derived from the year alone.
///
/// # Examples
///
/// ```
/// use bazi_engine::pillars::stub_pillars;
///
/// let pillars = stub_pillars(1990);
/// assert_eq!(pillars.year_pillar, "甲子");
/// assert_eq!(pillars.day_pillar, "丙寅");
/// ```
pub fn stub_pillars(year: i32) -> PillarSet {
    let len = STUB_SEQUENCE.len();
    let idx = year.unsigned_abs() as usize % len;
    let at = |step: usize| STUB_SEQUENCE[(idx + step) % len].to_string();
    PillarSet {
        year_pillar: at(0),
        month_pillar: at(1),
        day_pillar: at(2),
        hour_pillar: at(3),
    }
}
