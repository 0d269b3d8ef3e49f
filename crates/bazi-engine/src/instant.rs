//! Building absolute instants from raw birth date, time and offset text.
//!
//! Two interpretations exist for the same wall-clock fields:
//!
//! - With an explicit `±HH:MM` offset, the fields are wall-clock time at that
//!   fixed offset and the resulting instant is the same on every machine.
//! - Without one, the fields are wall-clock time in a [`LocalZone`]. The
//!   default zone is the host's own ([`LocalZone::System`]), so the same input
//!   can map to different instants on differently configured hosts.
//!
//! Out-of-range fields never panic. They roll over the way calendar
//! arithmetic does: month 13 is January of the following year, day 0 is the
//! last day of the previous month, hour 24 is midnight of the next day.

use std::fmt;
use std::str::FromStr;

use chrono::offset::LocalResult;
use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, SecondsFormat,
    TimeDelta, TimeZone, Timelike, Utc,
};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};
use tracing::warn;

use crate::error::{ProfileError, Result};

// ── Instant ─────────────────────────────────────────────────────────────────

/// An absolute point in time. Carries no offset once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(DateTime<Utc>);

impl Instant {
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    pub fn as_utc(&self) -> DateTime<Utc> {
        self.0
    }

    /// Milliseconds since the Unix epoch.
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// The calendar fields of this instant as seen from `zone`.
    pub fn local_fields(&self, zone: &LocalZone) -> LocalFields {
        let naive = zone.wall_clock(&self.0);
        LocalFields {
            year: naive.year(),
            month: naive.month(),
            day: naive.day(),
            hour: naive.hour(),
            minute: naive.minute(),
        }
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

impl Serialize for Instant {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Wall-clock calendar fields of an [`Instant`] in some zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

// ── LocalZone ───────────────────────────────────────────────────────────────

/// The zone that stands in for "local time" when no offset is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocalZone {
    /// The host's configured timezone.
    #[default]
    System,
    /// A named IANA timezone.
    Named(Tz),
    /// A fixed offset from UTC.
    Fixed(FixedOffset),
}

impl LocalZone {
    fn wall_clock(&self, utc: &DateTime<Utc>) -> NaiveDateTime {
        match self {
            LocalZone::System => utc.with_timezone(&Local).naive_local(),
            LocalZone::Named(tz) => utc.with_timezone(tz).naive_local(),
            LocalZone::Fixed(offset) => utc.with_timezone(offset).naive_local(),
        }
    }

    fn instant_at(&self, naive: &NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            LocalZone::System => resolve_local(&Local, naive),
            LocalZone::Named(tz) => resolve_local(tz, naive),
            LocalZone::Fixed(offset) => resolve_local(offset, naive),
        }
    }
}

impl FromStr for LocalZone {
    type Err = ProfileError;

    /// Accepts `system` / `local`, a `±HH:MM` offset, or an IANA name.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("system") || s.eq_ignore_ascii_case("local") {
            return Ok(LocalZone::System);
        }
        if s.starts_with('+') || s.starts_with('-') {
            let minutes = parse_utc_offset(s)
                .map_err(|_| ProfileError::InvalidTimezone(format!("'{s}'")))?;
            return FixedOffset::east_opt(minutes * 60)
                .map(LocalZone::Fixed)
                .ok_or_else(|| ProfileError::InvalidTimezone(format!("'{s}'")));
        }
        s.parse::<Tz>()
            .map(LocalZone::Named)
            .map_err(|_| ProfileError::InvalidTimezone(format!("'{s}'")))
    }
}

impl fmt::Display for LocalZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalZone::System => f.write_str("system"),
            LocalZone::Named(tz) => f.write_str(tz.name()),
            LocalZone::Fixed(offset) => f.write_str(&format_utc_offset(offset.local_minus_utc())),
        }
    }
}

// ── build_instant ───────────────────────────────────────────────────────────

/// Build an [`Instant`] from raw date (`YYYY-MM-DD`), time (`HH:MM`) and
/// optional offset (`±HH:MM`) text.
///
/// Missing hour or minute components default to zero; a seconds component
/// is ignored. An empty offset string counts as absent, in which case the
/// fields are interpreted in `zone`.
///
/// # Errors
///
/// Returns [`ProfileError::InvalidDatetime`] if a component is not an
/// integer or the rolled-over value cannot be represented, and
/// [`ProfileError::InvalidOffset`] if the offset text is malformed.
///
/// # Examples
///
/// ```
/// use bazi_engine::instant::{build_instant, LocalZone};
///
/// let instant = build_instant("2000-01-01", "00:00", Some("+08:00"), &LocalZone::System).unwrap();
/// assert_eq!(instant.to_string(), "1999-12-31T16:00:00Z");
/// ```
pub fn build_instant(
    date_text: &str,
    time_text: &str,
    utc_offset_text: Option<&str>,
    zone: &LocalZone,
) -> Result<Instant> {
    let (year, month, day) = parse_date_text(date_text)?;
    let (hour, minute) = parse_time_text(time_text)?;

    let naive = rolled_over(year, month, day, hour, minute).ok_or_else(|| {
        ProfileError::InvalidDatetime(format!("'{date_text} {time_text}' is out of range"))
    })?;

    match utc_offset_text.map(str::trim).filter(|s| !s.is_empty()) {
        None => zone.instant_at(&naive).map(Instant).ok_or_else(|| {
            ProfileError::InvalidDatetime(format!(
                "'{date_text} {time_text}' does not exist in zone {zone}"
            ))
        }),
        Some(offset_text) => {
            let offset_minutes = parse_utc_offset(offset_text)?;
            naive
                .checked_sub_signed(TimeDelta::minutes(i64::from(offset_minutes)))
                .map(|utc| Instant(Utc.from_utc_datetime(&utc)))
                .ok_or_else(|| {
                    ProfileError::InvalidDatetime(format!(
                        "'{date_text} {time_text} {offset_text}' is out of range"
                    ))
                })
        }
    }
}

/// [`build_instant`] against the host's own timezone.
pub fn build_instant_local(
    date_text: &str,
    time_text: &str,
    utc_offset_text: Option<&str>,
) -> Result<Instant> {
    build_instant(date_text, time_text, utc_offset_text, &LocalZone::System)
}

/// Like [`build_instant`], but never fails.
///
/// Used once the validation gate has passed. An unreadable date component
/// becomes 1 (1970 for the year), an unreadable time component becomes 0,
/// and an unsigned offset is read as east of UTC. Any other malformed offset
/// is ignored, so the fields are read in `zone`. Fields that roll over past
/// the representable range fall back to January 1st of the year. Every
/// substitution is logged at `warn` level.
pub fn birth_instant(
    date_text: &str,
    time_text: &str,
    utc_offset_text: Option<&str>,
    zone: &LocalZone,
) -> Instant {
    let (year, month, day) = parse_date_text(date_text).unwrap_or_else(|err| {
        warn!(%err, "substituting unreadable date components");
        lenient_date_text(date_text)
    });
    let (hour, minute) = parse_time_text(time_text).unwrap_or_else(|err| {
        warn!(%err, "substituting unreadable time components");
        lenient_time_text(time_text)
    });

    let naive = rolled_over(year, month, day, hour, minute)
        .or_else(|| {
            warn!(date_text, time_text, "birth time out of range; using January 1st");
            rolled_over(year, 1, 1, 0, 0)
        })
        .unwrap_or_else(|| DateTime::<Utc>::UNIX_EPOCH.naive_utc());

    let offset_minutes = utc_offset_text
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|text| match lenient_utc_offset(text) {
            Ok(minutes) => Some(minutes),
            Err(err) => {
                warn!(%err, %zone, "ignoring UTC offset; reading birth time in local zone");
                None
            }
        });

    let utc = match offset_minutes {
        Some(minutes) => naive
            .checked_sub_signed(TimeDelta::minutes(i64::from(minutes)))
            .map(|utc| Utc.from_utc_datetime(&utc)),
        None => zone.instant_at(&naive),
    };
    Instant(utc.unwrap_or_else(|| Utc.from_utc_datetime(&naive)))
}

/// Parse a `±HH:MM` offset into signed minutes east of UTC.
///
/// The sign is mandatory and the minutes part may be omitted (`+8` is eight
/// hours east).
pub fn parse_utc_offset(s: &str) -> Result<i32> {
    let s = s.trim();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') => (1, &s[1..]),
        Some(b'-') => (-1, &s[1..]),
        _ => {
            return Err(ProfileError::InvalidOffset(format!(
                "offset must start with '+' or '-': '{s}'"
            )));
        }
    };

    let (hours_text, minutes_text) = rest.split_once(':').unwrap_or((rest, ""));
    let hours = parse_offset_component(hours_text, s)?;
    let minutes = if minutes_text.is_empty() {
        0
    } else {
        parse_offset_component(minutes_text, s)?
    };

    if hours > 23 || minutes > 59 {
        return Err(ProfileError::InvalidOffset(format!("'{s}' is out of range")));
    }

    Ok(sign * (hours * 60 + minutes))
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Resolve a local wall-clock time to UTC. Folds take the earlier instant;
/// gaps are read with the offset in force before the transition, which moves
/// the wall clock forward by the gap length.
fn resolve_local<T: TimeZone>(tz: &T, naive: &NaiveDateTime) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => {
            let before = naive.checked_sub_signed(TimeDelta::days(1))?;
            let offset = tz.from_local_datetime(&before).earliest()?.offset().fix();
            let utc = naive.checked_sub_signed(TimeDelta::seconds(i64::from(
                offset.local_minus_utc(),
            )))?;
            Some(Utc.from_utc_datetime(&utc))
        }
    }
}

fn parse_date_text(s: &str) -> Result<(i64, i64, i64)> {
    let parts: Vec<&str> = s.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(ProfileError::InvalidDatetime(format!(
            "expected YYYY-MM-DD, got '{s}'"
        )));
    }
    let component = |part: &str| {
        part.trim()
            .parse::<i64>()
            .map_err(|_| ProfileError::InvalidDatetime(format!("invalid date component in '{s}'")))
    };
    Ok((component(parts[0])?, component(parts[1])?, component(parts[2])?))
}

fn parse_time_text(s: &str) -> Result<(i64, i64)> {
    let mut parts = s.trim().split(':');
    let mut component = || match parts.next().map(str::trim) {
        None | Some("") => Ok(0),
        Some(part) => part
            .parse::<i64>()
            .map_err(|_| ProfileError::InvalidDatetime(format!("invalid time component in '{s}'"))),
    };
    let hour = component()?;
    let minute = component()?;
    Ok((hour, minute))
}

fn lenient_date_text(s: &str) -> (i64, i64, i64) {
    let mut parts = s.trim().split('-').map(|p| p.trim().parse::<i64>().ok());
    let mut next = |default| parts.next().flatten().unwrap_or(default);
    let year = next(1970);
    let month = next(1);
    let day = next(1);
    (year, month, day)
}

fn lenient_time_text(s: &str) -> (i64, i64) {
    let mut parts = s.trim().split(':').map(|p| p.trim().parse::<i64>().ok());
    let mut next = || parts.next().flatten().unwrap_or(0);
    let hour = next();
    let minute = next();
    (hour, minute)
}

/// [`parse_utc_offset`] that reads an unsigned offset as positive.
fn lenient_utc_offset(s: &str) -> Result<i32> {
    match s.as_bytes().first() {
        Some(b'+' | b'-') => parse_utc_offset(s),
        _ => parse_utc_offset(&format!("+{s}")),
    }
}

fn parse_offset_component(part: &str, whole: &str) -> Result<i32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProfileError::InvalidOffset(format!(
            "expected ±HH:MM, got '{whole}'"
        )));
    }
    part.parse::<i32>()
        .map_err(|_| ProfileError::InvalidOffset(format!("expected ±HH:MM, got '{whole}'")))
}

/// Calendar arithmetic with rollover: start from the first day of the
/// normalized month and add the remaining fields as durations.
fn rolled_over(year: i64, month: i64, day: i64, hour: i64, minute: i64) -> Option<NaiveDateTime> {
    let months = year.checked_mul(12)?.checked_add(month.checked_sub(1)?)?;
    let y = i32::try_from(months.div_euclid(12)).ok()?;
    let m = u32::try_from(months.rem_euclid(12) + 1).ok()?;

    NaiveDate::from_ymd_opt(y, m, 1)?
        .and_hms_opt(0, 0, 0)?
        .checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)?
        .checked_add_signed(TimeDelta::try_hours(hour)?)?
        .checked_add_signed(TimeDelta::try_minutes(minute)?)
}

/// Format an offset in seconds as a string (e.g., "-05:00", "+09:00").
fn format_utc_offset(offset_secs: i32) -> String {
    let sign = if offset_secs >= 0 { "+" } else { "-" };
    let abs_secs = offset_secs.unsigned_abs();
    let hours = abs_secs / 3600;
    let minutes = (abs_secs % 3600) / 60;
    format!("{sign}{hours:02}:{minutes:02}")
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn zone(name: &str) -> LocalZone {
        name.parse().unwrap()
    }

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    // ── explicit offset ─────────────────────────────────────────────────

    #[test]
    fn test_positive_offset_crosses_year_boundary() {
        let instant = build_instant("2000-01-01", "00:00", Some("+08:00"), &LocalZone::System).unwrap();
        assert_eq!(instant.as_utc(), utc("1999-12-31T16:00:00Z"));
        assert_eq!(instant.to_string(), "1999-12-31T16:00:00Z");
    }

    #[test]
    fn test_negative_offset_with_minutes() {
        let instant = build_instant("1990-05-15", "08:30", Some("-05:30"), &LocalZone::System).unwrap();
        assert_eq!(instant.as_utc(), utc("1990-05-15T14:00:00Z"));
    }

    #[test]
    fn test_offset_ignores_local_zone() {
        let a = build_instant("1984-02-02", "12:00", Some("+09:00"), &zone("America/New_York")).unwrap();
        let b = build_instant("1984-02-02", "12:00", Some("+09:00"), &zone("Asia/Kolkata")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_offset_is_absent() {
        let with_empty = build_instant("1990-05-15", "08:30", Some("  "), &zone("UTC")).unwrap();
        let without = build_instant("1990-05-15", "08:30", None, &zone("UTC")).unwrap();
        assert_eq!(with_empty, without);
    }

    // ── local zone branch ───────────────────────────────────────────────

    #[test]
    fn test_no_offset_uses_local_zone() {
        let instant = build_instant("2000-01-01", "00:00", None, &zone("Asia/Shanghai")).unwrap();
        assert_eq!(instant.as_utc(), utc("1999-12-31T16:00:00Z"));
    }

    #[test]
    fn test_no_offset_depends_on_zone() {
        let shanghai = build_instant("2000-01-01", "00:00", None, &zone("Asia/Shanghai")).unwrap();
        let london = build_instant("2000-01-01", "00:00", None, &zone("Europe/London")).unwrap();
        assert_ne!(shanghai, london);
    }

    #[test]
    fn test_system_zone_is_idempotent() {
        let first = build_instant_local("1990-05-15", "08:30", None).unwrap();
        let second = build_instant_local("1990-05-15", "08:30", None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_dst_gap_moves_forward() {
        // 2026-03-08 02:30 does not exist in New York (02:00 EST -> 03:00 EDT)
        let instant = build_instant("2026-03-08", "02:30", None, &zone("America/New_York")).unwrap();
        assert_eq!(instant.as_utc(), utc("2026-03-08T07:30:00Z"));
        let local = instant.local_fields(&zone("America/New_York"));
        assert_eq!((local.hour, local.minute), (3, 30));
    }

    #[test]
    fn test_dst_fold_takes_earlier_instant() {
        // 2026-11-01 01:30 happens twice in New York; the first is EDT (UTC-4)
        let instant = build_instant("2026-11-01", "01:30", None, &zone("America/New_York")).unwrap();
        assert_eq!(instant.as_utc(), utc("2026-11-01T05:30:00Z"));
    }

    // ── parsing and rollover ────────────────────────────────────────────

    #[test]
    fn test_missing_time_components_default_to_zero() {
        let z = zone("UTC");
        let empty = build_instant("1990-05-15", "", None, &z).unwrap();
        assert_eq!(empty.as_utc(), utc("1990-05-15T00:00:00Z"));
        let hour_only = build_instant("1990-05-15", "08", None, &z).unwrap();
        assert_eq!(hour_only.as_utc(), utc("1990-05-15T08:00:00Z"));
    }

    #[test]
    fn test_seconds_component_ignored() {
        let instant = build_instant("1990-05-15", "08:30:59", None, &zone("UTC")).unwrap();
        assert_eq!(instant.as_utc(), utc("1990-05-15T08:30:00Z"));
    }

    #[test]
    fn test_month_thirteen_rolls_into_next_year() {
        let instant = build_instant("2000-13-15", "00:00", Some("+00:00"), &LocalZone::System).unwrap();
        assert_eq!(instant.as_utc(), utc("2001-01-15T00:00:00Z"));
    }

    #[test]
    fn test_day_zero_rolls_back() {
        let instant = build_instant("2000-03-00", "00:00", Some("+00:00"), &LocalZone::System).unwrap();
        assert_eq!(instant.as_utc(), utc("2000-02-29T00:00:00Z"));
    }

    #[test]
    fn test_hour_twenty_four_rolls_forward() {
        let instant = build_instant("1999-12-31", "24:00", Some("+00:00"), &LocalZone::System).unwrap();
        assert_eq!(instant.as_utc(), utc("2000-01-01T00:00:00Z"));
    }

    #[test]
    fn test_unrepresentable_year_is_error_not_panic() {
        let result = build_instant("999999999-01-01", "00:00", Some("+00:00"), &LocalZone::System);
        assert!(matches!(result, Err(ProfileError::InvalidDatetime(_))));
    }

    #[test]
    fn test_non_numeric_date_returns_error() {
        let err = build_instant("1990-May-15", "08:30", None, &LocalZone::System).unwrap_err();
        assert!(err.to_string().contains("Invalid datetime"), "got: {err}");
    }

    #[test]
    fn test_non_numeric_time_returns_error() {
        let result = build_instant("1990-05-15", "ab:cd", None, &LocalZone::System);
        assert!(matches!(result, Err(ProfileError::InvalidDatetime(_))));
    }

    // ── birth_instant ───────────────────────────────────────────────────

    #[test]
    fn test_birth_instant_matches_strict_builder_on_good_input() {
        let z = zone("Asia/Shanghai");
        let strict = build_instant("1990-05-15", "08:30", Some("-05:30"), &z).unwrap();
        assert_eq!(birth_instant("1990-05-15", "08:30", Some("-05:30"), &z), strict);
        let strict = build_instant("1990-05-15", "08:30", None, &z).unwrap();
        assert_eq!(birth_instant("1990-05-15", "08:30", None, &z), strict);
    }

    #[test]
    fn test_birth_instant_unsigned_offset_is_east() {
        let instant = birth_instant("2000-01-01", "00:00", Some("08:00"), &zone("UTC"));
        assert_eq!(instant.as_utc(), utc("1999-12-31T16:00:00Z"));
    }

    #[test]
    fn test_birth_instant_ignores_garbage_offset() {
        let z = zone("Asia/Tokyo");
        let ignored = birth_instant("1990-05-15", "08:30", Some("+ab:cd"), &z);
        assert_eq!(ignored, birth_instant("1990-05-15", "08:30", None, &z));
        assert_eq!(ignored.as_utc(), utc("1990-05-14T23:30:00Z"));
    }

    #[test]
    fn test_birth_instant_fills_missing_date_parts() {
        let instant = birth_instant("1990-05", "08:30", None, &zone("UTC"));
        assert_eq!(instant.as_utc(), utc("1990-05-01T08:30:00Z"));
        let instant = birth_instant("1990-May-15", "08:30", None, &zone("UTC"));
        assert_eq!(instant.as_utc(), utc("1990-01-15T08:30:00Z"));
    }

    #[test]
    fn test_birth_instant_unreadable_time_is_midnight() {
        let instant = birth_instant("1990-05-15", "8h30", None, &zone("UTC"));
        assert_eq!(instant.as_utc(), utc("1990-05-15T00:00:00Z"));
        let instant = birth_instant("1990-05-15", "08:xx", None, &zone("UTC"));
        assert_eq!(instant.as_utc(), utc("1990-05-15T08:00:00Z"));
    }

    #[test]
    fn test_birth_instant_out_of_range_uses_start_of_year() {
        let instant = birth_instant("1990-05-15", "9999999999999999:00", Some("+00:00"), &zone("UTC"));
        assert_eq!(instant.as_utc(), utc("1990-01-01T00:00:00Z"));
    }

    // ── parse_utc_offset ────────────────────────────────────────────────

    #[test]
    fn test_parse_offset_forms() {
        assert_eq!(parse_utc_offset("+08:00").unwrap(), 480);
        assert_eq!(parse_utc_offset("-03:30").unwrap(), -210);
        assert_eq!(parse_utc_offset("+8").unwrap(), 480);
        assert_eq!(parse_utc_offset("-00:45").unwrap(), -45);
    }

    #[test]
    fn test_parse_offset_requires_sign() {
        let err = parse_utc_offset("08:00").unwrap_err();
        assert!(err.to_string().contains("must start with"), "got: {err}");
    }

    #[test]
    fn test_parse_offset_rejects_garbage() {
        assert!(parse_utc_offset("+").is_err());
        assert!(parse_utc_offset("+ab:00").is_err());
        assert!(parse_utc_offset("+08:75").is_err());
        assert!(parse_utc_offset("+24:00").is_err());
        assert!(parse_utc_offset("+008:00").is_err());
    }

    // ── LocalZone ───────────────────────────────────────────────────────

    #[test]
    fn test_local_zone_from_str() {
        assert_eq!(zone("system"), LocalZone::System);
        assert_eq!(zone("Local"), LocalZone::System);
        assert_eq!(zone("Asia/Tokyo"), LocalZone::Named(chrono_tz::Asia::Tokyo));
        assert_eq!(
            zone("+09:00"),
            LocalZone::Fixed(FixedOffset::east_opt(9 * 3600).unwrap())
        );
    }

    #[test]
    fn test_local_zone_invalid() {
        let err = "Invalid/Zone".parse::<LocalZone>().unwrap_err();
        assert!(err.to_string().contains("Invalid timezone"), "got: {err}");
        assert!("+99:00".parse::<LocalZone>().is_err());
    }

    #[test]
    fn test_local_zone_display() {
        assert_eq!(zone("system").to_string(), "system");
        assert_eq!(zone("Europe/Paris").to_string(), "Europe/Paris");
        assert_eq!(zone("-05:00").to_string(), "-05:00");
    }

    #[test]
    fn test_local_fields_in_other_zone() {
        let instant = build_instant("2000-01-01", "00:00", Some("+08:00"), &LocalZone::System).unwrap();
        let fields = instant.local_fields(&zone("UTC"));
        assert_eq!(
            fields,
            LocalFields { year: 1999, month: 12, day: 31, hour: 16, minute: 0 }
        );
    }

    #[test]
    fn test_instant_serializes_as_rfc3339() {
        let instant = build_instant("2000-01-01", "00:00", Some("+08:00"), &LocalZone::System).unwrap();
        let json = serde_json::to_string(&instant).unwrap();
        assert_eq!(json, "\"1999-12-31T16:00:00Z\"");
    }

    proptest! {
        #[test]
        fn prop_offset_branch_matches_fixed_zone(
            year in 1000i32..=9999,
            month in 1u32..=12,
            day in 1u32..=28,
            hour in 0u32..24,
            minute in 0u32..60,
            offset in -(23 * 60 + 59)..=(23 * 60 + 59i32),
        ) {
            let sign = if offset < 0 { '-' } else { '+' };
            let abs = offset.abs();
            let offset_text = format!("{sign}{:02}:{:02}", abs / 60, abs % 60);
            let date = format!("{year:04}-{month:02}-{day:02}");
            let time = format!("{hour:02}:{minute:02}");

            let explicit = build_instant(&date, &time, Some(&offset_text), &LocalZone::System).unwrap();
            let fixed: LocalZone = offset_text.parse().unwrap();
            let implicit = build_instant(&date, &time, None, &fixed).unwrap();
            prop_assert_eq!(explicit, implicit);
        }

        #[test]
        fn prop_birth_instant_is_total(
            date in ".{0,16}",
            time in ".{0,12}",
            offset in proptest::option::of(".{0,8}"),
        ) {
            let first = birth_instant(&date, &time, offset.as_deref(), &zone("Europe/Berlin"));
            let second = birth_instant(&date, &time, offset.as_deref(), &zone("Europe/Berlin"));
            prop_assert_eq!(first, second);
        }
    }
}
