use std::fmt;

use bazi_engine::{FallbackReason, Profile};
use chrono::{DateTime, Local};

/// Plain-text report for a profile, stamped with the time it was generated.
pub struct Report<'a> {
    profile: &'a Profile,
    generated_at: DateTime<Local>,
}

impl<'a> Report<'a> {
    pub fn new(profile: &'a Profile, generated_at: DateTime<Local>) -> Self {
        Self { profile, generated_at }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.profile;
        let p = &profile.pillars;
        let a = &profile.analysis;

        writeln!(f, "Profile for {}", profile.name)?;
        writeln!(f, "Generated:      {}", self.generated_at.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "Birth instant:  {}", profile.instant)?;
        writeln!(
            f,
            "Four pillars:   year {}  month {}  day {}  hour {}",
            p.year_pillar, p.month_pillar, p.day_pillar, p.hour_pillar
        )?;
        writeln!(
            f,
            "Zodiac:         {} ({})",
            profile.zodiac.sign, profile.zodiac.element
        )?;
        writeln!(
            f,
            "Day master:     {} ({} {})",
            a.day_master,
            a.element,
            a.element.hanzi()
        )?;
        writeln!(f, "Summary:        {}", profile.summary())?;
        writeln!(f, "Recommendations:")?;
        writeln!(
            f,
            "  1. Bring {} ({}) into daily practice and surroundings to help restore balance.",
            a.favorable_element,
            a.favorable_element.hanzi()
        )?;
        writeln!(
            f,
            "  2. Spend ten minutes a day on imagery practice paired with breathing and body awareness."
        )?;

        if let Some(reason) = profile.fallback_reason {
            let why = match reason {
                FallbackReason::CapabilityUnavailable => "no calendar converter was available",
                FallbackReason::ConversionFailed => "the calendar converter had no usable result",
            };
            writeln!(f, "Notice: {why}; the pillars above are placeholder values.")?;
        }

        Ok(())
    }
}
