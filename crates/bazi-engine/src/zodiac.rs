//! Solar zodiac sign lookup by calendar day.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ZodiacSign {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

impl ZodiacSign {
    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Western elemental triplicity of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacElement {
    Earth,
    Air,
    Water,
    Fire,
}

impl fmt::Display for ZodiacElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ZodiacElement::Earth => "earth",
            ZodiacElement::Air => "air",
            ZodiacElement::Water => "water",
            ZodiacElement::Fire => "fire",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZodiacInfo {
    pub sign: ZodiacSign,
    pub element: ZodiacElement,
}

struct SignRange {
    sign: ZodiacSign,
    element: ZodiacElement,
    start: (u32, u32),
    end: (u32, u32),
}

impl SignRange {
    fn contains(&self, month: u32, day: u32) -> bool {
        (month == self.start.0 && day >= self.start.1) || (month == self.end.0 && day <= self.end.1)
    }

    fn info(&self) -> ZodiacInfo {
        ZodiacInfo {
            sign: self.sign,
            element: self.element,
        }
    }
}

const fn range(
    sign: ZodiacSign,
    element: ZodiacElement,
    start: (u32, u32),
    end: (u32, u32),
) -> SignRange {
    SignRange {
        sign,
        element,
        start,
        end,
    }
}

// (month, day) bounds, inclusive. Capricorn wraps the year boundary.
static SIGNS: [SignRange; 12] = [
    range(ZodiacSign::Capricorn, ZodiacElement::Earth, (12, 22), (1, 19)),
    range(ZodiacSign::Aquarius, ZodiacElement::Air, (1, 20), (2, 18)),
    range(ZodiacSign::Pisces, ZodiacElement::Water, (2, 19), (3, 20)),
    range(ZodiacSign::Aries, ZodiacElement::Fire, (3, 21), (4, 19)),
    range(ZodiacSign::Taurus, ZodiacElement::Earth, (4, 20), (5, 20)),
    range(ZodiacSign::Gemini, ZodiacElement::Air, (5, 21), (6, 21)),
    range(ZodiacSign::Cancer, ZodiacElement::Water, (6, 22), (7, 22)),
    range(ZodiacSign::Leo, ZodiacElement::Fire, (7, 23), (8, 22)),
    range(ZodiacSign::Virgo, ZodiacElement::Earth, (8, 23), (9, 22)),
    range(ZodiacSign::Libra, ZodiacElement::Air, (9, 23), (10, 23)),
    range(ZodiacSign::Scorpio, ZodiacElement::Water, (10, 24), (11, 22)),
    range(ZodiacSign::Sagittarius, ZodiacElement::Fire, (11, 23), (12, 21)),
];

/// The sign whose date range contains (`month`, `day`).
///
/// Ranges are checked in declaration order and the first match wins. A day
/// that matches nothing falls back to Capricorn.
pub fn zodiac_for(month: u32, day: u32) -> ZodiacInfo {
    SIGNS
        .iter()
        .find(|r| r.contains(month, day))
        .unwrap_or(&SIGNS[0])
        .info()
}
