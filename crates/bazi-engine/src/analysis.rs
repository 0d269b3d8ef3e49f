//! Day-master element analysis.
//!
//! The analysis is a deliberately coarse two-bucket heuristic: a wood or fire
//! day master is "dominant" and is balanced with water; anything else is
//! "deficient" and is balanced with wood.

use std::fmt;

use serde::Serialize;

use crate::pillars::{PillarSet, UNKNOWN_PILLAR};

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    /// Element of a heavenly stem or earthly branch character. `None` for
    /// anything else.
    pub fn of_char(c: char) -> Option<Self> {
        match c {
            '甲' | '乙' | '寅' | '卯' => Some(Element::Wood),
            '丙' | '丁' | '巳' | '午' => Some(Element::Fire),
            '戊' | '己' | '丑' | '辰' | '未' | '戌' => Some(Element::Earth),
            '庚' | '辛' | '申' | '酉' => Some(Element::Metal),
            '壬' | '癸' | '子' | '亥' => Some(Element::Water),
            _ => None,
        }
    }

    /// The traditional single-character name.
    pub fn hanzi(self) -> char {
        match self {
            Element::Wood => '木',
            Element::Fire => '火',
            Element::Earth => '土',
            Element::Metal => '金',
            Element::Water => '水',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Element::Wood => "wood",
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Metal => "metal",
            Element::Water => "water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Dominant,
    Deficient,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strength::Dominant => "dominant",
            Strength::Deficient => "deficient",
        })
    }
}

/// Result of [`analyze`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementAnalysis {
    /// Leading character of the day pillar.
    pub day_master: String,
    pub element: Element,
    pub strength: Strength,
    pub favorable_element: Element,
}

/// Analyze the day master of `pillars`.
///
/// Unmapped characters, including the unknown-pillar placeholder, count as
/// earth.
///
/// # Examples
///
/// ```
/// use bazi_engine::analysis::{analyze, Element, Strength};
/// use bazi_engine::pillars::stub_pillars;
///
/// let analysis = analyze(&stub_pillars(1990)); // day pillar 丙寅
/// assert_eq!(analysis.element, Element::Fire);
/// assert_eq!(analysis.strength, Strength::Dominant);
/// assert_eq!(analysis.favorable_element, Element::Water);
/// ```
pub fn analyze(pillars: &PillarSet) -> ElementAnalysis {
    let day_master = pillars
        .day_pillar
        .chars()
        .next()
        .map(String::from)
        .unwrap_or_else(|| UNKNOWN_PILLAR.to_string());

    let element = day_master
        .chars()
        .next()
        .and_then(Element::of_char)
        .unwrap_or(Element::Earth);

    let (strength, favorable_element) = match element {
        Element::Wood | Element::Fire => (Strength::Dominant, Element::Water),
        _ => (Strength::Deficient, Element::Wood),
    };

    ElementAnalysis {
        day_master,
        element,
        strength,
        favorable_element,
    }
}
