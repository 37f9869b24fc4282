//! Climate descriptors.
//!
//! Only the meteorology plug-in and agents choosing what to plant read these;
//! the scheduling core never does.

use std::fmt;

// ── MinMax ────────────────────────────────────────────────────────────────────

/// A closed `[min, max]` range.
///
/// The constructor orders its arguments, so `MinMax::new(100, 10)` and
/// `MinMax::new(10, 100)` are the same range.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinMax<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> MinMax<T> {
    pub fn new(a: T, b: T) -> Self {
        if b < a {
            Self { min: b, max: a }
        } else {
            Self { min: a, max: b }
        }
    }

    /// `true` if `value` lies within the range (inclusive).
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// `true` if `other` lies entirely within `self`.
    #[inline]
    pub fn covers(&self, other: &MinMax<T>) -> bool {
        self.min <= other.min && other.max <= self.max
    }
}

impl<T: PartialOrd + Copy> From<(T, T)> for MinMax<T> {
    fn from((a, b): (T, T)) -> Self {
        Self::new(a, b)
    }
}

// ── ClimateZone ───────────────────────────────────────────────────────────────

/// Main Köppen climate groups.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClimateZone {
    Tropical,
    Dry,
    #[default]
    Temperate,
    Continental,
    Polar,
}

impl fmt::Display for ClimateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Tropical    => "tropical",
            Self::Dry         => "dry",
            Self::Temperate   => "temperate",
            Self::Continental => "continental",
            Self::Polar       => "polar",
        };
        f.write_str(s)
    }
}

// ── Climate ───────────────────────────────────────────────────────────────────

/// Long-term climate of a location.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Climate {
    pub zone: ClimateZone,
    /// Yearly air temperature extremes, °C.
    pub yearly_temperature: MinMax<f64>,
    /// Yearly rainfall extremes, mm.
    pub yearly_rainfall: MinMax<f64>,
}
