//! Grid coordinates and the geographic bounding box of a field.

use std::fmt;

/// A cell position on the terrain grid.
///
/// Ordered by `(x, y)` so coordinate-keyed ordered maps iterate in a stable,
/// deterministic order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for Coordinate {
    #[inline]
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Geographic bounding box of the simulated field, in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub longitude_left:  f64,
    pub longitude_right: f64,
    pub latitude_top:    f64,
    pub latitude_bottom: f64,
}

impl Location {
    pub fn new(
        longitude_left:  f64,
        longitude_right: f64,
        latitude_top:    f64,
        latitude_bottom: f64,
    ) -> Self {
        Self { longitude_left, longitude_right, latitude_top, latitude_bottom }
    }

    /// Latitude of the box centre.
    #[inline]
    pub fn center_latitude(&self) -> f64 {
        (self.latitude_bottom + self.latitude_top) / 2.0
    }

    /// Longitude of the box centre.
    #[inline]
    pub fn center_longitude(&self) -> f64 {
        (self.longitude_left + self.longitude_right) / 2.0
    }
}
