//! Per-instant atmospheric samples handed from the meteorology plug-in to
//! plants and soil.

/// Solar geometry and irradiance at one instant.
///
/// Angles are in radians; irradiance components are in W/m² on a horizontal
/// surface.  `direct + diffuse == total` for every sample a meteorology
/// implementation produces.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunSample {
    pub elevation:          f64,
    pub azimuth:            f64,
    pub total_irradiance:   f64,
    pub diffuse_irradiance: f64,
    pub direct_irradiance:  f64,
}

impl SunSample {
    /// `true` while the sun is above the horizon.
    #[inline]
    pub fn is_daytime(&self) -> bool {
        self.elevation > 0.0
    }
}

/// Weather at one instant.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherSample {
    /// Air temperature, °C.
    pub air_temperature: f64,
    /// Rain falling during the current step, mm.
    pub rainfall_mm: f64,
}
