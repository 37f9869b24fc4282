//! Sun and weather plug-ins.
//!
//! The environment only ever talks to the [`Meteorology`] trait.  The default
//! implementation, [`ClimateMeteorology`], pairs a solar-geometry model
//! ([`SunInfo`]) with a seeded daily weather generator
//! ([`WeatherGenerator`]).  Neither aims at physical accuracy; they produce
//! plausible, deterministic inputs for soil and growth.

use std::f64::consts::{PI, TAU};

use chrono::{DateTime, Datelike, Timelike};
use rustc_hash::FxHashMap;

use ag_core::{Climate, EnvConfig, Location, SimRng, SunSample, WeatherSample};

const SECS_PER_DAY: i64 = 86_400;

/// Solar constant, W/m².
const SOLAR_CONSTANT: f64 = 1_361.0;

/// Clear-sky atmospheric transmittance at air mass 1.
const TRANSMITTANCE: f64 = 0.75;

/// Share of the scattered beam that reaches the ground as diffuse light.
const DIFFUSE_SHARE: f64 = 0.3;

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Atmospheric inputs at a given instant.
///
/// `&mut self` lets implementations cache.  `Send` lets an environment live
/// behind a mutex shared across threads.
pub trait Meteorology: Send {
    /// Sun geometry and irradiance at `unix_secs`.
    fn sun(&mut self, unix_secs: i64) -> SunSample;

    /// Air temperature at `unix_secs` and the rain falling during the
    /// `step_secs` that follow.
    fn weather(&mut self, unix_secs: i64, step_secs: u32) -> WeatherSample;
}

// ── SunInfo ───────────────────────────────────────────────────────────────────

/// Solar geometry for a fixed location, cached per
/// `(day_of_year, second_of_day)`.
#[derive(Clone, Debug)]
pub struct SunInfo {
    latitude:  f64,
    longitude: f64,
    cache:     FxHashMap<(u32, u32), SunSample>,
}

impl SunInfo {
    pub fn new(location: &Location) -> Self {
        Self {
            latitude:  location.center_latitude(),
            longitude: location.center_longitude(),
            cache:     FxHashMap::default(),
        }
    }

    pub fn sample(&mut self, unix_secs: i64) -> SunSample {
        let Some(at) = DateTime::from_timestamp(unix_secs, 0) else {
            return SunSample::default();
        };
        let key = (at.ordinal(), at.num_seconds_from_midnight());
        let (latitude, longitude) = (self.latitude, self.longitude);
        *self
            .cache
            .entry(key)
            .or_insert_with(|| solar_position(latitude, longitude, key.0, key.1))
    }

    /// Number of distinct instants computed so far.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

/// Elevation, azimuth and clear-sky irradiance for one instant.
fn solar_position(latitude: f64, longitude: f64, day_of_year: u32, second_of_day: u32) -> SunSample {
    let declination = 23.44_f64.to_radians() * (TAU * (284.0 + day_of_year as f64) / 365.0).sin();
    let solar_hours = second_of_day as f64 / 3_600.0 + longitude / 15.0;
    let hour_angle = (15.0 * (solar_hours - 12.0)).to_radians();
    let lat = latitude.to_radians();

    let sin_elevation =
        lat.sin() * declination.sin() + lat.cos() * declination.cos() * hour_angle.cos();
    let elevation = sin_elevation.clamp(-1.0, 1.0).asin();
    let azimuth = hour_angle.sin().atan2(hour_angle.cos() * lat.sin() - declination.tan() * lat.cos()) + PI;

    if elevation <= 0.0 {
        return SunSample { elevation, azimuth, ..SunSample::default() };
    }

    let air_mass = 1.0 / sin_elevation;
    let top_of_atmosphere = SOLAR_CONSTANT * sin_elevation;
    let direct = top_of_atmosphere * TRANSMITTANCE.powf(air_mass);
    let diffuse = DIFFUSE_SHARE * (top_of_atmosphere - direct);
    SunSample {
        elevation,
        azimuth,
        total_irradiance: direct + diffuse,
        diffuse_irradiance: diffuse,
        direct_irradiance: direct,
    }
}

// ── WeatherGenerator ──────────────────────────────────────────────────────────

/// One day of generated weather.
#[derive(Copy, Clone, Debug, PartialEq)]
struct DailyWeather {
    mean_temperature: f64,
    rainfall_mm:      f64,
}

/// Seeded daily weather derived from a [`Climate`].
///
/// Each day draws from its own RNG stream, so a day's weather does not
/// depend on the step length or on which days were sampled before.
#[derive(Clone, Debug)]
pub struct WeatherGenerator {
    climate:         Climate,
    seed:            u64,
    southern:        bool,
    current:         Option<(i64, DailyWeather)>,
}

impl WeatherGenerator {
    /// Probability that a given day is rainy.
    pub const RAIN_PROBABILITY: f64 = 0.3;

    /// Half the peak-to-trough daily temperature swing, °C.
    pub const DIURNAL_AMPLITUDE: f64 = 5.0;

    pub fn new(climate: Climate, latitude: f64, seed: u64) -> Self {
        Self { climate, seed, southern: latitude < 0.0, current: None }
    }

    pub fn sample(&mut self, unix_secs: i64, step_secs: u32) -> WeatherSample {
        let day = unix_secs.div_euclid(SECS_PER_DAY);
        let daily = match self.current {
            Some((d, w)) if d == day => w,
            _ => {
                let w = self.generate_day(day);
                self.current = Some((day, w));
                w
            }
        };

        // Coldest at 03:00, warmest at 15:00.
        let hour = unix_secs.rem_euclid(SECS_PER_DAY) as f64 / 3_600.0;
        let air_temperature =
            daily.mean_temperature + Self::DIURNAL_AMPLITUDE * (TAU * (hour - 15.0) / 24.0).cos();
        let rainfall_mm = daily.rainfall_mm * step_secs as f64 / SECS_PER_DAY as f64;

        WeatherSample { air_temperature, rainfall_mm }
    }

    fn generate_day(&self, day: i64) -> DailyWeather {
        let mut rng = SimRng::stream(self.seed, day as u64);

        let temps = self.climate.yearly_temperature;
        let mid = 0.5 * (temps.min + temps.max);
        let half = 0.5 * (temps.max - temps.min);
        let day_of_year = day.rem_euclid(365) as f64;
        // -1 in mid-January, +1 in mid-July (flipped south of the equator).
        let mut season = -(TAU * (day_of_year - 15.0) / 365.0).cos();
        if self.southern {
            season = -season;
        }
        let noise: f64 = rng.gen_range(-2.0..=2.0);
        let mean_temperature = mid + 0.8 * half * season + noise;

        let yearly_rain = 0.5 * (self.climate.yearly_rainfall.min + self.climate.yearly_rainfall.max);
        let rainy = rng.gen_bool(Self::RAIN_PROBABILITY);
        let rainfall_mm = if rainy && yearly_rain > 0.0 {
            let mean_wet_day = yearly_rain / (365.0 * Self::RAIN_PROBABILITY);
            rng.gen_range(0.0..2.0 * mean_wet_day)
        } else {
            0.0
        };

        DailyWeather { mean_temperature, rainfall_mm }
    }
}

// ── Implementations ───────────────────────────────────────────────────────────

/// Default meteorology: [`SunInfo`] plus [`WeatherGenerator`].
#[derive(Clone, Debug)]
pub struct ClimateMeteorology {
    pub sun:     SunInfo,
    pub weather: WeatherGenerator,
}

impl ClimateMeteorology {
    pub fn from_config(config: &EnvConfig) -> Self {
        Self {
            sun:     SunInfo::new(&config.location),
            weather: WeatherGenerator::new(
                config.climate,
                config.location.center_latitude(),
                config.seed,
            ),
        }
    }
}

impl Meteorology for ClimateMeteorology {
    fn sun(&mut self, unix_secs: i64) -> SunSample {
        self.sun.sample(unix_secs)
    }

    fn weather(&mut self, unix_secs: i64, step_secs: u32) -> WeatherSample {
        self.weather.sample(unix_secs, step_secs)
    }
}

/// Constant sun and weather.  Useful when a test needs growth inputs that do
/// not depend on the time of day.
#[derive(Copy, Clone, Debug, Default)]
pub struct FixedMeteorology {
    pub sun:     SunSample,
    pub weather: WeatherSample,
}

impl Meteorology for FixedMeteorology {
    fn sun(&mut self, _unix_secs: i64) -> SunSample {
        self.sun
    }

    /// `weather.rainfall_mm` is treated as a per-day rate.
    fn weather(&mut self, _unix_secs: i64, step_secs: u32) -> WeatherSample {
        WeatherSample {
            air_temperature: self.weather.air_temperature,
            rainfall_mm:     self.weather.rainfall_mm * step_secs as f64 / SECS_PER_DAY as f64,
        }
    }
}
