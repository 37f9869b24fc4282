//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `TimeStep` counter.  The
//! mapping to wall-clock time is held in `SimClock`:
//!
//!   timestamp = start_unix_secs + time_step * step_length_secs
//!
//! Using an integer step as the canonical time unit keeps all scheduling
//! arithmetic exact, and lets the clock and the step counter advance in
//! lock-step without drift.
//!
//! The start timestamp is rounded down to a whole multiple of the step length
//! so that every step boundary lands on a "round" wall-clock instant (a
//! 1-hour step always starts on the hour).

use std::fmt;

use chrono::{DateTime, Utc};

use crate::{AgError, AgResult, Climate, Location};

// ── TimeStep ──────────────────────────────────────────────────────────────────

/// An absolute simulation step counter.
///
/// Negative steps do not exist; conversions from signed integers go through
/// [`TryFrom<i64>`] and fail with [`AgError::NegativeTimeStep`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeStep(pub u64);

impl TimeStep {
    pub const ZERO: TimeStep = TimeStep(0);

    /// Return the step `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> TimeStep {
        TimeStep(self.0 + n)
    }

    /// Apply a signed offset, returning `None` if the result would be
    /// negative or overflow.
    #[inline]
    pub fn checked_offset(self, n: i64) -> Option<TimeStep> {
        self.0.checked_add_signed(n).map(TimeStep)
    }

    /// Steps elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: TimeStep) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for TimeStep {
    type Output = TimeStep;
    #[inline]
    fn add(self, rhs: u64) -> TimeStep {
        TimeStep(self.0 + rhs)
    }
}

impl std::ops::Sub for TimeStep {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: TimeStep) -> u64 {
        self.0 - rhs.0
    }
}

impl TryFrom<i64> for TimeStep {
    type Error = AgError;

    fn try_from(n: i64) -> Result<TimeStep, AgError> {
        u64::try_from(n)
            .map(TimeStep)
            .map_err(|_| AgError::NegativeTimeStep(n))
    }
}

impl fmt::Display for TimeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between step counts and Unix wall-clock seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Unix timestamp (seconds since epoch) of step 0, already rounded down
    /// to a multiple of `step_length_secs`.
    pub start_unix_secs: i64,
    /// How many real seconds one step represents.
    pub step_length_secs: u32,
    /// The current step, advanced by `SimClock::advance()` each iteration.
    pub current_step: TimeStep,
}

impl SimClock {
    /// Create a clock at step 0.
    ///
    /// `start_unix_secs` is rounded down to a multiple of `step_length_secs`.
    ///
    /// # Panics
    /// Panics if `step_length_secs` is zero; [`EnvConfig::validate`] rejects
    /// that before a clock is ever built.
    pub fn new(start_unix_secs: i64, step_length_secs: u32) -> Self {
        let rounded = start_unix_secs - start_unix_secs.rem_euclid(step_length_secs as i64);
        Self {
            start_unix_secs: rounded,
            step_length_secs,
            current_step: TimeStep::ZERO,
        }
    }

    /// Advance the clock by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.current_step = TimeStep(self.current_step.0 + 1);
    }

    /// Elapsed simulated seconds since step 0.
    #[inline]
    pub fn elapsed_secs(&self) -> i64 {
        self.current_step.0 as i64 * self.step_length_secs as i64
    }

    /// Current Unix timestamp corresponding to `current_step`.
    #[inline]
    pub fn current_unix_secs(&self) -> i64 {
        self.start_unix_secs + self.elapsed_secs()
    }

    /// Unix timestamp of an arbitrary step.
    #[inline]
    pub fn unix_secs_at(&self, step: TimeStep) -> i64 {
        self.start_unix_secs + step.0 as i64 * self.step_length_secs as i64
    }

    /// Current time as a UTC calendar date-time.
    pub fn current_datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.current_unix_secs(), 0).unwrap_or_default()
    }

    /// The last step boundary at or before `unix_secs`.
    pub fn step_at_or_before(&self, unix_secs: i64) -> AgResult<TimeStep> {
        let since_start = unix_secs - self.start_unix_secs;
        if since_start < 0 {
            return Err(AgError::BeforeStart {
                unix_secs,
                start_unix_secs: self.start_unix_secs,
            });
        }
        Ok(TimeStep((since_start / self.step_length_secs as i64) as u64))
    }

    // ── Step-count helpers ────────────────────────────────────────────────

    /// How many steps span `secs` seconds? (rounds up, so an action never
    /// finishes early)
    #[inline]
    pub fn steps_for_secs(&self, secs: u64) -> u64 {
        secs.div_ceil(self.step_length_secs as u64)
    }

    #[inline]
    pub fn steps_for_hours(&self, hours: u64) -> u64 {
        self.steps_for_secs(hours * 3_600)
    }

    #[inline]
    pub fn steps_for_days(&self, days: u64) -> u64 {
        self.steps_for_secs(days * 86_400)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.current_step,
            self.current_datetime().format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}

// ── EnvConfig ─────────────────────────────────────────────────────────────────

/// Configuration of one environment.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and passed to the environment builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvConfig {
    /// Human-readable environment name; also the registry key.
    pub name: String,

    /// Bounding box of the simulated field.
    pub location: Location,

    /// Long-term climate descriptor used by the meteorology and by agents
    /// choosing what to plant.
    pub climate: Climate,

    /// Unix timestamp for step 0.  Rounded down to a multiple of
    /// `step_length_secs`.
    pub start_unix_secs: i64,

    /// Seconds per step.  Must be non-zero.
    pub step_length_secs: u32,

    /// Master RNG seed for the weather generator.  The same seed always
    /// produces identical runs.
    pub seed: u64,

    /// Upper bound on the number of steps a single jump may advance.
    /// `None` means unbounded.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_jump_steps: Option<u64>,
}

impl EnvConfig {
    /// Reject configurations that would make the clock meaningless.
    pub fn validate(&self) -> AgResult<()> {
        if self.step_length_secs == 0 {
            return Err(AgError::Config("step_length_secs must be non-zero".into()));
        }
        if self.name.trim().is_empty() {
            return Err(AgError::Config("environment name must not be empty".into()));
        }
        if self.max_jump_steps == Some(0) {
            return Err(AgError::Config("max_jump_steps must be positive when set".into()));
        }
        Ok(())
    }

    /// Construct a `SimClock` pre-configured for this environment.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_unix_secs, self.step_length_secs)
    }
}
