//! Plain data row types written by output backends.

use std::fmt;

/// What one simulated step looked like.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSummaryRow {
    pub time_step:        u64,
    pub unix_time_secs:   i64,
    pub live_plants:      u64,
    pub air_temperature:  f64,
    pub rainfall_mm:      f64,
    pub total_irradiance: f64,
    pub evaporated_mm:    f64,
    pub total_water_mm:   f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionEventKind {
    Activated,
    Effected,
}

impl fmt::Display for ActionEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Activated => "activated",
            Self::Effected  => "effected",
        })
    }
}

/// One activation or effect of a scheduled action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionEventRow {
    /// Clock when the event was processed.
    pub time_step:  u64,
    pub action_id:  u64,
    pub event:      ActionEventKind,
    /// `ActionKind::label()`: add, remove, harvest or water.
    pub kind:       &'static str,
    pub cells:      u64,
    pub start_step: u64,
    pub end_step:   u64,
}
