use thiserror::Error;

use ag_core::TimeStep;

/// Reasons an action is rejected at construction.  Every variant describes a
/// malformed action; none of them ever reaches a scheduler.
#[derive(Debug, Error, PartialEq)]
pub enum ActionError {
    #[error("malformed action: negative duration {0}")]
    NegativeDuration(i64),

    #[error("malformed action: duration of {0} steps does not fit a signed step count")]
    DurationOverflow(u64),

    #[error("malformed action: end step overflows (start {start}, duration {duration})")]
    EndStepOverflow { start: TimeStep, duration: u64 },

    #[error("malformed action: empty applied range")]
    EmptyRange,

    #[error("malformed action: water amount {0} must be finite and non-negative")]
    InvalidWaterAmount(f64),

    #[error("malformed action: unknown plant type {0:?}")]
    UnknownPlantType(String),

    #[error("malformed action: start timestamp {unix_secs} precedes the simulation start")]
    BeforeStart { unix_secs: i64 },
}

pub type ActionResult<T> = Result<T, ActionError>;
