use ag_core::{AgError, TimeStep};
use ag_schedule::ScheduleError;
use ag_terrain::TerrainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error(transparent)]
    Core(#[from] AgError),

    #[error("terrain error: {0}")]
    Terrain(#[from] TerrainError),

    #[error("cannot jump backward: clock is at {current}, requested offset {offset}")]
    BackwardJump { current: TimeStep, offset: i64 },

    #[error("jump from {current} to {target} exceeds the limit of {max} steps")]
    JumpTooLarge {
        current: TimeStep,
        target:  TimeStep,
        max:     u64,
    },

    #[error("action ends at {end}, already behind the clock at {current}")]
    ActionInPast { end: TimeStep, current: TimeStep },

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

pub type EnvResult<T> = Result<T, EnvError>;
