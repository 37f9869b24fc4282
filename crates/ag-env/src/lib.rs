//! `ag-env` — the environment: one terrain, one scheduler, one clock.
//!
//! # Jump loop
//!
//! ```text
//! jump_to_time_step(target):
//!   reject target < current        (BackwardJump)
//!   reject target - current > max  (JumpTooLarge)
//!   while let Some(event) = scheduler.pop_due(target):
//!     Activated(action) → notify observer
//!     Effect(action)    → simulate_to_time_step(action.end)
//!                         terrain.execute_action(action)
//!   simulate_to_time_step(target)
//!
//! simulate_to_time_step(t): until current == t, one step:
//!   ① sample sun and weather at the current timestamp
//!   ② radiation for every plant      (parallel with the `parallel` feature)
//!   ③ soil water balance + grow_step (sequential, coordinate order)
//!   ④ advance clock
//! ```
//!
//! Every effect therefore runs with the clock standing exactly on the
//! action's end step, after all growth up to that step and before any growth
//! past it.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Computes per-plant radiation on Rayon's thread pool.   |
//! | `serde`    | Serde derives on `ag-core` and `ag-terrain` types.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ag_action::Action;
//! use ag_core::{Coordinate, TimeStep};
//! use ag_env::EnvironmentBuilder;
//!
//! let mut env = EnvironmentBuilder::new(config).grid(4, 4).build()?;
//! env.receive_action(Action::add([Coordinate::new(0, 0)], TimeStep(0), 0, "Bean")?)?;
//! env.jump_forward_time_step(24)?;
//! ```

pub mod builder;
pub mod environment;
pub mod error;
pub mod meteorology;
pub mod observer;


pub use builder::EnvironmentBuilder;
pub use environment::Environment;
pub use error::{EnvError, EnvResult};
pub use meteorology::{ClimateMeteorology, FixedMeteorology, Meteorology, SunInfo, WeatherGenerator};
pub use observer::{EnvObserver, NoopObserver, StepReport};
