//! `ag-core` — foundational types for the `agro_twin` agricultural simulation.
//!
//! This crate is a dependency of every other `ag-*` crate.  It has no `ag-*`
//! dependencies and only a handful of external ones (`rand`, `chrono`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `Coordinate`, `Location`                              |
//! | [`time`]        | `TimeStep`, `SimClock`, `EnvConfig`                   |
//! | [`climate`]     | `Climate`, `ClimateZone`, `MinMax`                    |
//! | [`resource`]    | `ResourceKind`, `ResourceList`                        |
//! | [`rng`]         | `SimRng` (seeded, deterministic)                      |
//! | [`sun`]         | `SunSample`, `WeatherSample`                          |
//! | [`error`]       | `AgError`, `AgResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod climate;
pub mod error;
pub mod geo;
pub mod resource;
pub mod rng;
pub mod sun;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use climate::{Climate, ClimateZone, MinMax};
pub use error::{AgError, AgResult};
pub use geo::{Coordinate, Location};
pub use resource::{ResourceKind, ResourceList};
pub use rng::SimRng;
pub use sun::{SunSample, WeatherSample};
pub use time::{EnvConfig, SimClock, TimeStep};
