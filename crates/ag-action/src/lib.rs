//! `ag-action` — the actions agents issue against a terrain.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`action`]  | `Action`, `ActionKind`                                  |
//! | [`effect`]  | `TerrainEffect` impl: what each kind does to a terrain  |
//! | [`error`]   | `ActionError`, `ActionResult<T>`                        |
//!
//! # Lifecycle
//!
//! An `Action` is validated once, at construction, and is immutable from
//! then on.  It becomes *active* at `start_time_step` and its effect is
//! applied to the terrain at `end_time_step`.  Effects never fail: a target
//! that is gone by the time the effect lands is a logged no-op.
//!
//! | Kind      | Effect per target cell                     | When the target is invalid        |
//! |-----------|--------------------------------------------|-----------------------------------|
//! | `Add`     | plant a new plant of the named type        | occupied or soil-less: no-op      |
//! | `Remove`  | delete the plant                           | no plant: no-op                   |
//! | `Harvest` | detach ripe produce, drop old produce      | no plant / nothing ripe: no-op    |
//! | `Water`   | add `water_amount` mm to the soil          | soil-less: no-op                  |

pub mod action;
pub mod effect;
pub mod error;


pub use action::{Action, ActionKind};
pub use error::{ActionError, ActionResult};
