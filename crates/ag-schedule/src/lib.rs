//! `ag-schedule` — the action scheduler.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`id`]         | `ActionId`                                               |
//! | [`queue`]      | `TimedQueue`: min-heap keyed by `(time, sequence)`       |
//! | [`scheduler`]  | `ActionScheduler`, `ActionState`, `SchedulerEvent`       |
//! | [`error`]      | `ScheduleError`, `ScheduleResult<T>`                     |
//!
//! # Merge model (summary)
//!
//! Submitted actions wait in *pending-start*, ordered by
//! `(start_time_step, sequence)`.  Once activated they move to
//! *pending-effect*, ordered by `(end_time_step, sequence)`.  Draining up to a
//! target step repeatedly calls [`ActionScheduler::pop_due`]:
//!
//! ```text
//! start_due  = pending_start.head.start <= target
//! effect_due = pending_effect.head.end  <= target
//! neither            -> None
//! effect_due and (!start_due or effect.end <= start.start) -> Effect
//! otherwise          -> Activated (move head to pending-effect)
//! ```
//!
//! An effect therefore always runs before an activation at the same step, and
//! two actions that land on the same step run in submission order.

pub mod error;
pub mod id;
pub mod queue;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use id::ActionId;
pub use queue::TimedQueue;
pub use scheduler::{ActionScheduler, ActionState, SchedulerEvent};
