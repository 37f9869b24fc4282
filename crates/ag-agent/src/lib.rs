//! `ag-agent` — the parties that act on an environment.
//!
//! An [`Agent`] owns a resource inventory.  Submitting an action checks the
//! inventory against the action's cost, forwards the action to the
//! environment, and only then deducts the cost:
//!
//! | Outcome                         | Inventory  | Environment       |
//! |---------------------------------|------------|-------------------|
//! | `Ok(ActionId)`                  | cost taken | action queued     |
//! | `Err(NotEnoughResources { .. })`| unchanged  | unchanged         |
//! | `Err(InvalidArgument(..))`      | unchanged  | unchanged         |
//!
//! The cost is charged whether or not the effect later turns out to be a
//! no-op, and is not refunded when the action is cancelled.

pub mod agent;
pub mod error;
pub mod selection;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use error::{AgentError, AgentResult};
pub use selection::{optimal_plants, qualified_plants};
