//! The `Agent` struct.

use std::fmt;

use tracing::{debug, warn};

use ag_action::Action;
use ag_core::{ResourceKind, ResourceList};
use ag_env::Environment;
use ag_schedule::ActionId;

use crate::{AgentError, AgentResult, optimal_plants, qualified_plants};

/// A named party with a resource inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Agent {
    name:      String,
    inventory: ResourceList,
}

impl Agent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), inventory: ResourceList::new() }
    }

    /// Start with `resources` already in the inventory.
    pub fn with_resources(name: impl Into<String>, resources: &ResourceList) -> Self {
        let mut agent = Self::new(name);
        agent.add_resources(resources);
        agent
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inventory(&self) -> &ResourceList {
        &self.inventory
    }

    /// Quantity held of `kind`; zero if never added.
    pub fn resource(&self, kind: ResourceKind) -> u64 {
        self.inventory.get(&kind).copied().unwrap_or(0)
    }

    pub fn add_resource(&mut self, kind: ResourceKind, quantity: u64) {
        let held = self.inventory.entry(kind).or_insert(0);
        *held = held.saturating_add(quantity);
    }

    pub fn add_resources(&mut self, resources: &ResourceList) {
        for (&kind, &quantity) in resources {
            self.add_resource(kind, quantity);
        }
    }

    /// The first resource kind `cost` asks for more of than is held.
    fn shortfall(&self, cost: &ResourceList) -> Option<AgentError> {
        cost.iter().find_map(|(&kind, &required)| {
            let available = self.resource(kind);
            (required > available).then_some(AgentError::NotEnoughResources { kind, required, available })
        })
    }

    fn deduct(&mut self, cost: &ResourceList) {
        for (&kind, &quantity) in cost {
            if let Some(held) = self.inventory.get_mut(&kind) {
                debug_assert!(*held >= quantity, "deducting unchecked cost");
                *held = held.saturating_sub(quantity);
            }
        }
    }

    /// Submit `action` to `env` after checking its cost.  The cost is
    /// deducted only if the environment accepts the action.
    pub fn take_action(&mut self, env: &mut Environment, action: Action) -> AgentResult<ActionId> {
        if let Some(err) = self.shortfall(action.cost()) {
            warn!(agent = %self.name, %err, "action refused");
            return Err(err);
        }
        let cost = action.cost().clone();
        let id = env.receive_action(action)?;
        self.deduct(&cost);
        debug!(agent = %self.name, env = env.name(), %id, "action taken");
        Ok(id)
    }

    /// Submit several actions as one unit: the combined cost must be
    /// affordable and every action must be accepted, otherwise nothing
    /// happens.
    pub fn take_actions(&mut self, env: &mut Environment, actions: Vec<Action>) -> AgentResult<Vec<ActionId>> {
        let mut total = ResourceList::new();
        for action in &actions {
            for (&kind, &quantity) in action.cost() {
                let sum = total.entry(kind).or_insert(0);
                *sum = sum.saturating_add(quantity);
            }
        }
        if let Some(err) = self.shortfall(&total) {
            warn!(agent = %self.name, %err, "batch refused");
            return Err(err);
        }
        let ids = env.receive_actions(actions)?;
        self.deduct(&total);
        Ok(ids)
    }

    /// Plant types that tolerate `env`'s climate.
    pub fn qualified_plants(&self, env: &Environment) -> Vec<&'static str> {
        qualified_plants(&env.config().climate)
    }

    /// Plant types for which `env`'s climate is optimal.
    pub fn optimal_plants(&self, env: &Environment) -> Vec<&'static str> {
        optimal_plants(&env.config().climate)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.name)?;
        for (i, (kind, quantity)) in self.inventory.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{kind}: {quantity}")?;
        }
        f.write_str("]")
    }
}
