//! `AgentServer` — the registry itself.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use tracing::info;

use ag_action::Action;
use ag_agent::Agent;
use ag_core::{EnvConfig, ResourceKind, ResourceList, TimeStep};
use ag_env::{Environment, EnvironmentBuilder};
use ag_schedule::ActionId;
use ag_terrain::Terrain;

use crate::{ServerError, ServerResult};

/// An environment shared between the registry and its callers.
pub type SharedEnvironment = Arc<Mutex<Environment>>;

/// An agent together with the environment it acts on.
#[derive(Debug)]
struct RegisteredAgent {
    agent:    Agent,
    env_name: String,
}

/// Thread-safe registry of environments and agents, addressed by name.
#[derive(Default)]
pub struct AgentServer {
    environments: RwLock<HashMap<String, SharedEnvironment>>,
    agents:       RwLock<HashMap<String, Arc<Mutex<RegisteredAgent>>>>,
}

fn poisoned<T>(_: T) -> ServerError {
    ServerError::Unknown("registry lock poisoned".into())
}

fn lock<T>(m: &Mutex<T>) -> ServerResult<MutexGuard<'_, T>> {
    m.lock().map_err(poisoned)
}

impl AgentServer {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Environments ──────────────────────────────────────────────────────

    /// Register an environment with a default grid and meteorology.
    pub fn create_environment(&self, config: EnvConfig) -> ServerResult<()> {
        self.register(EnvironmentBuilder::new(config))
    }

    /// Register an environment over a prepared terrain.
    pub fn create_environment_with_terrain(&self, config: EnvConfig, terrain: Terrain) -> ServerResult<()> {
        self.register(EnvironmentBuilder::new(config).terrain(terrain))
    }

    /// Build `builder` and register the result under its configured name.
    pub fn register(&self, builder: EnvironmentBuilder) -> ServerResult<()> {
        let env = builder.build()?;
        let name = env.name().to_owned();

        let mut environments = self.environments.write().map_err(poisoned)?;
        if environments.contains_key(&name) {
            return Err(ServerError::AlreadyExists { kind: "environment", name });
        }
        info!(env = %name, "environment registered");
        environments.insert(name, Arc::new(Mutex::new(env)));
        Ok(())
    }

    pub fn get_environment(&self, name: &str) -> ServerResult<SharedEnvironment> {
        self.environments
            .read()
            .map_err(poisoned)?
            .get(name)
            .cloned()
            .ok_or_else(|| ServerError::EnvNotFound(name.to_owned()))
    }

    /// Run `f` with the named environment locked.
    pub fn with_environment<R>(&self, name: &str, f: impl FnOnce(&mut Environment) -> R) -> ServerResult<R> {
        let env = self.get_environment(name)?;
        let mut guard = lock(&*env)?;
        Ok(f(&mut guard))
    }

    /// Names of every registered environment, sorted.
    pub fn environment_names(&self) -> ServerResult<Vec<String>> {
        let mut names: Vec<String> = self.environments.read().map_err(poisoned)?.keys().cloned().collect();
        names.sort_unstable();
        Ok(names)
    }

    /// Advance the named environment to the last step boundary at or before
    /// `unix_secs`.  Returns the step reached.
    pub fn simulate_to_time(&self, env_name: &str, unix_secs: i64) -> ServerResult<TimeStep> {
        self.with_environment(env_name, |env| env.jump_to_timestamp(unix_secs))?
            .map_err(ServerError::from)
    }

    /// Advance the named environment by `steps`.  Returns the step reached.
    pub fn simulate_forward(&self, env_name: &str, steps: i64) -> ServerResult<TimeStep> {
        self.with_environment(env_name, |env| -> ServerResult<TimeStep> {
            env.jump_forward_time_step(steps)?;
            Ok(env.current_time_step())
        })?
    }

    // ── Agents ────────────────────────────────────────────────────────────

    /// Register an agent acting on `env_name`.
    pub fn create_agent(&self, name: &str, env_name: &str, resources: &ResourceList) -> ServerResult<()> {
        self.get_environment(env_name)?;

        let mut agents = self.agents.write().map_err(poisoned)?;
        if agents.contains_key(name) {
            return Err(ServerError::AlreadyExists { kind: "agent", name: name.to_owned() });
        }
        let registered = RegisteredAgent {
            agent:    Agent::with_resources(name, resources),
            env_name: env_name.to_owned(),
        };
        info!(agent = name, env = env_name, "agent registered");
        agents.insert(name.to_owned(), Arc::new(Mutex::new(registered)));
        Ok(())
    }

    fn agent(&self, name: &str) -> ServerResult<Arc<Mutex<RegisteredAgent>>> {
        self.agents
            .read()
            .map_err(poisoned)?
            .get(name)
            .cloned()
            .ok_or_else(|| ServerError::AgentNotFound(name.to_owned()))
    }

    /// Have the named agent submit `action` to its environment.
    pub fn agent_take_action(&self, agent_name: &str, action: Action) -> ServerResult<ActionId> {
        let agent = self.agent(agent_name)?;
        let mut agent = lock(&*agent)?;
        let env = self.get_environment(&agent.env_name)?;
        let mut env = lock(&*env)?;
        Ok(agent.agent.take_action(&mut env, action)?)
    }

    pub fn agent_resources(&self, agent_name: &str) -> ServerResult<ResourceList> {
        let agent = self.agent(agent_name)?;
        let agent = lock(&*agent)?;
        Ok(agent.agent.inventory().clone())
    }

    pub fn add_agent_resource(&self, agent_name: &str, kind: ResourceKind, quantity: u64) -> ServerResult<()> {
        let agent = self.agent(agent_name)?;
        lock(&*agent)?.agent.add_resource(kind, quantity);
        Ok(())
    }

    /// Name of the environment the agent acts on.
    pub fn agent_environment(&self, agent_name: &str) -> ServerResult<String> {
        let agent = self.agent(agent_name)?;
        let agent = lock(&*agent)?;
        Ok(agent.env_name.clone())
    }
}
