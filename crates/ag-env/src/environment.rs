//! The `Environment` struct and its jump loop.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use ag_action::Action;
use ag_core::{EnvConfig, SimClock, TimeStep};
use ag_schedule::{ActionId, ActionScheduler, ActionState, SchedulerEvent};
use ag_terrain::{GrowthInput, HarvestedProduce, Terrain, WaterBalanceInput};

use crate::{EnvError, EnvObserver, EnvResult, Meteorology, NoopObserver, StepReport};

/// One simulated field.
///
/// Owns exactly one [`Terrain`] and one [`ActionScheduler`].  The clock only
/// moves forward, and only through the `jump_*` methods.
///
/// Create via [`EnvironmentBuilder`][crate::EnvironmentBuilder].
pub struct Environment {
    pub(crate) config:      EnvConfig,
    pub(crate) clock:       SimClock,
    pub(crate) terrain:     Terrain,
    pub(crate) scheduler:   ActionScheduler,
    pub(crate) meteorology: Box<dyn Meteorology>,
}

impl Environment {
    // ── Queries ───────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    #[inline]
    pub fn current_time_step(&self) -> TimeStep {
        self.clock.current_step
    }

    /// Unix timestamp of the current step, always
    /// `start + current_time_step * step_length`.
    #[inline]
    pub fn current_timestamp(&self) -> i64 {
        self.clock.current_unix_secs()
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    /// Drain the harvest store.  Plants and soil change only through
    /// scheduled actions.
    pub fn take_harvested(&mut self) -> Vec<HarvestedProduce> {
        self.terrain.take_harvested()
    }

    pub fn action_state(&self, id: ActionId) -> Option<ActionState> {
        self.scheduler.state(id)
    }

    /// Actions submitted but not yet effected or cancelled.
    pub fn pending_actions(&self) -> usize {
        self.scheduler.len()
    }

    /// Earliest step at which a pending action activates or takes effect.
    pub fn next_event_step(&mut self) -> Option<TimeStep> {
        self.scheduler.next_event_step()
    }

    // ── Actions ───────────────────────────────────────────────────────────

    /// Queue `action`.  Its effect will be applied when the clock reaches
    /// its end step.
    ///
    /// An action whose end step is already behind the clock is rejected with
    /// [`EnvError::ActionInPast`].  One that started in the past but ends now
    /// or later is accepted and activates on the next jump.
    pub fn receive_action(&mut self, action: Action) -> EnvResult<ActionId> {
        self.check_not_past(&action)?;
        let id = self.scheduler.submit(action);
        debug!(env = %self.config.name, %id, "action received");
        Ok(id)
    }

    /// Queue several actions, in order.  Either all are accepted or, if any
    /// one ends in the past, none are.
    pub fn receive_actions(&mut self, actions: Vec<Action>) -> EnvResult<Vec<ActionId>> {
        for action in &actions {
            self.check_not_past(action)?;
        }
        Ok(actions
            .into_iter()
            .map(|a| self.scheduler.submit(a))
            .collect())
    }

    /// Drop the recorded state of effected and cancelled actions.
    /// [`action_state`](Self::action_state) returns `None` for them afterwards.
    pub fn forget_finished_actions(&mut self) -> usize {
        self.scheduler.forget_finished()
    }

    /// Cancel a queued action.  Its cost is not refunded.
    pub fn cancel_action(&mut self, id: ActionId) -> EnvResult<()> {
        self.scheduler.cancel(id)?;
        debug!(env = %self.config.name, %id, "action cancelled");
        Ok(())
    }

    fn check_not_past(&self, action: &Action) -> EnvResult<()> {
        let current = self.clock.current_step;
        if action.end_time_step() < current {
            warn!(env = %self.config.name, action = %action, %current, "rejected action ending in the past");
            return Err(EnvError::ActionInPast { end: action.end_time_step(), current });
        }
        Ok(())
    }

    // ── Time ──────────────────────────────────────────────────────────────

    /// Advance to `target`, applying every due effect on its own step.
    pub fn jump_to_time_step(&mut self, target: TimeStep) -> EnvResult<()> {
        self.jump_to_time_step_with(target, &mut NoopObserver)
    }

    /// [`jump_to_time_step`](Self::jump_to_time_step) with observer hooks.
    ///
    /// On error the environment is left unchanged.
    pub fn jump_to_time_step_with<O: EnvObserver>(
        &mut self,
        target:   TimeStep,
        observer: &mut O,
    ) -> EnvResult<()> {
        let current = self.clock.current_step;
        if target < current {
            warn!(env = %self.config.name, %current, %target, "rejected backward jump");
            return Err(EnvError::BackwardJump {
                current,
                offset: target.0 as i64 - current.0 as i64,
            });
        }
        if let Some(max) = self.config.max_jump_steps.filter(|&max| target - current > max) {
            warn!(env = %self.config.name, %current, %target, max, "rejected oversized jump");
            return Err(EnvError::JumpTooLarge { current, target, max });
        }

        while let Some(event) = self.scheduler.pop_due(target) {
            match event {
                SchedulerEvent::Activated { id, action } => {
                    debug!(env = %self.config.name, %id, action = %action, now = %self.clock.current_step, "activated");
                    observer.on_action_activated(self.clock.current_step, id, &action);
                }
                SchedulerEvent::Effect { id, action } => {
                    self.apply_effect(id, action, observer);
                }
            }
        }
        self.simulate_to_time_step(target, observer);

        observer.on_jump_end(self.clock.current_step, &self.terrain);
        Ok(())
    }

    /// `jump_to_time_step(current + steps)`.  Negative `steps` fail with
    /// [`EnvError::BackwardJump`].
    pub fn jump_forward_time_step(&mut self, steps: i64) -> EnvResult<()> {
        self.jump_forward_time_step_with(steps, &mut NoopObserver)
    }

    pub fn jump_forward_time_step_with<O: EnvObserver>(
        &mut self,
        steps:    i64,
        observer: &mut O,
    ) -> EnvResult<()> {
        let current = self.clock.current_step;
        let Some(target) = current.checked_offset(steps).filter(|_| steps >= 0) else {
            warn!(env = %self.config.name, %current, steps, "rejected backward jump");
            return Err(EnvError::BackwardJump { current, offset: steps });
        };
        self.jump_to_time_step_with(target, observer)
    }

    /// Advance to the last step boundary at or before `unix_secs`.
    /// Returns the step reached.
    pub fn jump_to_timestamp(&mut self, unix_secs: i64) -> EnvResult<TimeStep> {
        let target = self.clock.step_at_or_before(unix_secs)?;
        self.jump_to_time_step(target)?;
        Ok(target)
    }

    fn apply_effect<O: EnvObserver>(&mut self, id: ActionId, action: Arc<Action>, observer: &mut O) {
        let end = action.end_time_step();
        debug_assert!(
            end >= self.clock.current_step,
            "{id} ends at {end} but the clock is already at {}",
            self.clock.current_step
        );
        self.simulate_to_time_step(end, observer);
        self.terrain.execute_action(action.as_ref());
        debug!(env = %self.config.name, %id, action = %action, now = %end, "effected");
        observer.on_action_effected(end, id, &action, &self.terrain);
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    fn simulate_to_time_step<O: EnvObserver>(&mut self, target: TimeStep, observer: &mut O) {
        while self.clock.current_step < target {
            self.step(observer);
        }
    }

    /// Simulate one step: radiation, soil water and growth for every plant.
    fn step<O: EnvObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_step;
        let unix_secs = self.clock.current_unix_secs();
        let step_secs = self.clock.step_length_secs;
        observer.on_step_start(now);

        let sun = self.meteorology.sun(unix_secs);
        let weather = self.meteorology.weather(unix_secs, step_secs);

        self.terrain.update_radiation(&sun);

        let mut evaporated_mm = 0.0;
        self.terrain.for_each_plant_with_soil(|plant, soil| {
            let relative_water = match soil {
                Some(soil) => {
                    let radiation = plant.radiation();
                    evaporated_mm += soil.update_water_content(&WaterBalanceInput {
                        rainfall_mm: weather.rainfall_mm,
                        sunlit_flux: radiation.total_flux_density_sunlit,
                        shaded_flux: radiation.total_flux_density_shaded,
                        step_secs,
                    });
                    soil.relative_water()
                }
                None => 0.0,
            };
            plant.grow_step(&GrowthInput {
                air_temperature: weather.air_temperature,
                relative_water,
                step_secs,
            });
        });

        self.clock.advance();
        trace!(env = %self.config.name, step = %now, "step simulated");

        let report = StepReport {
            time_step: now,
            unix_secs,
            sun,
            weather,
            live_plants: self.terrain.plant_count(),
            evaporated_mm,
            total_water_mm: self.terrain.total_water(),
        };
        observer.on_step_end(&report, &self.terrain);
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("name", &self.config.name)
            .field("clock", &self.clock)
            .field("plants", &self.terrain.plant_count())
            .field("pending_actions", &self.scheduler.len())
            .finish()
    }
}
