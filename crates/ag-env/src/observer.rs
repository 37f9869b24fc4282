//! Environment observer trait for progress reporting and data collection.

use ag_action::Action;
use ag_core::{SunSample, TimeStep, WeatherSample};
use ag_schedule::ActionId;
use ag_terrain::Terrain;

/// What happened during one simulated step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepReport {
    /// The step that was simulated; the clock now stands at `time_step + 1`.
    pub time_step:    TimeStep,
    /// Unix timestamp at the start of the step.
    pub unix_secs:    i64,
    pub sun:          SunSample,
    pub weather:      WeatherSample,
    pub live_plants:  usize,
    /// Water evaporated from all plant-bearing cells this step, mm.
    pub evaporated_mm: f64,
    /// Water held by the whole terrain after the step, mm.
    pub total_water_mm: f64,
}

/// Callbacks invoked by the environment's jump loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: effect logger
///
/// ```rust,ignore
/// struct EffectLog(Vec<(TimeStep, ActionId)>);
///
/// impl EnvObserver for EffectLog {
///     fn on_action_effected(&mut self, now: TimeStep, id: ActionId, _: &Action, _: &Terrain) {
///         self.0.push((now, id));
///     }
/// }
/// ```
pub trait EnvObserver {
    /// Called before step `time_step` is simulated.
    fn on_step_start(&mut self, _time_step: TimeStep) {}

    /// Called after a step has been simulated and the clock advanced.
    fn on_step_end(&mut self, _report: &StepReport, _terrain: &Terrain) {}

    /// Called when an action reaches its start step.  `now` is the clock at
    /// that moment.
    fn on_action_activated(&mut self, _now: TimeStep, _id: ActionId, _action: &Action) {}

    /// Called right after an action's effect has been applied.  `now` always
    /// equals the action's end step.
    fn on_action_effected(
        &mut self,
        _now:     TimeStep,
        _id:      ActionId,
        _action:  &Action,
        _terrain: &Terrain,
    ) {}

    /// Called once at the end of every successful jump.
    fn on_jump_end(&mut self, _now: TimeStep, _terrain: &Terrain) {}
}

/// An [`EnvObserver`] that does nothing.
pub struct NoopObserver;

impl EnvObserver for NoopObserver {}
