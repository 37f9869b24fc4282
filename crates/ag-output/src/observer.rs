//! `EnvOutputObserver<W>` — bridges `EnvObserver` to an `OutputWriter`.

use ag_action::Action;
use ag_core::TimeStep;
use ag_env::{EnvObserver, StepReport};
use ag_schedule::ActionId;
use ag_terrain::Terrain;

use crate::row::{ActionEventKind, ActionEventRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// An [`EnvObserver`] that writes step summaries and action events to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `EnvObserver`
/// methods have no return value.  After a jump returns, check for errors
/// with [`take_error`][Self::take_error].  Buffers are flushed at the end of
/// every jump.
pub struct EnvOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> EnvOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Close the writer.  Call once after the last jump.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn event(&mut self, now: TimeStep, id: ActionId, action: &Action, event: ActionEventKind) {
        let row = ActionEventRow {
            time_step:  now.0,
            action_id:  id.0,
            event,
            kind:       action.kind().label(),
            cells:      action.applied_range().len() as u64,
            start_step: action.start_time_step().0,
            end_step:   action.end_time_step().0,
        };
        let result = self.writer.write_action_event(&row);
        self.store_err(result);
    }
}

impl<W: OutputWriter> EnvObserver for EnvOutputObserver<W> {
    fn on_step_end(&mut self, report: &StepReport, _terrain: &Terrain) {
        let row = StepSummaryRow {
            time_step:        report.time_step.0,
            unix_time_secs:   report.unix_secs,
            live_plants:      report.live_plants as u64,
            air_temperature:  report.weather.air_temperature,
            rainfall_mm:      report.weather.rainfall_mm,
            total_irradiance: report.sun.total_irradiance,
            evaporated_mm:    report.evaporated_mm,
            total_water_mm:   report.total_water_mm,
        };
        let result = self.writer.write_step_summary(&row);
        self.store_err(result);
    }

    fn on_action_activated(&mut self, now: TimeStep, id: ActionId, action: &Action) {
        self.event(now, id, action, ActionEventKind::Activated);
    }

    fn on_action_effected(&mut self, now: TimeStep, id: ActionId, action: &Action, _terrain: &Terrain) {
        self.event(now, id, action, ActionEventKind::Effected);
    }

    fn on_jump_end(&mut self, _now: TimeStep, _terrain: &Terrain) {
        let result = self.writer.flush();
        self.store_err(result);
    }
}
