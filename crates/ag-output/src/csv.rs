//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `step_summaries.csv`
//! - `action_events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ActionEventRow, OutputResult, StepSummaryRow};

pub const STEP_SUMMARIES_FILE: &str = "step_summaries.csv";
pub const ACTION_EVENTS_FILE: &str = "action_events.csv";

/// Writes environment output to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    events:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join(STEP_SUMMARIES_FILE))?;
        summaries.write_record([
            "time_step",
            "unix_time_secs",
            "live_plants",
            "air_temperature",
            "rainfall_mm",
            "total_irradiance",
            "evaporated_mm",
            "total_water_mm",
        ])?;

        let mut events = Writer::from_path(dir.join(ACTION_EVENTS_FILE))?;
        events.write_record(["time_step", "action_id", "event", "kind", "cells", "start_step", "end_step"])?;

        Ok(Self { summaries, events, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.time_step.to_string(),
            row.unix_time_secs.to_string(),
            row.live_plants.to_string(),
            format!("{:.3}", row.air_temperature),
            format!("{:.3}", row.rainfall_mm),
            format!("{:.3}", row.total_irradiance),
            format!("{:.4}", row.evaporated_mm),
            format!("{:.4}", row.total_water_mm),
        ])?;
        Ok(())
    }

    fn write_action_event(&mut self, row: &ActionEventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.time_step.to_string(),
            row.action_id.to_string(),
            row.event.to_string(),
            row.kind.to_owned(),
            row.cells.to_string(),
            row.start_step.to_string(),
            row.end_step.to_string(),
        ])?;
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.summaries.flush()?;
        self.events.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.flush()
    }
}
