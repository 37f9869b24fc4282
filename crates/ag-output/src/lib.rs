//! `ag-output` — environment output writers for the agro_twin framework.
//!
//! | Backend | Files created                              |
//! |---------|--------------------------------------------|
//! | CSV     | `step_summaries.csv`, `action_events.csv`  |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`EnvOutputObserver`], which implements `ag_env::EnvObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ag_output::{CsvWriter, EnvOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = EnvOutputObserver::new(writer);
//! env.jump_forward_time_step_with(24, &mut obs)?;
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EnvOutputObserver;
pub use row::{ActionEventKind, ActionEventRow, StepSummaryRow};
pub use writer::OutputWriter;
