//! The `OutputWriter` trait implemented by all backend writers.

use crate::{ActionEventRow, OutputResult, StepSummaryRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`EnvOutputObserver::take_error`](crate::EnvOutputObserver::take_error).
pub trait OutputWriter {
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    fn write_action_event(&mut self, row: &ActionEventRow) -> OutputResult<()>;

    /// Push buffered rows to disk without closing.
    fn flush(&mut self) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
