//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert them into
//! `AgError` via `From` impls or wrap `AgError` as one variant.

use thiserror::Error;

/// The top-level error type for `ag-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum AgError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("time step {0} is negative")]
    NegativeTimeStep(i64),

    #[error("timestamp {unix_secs} precedes the simulation start {start_unix_secs}")]
    BeforeStart { unix_secs: i64, start_unix_secs: i64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `ag-*` crates.
pub type AgResult<T> = Result<T, AgError>;
