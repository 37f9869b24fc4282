use ag_core::ResourceKind;
use ag_env::EnvError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("not enough {kind}: need {required}, have {available}")]
    NotEnoughResources {
        kind:      ResourceKind,
        required:  u64,
        available: u64,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] EnvError),
}

pub type AgentResult<T> = Result<T, AgentError>;
