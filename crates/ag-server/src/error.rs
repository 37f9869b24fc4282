use std::fmt;

use ag_agent::AgentError;
use ag_env::EnvError;
use thiserror::Error;

/// Coarse outcome code of a registry call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    EnvNotFound,
    AgentNotFound,
    AlreadyExists,
    NotEnoughResources,
    InvalidArgument,
    Unknown,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ok                 => "OK",
            Self::EnvNotFound        => "ENV_NOT_FOUND",
            Self::AgentNotFound      => "AGENT_NOT_FOUND",
            Self::AlreadyExists      => "ALREADY_EXISTS",
            Self::NotEnoughResources => "NOT_ENOUGH_RESOURCES",
            Self::InvalidArgument    => "INVALID_ARGUMENT",
            Self::Unknown            => "UNKNOWN",
        })
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("environment {0:?} not found")]
    EnvNotFound(String),

    #[error("agent {0:?} not found")]
    AgentNotFound(String),

    #[error("{kind} {name:?} already exists")]
    AlreadyExists { kind: &'static str, name: String },

    #[error(transparent)]
    NotEnoughResources(AgentError),

    #[error("invalid argument: {0}")]
    InvalidArgument(#[source] EnvError),

    #[error("internal error: {0}")]
    Unknown(String),
}

impl ServerError {
    pub fn status(&self) -> Status {
        match self {
            Self::EnvNotFound(_)        => Status::EnvNotFound,
            Self::AgentNotFound(_)      => Status::AgentNotFound,
            Self::AlreadyExists { .. }  => Status::AlreadyExists,
            Self::NotEnoughResources(_) => Status::NotEnoughResources,
            Self::InvalidArgument(_)    => Status::InvalidArgument,
            Self::Unknown(_)            => Status::Unknown,
        }
    }
}

impl From<EnvError> for ServerError {
    fn from(err: EnvError) -> Self {
        Self::InvalidArgument(err)
    }
}

impl From<AgentError> for ServerError {
    fn from(err: AgentError) -> Self {
        match err {
            AgentError::InvalidArgument(env) => Self::InvalidArgument(env),
            other => Self::NotEnoughResources(other),
        }
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
