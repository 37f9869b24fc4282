use thiserror::Error;

use crate::{ActionId, ActionState};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("{0} was never submitted to this scheduler")]
    UnknownAction(ActionId),

    #[error("{id} cannot be cancelled: already {state}")]
    NotCancellable { id: ActionId, state: ActionState },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
