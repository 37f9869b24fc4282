//! `ag-server` — a registry of named environments and agents.
//!
//! # Locking
//!
//! Each environment sits behind its own `Arc<Mutex<Environment>>`; a lock is
//! held for exactly one submission or one jump.  Agents have their own
//! mutex.  `agent_take_action` locks the agent before the environment, and
//! nothing locks them the other way round.
//!
//! # Status taxonomy
//!
//! | [`Status`]            | Raised when                                        |
//! |-----------------------|----------------------------------------------------|
//! | `EnvNotFound`         | no environment with that name                      |
//! | `AgentNotFound`       | no agent with that name                            |
//! | `AlreadyExists`       | a name is registered twice                         |
//! | `NotEnoughResources`  | the agent cannot afford the action                 |
//! | `InvalidArgument`     | bad configuration, backward or oversized jump, action in the past |
//! | `Unknown`             | a lock was poisoned by a panicking holder          |

pub mod error;
pub mod server;


pub use error::{ServerError, ServerResult, Status};
pub use server::{AgentServer, SharedEnvironment};
