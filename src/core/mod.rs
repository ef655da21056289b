//! Core state machine types.
//!
//! This module contains the data side of the engine:
//! - State and event capabilities via the `State` and `Event` traits
//! - The arena-backed `TransitionGraph` with per-state callbacks
//! - The transition journal kept by machines that record history

mod callback;
mod graph;
mod history;
mod state;

pub use callback::{Callback, CallbackError, Hook};
pub(crate) use callback::{fallible, infallible};
pub use graph::{NodeId, TransitionGraph};
pub use history::{StateHistory, StateTransition};
pub use state::{Event, State};
