//! Errors raised while applying events.

use crate::core::{CallbackError, Event, Hook, State};
use thiserror::Error;

/// Errors that can occur during `apply`.
#[derive(Debug, Error)]
pub enum MachineError<S: State, E: Event> {
    /// Strict mode only: the current state has no transition for the event.
    /// The machine's state is unchanged.
    #[error("unexpected event '{}' in state '{}'", .event.name(), .state.name())]
    UnexpectedEventType { state: S, event: E },

    /// A registered callback returned an error.
    ///
    /// An exit failure leaves the machine in `state`, the state being left.
    /// An enter failure happens after the move, so `state` is the
    /// destination and the machine is already in it.
    #[error("{} callback for state '{}' failed", .hook, .state.name())]
    CallbackFailed {
        state: S,
        hook: Hook,
        #[source]
        source: CallbackError,
    },
}

impl<S: State, E: Event> MachineError<S, E> {
    /// The state the error was raised in.
    pub fn state(&self) -> &S {
        match self {
            Self::UnexpectedEventType { state, .. } | Self::CallbackFailed { state, .. } => state,
        }
    }
}
