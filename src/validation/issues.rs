//! Problems graph validation can report.

use crate::core::State;
use thiserror::Error;

/// A structural problem found in a transition graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphIssue<S: State> {
    #[error("state '{}' is not reachable from the initial state", .state.name())]
    UnreachableState { state: S },

    #[error("state '{}' has no outgoing transitions and is not final", .state.name())]
    DeadEnd { state: S },
}

impl<S: State> GraphIssue<S> {
    /// The state the issue was found on.
    pub fn state(&self) -> &S {
        match self {
            Self::UnreachableState { state } | Self::DeadEnd { state } => state,
        }
    }
}
