//! Event-driven machine runtime.

use crate::builder::MachineOptions;
use crate::core::{Event, Hook, NodeId, State, StateHistory, StateTransition, TransitionGraph};
use crate::machine::error::MachineError;
use chrono::Utc;
use std::fmt;
use std::sync::Arc;

/// A running state machine.
///
/// Created by [`MachineBuilder::build`](crate::builder::MachineBuilder::build).
/// The machine shares its transition graph with every other machine built
/// from the same graph and owns only its current position, its options, and
/// its history.
///
/// `apply` runs on the calling thread and is not atomic with respect to
/// other callers: wrap a machine in a mutex if several threads drive it.
pub struct Machine<S: State, E: Event, C = ()> {
    graph: Arc<TransitionGraph<S, E, C>>,
    current: NodeId,
    strict_transitions: bool,
    record_history: bool,
    history: StateHistory<S, E>,
}

impl<S: State, E: Event, C> Machine<S, E, C> {
    pub(crate) fn new(graph: Arc<TransitionGraph<S, E, C>>, options: MachineOptions) -> Self {
        let current = graph.root();
        Self {
            graph,
            current,
            strict_transitions: options.strict_transitions,
            record_history: options.record_history,
            history: StateHistory::new(),
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> &S {
        self.graph.state_at(self.current)
    }

    /// Check if machine is in a final state (pure)
    pub fn is_final(&self) -> bool {
        self.state().is_final()
    }

    /// Whether `event` has a transition out of the current state (pure)
    pub fn can_apply(&self, event: &E) -> bool {
        self.graph.transition_for(self.current, event).is_some()
    }

    /// Events with a transition out of the current state (pure)
    pub fn permitted_events(&self) -> impl Iterator<Item = &E> {
        self.graph.events_from(self.current)
    }

    /// Whether missing transitions are reported as errors.
    pub fn is_strict(&self) -> bool {
        self.strict_transitions
    }

    /// The transition graph this machine runs on.
    pub fn graph(&self) -> &TransitionGraph<S, E, C> {
        &self.graph
    }

    /// Transitions made so far. Always empty unless history was enabled.
    pub fn history(&self) -> &StateHistory<S, E> {
        &self.history
    }

    /// Apply an event, passing `context` to every callback that runs.
    ///
    /// With a transition declared for the current state and `event`:
    /// 1. exit callbacks of the current state run, in registration order
    /// 2. the machine moves to the destination
    /// 3. enter callbacks of the destination run, in registration order
    ///
    /// Self-loops run both sides. Without a transition the call fails with
    /// [`MachineError::UnexpectedEventType`] in strict mode and is a no-op
    /// otherwise; either way no callbacks run and the state is unchanged.
    ///
    /// The first failing callback aborts the call. If it was an exit callback
    /// the machine has not moved; if it was an enter callback the machine is
    /// already in the destination state and the remaining enter callbacks are
    /// skipped.
    pub fn apply_with(&mut self, event: E, context: &C) -> Result<(), MachineError<S, E>> {
        let Some(destination) = self.graph.transition_for(self.current, &event) else {
            if self.strict_transitions {
                tracing::debug!(
                    state = self.state().name(),
                    event = event.name(),
                    "rejected event without transition"
                );
                return Err(MachineError::UnexpectedEventType {
                    state: self.state().clone(),
                    event,
                });
            }

            tracing::trace!(
                state = self.state().name(),
                event = event.name(),
                "ignored event without transition"
            );
            return Ok(());
        };

        let origin = self.current;
        self.run_callbacks(origin, Hook::Exit, context)?;

        self.current = destination;
        tracing::debug!(
            from = self.graph.state_at(origin).name(),
            event = event.name(),
            to = self.state().name(),
            "state transition"
        );

        if self.record_history {
            let from = self.graph.state_at(origin).clone();
            let to = self.state().clone();
            self.history.record(StateTransition {
                from,
                event,
                to,
                timestamp: Utc::now(),
            });
        }

        self.run_callbacks(destination, Hook::Enter, context)
    }

    fn run_callbacks(
        &self,
        node: NodeId,
        hook: Hook,
        context: &C,
    ) -> Result<(), MachineError<S, E>> {
        let callbacks = self.graph.callbacks(node, hook);
        if callbacks.is_empty() {
            return Ok(());
        }

        tracing::trace!(
            state = self.graph.state_at(node).name(),
            %hook,
            count = callbacks.len(),
            "running callbacks"
        );

        for callback in callbacks {
            callback(context).map_err(|source| MachineError::CallbackFailed {
                state: self.graph.state_at(node).clone(),
                hook,
                source,
            })?;
        }

        Ok(())
    }
}

impl<S: State, E: Event, C: Default> Machine<S, E, C> {
    /// Apply an event with a default context.
    ///
    /// Same as `apply_with(event, &C::default())`.
    pub fn apply(&mut self, event: E) -> Result<(), MachineError<S, E>> {
        self.apply_with(event, &C::default())
    }
}

impl<S: State, E: Event, C> Clone for Machine<S, E, C> {
    fn clone(&self) -> Self {
        Self {
            graph: Arc::clone(&self.graph),
            current: self.current,
            strict_transitions: self.strict_transitions,
            record_history: self.record_history,
            history: self.history.clone(),
        }
    }
}

impl<S: State, E: Event, C> fmt::Debug for Machine<S, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("state", self.state())
            .field("strict_transitions", &self.strict_transitions)
            .field("record_history", &self.record_history)
            .field("transitions", &self.history.len())
            .finish()
    }
}
