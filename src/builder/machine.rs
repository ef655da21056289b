//! Builder for constructing state machines.

use crate::builder::options::MachineOptions;
use crate::core::{fallible, infallible, CallbackError, Event, State, TransitionGraph};
use crate::machine::Machine;
use crate::validation::GraphValidation;
use std::sync::Arc;

/// Builder for constructing state machines with a fluent API.
///
/// Every state mentioned in a transition or callback gets a node the first
/// time it appears, and the initial state is registered up front.
///
/// `build` borrows the builder, so it can be called any number of times.
/// Machines built back-to-back share one graph. Editing the builder after a
/// build copies the graph first, which leaves earlier machines untouched.
pub struct MachineBuilder<S: State, E: Event, C: 'static = ()> {
    graph: Arc<TransitionGraph<S, E, C>>,
    options: MachineOptions,
}

impl<S: State, E: Event, C: 'static> MachineBuilder<S, E, C> {
    /// Create a builder whose machines start in `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            graph: Arc::new(TransitionGraph::new(initial)),
            options: MachineOptions::default(),
        }
    }

    fn graph_mut(&mut self) -> &mut TransitionGraph<S, E, C> {
        Arc::make_mut(&mut self.graph)
    }

    /// Move from `from` to `to` on `event`.
    /// Redeclaring a `(from, event)` pair replaces its destination.
    pub fn add_transition(mut self, from: S, event: E, to: S) -> Self {
        self.graph_mut().add_transition(from, event, to);
        self
    }

    /// Run `callback` every time the machine enters `state`.
    pub fn on_enter<F>(mut self, state: S, callback: F) -> Self
    where
        F: Fn(&C) + Send + Sync + 'static,
    {
        self.graph_mut().add_enter_callback(state, infallible(callback));
        self
    }

    /// Run `callback` every time the machine leaves `state`.
    pub fn on_exit<F>(mut self, state: S, callback: F) -> Self
    where
        F: Fn(&C) + Send + Sync + 'static,
    {
        self.graph_mut().add_exit_callback(state, infallible(callback));
        self
    }

    /// Like [`on_enter`](Self::on_enter), for callbacks that can fail.
    pub fn try_on_enter<F>(mut self, state: S, callback: F) -> Self
    where
        F: Fn(&C) -> Result<(), CallbackError> + Send + Sync + 'static,
    {
        self.graph_mut().add_enter_callback(state, fallible(callback));
        self
    }

    /// Like [`on_exit`](Self::on_exit), for callbacks that can fail.
    pub fn try_on_exit<F>(mut self, state: S, callback: F) -> Self
    where
        F: Fn(&C) -> Result<(), CallbackError> + Send + Sync + 'static,
    {
        self.graph_mut().add_exit_callback(state, fallible(callback));
        self
    }

    /// Fail on events without a transition (default) or ignore them.
    pub fn strict_transitions(mut self, enabled: bool) -> Self {
        self.options.strict_transitions = enabled;
        self
    }

    /// Record every transition in the machine's history (default off).
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.options.record_history = enabled;
        self
    }

    /// Replace all options at once.
    pub fn options(mut self, options: MachineOptions) -> Self {
        self.options = options;
        self
    }

    /// The graph declared so far.
    pub fn graph(&self) -> &TransitionGraph<S, E, C> {
        &self.graph
    }

    /// Check the declared graph for unreachable states and dead ends.
    pub fn validate(&self) -> GraphValidation<S> {
        self.graph.validate()
    }

    /// Build a machine positioned at the initial state.
    ///
    /// The machine's options are the builder's options at the time of the
    /// call.
    pub fn build(&self) -> Machine<S, E, C> {
        tracing::debug!(
            initial = self.graph.state_at(self.graph.root()).name(),
            states = self.graph.state_count(),
            transitions = self.graph.transition_count(),
            strict = self.options.strict_transitions,
            "built state machine"
        );
        Machine::new(Arc::clone(&self.graph), self.options)
    }
}
