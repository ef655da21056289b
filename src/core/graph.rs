//! Transition graph storage.
//!
//! The graph is an arena: every state gets exactly one [`Node`] stored in a
//! `Vec` and addressed by a stable [`NodeId`]. Transitions point at node ids
//! rather than owning their destinations, so cycles and self-loops need no
//! shared ownership, and a cloned graph keeps every id valid.

use super::callback::{Callback, Hook};
use super::state::{Event, State};
use std::collections::{HashMap, VecDeque};
use std::fmt;

/// Stable handle for a node inside a [`TransitionGraph`].
///
/// Ids are only meaningful for the graph that issued them, or a clone of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in registration order.
    pub fn index(self) -> usize {
        self.0
    }
}

struct Node<S, E, C> {
    state: S,
    transitions: HashMap<E, NodeId>,
    on_enter: Vec<Callback<C>>,
    on_exit: Vec<Callback<C>>,
}

impl<S: State, E: Event, C> Node<S, E, C> {
    fn new(state: S) -> Self {
        Self {
            state,
            transitions: HashMap::new(),
            on_enter: Vec::new(),
            on_exit: Vec::new(),
        }
    }

    fn callbacks(&self, hook: Hook) -> &[Callback<C>] {
        match hook {
            Hook::Enter => &self.on_enter,
            Hook::Exit => &self.on_exit,
        }
    }
}

impl<S: State, E: Event, C> Clone for Node<S, E, C> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            transitions: self.transitions.clone(),
            on_enter: self.on_enter.clone(),
            on_exit: self.on_exit.clone(),
        }
    }
}

/// Mapping from `(state, event)` pairs to destination states, plus the
/// enter/exit callbacks registered for each state.
///
/// Nodes are created lazily the first time a state is mentioned, so every
/// state that appears as a transition source or destination, or that has a
/// callback, is registered exactly once. The initial state passed to
/// [`TransitionGraph::new`] is always the root node.
///
/// # Example
///
/// ```rust
/// use statecraft::core::TransitionGraph;
/// use statecraft::{event_enum, state_enum};
///
/// state_enum! {
///     enum Door { Closed, Open }
/// }
///
/// event_enum! {
///     enum Push { Toggle }
/// }
///
/// let mut graph: TransitionGraph<Door, Push> = TransitionGraph::new(Door::Closed);
/// graph.add_transition(Door::Closed, Push::Toggle, Door::Open);
/// graph.add_transition(Door::Open, Push::Toggle, Door::Closed);
///
/// let open = graph.transition_for(graph.root(), &Push::Toggle).unwrap();
/// assert_eq!(graph.state_of(open), Some(&Door::Open));
/// ```
pub struct TransitionGraph<S: State, E: Event, C = ()> {
    nodes: Vec<Node<S, E, C>>,
    index: HashMap<S, NodeId>,
}

impl<S: State, E: Event, C> TransitionGraph<S, E, C> {
    /// Create a graph whose root node stands for `initial`.
    pub fn new(initial: S) -> Self {
        let mut graph = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        };
        graph.get_or_create_node(initial);
        graph
    }

    /// The node for the initial state.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Return the node for `state`, registering a fresh one if needed.
    pub fn get_or_create_node(&mut self, state: S) -> NodeId {
        if let Some(id) = self.index.get(&state) {
            return *id;
        }

        let id = NodeId(self.nodes.len());
        self.index.insert(state.clone(), id);
        self.nodes.push(Node::new(state));
        id
    }

    /// Declare that `event` moves `from` to `to`.
    ///
    /// Redeclaring an existing `(from, event)` pair replaces its destination.
    /// The replaced destination is returned so callers can notice overwrites.
    pub fn add_transition(&mut self, from: S, event: E, to: S) -> Option<S> {
        let from_id = self.get_or_create_node(from);
        let to_id = self.get_or_create_node(to);

        let previous = self.nodes[from_id.0]
            .transitions
            .insert(event.clone(), to_id)?;

        let replaced = self.nodes[previous.0].state.clone();
        if previous != to_id {
            tracing::debug!(
                from = self.nodes[from_id.0].state.name(),
                event = event.name(),
                replaced = replaced.name(),
                to = self.nodes[to_id.0].state.name(),
                "overwrote transition"
            );
        }
        Some(replaced)
    }

    /// Append a callback that runs every time the machine enters `state`.
    pub fn add_enter_callback(&mut self, state: S, callback: Callback<C>) {
        let id = self.get_or_create_node(state);
        self.nodes[id.0].on_enter.push(callback);
    }

    /// Append a callback that runs every time the machine leaves `state`.
    pub fn add_exit_callback(&mut self, state: S, callback: Callback<C>) {
        let id = self.get_or_create_node(state);
        self.nodes[id.0].on_exit.push(callback);
    }

    /// Destination reached from `node` on `event`, or `None` when no
    /// transition is declared.
    pub fn transition_for(&self, node: NodeId, event: &E) -> Option<NodeId> {
        self.nodes.get(node.0)?.transitions.get(event).copied()
    }

    /// Node registered for `state`, if any.
    pub fn node_id(&self, state: &S) -> Option<NodeId> {
        self.index.get(state).copied()
    }

    /// State a node stands for.
    pub fn state_of(&self, id: NodeId) -> Option<&S> {
        self.nodes.get(id.0).map(|node| &node.state)
    }

    /// Whether a node is registered for `state`.
    pub fn contains(&self, state: &S) -> bool {
        self.index.contains_key(state)
    }

    /// Number of registered states.
    pub fn state_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of declared `(state, event)` transitions.
    pub fn transition_count(&self) -> usize {
        self.nodes.iter().map(|node| node.transitions.len()).sum()
    }

    /// Registered states, in the order they were first mentioned.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.nodes.iter().map(|node| &node.state)
    }

    /// All declared transitions as `(from, event, to)`.
    ///
    /// Sources come in registration order; events within one source are
    /// unordered.
    pub fn transitions(&self) -> impl Iterator<Item = (&S, &E, &S)> {
        self.nodes.iter().flat_map(move |node| {
            node.transitions
                .iter()
                .map(move |(event, to)| (&node.state, event, &self.nodes[to.0].state))
        })
    }

    /// Events with a declared transition out of `node`.
    pub fn events_from(&self, node: NodeId) -> impl Iterator<Item = &E> {
        self.nodes
            .get(node.0)
            .into_iter()
            .flat_map(|node| node.transitions.keys())
    }

    /// Number of enter callbacks registered for `state`.
    pub fn enter_callback_count(&self, state: &S) -> usize {
        self.callback_count(state, Hook::Enter)
    }

    /// Number of exit callbacks registered for `state`.
    pub fn exit_callback_count(&self, state: &S) -> usize {
        self.callback_count(state, Hook::Exit)
    }

    fn callback_count(&self, state: &S, hook: Hook) -> usize {
        self.node_id(state)
            .map_or(0, |id| self.nodes[id.0].callbacks(hook).len())
    }

    /// Callbacks for one side of a node, in registration order.
    ///
    /// `id` must have been issued by this graph.
    pub(crate) fn callbacks(&self, id: NodeId, hook: Hook) -> &[Callback<C>] {
        self.nodes[id.0].callbacks(hook)
    }

    /// State for an id issued by this graph.
    pub(crate) fn state_at(&self, id: NodeId) -> &S {
        &self.nodes[id.0].state
    }

    pub(crate) fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Mark every node reachable from the root, indexed by `NodeId::index`.
    pub(crate) fn reachable_from_root(&self) -> Vec<bool> {
        let mut seen = vec![false; self.nodes.len()];
        let mut queue = VecDeque::from([self.root()]);
        seen[self.root().0] = true;

        while let Some(id) = queue.pop_front() {
            for next in self.nodes[id.0].transitions.values() {
                if !seen[next.0] {
                    seen[next.0] = true;
                    queue.push_back(*next);
                }
            }
        }

        seen
    }
}

impl<S: State, E: Event, C> Clone for TransitionGraph<S, E, C> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            index: self.index.clone(),
        }
    }
}

impl<S: State, E: Event, C> fmt::Debug for TransitionGraph<S, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionGraph")
            .field("states", &self.states().collect::<Vec<_>>())
            .field("transitions", &self.transition_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::callback::infallible;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    crate::state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
            Failed,
        }
        final: [Complete, Failed]
    }

    crate::event_enum! {
        enum TestEvent {
            Start,
            Finish,
            Fail,
        }
    }

    type Graph = TransitionGraph<TestState, TestEvent>;

    #[test]
    fn new_graph_registers_root() {
        let graph = Graph::new(TestState::Initial);

        assert_eq!(graph.state_count(), 1);
        assert_eq!(graph.state_of(graph.root()), Some(&TestState::Initial));
        assert_eq!(graph.node_id(&TestState::Initial), Some(graph.root()));
        assert_eq!(graph.transition_count(), 0);
    }

    #[test]
    fn get_or_create_node_is_idempotent() {
        let mut graph = Graph::new(TestState::Initial);

        let first = graph.get_or_create_node(TestState::Processing);
        let second = graph.get_or_create_node(TestState::Processing);

        assert_eq!(first, second);
        assert_eq!(graph.state_count(), 2);
        assert_eq!(graph.get_or_create_node(TestState::Initial), graph.root());
    }

    #[test]
    fn add_transition_registers_both_states() {
        let mut graph = Graph::new(TestState::Initial);

        graph.add_transition(TestState::Processing, TestEvent::Finish, TestState::Complete);

        assert!(graph.contains(&TestState::Processing));
        assert!(graph.contains(&TestState::Complete));
        assert!(!graph.contains(&TestState::Failed));
        assert_eq!(graph.state_count(), 3);
    }

    #[test]
    fn transition_lookup() {
        let mut graph = Graph::new(TestState::Initial);
        graph.add_transition(TestState::Initial, TestEvent::Start, TestState::Processing);

        let next = graph.transition_for(graph.root(), &TestEvent::Start);
        assert_eq!(next, graph.node_id(&TestState::Processing));
        assert_eq!(graph.transition_for(graph.root(), &TestEvent::Finish), None);
    }

    #[test]
    fn redeclared_transition_last_write_wins() {
        let mut graph = Graph::new(TestState::Initial);

        let first = graph.add_transition(TestState::Initial, TestEvent::Start, TestState::Processing);
        let second = graph.add_transition(TestState::Initial, TestEvent::Start, TestState::Failed);

        assert_eq!(first, None);
        assert_eq!(second, Some(TestState::Processing));
        assert_eq!(graph.transition_count(), 1);

        let next = graph.transition_for(graph.root(), &TestEvent::Start);
        assert_eq!(next.and_then(|id| graph.state_of(id)), Some(&TestState::Failed));
    }

    #[test]
    fn self_loops_are_allowed() {
        let mut graph = Graph::new(TestState::Initial);
        graph.add_transition(TestState::Initial, TestEvent::Start, TestState::Initial);

        assert_eq!(graph.transition_for(graph.root(), &TestEvent::Start), Some(graph.root()));
        assert_eq!(graph.state_count(), 1);
    }

    #[test]
    fn callbacks_accumulate_in_order() {
        let mut graph = Graph::new(TestState::Initial);
        let order = Arc::new(AtomicUsize::new(0));

        for expected in 0..3 {
            let order = Arc::clone(&order);
            graph.add_enter_callback(
                TestState::Processing,
                infallible(move |_: &()| {
                    assert_eq!(order.fetch_add(1, Ordering::SeqCst), expected);
                }),
            );
        }
        graph.add_exit_callback(TestState::Failed, infallible(|_: &()| {}));

        assert_eq!(graph.enter_callback_count(&TestState::Processing), 3);
        assert_eq!(graph.exit_callback_count(&TestState::Processing), 0);
        assert_eq!(graph.exit_callback_count(&TestState::Failed), 1);
        assert!(graph.contains(&TestState::Failed));

        let id = graph.node_id(&TestState::Processing).unwrap();
        for callback in graph.callbacks(id, Hook::Enter) {
            callback(&()).unwrap();
        }
        assert_eq!(order.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn transitions_lists_every_edge() {
        let mut graph = Graph::new(TestState::Initial);
        graph.add_transition(TestState::Initial, TestEvent::Start, TestState::Processing);
        graph.add_transition(TestState::Processing, TestEvent::Finish, TestState::Complete);
        graph.add_transition(TestState::Processing, TestEvent::Fail, TestState::Failed);

        let mut edges: Vec<_> = graph
            .transitions()
            .map(|(from, event, to)| (*from, *event, *to))
            .collect();
        edges.sort_by_key(|(from, event, _)| (from.name().to_string(), event.name().to_string()));

        assert_eq!(
            edges,
            vec![
                (TestState::Initial, TestEvent::Start, TestState::Processing),
                (TestState::Processing, TestEvent::Fail, TestState::Failed),
                (TestState::Processing, TestEvent::Finish, TestState::Complete),
            ]
        );

        let processing = graph.node_id(&TestState::Processing).unwrap();
        assert_eq!(graph.events_from(processing).count(), 2);
    }

    #[test]
    fn reachability_follows_transitions() {
        let mut graph = Graph::new(TestState::Initial);
        graph.add_transition(TestState::Initial, TestEvent::Start, TestState::Processing);
        graph.add_transition(TestState::Failed, TestEvent::Start, TestState::Complete);

        let reachable = graph.reachable_from_root();
        let reached = |state: TestState| reachable[graph.node_id(&state).unwrap().index()];

        assert!(reached(TestState::Initial));
        assert!(reached(TestState::Processing));
        assert!(!reached(TestState::Failed));
        assert!(!reached(TestState::Complete));
    }

    #[test]
    fn clone_keeps_ids_and_is_independent() {
        let mut graph = Graph::new(TestState::Initial);
        graph.add_transition(TestState::Initial, TestEvent::Start, TestState::Processing);

        let snapshot = graph.clone();
        graph.add_transition(TestState::Processing, TestEvent::Finish, TestState::Complete);

        assert_eq!(snapshot.node_id(&TestState::Processing), graph.node_id(&TestState::Processing));
        assert_eq!(snapshot.state_count(), 2);
        assert_eq!(graph.state_count(), 3);
    }
}
