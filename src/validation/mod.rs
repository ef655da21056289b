//! Structural validation of transition graphs.
//!
//! Validation is advisory: building a machine never runs it and never fails.
//! It uses Stillwater's `Validation` type so one pass reports every problem
//! in the graph instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use statecraft::builder::MachineBuilder;
//! use statecraft::validation::GraphIssue;
//! use statecraft::{event_enum, state_enum};
//! use stillwater::validation::Validation;
//!
//! state_enum! {
//!     enum Job { Queued, Running, Orphan, Done }
//!     final: [Done]
//! }
//!
//! event_enum! {
//!     enum Signal { Start, Finish }
//! }
//!
//! let builder = MachineBuilder::<Job, Signal>::new(Job::Queued)
//!     .add_transition(Job::Queued, Signal::Start, Job::Running)
//!     .add_transition(Job::Running, Signal::Finish, Job::Done)
//!     .add_transition(Job::Orphan, Signal::Start, Job::Running);
//!
//! match builder.validate() {
//!     Validation::Failure(issues) => {
//!         assert_eq!(issues.len(), 1);
//!         assert!(issues
//!             .iter()
//!             .any(|issue| matches!(issue, GraphIssue::UnreachableState { state: Job::Orphan })));
//!     }
//!     Validation::Success(_) => panic!("expected an unreachable state"),
//! }
//! ```

mod issues;

pub use issues::GraphIssue;

use crate::core::{Event, State, TransitionGraph};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Accumulated outcome of validating a graph.
pub type GraphValidation<S> = Validation<(), NonEmptyVec<GraphIssue<S>>>;

impl<S: State, E: Event, C> TransitionGraph<S, E, C> {
    /// Check the graph for unreachable states and non-final dead ends,
    /// accumulating ALL issues.
    pub fn validate(&self) -> GraphValidation<S> {
        let reachable = self.reachable_from_root();
        let mut checks: Vec<GraphValidation<S>> = Vec::new();

        for id in self.node_ids() {
            let state = self.state_at(id);

            let check = if reachable[id.index()] {
                Validation::success(())
            } else {
                Validation::fail(GraphIssue::UnreachableState {
                    state: state.clone(),
                })
            };
            checks.push(check);

            let check = if self.events_from(id).next().is_none() && !state.is_final() {
                Validation::fail(GraphIssue::DeadEnd {
                    state: state.clone(),
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::state_enum! {
        enum TestState {
            Initial,
            Processing,
            Stranded,
            Complete,
        }
        final: [Complete]
    }

    crate::event_enum! {
        enum TestEvent {
            Start,
            Finish,
        }
    }

    type Graph = TransitionGraph<TestState, TestEvent>;

    fn issues(graph: &Graph) -> Vec<GraphIssue<TestState>> {
        match graph.validate() {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    #[test]
    fn well_formed_graph_passes() {
        let mut graph = Graph::new(TestState::Initial);
        graph.add_transition(TestState::Initial, TestEvent::Start, TestState::Processing);
        graph.add_transition(TestState::Processing, TestEvent::Finish, TestState::Complete);

        assert!(graph.validate().is_success());
    }

    #[test]
    fn cyclic_graph_without_final_state_passes() {
        let mut graph = Graph::new(TestState::Initial);
        graph.add_transition(TestState::Initial, TestEvent::Start, TestState::Processing);
        graph.add_transition(TestState::Processing, TestEvent::Start, TestState::Initial);

        assert!(graph.validate().is_success());
    }

    #[test]
    fn lone_initial_state_is_a_dead_end() {
        let graph = Graph::new(TestState::Initial);

        assert_eq!(
            issues(&graph),
            vec![GraphIssue::DeadEnd {
                state: TestState::Initial
            }]
        );
    }

    #[test]
    fn validation_accumulates_all_issues() {
        let mut graph = Graph::new(TestState::Initial);
        graph.add_transition(TestState::Initial, TestEvent::Start, TestState::Processing);
        graph.add_transition(TestState::Stranded, TestEvent::Finish, TestState::Complete);

        let found = issues(&graph);

        assert_eq!(found.len(), 3);
        assert!(found.contains(&GraphIssue::DeadEnd {
            state: TestState::Processing
        }));
        assert!(found.contains(&GraphIssue::UnreachableState {
            state: TestState::Stranded
        }));
        assert!(found.contains(&GraphIssue::UnreachableState {
            state: TestState::Complete
        }));
    }

    #[test]
    fn issue_reports_its_state() {
        let issue = GraphIssue::DeadEnd {
            state: TestState::Stranded,
        };

        assert_eq!(issue.state(), &TestState::Stranded);
        assert_eq!(
            issue.to_string(),
            "state 'Stranded' has no outgoing transitions and is not final"
        );
    }
}
