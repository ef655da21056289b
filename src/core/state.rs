//! State and event traits.
//!
//! States and events are opaque identifiers supplied by the embedding
//! application. The engine uses them as map keys and hands them back in
//! results and errors; it never inspects them otherwise.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: states are returned by value and recorded in history
/// - `Eq` + `Hash`: states key the transition graph
/// - `Debug`: states appear in errors
/// - `Send` + `Sync`: built machines can be moved across threads
///
/// # Example
///
/// ```rust
/// use statecraft::core::State;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum JobState {
///     Queued,
///     Running,
///     Done,
/// }
///
/// impl State for JobState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Queued => "Queued",
///             Self::Running => "Running",
///             Self::Done => "Done",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Done)
///     }
/// }
///
/// assert!(JobState::Done.is_final());
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Only graph validation looks at this: a final state without outgoing
    /// transitions is not reported as a dead end.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Trait for the event types that drive transitions.
///
/// ```rust
/// use statecraft::core::Event;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum JobEvent {
///     Start,
///     Finish,
/// }
///
/// impl Event for JobEvent {
///     fn name(&self) -> &str {
///         match self {
///             Self::Start => "Start",
///             Self::Finish => "Finish",
///         }
///     }
/// }
/// ```
pub trait Event: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}
