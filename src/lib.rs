//! Statecraft: an embeddable, event-driven finite state machine engine.
//!
//! Callers declare a transition graph over their own state and event types,
//! attach enter/exit callbacks to states, and then drive a [`Machine`] by
//! applying events. The engine is synchronous and holds no resources beyond
//! the graph itself.
//!
//! # Core Concepts
//!
//! - **State / Event**: caller-supplied identifiers via the [`State`] and
//!   [`Event`] traits (or the [`state_enum!`] and [`event_enum!`] macros)
//! - **TransitionGraph**: `(state, event) -> state` edges plus per-state
//!   callbacks, stored as an arena so cycles are free
//! - **MachineBuilder**: fluent declaration of the graph and options
//! - **Machine**: current state plus the `apply` algorithm, with strict or
//!   lenient handling of events that have no transition
//!
//! # Example
//!
//! ```rust
//! use statecraft::{event_enum, state_enum, MachineBuilder, MachineError};
//!
//! state_enum! {
//!     enum Job { Init, Running, Paused, Completed }
//!     final: [Completed]
//! }
//!
//! event_enum! {
//!     enum Command { Run, Pause, End }
//! }
//!
//! let mut machine = MachineBuilder::<Job, Command>::new(Job::Init)
//!     .add_transition(Job::Init, Command::Run, Job::Running)
//!     .add_transition(Job::Running, Command::Pause, Job::Paused)
//!     .add_transition(Job::Running, Command::End, Job::Completed)
//!     .add_transition(Job::Paused, Command::Run, Job::Running)
//!     .on_enter(Job::Completed, |_| println!("job finished"))
//!     .build();
//!
//! machine.apply(Command::Run).unwrap();
//! machine.apply(Command::Pause).unwrap();
//! machine.apply(Command::Run).unwrap();
//! machine.apply(Command::End).unwrap();
//! assert_eq!(machine.state(), &Job::Completed);
//!
//! let err = machine.apply(Command::Run).unwrap_err();
//! assert!(matches!(
//!     err,
//!     MachineError::UnexpectedEventType { state: Job::Completed, event: Command::Run }
//! ));
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod validation;

// Re-export commonly used types
pub use builder::{MachineBuilder, MachineOptions};
pub use crate::core::{Event, Hook, State, TransitionGraph};
pub use machine::{Machine, MachineError};
