//! Builder API for declaring state machines.
//!
//! This module provides the fluent [`MachineBuilder`], the
//! [`MachineOptions`] it bakes into each machine, and macros for declaring
//! state and event enums with minimal boilerplate.
//!
//! # Example
//!
//! ```
//! use statecraft::builder::MachineBuilder;
//! use statecraft::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Connection {
//!         Disconnected,
//!         Connecting,
//!         Connected,
//!     }
//! }
//!
//! event_enum! {
//!     enum Signal {
//!         Dial,
//!         Established,
//!         Dropped,
//!     }
//! }
//!
//! let mut machine = MachineBuilder::<Connection, Signal>::new(Connection::Disconnected)
//!     .add_transition(Connection::Disconnected, Signal::Dial, Connection::Connecting)
//!     .add_transition(Connection::Connecting, Signal::Established, Connection::Connected)
//!     .add_transition(Connection::Connecting, Signal::Dropped, Connection::Disconnected)
//!     .add_transition(Connection::Connected, Signal::Dropped, Connection::Disconnected)
//!     .build();
//!
//! machine.apply(Signal::Dial).unwrap();
//! machine.apply(Signal::Established).unwrap();
//! assert_eq!(machine.state(), &Connection::Connected);
//!
//! // Strict by default: no transition for `Dial` while connected.
//! assert!(machine.apply(Signal::Dial).is_err());
//! ```

mod machine;
pub mod macros;
mod options;

pub use machine::MachineBuilder;
pub use options::MachineOptions;
