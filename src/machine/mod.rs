//! Machine runtime.
//!
//! A [`Machine`] is the imperative shell around a [`TransitionGraph`]: it
//! holds the current position in the graph and drives it forward one event
//! at a time, running enter/exit callbacks synchronously on the caller's
//! thread.
//!
//! # Callback contract
//!
//! Exit callbacks of the old state run before the move and enter callbacks
//! of the new state run after it, each list in registration order. A failing
//! callback stops `apply` at once and its error is returned wrapped in
//! [`MachineError::CallbackFailed`]. Panics are not caught.
//!
//! [`TransitionGraph`]: crate::core::TransitionGraph

mod error;
mod runtime;

pub use error::MachineError;
pub use runtime::Machine;
