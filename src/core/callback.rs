//! Enter/exit callbacks attached to states.

use std::fmt;
use std::sync::Arc;

/// Error type returned by fallible callbacks.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// A stored enter or exit callback.
///
/// Callbacks receive the context passed to `apply_with` untouched.
pub type Callback<C> = Arc<dyn Fn(&C) -> Result<(), CallbackError> + Send + Sync>;

/// Which side of a transition a callback runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hook {
    /// Runs after the machine moves into a state.
    Enter,

    /// Runs before the machine leaves a state.
    Exit,
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enter => f.write_str("enter"),
            Self::Exit => f.write_str("exit"),
        }
    }
}

/// Wrap an infallible closure as a stored callback.
pub(crate) fn infallible<C, F>(callback: F) -> Callback<C>
where
    C: 'static,
    F: Fn(&C) + Send + Sync + 'static,
{
    Arc::new(move |context: &C| {
        callback(context);
        Ok(())
    })
}

/// Wrap a fallible closure as a stored callback.
pub(crate) fn fallible<C, F>(callback: F) -> Callback<C>
where
    C: 'static,
    F: Fn(&C) -> Result<(), CallbackError> + Send + Sync + 'static,
{
    Arc::new(callback)
}
