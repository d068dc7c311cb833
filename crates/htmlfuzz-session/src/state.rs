//! Session lifecycle

use crate::error::SessionError;
use std::fmt::{self, Display, Formatter};

/// Lifecycle state of a generation session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Constructed, output directory not yet claimed
    Init,
    /// Serving generation events
    Running,
    /// Terminal
    Stopped,
}

impl Display for SessionState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Running => "running",
            Self::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

/// Validates a state transition.
pub fn validate_transition(from: SessionState, to: SessionState) -> Result<(), SessionError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(SessionError::IllegalTransition { from, to })
    }
}

/// States reachable from `from` in one step
#[must_use]
pub fn allowed_transitions(from: SessionState) -> &'static [SessionState] {
    use SessionState::*;
    match from {
        Init => &[Running, Stopped],
        Running => &[Stopped],
        Stopped => &[],
    }
}
