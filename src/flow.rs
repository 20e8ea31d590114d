use std::fmt;

/// Returned by every [`Dispatch`](crate::Dispatch) handler to steer the
/// dispatch loop.
///
/// | Value | Behavior |
/// |-------|----------|
/// | `Continue` | Read and dispatch the next envelope |
/// | `Quit` | Leave the loop; no further envelope is read |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flow {
    #[default]
    Continue,
    Quit,
}

impl Flow {
    /// Returns `true` if the loop should exit.
    pub fn is_quit(&self) -> bool {
        matches!(self, Flow::Quit)
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flow::Continue => write!(f, "continue"),
            Flow::Quit => write!(f, "quit"),
        }
    }
}
