/// The single error type for all eventport operations.
///
/// Every fallible API returns `eventport::Result<T>` (alias for
/// `Result<T, eventport::Error>`).
///
/// The taxonomy is small and deliberate:
///
/// | Variant | Severity | Meaning |
/// |---------|----------|---------|
/// | [`PortFull`](Self::PortFull) | non-fatal | write against a full port under [`OverflowPolicy::Fail`](crate::OverflowPolicy::Fail); the caller retries with `Block` or drops |
/// | [`Closed`](Self::Closed) | fatal to the caller | the port was torn down; writers must cease |
/// | [`Timeout`](Self::Timeout) | routine | no envelope arrived within the bound; used for idle-work scheduling, never escalated |
///
/// A malformed event kind has no variant because it cannot occur: the
/// [`Event`](crate::Event) sum type makes a discriminant outside the known
/// set unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("the port is full")]
    PortFull,

    #[error("the port is closed")]
    Closed,

    #[error("timed out waiting for an event")]
    Timeout,
}

impl Error {
    /// Whether this is the routine [`Timeout`](Self::Timeout) condition.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout)
    }
}
