use std::fmt;

/// Controls what a write does when the port is full.
///
/// Ports are bounded (mailbox-style), so producers outrunning the consumer
/// eventually hit capacity. The policy is chosen per write call, because
/// the same producer thread may be able to block in one context and not in
/// another (a restricted toolkit callback must not suspend).
///
/// | Policy | On full port | Use case |
/// |--------|--------------|----------|
/// | [`Fail`](Self::Fail) | Return [`Error::PortFull`](crate::Error::PortFull) immediately | Restricted callbacks, droppable input |
/// | [`Block`](Self::Block) | Wait for the consumer to free space | Events that must arrive |
///
/// # Default
///
/// The default policy is `Fail`, which ensures overflow is never silent:
/// the producer sees the failure and decides, rather than the bridge
/// quietly discarding input or stalling the toolkit thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum OverflowPolicy {
    /// Fail fast with [`Error::PortFull`](crate::Error::PortFull).
    #[default]
    Fail,

    /// Wait for space in the port.
    ///
    /// The writer suspends until the consumer reads an envelope or the
    /// port is closed (in which case the write fails with
    /// [`Error::Closed`](crate::Error::Closed)). Never use this from the
    /// toolkit thread's restricted callbacks.
    Block,
}

impl OverflowPolicy {
    /// Returns `true` if this is the [`Fail`](Self::Fail) policy.
    pub fn is_fail(&self) -> bool {
        matches!(self, OverflowPolicy::Fail)
    }

    /// Returns `true` if this is the [`Block`](Self::Block) policy.
    pub fn is_block(&self) -> bool {
        matches!(self, OverflowPolicy::Block)
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowPolicy::Fail => write!(f, "Fail"),
            OverflowPolicy::Block => write!(f, "Block"),
        }
    }
}
