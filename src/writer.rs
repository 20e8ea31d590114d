use std::fmt;
use std::sync::Arc;

use crate::{Event, EventPort, OverflowPolicy, Result};

/// Cloneable producer handle for one port of a [`Bridge`](crate::Bridge).
///
/// Obtained from [`Bridge::main_writer`](crate::Bridge::main_writer) or
/// [`Bridge::popup_writer`](crate::Bridge::popup_writer) and moved into the
/// producer thread when it is spawned; this is the thread-side half of
/// bridge initialization. Writers never block the producer under the
/// default policy, and multiple writers may target the same port
/// concurrently without external locking.
#[derive(Clone)]
pub struct PortWriter {
    port: Arc<EventPort>,
    policy: OverflowPolicy,
}

impl PortWriter {
    pub(crate) fn new(port: Arc<EventPort>, policy: OverflowPolicy) -> Self {
        Self { port, policy }
    }

    /// Signaling write under the bridge's configured overflow policy.
    ///
    /// # Errors
    ///
    /// [`Error::PortFull`](crate::Error::PortFull) or
    /// [`Error::Closed`](crate::Error::Closed), per the policy.
    pub fn write(&self, event: Event) -> Result {
        self.port.write(event, self.policy)
    }

    /// Signaling write with an explicit overflow policy.
    pub fn write_with(&self, event: Event, policy: OverflowPolicy) -> Result {
        self.port.write(event, policy)
    }

    /// Silent write: appends without waking a blocked reader, for calling
    /// contexts where raising a wake condition is unsafe. Takes the policy
    /// explicitly since such contexts usually must not block either.
    pub fn write_silent(&self, event: Event, policy: OverflowPolicy) -> Result {
        self.port.write_silent(event, policy)
    }

    /// The port this writer appends to.
    pub fn port(&self) -> &EventPort {
        &self.port
    }
}

impl fmt::Debug for PortWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortWriter")
            .field("policy", &self.policy)
            .field("port", &self.port)
            .finish()
    }
}
