use std::fmt;

use crate::{Event, EventKind, Meta};

/// The unit carried through an [`EventPort`](crate::EventPort).
///
/// Pairs the event payload with [`Meta`] (sequence number, enqueue time).
/// Envelopes are created by the port at write time and destroyed, or their
/// owned handles transferred, when the consumer takes the event out with
/// [`into_event`](Self::into_event).
#[derive(Debug, PartialEq)]
pub struct Envelope {
    meta: Meta,
    event: Event,
}

impl Envelope {
    pub(crate) fn new(event: Event, seq: u64) -> Self {
        Self {
            meta: Meta::new(seq),
            event,
        }
    }

    /// Returns a reference to the event payload.
    ///
    /// This is a convenience method for pattern matching.
    #[inline]
    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Take the event out, consuming the envelope. Variants carrying a
    /// [`MessageHandle`](crate::MessageHandle) hand their payload's
    /// ownership to the caller here.
    #[inline]
    pub fn into_event(self) -> Event {
        self.event
    }

    /// Returns the envelope metadata (sequence number, enqueue time).
    #[inline]
    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    /// Shorthand for `self.event().kind()`.
    #[inline]
    pub fn kind(&self) -> EventKind {
        self.event.kind()
    }

    /// Shorthand for `self.meta().seq()`.
    #[inline]
    pub fn seq(&self) -> u64 {
        self.meta.seq()
    }

    /// Shorthand for `self.event().payload_size()`.
    #[inline]
    pub fn payload_size(&self) -> usize {
        self.event.payload_size()
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Envelope {{ seq: {}, kind: {} }}",
            self.meta.seq(),
            self.kind()
        )
    }
}
