use std::fmt;
use std::time::SystemTime;

/// Metadata stamped on every [`Envelope`](crate::Envelope) at write time.
///
/// - `seq`: FIFO sequence number, unique and monotonic within one port.
/// - `enqueued_at`: wall-clock time of the write, in microseconds since the
///   Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Meta {
    seq: u64,
    enqueued_at: u64,
}

impl Meta {
    /// Construct metadata with the given per-port sequence number.
    ///
    /// # Panics
    ///
    /// Panics if the system clock is set before the Unix epoch.
    pub(crate) fn new(seq: u64) -> Self {
        Self {
            seq,
            enqueued_at: SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .expect("SystemTime before Unix epoch")
                .as_micros() as u64,
        }
    }

    /// Position of the envelope in its port's FIFO order.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Time of the write, in microseconds since the Unix epoch.
    pub fn enqueued_at(&self) -> u64 {
        self.enqueued_at
    }
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Meta {{ seq: {}, enqueued_at: {} }}",
            self.seq, self.enqueued_at
        )
    }
}
