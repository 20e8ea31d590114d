use std::fmt;
use std::sync::Arc;

use crate::{BridgeConfig, EventPort, PortWriter};

/// The cross-thread event bridge: two ports and their configuration.
///
/// Created once, before the toolkit thread starts, and threaded through
/// producer and consumer code explicitly; there is no ambient global
/// state, so tests and multi-instance setups work naturally.
///
/// The **main** port carries ordinary application events; the **popup**
/// port carries menu events while a modal [`MenuSession`](crate::MenuSession)
/// is active, so tracking never interleaves with main traffic. FIFO holds
/// within each port; nothing is guaranteed between them.
///
/// Setup is two-sided, mirroring the two threads:
///
/// 1. The consumer thread creates the bridge.
/// 2. A [`PortWriter`] is moved into the toolkit thread when it is
///    spawned, binding that thread as a producer.
///
/// ```rust,no_run
/// use std::thread;
/// use eventport::{Bridge, Event};
///
/// let bridge = Bridge::default();
/// let writer = bridge.main_writer();
/// thread::spawn(move || {
///     // toolkit thread
///     let _ = writer.write(Event::AppQuitRequested);
/// });
/// let envelope = bridge.main().read();
/// ```
pub struct Bridge {
    main: Arc<EventPort>,
    popup: Arc<EventPort>,
    config: BridgeConfig,
}

impl Bridge {
    /// Create both ports per `config`. The ports live as long as the
    /// bridge; they are never individually destroyed.
    pub fn new(config: BridgeConfig) -> Self {
        tracing::debug!(
            main_capacity = config.main_capacity(),
            popup_capacity = config.popup_capacity(),
            policy = %config.overflow_policy(),
            "bridge created"
        );
        Self {
            main: Arc::new(EventPort::bounded(config.main_capacity())),
            popup: Arc::new(EventPort::bounded(config.popup_capacity())),
            config,
        }
    }

    /// The configuration the bridge was built with.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// The main event port (consumer surface).
    pub fn main(&self) -> &EventPort {
        &self.main
    }

    /// The popup-menu event port (consumer surface, modal sessions only).
    pub fn popup(&self) -> &EventPort {
        &self.popup
    }

    /// A producer handle for the main port, using the configured default
    /// overflow policy. Clone freely; move one into each producer thread.
    pub fn main_writer(&self) -> PortWriter {
        PortWriter::new(Arc::clone(&self.main), self.config.overflow_policy())
    }

    /// A producer handle for the popup-menu port.
    pub fn popup_writer(&self) -> PortWriter {
        PortWriter::new(Arc::clone(&self.popup), self.config.overflow_policy())
    }

    /// Tear both ports down. Blocked readers and writers wake with
    /// [`Error::Closed`](crate::Error::Closed); queued envelopes are still
    /// drained by subsequent reads.
    pub fn close(&self) {
        self.main.close();
        self.popup.close();
    }
}

impl Default for Bridge {
    fn default() -> Self {
        Bridge::new(BridgeConfig::default())
    }
}

impl fmt::Debug for Bridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bridge")
            .field("main", &self.main)
            .field("popup", &self.popup)
            .field("config", &self.config)
            .finish()
    }
}
