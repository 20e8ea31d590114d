use crate::OverflowPolicy;

/// Configuration for a [`Bridge`](crate::Bridge) and its two ports.
///
/// Use the builder pattern to customize, or use [`Default`] for sensible
/// defaults.
///
/// # Examples
///
/// ```rust
/// use eventport::{BridgeConfig, OverflowPolicy};
///
/// let config = BridgeConfig::default()
///     .with_main_capacity(512)                    // Larger main mailbox
///     .with_popup_capacity(128)                   // Larger popup mailbox
///     .with_overflow_policy(OverflowPolicy::Block); // Writers wait for space
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BridgeConfig {
    /// Capacity of the main event port.
    /// Determines how many envelopes can be queued before writes overflow.
    /// Default: 256
    main_capacity: usize,

    /// Capacity of the popup-menu event port. Modal tracking traffic is
    /// light, so this can be much smaller than the main port.
    /// Default: 64
    popup_capacity: usize,

    /// Overflow policy used by [`PortWriter::write`](crate::PortWriter::write)
    /// when the caller does not pick one explicitly.
    /// Default: [`OverflowPolicy::Fail`]
    overflow_policy: OverflowPolicy,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        BridgeConfig {
            main_capacity: 256,
            popup_capacity: 64,
            overflow_policy: OverflowPolicy::Fail,
        }
    }
}

impl BridgeConfig {
    /// Set the main port capacity. Clamped to at least 1.
    pub fn with_main_capacity(mut self, capacity: usize) -> Self {
        self.main_capacity = capacity.max(1);
        self
    }

    /// Returns the main port capacity.
    pub fn main_capacity(&self) -> usize {
        self.main_capacity
    }

    /// Set the popup-menu port capacity. Clamped to at least 1.
    pub fn with_popup_capacity(mut self, capacity: usize) -> Self {
        self.popup_capacity = capacity.max(1);
        self
    }

    /// Returns the popup-menu port capacity.
    pub fn popup_capacity(&self) -> usize {
        self.popup_capacity
    }

    /// Set the default overflow policy for writer handles.
    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// Returns the default overflow policy for writer handles.
    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_and_defaults() {
        let config = BridgeConfig::default();
        assert_eq!(config.main_capacity(), 256);
        assert_eq!(config.popup_capacity(), 64);
        assert!(config.overflow_policy().is_fail());

        let config = config
            .with_main_capacity(0)
            .with_popup_capacity(8)
            .with_overflow_policy(OverflowPolicy::Block);
        assert_eq!(config.main_capacity(), 1);
        assert_eq!(config.popup_capacity(), 8);
        assert!(config.overflow_policy().is_block());
    }
}
