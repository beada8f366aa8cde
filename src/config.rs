//! # Publisher configuration.
//!
//! [`FlowConfig`] fixes how much a publisher will ever emit to a single
//! subscriber. Each subscription gets its own copy at construction; changing
//! the config afterwards never affects subscriptions already handed out.
//!
//! # Example
//! ```
//! use demandflow::FlowConfig;
//!
//! let mut cfg = FlowConfig::default();
//! cfg.bound = 25;
//!
//! assert_eq!(cfg.bound, 25);
//! ```

/// Per-subscription emission limits.
///
/// The same config also acts as the overflow threshold: a single `request`
/// asking for more than `bound` items is refused with a terminal error rather
/// than silently truncated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowConfig {
    /// Total number of items a subscription will ever emit.
    pub bound: u64,
}

impl Default for FlowConfig {
    /// Provides a default configuration:
    /// - `bound = 10`
    fn default() -> Self {
        Self { bound: 10 }
    }
}
