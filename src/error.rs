//! Error types surfaced through the subscriber protocol.
//!
//! The protocol has exactly one failure mode: a single `request` call asking
//! for more items than the publisher's configured bound. It is delivered once
//! via [`Subscriber::on_error`](crate::Subscriber::on_error) and terminates
//! the subscription permanently; there is no retry or recovery path inside
//! the gate. Every other odd condition (requesting after a terminal signal,
//! cancelling twice, requesting the exact remaining balance) is defined as a
//! no-op, not an error.

use thiserror::Error;

/// # Errors produced by a subscription.
///
/// Carried by the `on_error` callback; never panicked or thrown across the
/// `request`/`cancel` boundary, so the one-terminal-signal invariant stays
/// mechanically checkable.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// A single `request` asked for more items than the publisher will ever emit.
    #[error("requested {requested} items in one call; bound is {bound}")]
    DemandOverflow {
        /// The raw demand passed to `request`.
        requested: u64,
        /// The total emission bound configured on the publisher.
        bound: u64,
    },
}

impl StreamError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use demandflow::StreamError;
    ///
    /// let err = StreamError::DemandOverflow { requested: 11, bound: 10 };
    /// assert_eq!(err.as_label(), "demand_overflow");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            StreamError::DemandOverflow { .. } => "demand_overflow",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            StreamError::DemandOverflow { requested, bound } => {
                format!("demand overflow: requested={requested} bound={bound}")
            }
        }
    }
}
