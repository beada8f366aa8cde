//! # Subscriber side of the protocol.
//!
//! [`Subscriber`] is the passive sink of a stream: it receives its
//! [`Subscription`] exactly once, then a sequence of items, terminated by at
//! most one of `on_complete` or `on_error`. It never produces anything on its
//! own; demand is issued through the subscription handle, typically by driver
//! code that holds on to it.
//!
//! All callbacks take `&self` — implementors keep whatever state they need
//! behind interior mutability so the same sink can be shared as an
//! `Arc<dyn Subscriber<T>>` between the publisher and the driving code.

use std::sync::Arc;

use crate::error::StreamError;
use crate::flow::subscription::Subscription;

/// # Passive signal sink for one subscription.
///
/// Callback order is guaranteed by the publisher side:
/// 1. `on_subscribe` — exactly once, before any other signal;
/// 2. `on_next` — zero or more times, never exceeding requested demand;
/// 3. `on_error` **or** `on_complete` — at most once, and nothing after it.
///
/// `on_next` runs synchronously inside the caller's `request`, so it should
/// observe the item and return promptly. Callbacks run while the subscription
/// holds its internal state lock; do not call [`Subscription::request`] or
/// [`Subscription::cancel`] from inside a callback — issue demand from the
/// driving code instead.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use demandflow::{StreamError, Subscriber, Subscription};
///
/// struct Printer;
///
/// impl Subscriber<String> for Printer {
///     fn on_subscribe(&self, _subscription: Arc<dyn Subscription>) {}
///
///     fn on_next(&self, item: String) {
///         println!("got {item}");
///     }
///
///     fn on_error(&self, error: StreamError) {
///         eprintln!("stream failed: {error}");
///     }
///
///     fn on_complete(&self) {
///         println!("done");
///     }
/// }
/// ```
pub trait Subscriber<T>: Send + Sync {
    /// Hands over the subscription controlling this stream.
    ///
    /// Called exactly once, synchronously inside `Publisher::subscribe`,
    /// before any item flows. Implementations that want to drive demand
    /// later should store the handle; they should not request from inside
    /// this callback.
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>);

    /// Delivers one item of previously requested demand.
    fn on_next(&self, item: T);

    /// Delivers the terminal error signal. No further callbacks follow.
    fn on_error(&self, error: StreamError);

    /// Delivers the terminal completion signal. No further callbacks follow.
    fn on_complete(&self);
}
