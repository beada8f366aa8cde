//! # Recording subscriber for tests and drivers.
//!
//! [`ProbeSink`] stores the subscription handed to it — so external code can
//! issue `request`/`cancel` at arbitrary times, including from other threads
//! and interleaved with sleeps — and records every signal in arrival order.
//! This is the sink back-pressure scenarios are exercised with: request a
//! small batch, wait, request again, eventually cancel.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::StreamError;
use crate::flow::{Subscriber, Subscription};

/// One recorded subscriber signal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Signal<T> {
    /// An `on_next` delivery carrying the item.
    Next(T),
    /// The terminal `on_error` delivery.
    Error(StreamError),
    /// The terminal `on_complete` delivery.
    Complete,
}

/// Subscriber that stores its subscription and records all signals.
///
/// Interior-mutable and `Send + Sync`, so one `Arc<ProbeSink<T>>` can be
/// handed to the publisher and kept by the driving code at the same time.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use demandflow::{ProbeSink, Publisher, Signal, SupplyFn, SupplyPublisher};
///
/// let publisher = SupplyPublisher::new(SupplyFn::new(|| "hi"));
/// let sink = Arc::new(ProbeSink::new());
/// publisher.subscribe(sink.clone());
///
/// sink.subscription().expect("subscribed").request(2);
/// assert_eq!(sink.signals(), vec![Signal::Next("hi"), Signal::Next("hi")]);
/// ```
pub struct ProbeSink<T> {
    subscription: Mutex<Option<Arc<dyn Subscription>>>,
    signals: Mutex<Vec<Signal<T>>>,
}

impl<T> ProbeSink<T> {
    /// Creates an empty probe with no subscription yet.
    pub fn new() -> Self {
        Self {
            subscription: Mutex::new(None),
            signals: Mutex::new(Vec::new()),
        }
    }

    /// The subscription received via `on_subscribe`, if any.
    pub fn subscription(&self) -> Option<Arc<dyn Subscription>> {
        lock(&self.subscription).clone()
    }

    /// Number of `on_next` deliveries recorded so far.
    pub fn next_count(&self) -> usize {
        lock(&self.signals)
            .iter()
            .filter(|s| matches!(s, Signal::Next(_)))
            .count()
    }

    /// Number of terminal deliveries recorded (0 or 1 for a law-abiding publisher).
    pub fn terminal_count(&self) -> usize {
        lock(&self.signals)
            .iter()
            .filter(|s| matches!(s, Signal::Error(_) | Signal::Complete))
            .count()
    }

    /// Whether `on_complete` has been recorded.
    pub fn is_completed(&self) -> bool {
        lock(&self.signals)
            .iter()
            .any(|s| matches!(s, Signal::Complete))
    }

    /// The recorded terminal error, if any.
    pub fn error(&self) -> Option<StreamError> {
        lock(&self.signals).iter().find_map(|s| match s {
            Signal::Error(e) => Some(e.clone()),
            _ => None,
        })
    }
}

impl<T: Clone> ProbeSink<T> {
    /// All recorded signals in arrival order.
    pub fn signals(&self) -> Vec<Signal<T>> {
        lock(&self.signals).clone()
    }

    /// The `on_next` payloads in arrival order.
    pub fn items(&self) -> Vec<T> {
        lock(&self.signals)
            .iter()
            .filter_map(|s| match s {
                Signal::Next(item) => Some(item.clone()),
                _ => None,
            })
            .collect()
    }
}

impl<T> Default for ProbeSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send> Subscriber<T> for ProbeSink<T> {
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>) {
        *lock(&self.subscription) = Some(subscription);
    }

    fn on_next(&self, item: T) {
        lock(&self.signals).push(Signal::Next(item));
    }

    fn on_error(&self, error: StreamError) {
        lock(&self.signals).push(Signal::Error(error));
    }

    fn on_complete(&self) {
        lock(&self.signals).push(Signal::Complete);
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_signals_in_order() {
        let probe: ProbeSink<u32> = ProbeSink::new();
        probe.on_next(1);
        probe.on_next(2);
        probe.on_complete();
        assert_eq!(
            probe.signals(),
            vec![Signal::Next(1), Signal::Next(2), Signal::Complete]
        );
        assert_eq!(probe.items(), vec![1, 2]);
        assert_eq!(probe.next_count(), 2);
        assert_eq!(probe.terminal_count(), 1);
    }

    #[test]
    fn test_error_accessor() {
        let probe: ProbeSink<u32> = ProbeSink::new();
        let err = StreamError::DemandOverflow {
            requested: 99,
            bound: 10,
        };
        probe.on_error(err.clone());
        assert_eq!(probe.error(), Some(err));
        assert!(!probe.is_completed());
    }

    #[test]
    fn test_no_subscription_until_subscribed() {
        let probe: ProbeSink<u32> = ProbeSink::new();
        assert!(probe.subscription().is_none());
    }
}
