//! # Publisher side of the protocol.
//!
//! [`SupplyPublisher`] is a cold, stateless factory: every call to
//! [`Publisher::subscribe`] builds a fresh [`DemandGate`] around its own
//! clone of the supply and hands it to the subscriber before returning.
//! Nothing is emitted during subscribe itself; items flow only in response
//! to `request` on the gate. Two subscriptions from the same publisher share
//! no demand or count state — each replays its source from the beginning.

use std::sync::Arc;

use crate::config::FlowConfig;
use crate::flow::subscriber::Subscriber;
use crate::flow::subscription::DemandGate;
use crate::supply::Supply;

/// # Factory for subscriptions.
///
/// `subscribe` wires one subscriber to one fresh subscription and delivers
/// the `on_subscribe` callback synchronously, before returning. It has no
/// return value; all further interaction runs through the handed-out
/// [`Subscription`](crate::Subscription).
pub trait Publisher<T>: Send + Sync {
    /// Creates a new subscription bound to `subscriber` and hands it over
    /// via `on_subscribe`. No items are emitted by this call.
    fn subscribe(&self, subscriber: Arc<dyn Subscriber<T>>);
}

/// Cold publisher that emits items drawn from a [`Supply`].
///
/// Holds no cross-subscription state: the supply is cloned into every gate,
/// and counters live inside the gates themselves.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use demandflow::{EmailSupply, ProbeSink, Publisher, SupplyPublisher};
///
/// let publisher = SupplyPublisher::new(EmailSupply::default());
/// let sink = Arc::new(ProbeSink::<String>::new());
/// publisher.subscribe(sink.clone());
///
/// let subscription = sink.subscription().expect("on_subscribe was delivered");
/// subscription.request(3);
/// assert_eq!(sink.next_count(), 3);
/// ```
pub struct SupplyPublisher<S> {
    supply: S,
    config: FlowConfig,
}

impl<S: Supply + Clone> SupplyPublisher<S> {
    /// Creates a publisher with the default [`FlowConfig`] (bound = 10).
    pub fn new(supply: S) -> Self {
        Self::with_config(supply, FlowConfig::default())
    }

    /// Creates a publisher with an explicit config.
    pub fn with_config(supply: S, config: FlowConfig) -> Self {
        Self { supply, config }
    }

    /// The per-subscription config this publisher stamps onto new gates.
    pub fn config(&self) -> FlowConfig {
        self.config
    }
}

impl<S: Supply + Clone> Publisher<S::Item> for SupplyPublisher<S> {
    fn subscribe(&self, subscriber: Arc<dyn Subscriber<S::Item>>) {
        let gate = Arc::new(DemandGate::new(
            self.supply.clone(),
            self.config,
            Arc::clone(&subscriber),
        ));
        subscriber.on_subscribe(gate);
    }
}
