//! # Demand gate: the subscription state machine.
//!
//! [`DemandGate`] mediates between one publisher and one subscriber. It
//! accepts demand through [`Subscription::request`], synchronously draws and
//! delivers items up to the outstanding demand and the configured bound, and
//! emits at most one terminal signal:
//!
//! ```text
//! request(n)
//!   ├─ terminated?            ─► no-op
//!   ├─ n == 0?                ─► no-op
//!   ├─ n > bound?             ─► on_error(DemandOverflow), terminate
//!   └─ emit min(n, remaining) items via on_next
//!        └─ emitted == bound? ─► on_complete(), terminate
//!
//! cancel()                    ─► terminate silently (no callback)
//! ```
//!
//! A single mutex guards the emitted count and the terminated flag together,
//! so racing `request`/`cancel` calls from different threads can never
//! jointly emit past the bound or deliver a second terminal signal. Each
//! `request` is self-contained: unmet demand is not buffered across calls.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::FlowConfig;
use crate::error::StreamError;
use crate::flow::subscriber::Subscriber;
use crate::supply::Supply;

/// # Demand and cancellation controls for one subscription.
///
/// Handed to the subscriber via `on_subscribe` as an `Arc<dyn Subscription>`.
/// Both methods are idempotent against a terminated subscription: once a
/// terminal signal has been delivered or `cancel` has been called, every
/// further call is accepted and does nothing.
pub trait Subscription: Send + Sync {
    /// Requests `n` additional items.
    ///
    /// Emission is fully synchronous: the call returns only after every
    /// permitted item (and any resulting terminal signal) has been delivered
    /// to the subscriber. `request(0)` is a no-op, not an error.
    fn request(&self, n: u64);

    /// Cancels the subscription.
    ///
    /// Silent: unlike completion and error, cancellation delivers no
    /// subscriber callback. Idempotent; effective for any `request` that
    /// begins after this call returns.
    fn cancel(&self);
}

/// Mutable half of the gate. Guarded as one unit; the bound check and the
/// count increment must never be observable separately.
struct Gate {
    emitted: u64,
    terminated: bool,
}

/// Demand-driven synchronous emitter for a single publisher/subscriber pair.
///
/// Created by [`SupplyPublisher::subscribe`](crate::SupplyPublisher); owns
/// the exclusive right to call back into its subscriber. `bound` and the
/// supply are fixed at construction, so two gates from the same publisher
/// share nothing and their counters evolve independently.
pub struct DemandGate<S: Supply> {
    bound: u64,
    supply: S,
    subscriber: Arc<dyn Subscriber<S::Item>>,
    gate: Mutex<Gate>,
}

impl<S: Supply> DemandGate<S> {
    pub(crate) fn new(supply: S, config: FlowConfig, subscriber: Arc<dyn Subscriber<S::Item>>) -> Self {
        Self {
            bound: config.bound,
            supply,
            subscriber,
            gate: Mutex::new(Gate {
                emitted: 0,
                terminated: false,
            }),
        }
    }

    /// Number of items emitted so far.
    pub fn emitted(&self) -> u64 {
        self.lock().emitted
    }

    /// Whether the gate has reached a terminal state (completed, errored, or cancelled).
    pub fn is_terminated(&self) -> bool {
        self.lock().terminated
    }

    // The guarded state is two scalars and always left consistent, so a
    // poisoned lock (subscriber callback panicked) is recovered rather than
    // propagated: the other side of the pair must still be able to cancel.
    fn lock(&self) -> MutexGuard<'_, Gate> {
        self.gate.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: Supply> Subscription for DemandGate<S> {
    fn request(&self, n: u64) {
        let mut gate = self.lock();
        if gate.terminated || n == 0 {
            return;
        }

        // Overflow is judged on the raw request value, not the remaining
        // balance: after 9 of 10 items, request(11) still errors even though
        // only one item remains. Reaching the bound through several smaller
        // requests is the normal completion path below.
        if n > self.bound {
            gate.terminated = true;
            self.subscriber.on_error(StreamError::DemandOverflow {
                requested: n,
                bound: self.bound,
            });
            return;
        }

        let mut delivered = 0;
        while delivered < n && gate.emitted < self.bound {
            gate.emitted += 1;
            delivered += 1;
            self.subscriber.on_next(self.supply.draw());
        }

        if gate.emitted == self.bound {
            gate.terminated = true;
            self.subscriber.on_complete();
        }
    }

    fn cancel(&self) {
        self.lock().terminated = true;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::error::StreamError;
    use crate::sinks::ProbeSink;
    use crate::supply::SupplyFn;

    fn counter_supply() -> SupplyFn<u64> {
        let n = Arc::new(std::sync::atomic::AtomicU64::new(0));
        SupplyFn::new(move || n.fetch_add(1, std::sync::atomic::Ordering::Relaxed))
    }

    fn gate_with_bound(bound: u64) -> (Arc<DemandGate<SupplyFn<u64>>>, Arc<ProbeSink<u64>>) {
        let sink = Arc::new(ProbeSink::new());
        let subscriber: Arc<dyn Subscriber<u64>> = sink.clone();
        let gate = Arc::new(DemandGate::new(
            counter_supply(),
            FlowConfig { bound },
            subscriber,
        ));
        (gate, sink)
    }

    #[test]
    fn test_emits_exactly_requested_count() {
        let (gate, sink) = gate_with_bound(10);
        gate.request(3);
        assert_eq!(sink.next_count(), 3);
        assert!(!sink.is_completed());
        assert_eq!(gate.emitted(), 3);
    }

    #[test]
    fn test_drip_feed_completes_on_final_request() {
        // Scenario: bound 10, four request(3) calls yield 3, 3, 3, 1 items
        // and completion arrives with the fourth call.
        let (gate, sink) = gate_with_bound(10);
        let mut per_call = Vec::new();
        for _ in 0..4 {
            let before = sink.next_count();
            gate.request(3);
            per_call.push(sink.next_count() - before);
        }
        assert_eq!(per_call, vec![3, 3, 3, 1]);
        assert_eq!(sink.next_count(), 10);
        assert!(sink.is_completed());
        assert!(sink.error().is_none());
    }

    #[test]
    fn test_cancel_stops_emission_silently() {
        // Scenario: bound 10, three request(3) calls, cancel, request(3).
        let (gate, sink) = gate_with_bound(10);
        gate.request(3);
        gate.request(3);
        gate.request(3);
        gate.cancel();
        gate.request(3);
        assert_eq!(sink.next_count(), 9, "request after cancel must emit nothing");
        assert!(!sink.is_completed(), "cancellation is silent, not completion");
        assert!(sink.error().is_none());
    }

    #[test]
    fn test_overflow_request_errors_once() {
        // Scenario: bound 10, request(3) then request(11) then request(3).
        let (gate, sink) = gate_with_bound(10);
        gate.request(3);
        gate.request(11);
        assert_eq!(sink.next_count(), 3, "overflow call itself emits nothing");
        assert_eq!(
            sink.error(),
            Some(StreamError::DemandOverflow {
                requested: 11,
                bound: 10
            })
        );
        gate.request(3);
        assert_eq!(sink.next_count(), 3, "terminated gate must stay silent");
        assert!(!sink.is_completed());
    }

    #[test]
    fn test_overflow_on_first_request_emits_nothing() {
        let (gate, sink) = gate_with_bound(10);
        gate.request(11);
        assert_eq!(sink.next_count(), 0);
        assert_eq!(
            sink.error(),
            Some(StreamError::DemandOverflow {
                requested: 11,
                bound: 10
            })
        );
    }

    #[test]
    fn test_exact_remaining_balance_completes_without_overflow() {
        // request(10) against bound 10 is not an overflow: the threshold is
        // strictly greater-than.
        let (gate, sink) = gate_with_bound(10);
        gate.request(10);
        assert_eq!(sink.next_count(), 10);
        assert!(sink.is_completed());
        assert!(sink.error().is_none());
    }

    #[test]
    fn test_zero_request_is_noop() {
        let (gate, sink) = gate_with_bound(10);
        gate.request(0);
        assert_eq!(sink.next_count(), 0);
        assert!(!sink.is_completed());
        assert!(sink.error().is_none());
        assert!(!gate.is_terminated());
    }

    #[test]
    fn test_request_after_completion_is_noop() {
        let (gate, sink) = gate_with_bound(2);
        gate.request(2);
        assert!(sink.is_completed());
        gate.request(1);
        assert_eq!(sink.next_count(), 2);
        assert_eq!(sink.terminal_count(), 1, "only one terminal signal ever");
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let (gate, sink) = gate_with_bound(10);
        gate.request(1);
        gate.cancel();
        gate.cancel();
        gate.request(5);
        assert_eq!(sink.next_count(), 1);
        assert_eq!(sink.terminal_count(), 0, "cancel delivers no signal");
    }

    #[test]
    fn test_demand_never_buffered_across_calls() {
        // Two request(4) calls against bound 10 emit 4 + 4, not 8-then-2.
        let (gate, sink) = gate_with_bound(10);
        gate.request(4);
        assert_eq!(sink.next_count(), 4);
        gate.request(4);
        assert_eq!(sink.next_count(), 8);
        assert!(!sink.is_completed());
    }

    #[test]
    fn test_counter_supply_drawn_once_per_emission() {
        let (gate, sink) = gate_with_bound(10);
        gate.request(5);
        assert_eq!(sink.items(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_racing_requests_never_exceed_bound() {
        let (gate, sink) = gate_with_bound(100);
        let mut handles = Vec::new();
        for _ in 0..8 {
            let gate = Arc::clone(&gate);
            handles.push(thread::spawn(move || {
                for _ in 0..10 {
                    gate.request(3);
                }
            }));
        }
        for h in handles {
            h.join().expect("request thread panicked");
        }
        // 8 threads × 10 × 3 = 240 requested, but the joint bound holds.
        assert_eq!(sink.next_count(), 100);
        assert_eq!(sink.terminal_count(), 1);
        assert!(sink.is_completed());
    }

    #[test]
    fn test_cancel_from_other_thread_stops_later_requests() {
        let (gate, sink) = gate_with_bound(1000);
        gate.request(5);
        let canceller = {
            let gate = Arc::clone(&gate);
            thread::spawn(move || gate.cancel())
        };
        canceller.join().expect("cancel thread panicked");
        gate.request(5);
        assert_eq!(sink.next_count(), 5);
        assert_eq!(sink.terminal_count(), 0);
    }

    #[test]
    fn test_no_signal_after_terminal() {
        let (gate, sink) = gate_with_bound(3);
        gate.request(3);
        gate.request(2);
        gate.request(4); // would overflow, but the gate is already terminated
        gate.cancel();
        gate.request(1);
        assert_eq!(sink.next_count(), 3);
        assert_eq!(sink.terminal_count(), 1);
        assert!(sink.error().is_none());
    }
}
