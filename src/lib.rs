//! # demandflow
//!
//! **Demandflow** is a minimal, correct implementation of the
//! reactive-streams back-pressure protocol for exactly one producer talking
//! to exactly one consumer: a `Publisher` hands a `Subscription` to a
//! `Subscriber`, and items flow only under explicit, consumer-issued demand.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────────┐
//!     │  SupplyPublisher │  cold factory (stateless, Supply + FlowConfig)
//!     └────────┬─────────┘
//!              │ subscribe(subscriber)
//!              ▼
//!     ┌──────────────────┐   on_subscribe(gate)   ┌──────────────────┐
//!     │    DemandGate    │ ─────────────────────► │    Subscriber    │
//!     │  (one per pair)  │                        │  (passive sink)  │
//!     │  - emitted count │ ◄───────────────────── │                  │
//!     │  - terminated    │   request(n)/cancel()  └──────────────────┘
//!     └────────┬─────────┘      (driver-issued)
//!              │ draw() × min(n, remaining)
//!              ▼
//!     ┌──────────────────┐
//!     │      Supply      │  injected item source (EmailSupply, SupplyFn, …)
//!     └──────────────────┘
//! ```
//!
//! ### Signal flow
//! ```text
//! publisher.subscribe(sub)
//!   └─► sub.on_subscribe(gate)            exactly once, before anything else
//!
//! gate.request(n)                          synchronous, any thread
//!   ├─► terminated or n == 0               ─► no-op
//!   ├─► n > bound                          ─► sub.on_error(DemandOverflow), terminate
//!   └─► sub.on_next(supply.draw()) × min(n, bound − emitted)
//!         └─► emitted == bound             ─► sub.on_complete(), terminate
//!
//! gate.cancel()                            silent, idempotent, permanent
//! ```
//!
//! ## Features
//! | Area            | Description                                               | Key types / traits                    |
//! |-----------------|-----------------------------------------------------------|---------------------------------------|
//! | **Protocol**    | Demand-driven synchronous emission with a hard bound.     | [`Publisher`], [`Subscription`], [`Subscriber`] |
//! | **Supplies**    | Injected item sources, one draw per emission.             | [`Supply`], [`SupplyFn`], [`EmailSupply`] |
//! | **Sinks**       | Ready-made subscribers for driving and observing streams. | [`ProbeSink`], [`Signal`]             |
//! | **Errors**      | The single terminal protocol error, never thrown.         | [`StreamError`]                       |
//! | **Configuration** | Per-subscription emission bound.                        | [`FlowConfig`]                        |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogSink`] _(demo/reference only)_.
//!
//! ## Guarantees
//! - `on_subscribe` is delivered exactly once, before any other signal.
//! - The total `on_next` count never exceeds the bound, nor the sum of
//!   requested demand — including under racing `request` calls from
//!   different threads.
//! - At most one terminal signal (`on_complete` **or** `on_error`) per
//!   subscription; nothing is delivered after it.
//! - Cancellation is silent and permanent; a terminated subscription accepts
//!   further `request`/`cancel` calls as no-ops.
//! - Cold subscriptions: every `subscribe` replays from the beginning with
//!   its own counter; nothing is shared between subscriptions.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use demandflow::{EmailSupply, FlowConfig, ProbeSink, Publisher, SupplyPublisher};
//!
//! let publisher = SupplyPublisher::with_config(EmailSupply::default(), FlowConfig { bound: 10 });
//!
//! let sink = Arc::new(ProbeSink::<String>::new());
//! publisher.subscribe(sink.clone());
//!
//! // Demand is driven from outside, batch by batch.
//! let subscription = sink.subscription().expect("subscribed");
//! subscription.request(3);
//! assert_eq!(sink.next_count(), 3);
//!
//! subscription.request(7);
//! assert_eq!(sink.next_count(), 10);
//! assert!(sink.is_completed());
//!
//! // The gate is terminated now; further demand is a no-op.
//! subscription.request(3);
//! assert_eq!(sink.next_count(), 10);
//! ```

mod config;
mod error;
mod flow;
mod sinks;
mod supply;

// ---- Public re-exports ----

pub use config::FlowConfig;
pub use error::StreamError;
pub use flow::{DemandGate, Publisher, Subscriber, Subscription, SupplyPublisher};
pub use sinks::{ProbeSink, Signal};
pub use supply::{EmailSupply, Supply, SupplyFn};

// Optional: expose a simple built-in logging sink (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use sinks::LogSink;
