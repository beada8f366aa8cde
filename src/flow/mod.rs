//! # The publisher / subscription / subscriber triad.
//!
//! This module carries the whole back-pressure protocol for a single
//! producer/consumer pair:
//!
//! ```text
//! Publisher::subscribe(subscriber)
//!     └─► build DemandGate ─► subscriber.on_subscribe(gate)
//!
//! gate.request(n)   (driver-issued, any thread)
//!     └─► subscriber.on_next(item) × min(n, remaining)
//!           ├─► bound reached ─► subscriber.on_complete()
//!           └─► n > bound     ─► subscriber.on_error(DemandOverflow)
//!
//! gate.cancel()     ─► silent, permanent
//! ```
//!
//! The three roles are capability traits with one concrete implementation
//! each; there is no inheritance-style hierarchy and no operator layer on
//! top of them.

mod publisher;
mod subscriber;
mod subscription;

pub use publisher::{Publisher, SupplyPublisher};
pub use subscriber::Subscriber;
pub use subscription::{DemandGate, Subscription};
