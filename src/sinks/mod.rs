//! # Reference subscribers.
//!
//! Two ready-made sinks for driving and observing a stream:
//! - [`ProbeSink`] stores the subscription handle and records signals —
//!   the workhorse of the test suite and of external demand drivers;
//! - [`LogSink`] (feature `logging`) prints signals to stdout.
//!
//! Neither attempts recovery on `on_error`; the protocol's single error is
//! terminal and recovery is out of scope for a sink.

#[cfg(feature = "logging")]
mod log;
mod probe;

#[cfg(feature = "logging")]
pub use log::LogSink;
pub use probe::{ProbeSink, Signal};
