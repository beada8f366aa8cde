//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogSink`] prints every signal to stdout in a human-readable format.
//! This is primarily useful for development, debugging, and the scenario
//! demos.
//!
//! ## Output format
//! ```text
//! [subscribed] sink=alice
//! [next] sink=alice item=jana.holt@example.org
//! [error] sink=alice label=demand_overflow msg="demand overflow: requested=11 bound=10"
//! [complete] sink=alice
//! ```

use std::fmt::Display;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::StreamError;
use crate::flow::{Subscriber, Subscription};

/// Simple stdout logging subscriber.
///
/// Enabled via the `logging` feature. Prints human-readable signal lines to
/// stdout and keeps the subscription handle so driver code can issue demand
/// through [`LogSink::subscription`].
///
/// Not intended for production use - implement a custom [`Subscriber`] for
/// structured logging or metrics collection.
pub struct LogSink {
    name: &'static str,
    subscription: Mutex<Option<Arc<dyn Subscription>>>,
}

impl LogSink {
    /// Creates a named sink; the name tags every printed line.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            subscription: Mutex::new(None),
        }
    }

    /// The subscription received via `on_subscribe`, if any.
    pub fn subscription(&self) -> Option<Arc<dyn Subscription>> {
        self.subscription
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new("sink")
    }
}

impl<T: Display + Send> Subscriber<T> for LogSink {
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>) {
        println!("[subscribed] sink={}", self.name);
        *self
            .subscription
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(subscription);
    }

    fn on_next(&self, item: T) {
        println!("[next] sink={} item={item}", self.name);
    }

    fn on_error(&self, error: StreamError) {
        println!(
            "[error] sink={} label={} msg={:?}",
            self.name,
            error.as_label(),
            error.as_message()
        );
    }

    fn on_complete(&self) {
        println!("[complete] sink={}", self.name);
    }
}
