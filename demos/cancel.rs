//! # Cancellation Scenario
//!
//! Requests three batches of 3 against a bound of 10 (9 items total), then
//! cancels. Cancellation is silent — no completion or error line — and the
//! final `request(3)` produces nothing.
//!
//! ## Run
//! ```bash
//! cargo run --example cancel --features logging
//! ```

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use demandflow::{EmailSupply, LogSink, Publisher, SupplyPublisher};

fn main() {
    let publisher = SupplyPublisher::new(EmailSupply::default());
    let sink = Arc::new(LogSink::new("cancel"));
    publisher.subscribe(sink.clone());

    let subscription = sink.subscription().expect("on_subscribe was delivered");
    for _ in 0..3 {
        subscription.request(3);
        thread::sleep(Duration::from_millis(500));
    }

    println!("--- cancelling after 9 items ---");
    subscription.cancel();

    subscription.request(3);
    println!("--- request after cancel emitted nothing ---");
}
