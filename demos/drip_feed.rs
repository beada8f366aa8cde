//! # Drip-Feed Scenario
//!
//! Requests the stream in small batches until the publisher's bound is
//! reached: four `request(3)` calls against a bound of 10 deliver 3, 3, 3
//! and finally 1 item plus the completion signal.
//!
//! ## Run
//! ```bash
//! cargo run --example drip_feed --features logging
//! ```

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use demandflow::{EmailSupply, LogSink, Publisher, SupplyPublisher};

fn main() {
    let publisher = SupplyPublisher::new(EmailSupply::default());
    let sink = Arc::new(LogSink::new("drip"));
    publisher.subscribe(sink.clone());

    let subscription = sink.subscription().expect("on_subscribe was delivered");
    for batch in 1..=4 {
        println!("--- batch {batch}: request(3) ---");
        subscription.request(3);
        thread::sleep(Duration::from_millis(500));
    }
}
