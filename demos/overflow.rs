//! # Overflow Scenario
//!
//! Requests a small batch, then a single batch larger than the publisher's
//! bound. The oversized request emits nothing and is answered with the one
//! terminal `demand_overflow` error; demand issued afterwards is a no-op.
//!
//! ## Run
//! ```bash
//! cargo run --example overflow --features logging
//! ```

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use demandflow::{EmailSupply, LogSink, Publisher, SupplyPublisher};

fn main() {
    let publisher = SupplyPublisher::new(EmailSupply::default());
    let sink = Arc::new(LogSink::new("greedy"));
    publisher.subscribe(sink.clone());

    let subscription = sink.subscription().expect("on_subscribe was delivered");
    subscription.request(3);
    thread::sleep(Duration::from_millis(500));

    println!("--- request(11) exceeds the bound of 10 ---");
    subscription.request(11);

    subscription.request(3);
    println!("--- request after the error emitted nothing ---");
}
