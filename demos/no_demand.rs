//! # No-Demand Scenario
//!
//! Subscribes a sink to a publisher and never requests anything. Nothing is
//! emitted: subscription alone moves no data, only demand does.
//!
//! ## Run
//! ```bash
//! cargo run --example no_demand --features logging
//! ```

use std::sync::Arc;

use demandflow::{EmailSupply, LogSink, Publisher, SupplyPublisher};

fn main() {
    let publisher = SupplyPublisher::new(EmailSupply::default());
    let sink = Arc::new(LogSink::new("idle"));
    publisher.subscribe(sink.clone());

    println!("subscribed and requested nothing; no emails appear above this line");
}
