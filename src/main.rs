//! Contact greeter - main entry point
//!
//! Fetches the contact list, keeps the rows with a valid name and Brazilian
//! mobile number, and sends each contact a greeting through the gateway.
//! The process always exits with status 0; failures are only visible in the
//! logs.

use contact_greeter::{config, dispatch, telemetry, Metrics};
use std::io::IsTerminal;
use tracing::debug;

fn main() {
    // Logs go to stderr
    let filter = telemetry::env_filter(&config::log_level());
    let ansi = std::io::stderr().is_terminal();
    let subscriber = telemetry::build_subscriber(filter, std::io::stderr, ansi);

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install log subscriber: {}", e);
    }

    let metrics = Metrics::new();
    dispatch::run_to_completion(&metrics);

    debug!(
        "Run metrics: {}",
        serde_json::to_string(&metrics.summary()).unwrap_or_else(|_| "<invalid json>".to_string())
    );
}
