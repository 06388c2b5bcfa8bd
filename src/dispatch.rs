//! Greeting run orchestration.
//!
//! A run fetches the valid contacts once and sends one greeting per contact,
//! strictly in order. Individual send failures never stop the loop.

use crate::error::ConfigError;
use crate::metrics::Metrics;
use crate::repositories::{BackendContactRepository, ContactSource};
use crate::services::{GatewayGreetingService, GreetingSender};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{error, info};

/// Outcome counts of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Greetings attempted, one per valid contact
    pub attempted: usize,

    /// Greetings the gateway accepted
    pub delivered: usize,
}

impl DispatchSummary {
    /// Greetings that failed to send.
    pub fn failed(&self) -> usize {
        self.attempted - self.delivered
    }
}

/// Send one greeting to every contact from `source`.
pub fn dispatch_greetings<S, G>(source: &S, sender: &G) -> DispatchSummary
where
    S: ContactSource + ?Sized,
    G: GreetingSender + ?Sized,
{
    let contacts = source.get_contacts();
    let mut summary = DispatchSummary::default();

    for contact in &contacts {
        summary.attempted += 1;
        if sender.send_greeting(&contact.name, contact.phone.as_str()) {
            summary.delivered += 1;
        }
    }

    summary
}

/// Build both components from the environment and run one dispatch.
///
/// The repository is constructed before the gateway service, and both before
/// any network call, so a configuration error aborts the run before anything
/// is fetched or sent.
pub fn run(metrics: &Metrics) -> anyhow::Result<DispatchSummary> {
    let repository = BackendContactRepository::from_env()?.with_metrics(metrics.clone());
    let greeter = GatewayGreetingService::from_env()?.with_metrics(metrics.clone());

    let summary = dispatch_greetings(&repository, &greeter);
    info!(
        "{} of {} greetings delivered",
        summary.delivered, summary.attempted
    );
    Ok(summary)
}

/// Run once between start and finish banners, containing every failure.
///
/// Configuration errors, any other error and panics are logged at `ERROR`
/// with `critical = true`; the finish banner is always written. Returns
/// `None` when the run was aborted.
pub fn run_to_completion(metrics: &Metrics) -> Option<DispatchSummary> {
    info!("Starting greeting dispatch");

    let outcome = match panic::catch_unwind(AssertUnwindSafe(|| run(metrics))) {
        Ok(Ok(summary)) => Some(summary),
        Ok(Err(e)) if e.downcast_ref::<ConfigError>().is_some() => {
            error!(critical = true, "Execution interrupted: {}", e);
            None
        }
        Ok(Err(e)) => {
            error!(critical = true, "Unexpected error: {:#}", e);
            None
        }
        Err(payload) => {
            error!(critical = true, "Unexpected error: {}", panic_message(&*payload));
            None
        }
    };

    info!("Process finished");
    outcome
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "panic"
    }
}
