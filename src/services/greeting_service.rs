//! Greeting delivery.

use crate::client::GatewayClient;
use crate::config::GatewayConfig;
use crate::error::ConfigResult;
use crate::metrics::Metrics;
use crate::models::SendTextRequest;
use tracing::{error, info, warn};

/// Sends one greeting and reports whether it was delivered.
///
/// Failures are contained: implementations log them and return `false`
/// instead of raising, so a caller can keep going with the next contact.
pub trait GreetingSender {
    fn send_greeting(&self, contact_name: &str, phone_number: &str) -> bool;
}

impl<T: GreetingSender + ?Sized> GreetingSender for &T {
    fn send_greeting(&self, contact_name: &str, phone_number: &str) -> bool {
        (**self).send_greeting(contact_name, phone_number)
    }
}

/// Greeting sender backed by the messaging gateway.
pub struct GatewayGreetingService {
    client: GatewayClient,
    sandbox_phone: Option<String>,
}

impl GatewayGreetingService {
    /// Create a new service with the given client.
    pub fn new(client: GatewayClient) -> Self {
        Self {
            client,
            sandbox_phone: None,
        }
    }

    /// Build the service from the `GATEWAY_*` variables.
    ///
    /// A missing or invalid credential is returned to the caller.
    pub fn from_env() -> ConfigResult<Self> {
        let config = GatewayConfig::from_env().inspect_err(|e| {
            error!(
                "Gateway credentials missing or invalid in .env or environment: {}",
                e
            );
        })?;

        let service =
            Self::new(GatewayClient::new(&config)).with_sandbox_phone(config.sandbox_phone);
        info!("Gateway greeting service initialized");
        Ok(service)
    }

    /// Redirect every greeting to `phone` when set.
    pub fn with_sandbox_phone(mut self, phone: Option<String>) -> Self {
        if let Some(phone) = &phone {
            warn!("Sandbox mode: every greeting will be delivered to {}", phone);
        }
        self.sandbox_phone = phone;
        self
    }

    /// Record into `metrics` instead of the client's own collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.client = self.client.with_metrics(metrics);
        self
    }

    /// The underlying HTTP client.
    pub fn client(&self) -> &GatewayClient {
        &self.client
    }
}

impl GreetingSender for GatewayGreetingService {
    fn send_greeting(&self, contact_name: &str, phone_number: &str) -> bool {
        let destination = self.sandbox_phone.as_deref().unwrap_or(phone_number);
        let request = SendTextRequest::greeting(contact_name, destination);

        info!("Sending greeting to {} - {}", contact_name, destination);

        match self.client.send_text(&request) {
            Ok(_) => {
                self.client.metrics().record_message_sent();
                info!("Greeting to {} sent successfully", contact_name);
                true
            }
            Err(e) => {
                self.client.metrics().record_message_failed();
                error!("Failed to send greeting to {}: {}", contact_name, e);
                false
            }
        }
    }
}
