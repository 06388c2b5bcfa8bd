use super::{build_agent, build_url, map_error};
use crate::config::GatewayConfig;
use crate::error::{ApiError, ApiResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::SendTextRequest;
use std::sync::Arc;

/// Client for the WhatsApp messaging gateway.
#[derive(Clone)]
pub struct GatewayClient {
    /// Instance-scoped base URL (`.../instances/{id}/token/{token}`)
    base_url: String,

    /// Value of the `client-token` header
    client_token: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl GatewayClient {
    /// Create a new GatewayClient from configuration.
    pub fn new(config: &GatewayConfig) -> Self {
        Self::with_base_url(config.instance_base_url(), config.client_token.clone())
    }

    /// Create a GatewayClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, client_token: String) -> Self {
        Self {
            base_url,
            client_token,
            agent: Arc::new(build_agent()),
            metrics: Metrics::new(),
        }
    }

    /// Replace the metrics collector, typically with one shared by the run.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Instance-scoped base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers sent with every request.
    pub fn headers(&self) -> [(&'static str, &str); 2] {
        [
            ("content-type", "application/json"),
            ("client-token", self.client_token.as_str()),
        ]
    }

    /// POST a text message to the gateway's `send-text` endpoint.
    ///
    /// Returns the HTTP status on any 2xx answer.
    pub fn send_text(&self, request: &SendTextRequest) -> ApiResult<u16> {
        let url = build_url(&self.base_url, "/send-text");
        tracing::debug!("POST {}", url);

        let mut call = self.agent.post(&url);
        for (name, value) in self.headers() {
            call = call.set(name, value);
        }

        let timer = HttpTimer::new(self.metrics.clone());
        let result = call
            .send_json(request)
            .map_err(map_error)
            .and_then(|response| {
                let status = response.status();
                if (200..300).contains(&status) {
                    Ok(status)
                } else {
                    Err(ApiError::Status {
                        status,
                        message: response.status_text().to_string(),
                    })
                }
            });

        match &result {
            Ok(status) => {
                tracing::debug!("POST {} - Success (status: {})", url, status);
                timer.complete();
            }
            Err(e) => {
                tracing::debug!("POST {} - Error: {:?}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = GatewayConfig {
            api_url: "https://api.z-api.io".to_string(),
            instance_id: "test_instance_id".to_string(),
            token: "test_token".to_string(),
            client_token: "test_client_token".to_string(),
            sandbox_phone: None,
        };

        let client = GatewayClient::new(&config);
        assert_eq!(
            client.base_url(),
            "https://api.z-api.io/instances/test_instance_id/token/test_token"
        );
        assert_eq!(
            client.headers(),
            [
                ("content-type", "application/json"),
                ("client-token", "test_client_token"),
            ]
        );
    }
}
