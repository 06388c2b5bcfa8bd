use super::{build_agent, build_url, map_error};
use crate::config::BackendConfig;
use crate::error::{ApiError, ApiResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{ContactRow, NAME_COLUMN, PHONE_COLUMN};
use std::io::Read;
use std::sync::Arc;

/// Table holding the contact list.
pub const CONTACTS_TABLE: &str = "contatos";

/// Client for the hosted database's REST interface.
///
/// Only the table read needed by the greeter is implemented.
#[derive(Clone)]
pub struct BackendClient {
    /// Project URL
    base_url: String,

    /// Access key for authentication
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl BackendClient {
    /// Create a new BackendClient from configuration.
    pub fn new(config: &BackendConfig) -> Self {
        Self::with_base_url(config.url.clone(), config.key.clone())
    }

    /// Create a BackendClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        Self {
            base_url,
            api_key,
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

    /// Execute a GET request with authentication.
    fn get(&self, path: &str) -> ApiResult<ureq::Response> {
        let url = build_url(&self.base_url, path);
        tracing::debug!("GET {}", url);

        let timer = HttpTimer::new(self.metrics.clone());
        let result = self
            .agent
            .get(&url)
            .set("apikey", &self.api_key)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Accept", "application/json")
            .call()
            .map_err(map_error);

        match &result {
            Ok(_) => timer.complete(),
            Err(_) => timer.complete_with_error(),
        }

        result
    }

    /// Read the name and phone columns of every row in the contacts table.
    ///
    /// An empty body, `null` or `[]` all yield an empty list. Rows are
    /// returned in backend order and are not validated here.
    pub fn fetch_contact_rows(&self) -> ApiResult<Vec<ContactRow>> {
        let columns = format!("{},{}", NAME_COLUMN, PHONE_COLUMN);
        let path = format!(
            "/rest/v1/{}?select={}",
            CONTACTS_TABLE,
            urlencoding::encode(&columns)
        );

        // Read without the 10 MB limit of into_string()
        let response = self.get(&path)?;
        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| ApiError::HttpError(e.to_string()))?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let rows: Option<Vec<ContactRow>> =
            serde_json::from_slice(&body).map_err(ApiError::JsonError)?;
        let rows = rows.unwrap_or_default();

        self.metrics.record_contacts_fetched(rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = BackendConfig {
            url: "https://project.example.co".to_string(),
            key: "service-key".to_string(),
        };

        let client = BackendClient::new(&config);
        assert_eq!(client.base_url, "https://project.example.co");
        assert_eq!(client.api_key, "service-key");
    }

    #[test]
    fn test_with_metrics_shares_counters() {
        let metrics = Metrics::new();
        let client = BackendClient::with_base_url(
            "https://project.example.co".to_string(),
            "service-key".to_string(),
        )
        .with_metrics(metrics.clone());

        client.metrics().record_contacts_fetched(2);
        assert_eq!(metrics.contacts_fetched_total(), 2);
    }
}
