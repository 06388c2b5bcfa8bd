use crate::client::BackendClient;
use crate::config::BackendConfig;
use crate::error::ConfigResult;
use crate::metrics::Metrics;
use crate::models::Contact;
use crate::repositories::traits::ContactSource;
use tracing::{error, info, warn};

/// Contact repository backed by the hosted database.
///
/// Validates every row and drops the ones failing either check. Any
/// transport or API failure is logged and turned into an empty list, so
/// "no contacts" and "fetch failed" look the same to callers.
pub struct BackendContactRepository {
    client: BackendClient,
}

impl BackendContactRepository {
    /// Create a new BackendContactRepository with the given client.
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Build the repository from `BACKEND_URL` / `BACKEND_KEY`.
    ///
    /// A missing or invalid credential is returned to the caller.
    pub fn from_env() -> ConfigResult<Self> {
        let config = BackendConfig::from_env().inspect_err(|e| {
            error!(
                "Backend credentials missing or invalid in .env or environment: {}",
                e
            );
        })?;

        let repository = Self::new(BackendClient::new(&config));
        info!("Backend contact repository initialized");
        Ok(repository)
    }

    /// Record into `metrics` instead of the client's own collector.
    pub fn with_metrics(self, metrics: Metrics) -> Self {
        Self::new(self.client.with_metrics(metrics))
    }

    /// The underlying HTTP client.
    pub fn client(&self) -> &BackendClient {
        &self.client
    }
}

impl ContactSource for BackendContactRepository {
    fn get_contacts(&self) -> Vec<Contact> {
        info!("Fetching contacts from backend");

        let rows = match self.client.fetch_contact_rows() {
            Ok(rows) => rows,
            Err(e) => {
                error!("Failed to fetch contacts from backend: {}", e);
                return Vec::new();
            }
        };

        if rows.is_empty() {
            info!("No contacts found");
            return Vec::new();
        }

        let total = rows.len();
        info!("{} contacts found", total);

        let metrics = self.client.metrics();
        let mut valid_contacts = Vec::with_capacity(total);

        for row in rows {
            let (name, phone) = row.describe();
            let (name, phone) = (name.to_string(), phone.to_string());

            match row.into_contact() {
                Ok(contact) => valid_contacts.push(contact),
                Err(reason) => {
                    metrics.record_contact_rejected();
                    warn!(%reason, "Invalid contact information: {} - {}", name, phone);
                }
            }
        }

        info!(
            "Validation finished. {} of {} contacts are valid",
            valid_contacts.len(),
            total
        );
        valid_contacts
    }
}
