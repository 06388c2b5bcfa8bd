//! Configuration management for the contact greeter.
//!
//! Each external component loads its own credentials from environment
//! variables (or a `.env` file in the working directory), so a missing
//! credential surfaces when that component is constructed.

use crate::domain::is_valid_phone;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default host of the messaging gateway.
pub const DEFAULT_GATEWAY_API_URL: &str = "https://api.z-api.io";

/// Default log level when neither `RUST_LOG` nor `LOG_LEVEL` is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Credentials for the hosted contacts database.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Project URL of the backend
    pub url: String,

    /// Access key, sent both as `apikey` and as bearer token
    pub key: String,
}

impl BackendConfig {
    /// Load backend configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `BACKEND_URL`: Base URL of the backend project
    /// - `BACKEND_KEY`: Access key
    ///
    /// Besides a missing variable, a `BACKEND_URL` without an `http://` or
    /// `https://` scheme and a blank `BACKEND_KEY` are rejected with
    /// `ConfigError::InvalidValue`.
    pub fn from_env() -> ConfigResult<Self> {
        load_dotenv();

        let url = required_var("BACKEND_URL")?;
        let key = required_var("BACKEND_KEY")?;

        validate_url("BACKEND_URL", &url)?;
        validate_not_blank("BACKEND_KEY", &key)?;

        Ok(BackendConfig { url, key })
    }
}

/// Credentials and options for the messaging gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Gateway host (default: `https://api.z-api.io`)
    pub api_url: String,

    /// Gateway instance identifier
    pub instance_id: String,

    /// Instance token, part of the request path
    pub token: String,

    /// Account-level token sent in the `client-token` header
    pub client_token: String,

    /// When set, every greeting goes to this number instead of the contact's
    pub sandbox_phone: Option<String>,
}

impl GatewayConfig {
    /// Load gateway configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `GATEWAY_INSTANCE_ID`: Instance identifier
    /// - `GATEWAY_TOKEN`: Instance token
    /// - `GATEWAY_CLIENT_TOKEN`: Client token header value
    ///
    /// Optional environment variables:
    /// - `GATEWAY_API_URL`: Gateway host (default: `https://api.z-api.io`)
    /// - `GATEWAY_SANDBOX_PHONE`: Redirect every greeting to this number
    ///
    /// Besides a missing variable, a blank credential, a `GATEWAY_API_URL`
    /// without an `http://` or `https://` scheme and a sandbox phone that is
    /// not a Brazilian mobile number are rejected with
    /// `ConfigError::InvalidValue`.
    pub fn from_env() -> ConfigResult<Self> {
        load_dotenv();

        let instance_id = required_var("GATEWAY_INSTANCE_ID")?;
        let token = required_var("GATEWAY_TOKEN")?;
        let client_token = required_var("GATEWAY_CLIENT_TOKEN")?;

        validate_not_blank("GATEWAY_INSTANCE_ID", &instance_id)?;
        validate_not_blank("GATEWAY_TOKEN", &token)?;
        validate_not_blank("GATEWAY_CLIENT_TOKEN", &client_token)?;

        let api_url =
            env::var("GATEWAY_API_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_API_URL.to_string());
        validate_url("GATEWAY_API_URL", &api_url)?;

        let sandbox_phone = match env::var("GATEWAY_SANDBOX_PHONE") {
            Ok(phone) if is_valid_phone(Some(&phone)) => Some(phone),
            Ok(phone) => {
                return Err(ConfigError::InvalidValue {
                    var: "GATEWAY_SANDBOX_PHONE".to_string(),
                    reason: format!("Must be a Brazilian mobile number, got: {}", phone),
                })
            }
            Err(_) => None,
        };

        Ok(GatewayConfig {
            api_url,
            instance_id,
            token,
            client_token,
            sandbox_phone,
        })
    }

    /// Instance-scoped base URL: `{api_url}/instances/{id}/token/{token}`.
    pub fn instance_base_url(&self) -> String {
        format!(
            "{}/instances/{}/token/{}",
            self.api_url.trim_end_matches('/'),
            self.instance_id,
            self.token
        )
    }
}

/// Log level from `LOG_LEVEL` (default: "info").
pub fn log_level() -> String {
    load_dotenv();
    env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
}

/// Load `.env` if it exists. Variables already set are never overridden.
fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

fn required_var(var_name: &str) -> ConfigResult<String> {
    env::var(var_name).map_err(|_| ConfigError::MissingVar(var_name.to_string()))
}

fn validate_url(var_name: &str, value: &str) -> ConfigResult<()> {
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(ConfigError::InvalidValue {
            var: var_name.to_string(),
            reason: "Must start with http:// or https://".to_string(),
        });
    }
    Ok(())
}

fn validate_not_blank(var_name: &str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            var: var_name.to_string(),
            reason: "Cannot be empty".to_string(),
        });
    }
    Ok(())
}
