//! HTTP clients for the two external services.
//!
//! Both clients are synchronous and built on `ureq`. They hold only immutable
//! configuration after construction and translate every failure into an
//! [`ApiError`]; deciding whether a failure is fatal is left to the caller.

mod backend;
mod gateway;

pub use backend::{BackendClient, CONTACTS_TABLE};
pub use gateway::GatewayClient;

use crate::error::ApiError;
use std::io;

/// Build the agent used for every request.
///
/// No timeout is configured; the transport defaults apply.
fn build_agent() -> ureq::Agent {
    ureq::AgentBuilder::new().build()
}

/// Join a base URL and a path with exactly one slash.
fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

/// Map a ureq error to an ApiError.
///
/// Status errors keep the code and response body; transport errors keep
/// ureq's own description. Only an I/O error of kind `TimedOut` or
/// `WouldBlock` becomes [`ApiError::Timeout`].
fn map_error(error: ureq::Error) -> ApiError {
    match error {
        ureq::Error::Status(code, response) => {
            let message = response
                .into_string()
                .unwrap_or_else(|_| "Unknown error".to_string());

            match code {
                401 | 403 => ApiError::Unauthorized {
                    status: code,
                    message,
                },
                404 => ApiError::NotFound(message),
                _ => ApiError::Status {
                    status: code,
                    message,
                },
            }
        }
        ureq::Error::Transport(transport) => {
            if is_timeout(&transport) {
                ApiError::Timeout(transport.to_string())
            } else {
                ApiError::HttpError(transport.to_string())
            }
        }
    }
}

fn is_timeout(transport: &ureq::Transport) -> bool {
    if transport.kind() != ureq::ErrorKind::Io {
        return false;
    }

    let mut source = std::error::Error::source(transport);
    while let Some(err) = source {
        if let Some(io) = err.downcast_ref::<io::Error>() {
            return matches!(
                io.kind(),
                io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock
            );
        }
        source = err.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        assert_eq!(
            build_url("https://api.example.com", "/send-text"),
            "https://api.example.com/send-text"
        );
        assert_eq!(
            build_url("https://api.example.com/", "send-text"),
            "https://api.example.com/send-text"
        );
        assert_eq!(
            build_url("https://api.example.com//", "//rest/v1/contatos"),
            "https://api.example.com/rest/v1/contatos"
        );
    }
}
