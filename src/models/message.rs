//! Outbound gateway payloads.

use serde::Serialize;

/// Build the greeting sent to every contact.
///
/// The name is interpolated verbatim.
pub fn greeting_text(contact_name: &str) -> String {
    format!("Olá {}, tudo bem com você?", contact_name)
}

/// Body of the gateway's `send-text` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendTextRequest {
    /// Destination number, digits only
    pub phone: String,

    /// Text to deliver
    pub message: String,
}

impl SendTextRequest {
    /// A greeting for `contact_name` addressed to `phone`.
    pub fn greeting(contact_name: &str, phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            message: greeting_text(contact_name),
        }
    }
}
