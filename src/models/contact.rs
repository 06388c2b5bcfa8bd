//! Contact records as read from the backend table.

use crate::domain::{is_valid_name, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Column holding the contact's display name.
pub const NAME_COLUMN: &str = "nome_contato";

/// Column holding the contact's phone number.
pub const PHONE_COLUMN: &str = "numero_telefone";

/// A raw row of the contacts table.
///
/// Both columns are kept as untyped JSON because the table does not enforce
/// their type: a missing column, `null`, a number or any other non-string
/// value is carried through and rejected by validation instead of failing
/// the whole response.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactRow {
    #[serde(rename = "nome_contato")]
    pub name: Option<Value>,

    #[serde(rename = "numero_telefone")]
    pub phone: Option<Value>,
}

impl ContactRow {
    /// Build a row from plain strings.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: Some(Value::String(name.into())),
            phone: Some(Value::String(phone.into())),
        }
    }

    /// The name column, if it holds a string.
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().and_then(Value::as_str)
    }

    /// The phone column, if it holds a string.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_ref().and_then(Value::as_str)
    }

    /// Printable form of both columns for log lines.
    pub fn describe(&self) -> (FieldDisplay<'_>, FieldDisplay<'_>) {
        (FieldDisplay(self.name.as_ref()), FieldDisplay(self.phone.as_ref()))
    }

    /// Validate the row and turn it into a [`Contact`].
    ///
    /// Field values are moved over untouched; the name is not trimmed.
    pub fn into_contact(self) -> Result<Contact, ValidationError> {
        let name = self.name().map(str::to_owned);
        let phone = self.phone().map(str::to_owned);

        let name = match name {
            Some(n) if is_valid_name(Some(&n)) => n,
            _ => return Err(ValidationError::EmptyName),
        };

        let phone = match phone {
            Some(p) => PhoneNumber::new(p)?,
            None => {
                let raw = FieldDisplay(self.phone.as_ref()).to_string();
                return Err(ValidationError::InvalidPhone(raw));
            }
        };

        Ok(Contact { name, phone })
    }
}

/// Log-friendly rendering of a raw column value.
pub struct FieldDisplay<'a>(Option<&'a Value>);

impl fmt::Display for FieldDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None | Some(Value::Null) => write!(f, "<missing>"),
            Some(Value::String(s)) => write!(f, "{}", s),
            Some(other) => write!(f, "{}", other),
        }
    }
}

/// A contact that passed both the name and the phone check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    /// Display name exactly as stored in the backend
    pub name: String,

    /// Validated mobile number
    pub phone: PhoneNumber,
}

impl Contact {
    /// Create a contact from plain strings, applying both validators.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Result<Self, ValidationError> {
        ContactRow::new(name, phone).into_contact()
    }
}
