//! PhoneNumber value object.

use super::errors::ValidationError;
use super::validation::is_valid_phone;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Brazilian mobile number in international format.
///
/// The inner string is always 13 ASCII digits: `55`, a two-digit area code
/// (DDD), the mobile prefix `9` and eight subscriber digits.
///
/// # Example
///
/// ```
/// use contact_greeter::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("5511987654321").unwrap();
/// assert_eq!(phone.area_code(), "11");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number does not match
    /// the Brazilian mobile pattern.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !is_valid_phone(Some(&phone)) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The two-digit area code (DDD).
    pub fn area_code(&self) -> &str {
        &self.0[2..4]
    }

    /// The nine-digit local number, mobile prefix included.
    pub fn local_number(&self) -> &str {
        &self.0[4..]
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
