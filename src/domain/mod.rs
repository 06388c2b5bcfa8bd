//! Domain validation rules and value objects.
//!
//! The free functions in [`validation`] decide whether a raw backend row is
//! usable; [`PhoneNumber`] carries an already validated number so that the
//! rest of the crate cannot hold an unchecked one.

pub mod errors;
pub mod phone;
pub mod validation;

pub use errors::ValidationError;
pub use phone::PhoneNumber;
pub use validation::{is_valid_name, is_valid_phone};
