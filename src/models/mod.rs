//! Data models for contact rows and gateway messages.

pub mod contact;
pub mod message;

pub use contact::{Contact, ContactRow, NAME_COLUMN, PHONE_COLUMN};
pub use message::{greeting_text, SendTextRequest};
