//! Service layer for outbound messaging.

pub mod greeting_service;

pub use greeting_service::{GatewayGreetingService, GreetingSender};
