//! Contact Greeter - a batch job that greets contacts over WhatsApp.
//!
//! Reads the contact list from a hosted database, keeps only the rows with a
//! non-blank name and a Brazilian mobile number, and sends each remaining
//! contact a fixed greeting through a WhatsApp messaging gateway.
//!
//! # Architecture
//!
//! - **config**: Credentials and options from environment variables
//! - **error**: Configuration and API error types
//! - **domain**: Name/phone validators and the `PhoneNumber` value object
//! - **models**: Contact rows and gateway payloads
//! - **client**: Synchronous HTTP clients for the backend and the gateway
//! - **repositories**: Validated contact source
//! - **services**: Greeting delivery
//! - **dispatch**: Run orchestration
//! - **metrics**: Run counters
//! - **telemetry**: Log subscriber construction

pub mod client;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod services;
pub mod telemetry;

pub use client::{BackendClient, GatewayClient};
pub use config::{BackendConfig, GatewayConfig};
pub use dispatch::{dispatch_greetings, DispatchSummary};
pub use domain::{is_valid_name, is_valid_phone, PhoneNumber, ValidationError};
pub use error::{ApiError, ConfigError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{Contact, ContactRow, SendTextRequest};
pub use repositories::{BackendContactRepository, ContactSource};
pub use services::{GatewayGreetingService, GreetingSender};
