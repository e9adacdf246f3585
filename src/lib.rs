//! Contact Form Client - validates and submits contact form messages.
//!
//! Checks a name, an email address and a message for presence and format,
//! posts the result as JSON to a contact endpoint, and drives a confirmation
//! display that reverts on its own after a fixed delay.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (required text, email address)
//! - **form**: Page-facing traits and the validation pass
//! - **models**: The `ContactMessage` wire payload
//! - **client**: Blocking HTTP client and its async wrapper
//! - **confirmation**: Confirmation display state machine
//! - **handler**: Submit event handling
//! - **console**: Terminal host used by the binary
//! - **config**, **error**, **metrics**: Ambient support

pub mod client;
pub mod config;
pub mod confirmation;
pub mod console;
pub mod domain;
pub mod error;
pub mod form;
pub mod handler;
pub mod metrics;
pub mod models;

pub use client::{AsyncSubmissionClient, AsyncSubmissionClientImpl, Delivery, SubmissionClient};
pub use config::{Config, FailurePolicy};
pub use confirmation::{Confirmation, ConfirmationView, Presentation};
pub use error::{ConfigError, SubmitError, ValidationFailure, VALIDATION_ALERT};
pub use form::{validate, Field, FormFields, FormInput, Notifier, ValidContact};
pub use handler::{FormSubmissionHandler, PageElements, SubmitOutcome, FAILURE_ALERT};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::ContactMessage;
