//! HTTP client for posting contact messages.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking` (see [`AsyncSubmissionClientImpl`]). The response
//! body is never read; only the status is kept.

mod async_wrapper;
pub use async_wrapper::{AsyncSubmissionClient, AsyncSubmissionClientImpl};

use crate::config::Config;
use crate::error::{SubmitError, SubmitResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::ContactMessage;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// The endpoint's answer to a successfully posted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    /// HTTP status code of the response
    pub status: u16,
}

/// HTTP client for the contact endpoint.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct SubmissionClient {
    endpoint_url: String,
    agent: Arc<ureq::Agent>,
    metrics: Metrics,
}

impl SubmissionClient {
    /// Create a new SubmissionClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::build(
            config.endpoint_url.clone(),
            Duration::from_secs(config.request_timeout),
            Metrics::new(),
        )
    }

    /// Create a client for an arbitrary endpoint (useful for testing).
    #[doc(hidden)]
    pub fn with_endpoint(endpoint_url: String) -> Self {
        Self::build(endpoint_url, Duration::from_secs(10), Metrics::new())
    }

    /// Share a metrics collector with the rest of the application.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    fn build(endpoint_url: String, timeout: Duration, metrics: Metrics) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            endpoint_url,
            agent: Arc::new(agent),
            metrics,
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// POST a message as JSON to the endpoint.
    ///
    /// # Errors
    ///
    /// `SubmitError::Rejected` for a non-2xx answer, `Transport` or `Timeout`
    /// when no answer arrived.
    pub fn submit(&self, message: &ContactMessage) -> SubmitResult<Delivery> {
        let body = serde_json::to_string(message)?;
        let timer = HttpTimer::new(self.metrics.clone());

        tracing::debug!("POST {}", self.endpoint_url);
        tracing::debug!("Request body: {}", body);

        let result = self
            .agent
            .post(&self.endpoint_url)
            .set("Content-Type", "application/json")
            .send_string(&body);

        match result {
            Ok(response) => {
                let status = response.status();
                tracing::debug!("POST {} - Success (status: {})", self.endpoint_url, status);
                timer.complete();
                Ok(Delivery { status })
            }
            Err(e) => {
                let error = Self::map_error(e);
                tracing::debug!("POST {} - Error: {:?}", self.endpoint_url, error);
                timer.complete_with_error();
                Err(error)
            }
        }
    }

    /// Map a ureq error to a SubmitError.
    fn map_error(error: ureq::Error) -> SubmitError {
        match error {
            ureq::Error::Status(status, response) => SubmitError::Rejected {
                status,
                message: response.status_text().to_string(),
            },
            ureq::Error::Transport(transport) => match transport.kind() {
                ureq::ErrorKind::ConnectionFailed => {
                    SubmitError::Transport("Connection failed".to_string())
                }
                ureq::ErrorKind::Io if Self::timed_out(&transport) => SubmitError::Timeout,
                _ => SubmitError::Transport(transport.to_string()),
            },
        }
    }

    /// ureq normalizes read and write timeouts to `io::ErrorKind::TimedOut`.
    fn timed_out(transport: &ureq::Transport) -> bool {
        std::error::Error::source(transport)
            .and_then(|source| source.downcast_ref::<io::Error>())
            .is_some_and(|error| error.kind() == io::ErrorKind::TimedOut)
    }
}
