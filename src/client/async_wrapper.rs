//! Async wrapper around the synchronous SubmissionClient.
//!
//! Runs the blocking HTTP call on tokio's blocking pool so the handler, its
//! timers and the host UI stay responsive while a request is in flight.

use crate::client::{Delivery, SubmissionClient};
use crate::error::{SubmitError, SubmitResult};
use crate::models::ContactMessage;
use async_trait::async_trait;
use std::sync::Arc;

/// Async submission seam used by the form handler.
#[async_trait]
pub trait AsyncSubmissionClient: Send + Sync {
    async fn submit(&self, message: ContactMessage) -> SubmitResult<Delivery>;
}

/// Async wrapper around synchronous SubmissionClient.
#[derive(Clone)]
pub struct AsyncSubmissionClientImpl {
    client: Arc<SubmissionClient>,
}

impl AsyncSubmissionClientImpl {
    pub fn new(client: SubmissionClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncSubmissionClient for AsyncSubmissionClientImpl {
    async fn submit(&self, message: ContactMessage) -> SubmitResult<Delivery> {
        let client = self.client.clone();

        // The message moves into the blocking task and is dropped when it ends.
        tokio::task::spawn_blocking(move || client.submit(&message))
            .await
            .map_err(|e| SubmitError::Runtime(format!("Task join error: {}", e)))?
    }
}
