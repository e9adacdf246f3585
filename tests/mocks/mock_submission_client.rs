use async_trait::async_trait;
use contact_form_client::error::SubmitResult;
use contact_form_client::{AsyncSubmissionClient, ContactMessage, Delivery, SubmitError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{Notify, Semaphore};

/// What the mock endpoint answers.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub enum MockResponse {
    Status(u16),
    ConnectionFailed,
    Timeout,
}

/// Mock submission client that records messages instead of sending them.
///
/// `hold()` keeps every request in flight until `release()` is called.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockSubmissionClient {
    sent: Arc<Mutex<Vec<ContactMessage>>>,
    response: Arc<Mutex<MockResponse>>,
    held: Arc<AtomicBool>,
    gate: Arc<Semaphore>,
    started: Arc<Notify>,
}

#[allow(dead_code)]
impl MockSubmissionClient {
    pub fn new() -> Self {
        Self::responding(MockResponse::Status(201))
    }

    pub fn responding(response: MockResponse) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            response: Arc::new(Mutex::new(response)),
            held: Arc::new(AtomicBool::new(false)),
            gate: Arc::new(Semaphore::new(0)),
            started: Arc::new(Notify::new()),
        }
    }

    pub fn hold(&self) {
        self.held.store(true, Ordering::SeqCst);
    }

    pub fn release(&self) {
        self.held.store(false, Ordering::SeqCst);
        self.gate.add_permits(1);
    }

    /// Resolves once a request has reached the client.
    pub async fn wait_started(&self) {
        self.started.notified().await;
    }

    pub fn sent(&self) -> Vec<ContactMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl Default for MockSubmissionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AsyncSubmissionClient for MockSubmissionClient {
    async fn submit(&self, message: ContactMessage) -> SubmitResult<Delivery> {
        self.sent.lock().unwrap().push(message);
        self.started.notify_one();

        if self.held.load(Ordering::SeqCst) {
            self.gate
                .acquire()
                .await
                .expect("gate semaphore closed")
                .forget();
        }

        let response = *self.response.lock().unwrap();
        match response {
            MockResponse::Status(status) if (200..300).contains(&status) => Ok(Delivery { status }),
            MockResponse::Status(status) => Err(SubmitError::Rejected {
                status,
                message: "mock rejection".to_string(),
            }),
            MockResponse::ConnectionFailed => {
                Err(SubmitError::Transport("Connection failed".to_string()))
            }
            MockResponse::Timeout => Err(SubmitError::Timeout),
        }
    }
}
