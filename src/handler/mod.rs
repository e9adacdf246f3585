//! Contact form submission handler.
//!
//! Wires the form surface, the confirmation display, the user notifier and the
//! submission client together. A host calls [`FormSubmissionHandler::initialize`]
//! once at startup and [`FormSubmissionHandler::submit`] on every submit event.

mod guard;

pub use guard::{InFlight, InFlightGuard};

use crate::client::{AsyncSubmissionClient, Delivery};
use crate::config::{Config, FailurePolicy};
use crate::confirmation::{Confirmation, ConfirmationView};
use crate::error::{SubmitError, ValidationFailure};
use crate::form::{validate, FormFields, FormInput, Notifier};
use crate::metrics::Metrics;
use crate::models::ContactMessage;
use std::sync::Arc;

/// Alert shown under [`FailurePolicy::Report`] when a message is not delivered.
pub const FAILURE_ALERT: &str = "Your message could not be sent. Please try again later.";

/// Element handles located by the host.
#[derive(Clone, Default)]
pub struct PageElements {
    pub form: Option<Arc<dyn FormFields>>,
    pub confirmation: Option<Arc<dyn ConfirmationView>>,
}

/// Result of one submit event.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; the user was alerted and nothing was sent.
    Rejected(ValidationFailure),

    /// Another submission was still in flight; nothing was sent.
    Busy,

    /// The endpoint answered with a 2xx status.
    Delivered(Delivery),

    /// The message was sent but not delivered. Under [`FailurePolicy::Ignore`]
    /// a non-2xx answer still showed the confirmation.
    Failed(SubmitError),
}

impl SubmitOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmitOutcome::Delivered(_))
    }
}

/// Handles submit events for one contact form.
pub struct FormSubmissionHandler {
    form: Arc<dyn FormFields>,
    confirmation: Option<Confirmation>,
    notifier: Arc<dyn Notifier>,
    client: Arc<dyn AsyncSubmissionClient>,
    failure_policy: FailurePolicy,
    in_flight: InFlightGuard,
    metrics: Metrics,
}

impl FormSubmissionHandler {
    /// Build a handler from the located page elements.
    ///
    /// Returns `None` when the form is absent; nothing is set up in that case.
    /// A missing confirmation element only disables the acknowledgment.
    pub fn initialize(
        elements: PageElements,
        notifier: Arc<dyn Notifier>,
        client: Arc<dyn AsyncSubmissionClient>,
        config: &Config,
    ) -> Option<Self> {
        let Some(form) = elements.form else {
            tracing::debug!("No contact form on the page; handler not installed");
            return None;
        };

        let confirmation = match elements.confirmation {
            Some(view) => Some(Confirmation::new(view, config.confirmation_display())),
            None => {
                tracing::warn!("No confirmation element; submissions will not be acknowledged");
                None
            }
        };

        Some(Self {
            form,
            confirmation,
            notifier,
            client,
            failure_policy: config.failure_policy,
            in_flight: InFlightGuard::new(),
            metrics: Metrics::new(),
        })
    }

    /// Share a metrics collector with the rest of the application.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_busy()
    }

    /// Handle one submit event.
    ///
    /// Fields are cleared as soon as the request is dispatched, before the
    /// endpoint answers.
    pub async fn submit(&self) -> SubmitOutcome {
        self.metrics.record_submission();

        let input = FormInput::read(&*self.form);
        let contact = match validate(&input) {
            Ok(contact) => contact,
            Err(failure) => {
                self.metrics.record_validation_failure();
                let fields: Vec<&str> = failure.problems().iter().map(|(f, _)| f.id()).collect();
                tracing::info!(?fields, "Contact form rejected");
                self.notifier.alert(&failure.to_string());
                return SubmitOutcome::Rejected(failure);
            }
        };

        let Some(_in_flight) = self.in_flight.try_acquire() else {
            self.metrics.record_busy_rejection();
            tracing::debug!("Submission already in flight; submit ignored");
            return SubmitOutcome::Busy;
        };

        let message = ContactMessage::new(contact);
        tracing::debug!(timestamp = message.timestamp(), "Dispatching contact message");
        self.form.reset();

        let result = self.client.submit(message).await;
        self.finish(result)
    }

    fn finish(&self, result: Result<Delivery, SubmitError>) -> SubmitOutcome {
        match result {
            Ok(delivery) => {
                tracing::info!(status = delivery.status, "Contact message delivered");
                self.acknowledge();
                SubmitOutcome::Delivered(delivery)
            }
            Err(error) => {
                tracing::warn!(error = %error, "Contact message not delivered");
                match self.failure_policy {
                    FailurePolicy::Ignore => {
                        if error.is_acknowledged() {
                            self.acknowledge();
                        }
                    }
                    FailurePolicy::Report => self.notifier.alert(FAILURE_ALERT),
                }
                SubmitOutcome::Failed(error)
            }
        }
    }

    fn acknowledge(&self) {
        match &self.confirmation {
            Some(confirmation) => confirmation.show(),
            None => tracing::debug!("Acknowledgment skipped; no confirmation element"),
        }
    }
}
