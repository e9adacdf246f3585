//! Contact Form - terminal entry point
//!
//! Prompts for a name, an email address and a message, submits them once, and
//! waits for the confirmation to revert before exiting.

use anyhow::Result;
use contact_form_client::console::{ConsoleConfirmation, ConsoleForm, ConsoleNotifier};
use contact_form_client::{
    AsyncSubmissionClient, AsyncSubmissionClientImpl, Config, ConfirmationView, FormFields,
    FormSubmissionHandler, Metrics, Notifier, PageElements, Presentation, SubmissionClient,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first; the log filter falls back to LOG_LEVEL
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only so stdout stays the user-facing surface)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Submitting contact messages to {}", config.endpoint_url);

    let metrics = Metrics::new();
    let sync_client = SubmissionClient::new(&config).with_metrics(metrics.clone());
    let client =
        Arc::new(AsyncSubmissionClientImpl::new(sync_client)) as Arc<dyn AsyncSubmissionClient>;

    let form = Arc::new(ConsoleForm::new());
    let elements = PageElements {
        form: Some(form.clone() as Arc<dyn FormFields>),
        confirmation: Some(Arc::new(ConsoleConfirmation) as Arc<dyn ConfirmationView>),
    };
    let notifier = Arc::new(ConsoleNotifier) as Arc<dyn Notifier>;

    let Some(handler) = FormSubmissionHandler::initialize(elements, notifier, client, &config)
    else {
        return Ok(());
    };
    let handler = handler.with_metrics(metrics.clone());

    // Reading stdin blocks, so keep it off the runtime thread
    let prompt_form = form.clone();
    let filled = tokio::task::spawn_blocking(move || {
        prompt_form.prompt(std::io::stdin().lock(), std::io::stdout())
    })
    .await;
    match filled {
        Ok(true) => {}
        Ok(false) => return Ok(()),
        Err(e) => {
            error!("Prompt task failed: {}", e);
            return Ok(());
        }
    }

    let outcome = handler.submit().await;
    info!("Submission outcome: {:?}", outcome);

    if let Some(confirmation) = handler.confirmation() {
        let mut presentation = confirmation.subscribe();
        if presentation
            .wait_for(|p| *p == Presentation::Hidden)
            .await
            .is_err()
        {
            error!("Confirmation channel closed before the display reverted");
        }
    }

    info!("Metrics: {:?}", metrics.summary());
    Ok(())
}
