//! Confirmation display with a self-reverting timer.
//!
//! The display is a two-state machine, `Hidden` and `Shown(timer)`. Every
//! `show` aborts the pending revert timer before scheduling a new one, and a
//! timer only hides the display if it still belongs to the latest `show`, so
//! overlapping submissions never hide a fresh confirmation early.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// The two presentation states of the confirmation element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Shown,
    Hidden,
}

/// Renders the confirmation element.
pub trait ConfirmationView: Send + Sync {
    fn present(&self, presentation: Presentation);
}

enum DisplayState {
    Hidden,
    Shown {
        generation: u64,
        revert: JoinHandle<()>,
    },
}

struct Inner {
    state: DisplayState,
    generation: u64,
}

struct Shared {
    view: Arc<dyn ConfirmationView>,
    inner: Mutex<Inner>,
    presentation: watch::Sender<Presentation>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Nothing in Inner can be left half-updated by a panic.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn set_hidden(&self, inner: &mut Inner) {
        inner.state = DisplayState::Hidden;
        self.view.present(Presentation::Hidden);
        self.presentation.send_replace(Presentation::Hidden);
    }

    fn revert(&self, generation: u64) {
        let mut inner = self.lock();
        let current = matches!(
            inner.state,
            DisplayState::Shown { generation: shown, .. } if shown == generation
        );

        if current {
            tracing::debug!(generation, "Confirmation reverted to hidden");
            self.set_hidden(&mut inner);
        } else {
            tracing::trace!(generation, "Stale confirmation timer ignored");
        }
    }
}

/// Confirmation element controller.
pub struct Confirmation {
    shared: Arc<Shared>,
    display_for: Duration,
}

impl Confirmation {
    /// Create a controller that keeps the view shown for `display_for` after each `show`.
    ///
    /// The view is put into the hidden state immediately.
    pub fn new(view: Arc<dyn ConfirmationView>, display_for: Duration) -> Self {
        view.present(Presentation::Hidden);
        let (presentation, _) = watch::channel(Presentation::Hidden);

        Self {
            shared: Arc::new(Shared {
                view,
                inner: Mutex::new(Inner {
                    state: DisplayState::Hidden,
                    generation: 0,
                }),
                presentation,
            }),
            display_for,
        }
    }

    /// Show the confirmation and (re)start the revert timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&self) {
        let mut inner = self.shared.lock();

        if let DisplayState::Shown { revert, .. } = &inner.state {
            revert.abort();
        }

        inner.generation += 1;
        let generation = inner.generation;

        self.shared.view.present(Presentation::Shown);
        self.shared.presentation.send_replace(Presentation::Shown);

        let shared = Arc::clone(&self.shared);
        let delay = self.display_for;
        let revert = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            shared.revert(generation);
        });

        inner.state = DisplayState::Shown { generation, revert };
        tracing::debug!(generation, delay_ms = delay.as_millis() as u64, "Confirmation shown");
    }

    /// Hide immediately, cancelling any pending revert.
    pub fn hide(&self) {
        let mut inner = self.shared.lock();
        match &inner.state {
            DisplayState::Shown { revert, .. } => revert.abort(),
            DisplayState::Hidden => return,
        }
        self.shared.set_hidden(&mut inner);
    }

    pub fn is_shown(&self) -> bool {
        matches!(self.shared.lock().state, DisplayState::Shown { .. })
    }

    /// Watch presentation changes.
    pub fn subscribe(&self) -> watch::Receiver<Presentation> {
        self.shared.presentation.subscribe()
    }

    pub fn display_for(&self) -> Duration {
        self.display_for
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{timeout, Instant};

    #[derive(Default)]
    struct RecordingView {
        seen: Mutex<Vec<Presentation>>,
    }

    impl RecordingView {
        fn seen(&self) -> Vec<Presentation> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl ConfirmationView for RecordingView {
        fn present(&self, presentation: Presentation) {
            self.seen.lock().unwrap().push(presentation);
        }
    }

    fn confirmation(ms: u64) -> (Arc<RecordingView>, Confirmation) {
        let view = Arc::new(RecordingView::default());
        let confirmation = Confirmation::new(view.clone(), Duration::from_millis(ms));
        (view, confirmation)
    }

    #[tokio::test(start_paused = true)]
    async fn test_reverts_after_delay() {
        let (view, confirmation) = confirmation(3000);
        let mut rx = confirmation.subscribe();

        let start = Instant::now();
        confirmation.show();
        assert!(confirmation.is_shown());

        let hid_early = timeout(
            Duration::from_millis(2999),
            rx.wait_for(|p| *p == Presentation::Hidden),
        )
        .await
        .is_ok();
        assert!(!hid_early, "confirmation hid before the delay");

        rx.wait_for(|p| *p == Presentation::Hidden).await.unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(3000));
        assert!(elapsed < Duration::from_millis(3002));

        assert!(!confirmation.is_shown());
        assert_eq!(
            view.seen(),
            vec![Presentation::Hidden, Presentation::Shown, Presentation::Hidden]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_show_restarts_timer() {
        let (view, confirmation) = confirmation(3000);
        let mut rx = confirmation.subscribe();

        confirmation.show();
        tokio::time::sleep(Duration::from_millis(2000)).await;

        let second = Instant::now();
        confirmation.show();

        rx.wait_for(|p| *p == Presentation::Hidden).await.unwrap();
        let elapsed = second.elapsed();
        assert!(elapsed >= Duration::from_millis(3000));
        assert!(elapsed < Duration::from_millis(3002));

        // Only one revert happened; the first timer was cancelled.
        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(
            view.seen(),
            vec![
                Presentation::Hidden,
                Presentation::Shown,
                Presentation::Shown,
                Presentation::Hidden
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_hide_cancels_pending_revert() {
        let (view, confirmation) = confirmation(1000);

        confirmation.show();
        confirmation.hide();
        assert!(!confirmation.is_shown());

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(
            view.seen(),
            vec![Presentation::Hidden, Presentation::Shown, Presentation::Hidden]
        );
    }

    #[tokio::test]
    async fn test_hide_when_hidden_is_noop() {
        let (view, confirmation) = confirmation(1000);
        confirmation.hide();
        assert_eq!(view.seen(), vec![Presentation::Hidden]);
        assert_eq!(*confirmation.subscribe().borrow(), Presentation::Hidden);
    }
}
