//! Transient status messages ("toasts").
//!
//! A toast is shown immediately and hidden after a fixed duration.  Showing a
//! new toast while one is pending cancels the pending hide and restarts the
//! timer, so the newest message always gets its full display time.
//!
//! # Timers without a runtime
//!
//! The hide timer is a Tokio task.  When no Tokio runtime is running (for
//! example in a synchronous CLI invocation) the message is still shown but
//! nothing schedules the hide; the sink decides how long it stays.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::trace;

/// How long a toast stays visible unless configured otherwise.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Where toast messages are displayed.
///
/// Called from a timer task, hence `Send + Sync`.
#[cfg_attr(test, mockall::automock)]
pub trait ToastSink: Send + Sync {
    fn show(&self, message: &str);
    fn hide(&self);
}

/// Shows messages on a [`ToastSink`] and hides them after `duration`.
pub struct Toaster {
    sink: Arc<dyn ToastSink>,
    duration: Duration,
    pending_hide: Option<JoinHandle<()>>,
}

impl Toaster {
    pub fn new(sink: Arc<dyn ToastSink>, duration: Duration) -> Self {
        Self {
            sink,
            duration,
            pending_hide: None,
        }
    }

    /// Shows `message`, replacing any visible toast and its hide timer.
    pub fn show(&mut self, message: &str) {
        if let Some(previous) = self.pending_hide.take() {
            previous.abort();
        }
        self.sink.show(message);
        trace!(message, "toast shown");

        let Ok(runtime) = Handle::try_current() else {
            return;
        };
        let sink = Arc::clone(&self.sink);
        let duration = self.duration;
        self.pending_hide = Some(runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            sink.hide();
        }));
    }
}

impl Drop for Toaster {
    fn drop(&mut self) {
        if let Some(pending) = self.pending_hide.take() {
            pending.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[tokio::test(start_paused = true)]
    async fn test_toast_hides_after_duration() {
        // Arrange
        let mut sink = MockToastSink::new();
        sink.expect_show()
            .with(eq("Changes discarded"))
            .times(1)
            .return_const(());
        sink.expect_hide().times(1).return_const(());
        let mut toaster = Toaster::new(Arc::new(sink), DEFAULT_TOAST_DURATION);

        // Act
        toaster.show("Changes discarded");
        tokio::time::sleep(DEFAULT_TOAST_DURATION + Duration::from_millis(1)).await;

        // Assert: expectations are verified when the mock drops.
        drop(toaster);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_toast_cancels_first_hide() {
        // Arrange
        let mut sink = MockToastSink::new();
        sink.expect_show().times(2).return_const(());
        sink.expect_hide().times(1).return_const(());
        let mut toaster = Toaster::new(Arc::new(sink), Duration::from_millis(3000));

        // Act
        toaster.show("first");
        tokio::time::sleep(Duration::from_millis(2000)).await;
        toaster.show("second");
        // The first timer would have fired at 3000 ms.
        tokio::time::sleep(Duration::from_millis(1500)).await;
        tokio::time::sleep(Duration::from_millis(2000)).await;

        // Assert: exactly one hide, from the second timer.
        drop(toaster);
    }

    #[test]
    fn test_show_without_runtime_still_displays() {
        let mut sink = MockToastSink::new();
        sink.expect_show().times(1).return_const(());
        sink.expect_hide().never();
        let mut toaster = Toaster::new(Arc::new(sink), DEFAULT_TOAST_DURATION);

        toaster.show("offline");

        assert!(toaster.pending_hide.is_none());
    }
}
