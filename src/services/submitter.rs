//! Form Submitter
//!
//! The boundary where a validated form leaves the UI. The shipped
//! implementation simulates a network round trip with a fixed delay.

use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;
use tracing::{info, warn};

use crate::constants::DEFAULT_SUBMIT_DELAY_MS;
use crate::domain::form::FormSnapshot;
use crate::error::{Error, Result};

/// Accepts a form payload and eventually resolves or fails
pub trait FormSubmitter: Send + Sync {
    fn submit(&self, snapshot: FormSnapshot) -> BoxFuture<'static, Result<()>>;
}

/// Logs the payload and succeeds after `delay`
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS))
    }
}

impl FormSubmitter for SimulatedSubmitter {
    fn submit(&self, snapshot: FormSnapshot) -> BoxFuture<'static, Result<()>> {
        let delay = self.delay;
        async move {
            match serde_json::to_string(&snapshot.redacted()) {
                Ok(payload) => info!(%payload, "Submitting form"),
                Err(e) => warn!("Failed to serialize form payload: {}", e),
            }
            tokio::time::sleep(delay).await;
            info!(hobbies = snapshot.hobbies.len(), "Form submitted");
            Ok(())
        }
        .boxed()
    }
}

/// Run `submitter` and fail with `Error::Timeout` if it takes longer than `timeout`
pub async fn submit_with_timeout(
    submitter: &dyn FormSubmitter,
    snapshot: FormSnapshot,
    timeout: Duration,
) -> Result<()> {
    match tokio::time::timeout(timeout, submitter.submit(snapshot)).await {
        Ok(result) => result,
        Err(_) => Err(Error::Timeout {
            message: format!("form submission exceeded {} ms", timeout.as_millis()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::FormState;

    struct RejectingSubmitter;

    impl FormSubmitter for RejectingSubmitter {
        fn submit(&self, _snapshot: FormSnapshot) -> BoxFuture<'static, Result<()>> {
            async {
                Err(Error::Submission {
                    message: "rejected".into(),
                })
            }
            .boxed()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_submitter_waits_for_delay() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(2000));
        let started = tokio::time::Instant::now();

        submitter
            .submit(FormState::default().snapshot())
            .await
            .expect("simulated submit succeeds");

        assert!(started.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_reported_as_error() {
        let submitter = SimulatedSubmitter::new(Duration::from_secs(60));
        let result = submit_with_timeout(
            &submitter,
            FormState::default().snapshot(),
            Duration::from_secs(1),
        )
        .await;
        assert!(matches!(result, Err(Error::Timeout { .. })));
    }

    #[tokio::test]
    async fn test_failure_passes_through() {
        let result = submit_with_timeout(
            &RejectingSubmitter,
            FormState::default().snapshot(),
            Duration::from_secs(1),
        )
        .await;
        assert!(matches!(result, Err(Error::Submission { .. })));
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(SimulatedSubmitter::default().delay(), Duration::from_millis(2000));
    }
}
