//! ServiceHub - Service Access for the UI
//!
//! Holds the channel that carries `AppEvent`s to the workspace event pump and
//! the submitter used by the home page.

use std::sync::Arc;

use gpui::Global;

use crate::eventing::app_event::AppEvent;
use crate::services::submitter::FormSubmitter;

/// ServiceHub shared as a GPUI global
#[derive(Clone)]
pub struct ServiceHub {
    /// Channel to send events to UI
    event_tx: flume::Sender<AppEvent>,
    /// Collaborator receiving submitted forms
    submitter: Arc<dyn FormSubmitter>,
}

impl Global for ServiceHub {}

impl ServiceHub {
    /// Create a new service hub
    pub fn new(event_tx: flume::Sender<AppEvent>, submitter: Arc<dyn FormSubmitter>) -> Self {
        let hub = Self {
            event_tx,
            submitter,
        };
        hub.log(AppEvent::info("ServiceHub initialized"));
        hub
    }

    /// Forward an event to the UI; dropped silently once the UI is gone
    pub fn log(&self, event: AppEvent) {
        if let AppEvent::Log { level, message, .. } = &event {
            tracing::debug!("[{}] {}", level.label(), message);
        }
        let _ = self.event_tx.send(event);
    }

    /// Submitter for form payloads
    pub fn submitter(&self) -> Arc<dyn FormSubmitter> {
        self.submitter.clone()
    }
}

impl std::fmt::Debug for ServiceHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceHub")
            .field("ui_connected", &!self.event_tx.is_disconnected())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::submitter::SimulatedSubmitter;
    use crate::state::log_state::LogLevel;

    #[test]
    fn test_hub_forwards_logs() {
        let (tx, rx) = flume::unbounded();
        let hub = ServiceHub::new(tx, Arc::new(SimulatedSubmitter::default()));

        hub.log(AppEvent::warn("careful"));

        let messages: Vec<(LogLevel, String)> = rx
            .drain()
            .map(|event| match event {
                AppEvent::Log { level, message, .. } => (level, message),
            })
            .collect();
        assert_eq!(
            messages,
            vec![
                (LogLevel::Info, "ServiceHub initialized".to_string()),
                (LogLevel::Warn, "careful".to_string()),
            ]
        );
    }

    #[test]
    fn test_log_after_ui_closed_is_ignored() {
        let (tx, rx) = flume::unbounded();
        let hub = ServiceHub::new(tx, Arc::new(SimulatedSubmitter::default()));
        drop(rx);
        hub.log(AppEvent::info("nobody listening"));
    }
}
