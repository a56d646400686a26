//! Home Controller
//!
//! Routes page actions into the profile form state and drives submission.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::hobbies::{AppendOutcome, HobbyId};
use crate::domain::submission::SubmissionOutcome;
use crate::eventing::app_event::AppEvent;
use crate::services::{run_in_tokio, submit_with_timeout, ServiceHub};

/// Home page controller
pub struct HomeController {
    entities: AppEntities,
}

impl HomeController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    pub fn set_username(&self, value: String, cx: &mut App) {
        self.entities.form.update(cx, |state, cx| {
            state.set_username(value);
            cx.notify();
        });
    }

    pub fn set_email(&self, value: String, cx: &mut App) {
        self.entities.form.update(cx, |state, cx| {
            state.set_email(value);
            cx.notify();
        });
    }

    pub fn set_password(&self, value: String, cx: &mut App) {
        self.entities.form.update(cx, |state, cx| {
            state.set_password(value);
            cx.notify();
        });
    }

    pub fn set_hobby_name(&self, id: HobbyId, value: String, cx: &mut App) {
        let result = self.entities.form.update(cx, |state, cx| {
            let result = state.set_hobby_name(id, value);
            cx.notify();
            result
        });

        if let Err(e) = result {
            tracing::warn!("Failed to update hobby {}: {}", id, e);
        }
    }

    /// Append a blank hobby; `None` when a blank one already exists
    pub fn append_hobby(&self, cx: &mut App) -> Option<HobbyId> {
        let outcome = self.entities.form.update(cx, |state, cx| {
            let outcome = state.append_hobby();
            cx.notify();
            outcome
        });

        match outcome {
            AppendOutcome::Appended(id) => {
                tracing::debug!("Hobby {} added", id);
                Some(id)
            }
            AppendOutcome::Ignored => None,
        }
    }

    /// Remove the hobby at `index`, returning the removed id
    pub fn remove_hobby(&self, index: usize, cx: &mut App) -> Option<HobbyId> {
        let result = self.entities.form.update(cx, |state, cx| {
            let result = state.remove_hobby(index);
            cx.notify();
            result
        });

        match result {
            Ok(entry) => {
                tracing::debug!("Hobby {} removed", entry.id());
                Some(entry.id())
            }
            Err(e) => {
                if let Some(hub) = cx.try_global::<ServiceHub>() {
                    hub.log(AppEvent::warn(format!("Cannot remove hobby: {}", e)));
                }
                None
            }
        }
    }

    /// Submit the form if it is valid and idle
    pub fn submit(&self, cx: &mut App) {
        let form = self.entities.form.clone();
        let Some(snapshot) = form.update(cx, |state, cx| {
            let snapshot = state.begin_submit();
            cx.notify();
            snapshot
        }) else {
            return;
        };

        let Some(hub) = cx.try_global::<ServiceHub>().cloned() else {
            tracing::error!("ServiceHub missing; submission aborted");
            form.update(cx, |state, cx| {
                state.finish_submit(SubmissionOutcome::Failed {
                    message: "service hub unavailable".to_string(),
                });
                cx.notify();
            });
            return;
        };

        let timeout = self.entities.config.read(cx).config.submit_timeout();
        let submitter = hub.submitter();
        hub.log(AppEvent::info(format!(
            "Submitting form for {} ({} hobbies)",
            snapshot.username,
            snapshot.hobbies.len()
        )));

        cx.spawn(async move |cx| {
            let result = run_in_tokio(async move {
                submit_with_timeout(submitter.as_ref(), snapshot, timeout).await
            })
            .await;

            match &result {
                Ok(()) => hub.log(AppEvent::info("Form submitted")),
                Err(e) => hub.log(AppEvent::error(format!("Form submission failed: {}", e))),
            }

            let outcome = SubmissionOutcome::from(result);
            let _ = form.update(cx, |state, cx| {
                state.finish_submit(outcome);
                cx.notify();
            });
        })
        .detach();
    }
}
