//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency: the form changes on every keystroke,
//! config and locale almost never.

use gpui::{App, AppContext, Entity, Global};

use crate::domain::config::AppConfig;
use crate::state::{
    config_state::ConfigState, form_state::ProfileFormState, i18n_state::I18nState,
    log_state::LogState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Application configuration state
    pub config: Entity<ConfigState>,
    /// Log messages (ring buffer)
    pub logs: Entity<LogState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
    /// Profile form values, validation and submission state
    pub form: Entity<ProfileFormState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded configuration
    pub fn init(config: AppConfig, cx: &mut App) -> Self {
        let locale = config.locale;
        let policy = config.first_entry_policy;
        let log_capacity = config.log_capacity;

        let entities = Self {
            config: cx.new(|_| ConfigState::new(config)),
            logs: cx.new(|_| LogState::new(log_capacity)),
            i18n: cx.new(|_| I18nState::new(locale)),
            form: cx.new(|_| ProfileFormState::new(policy)),
        };

        // Re-apply the first-entry policy whenever the configuration changes
        let form = entities.form.clone();
        cx.observe(&entities.config, move |config, cx| {
            let policy = config.read(cx).config.first_entry_policy;
            form.update(cx, |state, cx| {
                if state.set_first_entry_policy(policy) {
                    cx.notify();
                }
            });
        })
        .detach();

        entities
    }
}
