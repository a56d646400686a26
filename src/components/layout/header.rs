//! Header Component
//!
//! The application header with title and language switcher.

use gpui::{
    div, px, App, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::constants::{CONFIG_FILE, HEADER_HEIGHT};
use crate::eventing::app_event::AppEvent;
use crate::i18n::t;
use crate::services::ServiceHub;
use crate::theme::colors::FormColors;
use crate::utils::config_store::save_config_async;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

/// Switch locale and persist it with the rest of the configuration
fn toggle_locale(entities: &AppEntities, cx: &mut App) {
    let locale = entities.i18n.update(cx, |i18n, cx| {
        i18n.toggle_locale();
        cx.notify();
        i18n.locale
    });

    let config = entities.config.update(cx, |state, cx| {
        let mut config = state.config.clone();
        config.locale = locale;
        state.update_config(config.clone());
        cx.notify();
        config
    });

    let hub = cx.try_global::<ServiceHub>().cloned();
    cx.background_executor()
        .spawn(async move {
            match save_config_async(CONFIG_FILE, &config).await {
                Ok(()) => tracing::info!("Locale {} saved", config.locale.display_name()),
                Err(e) => {
                    tracing::warn!("Failed to persist locale: {}", e);
                    if let Some(hub) = hub {
                        hub.log(AppEvent::warn(format!("Failed to save settings: {}", e)));
                    }
                }
            }
        })
        .detach();
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let title = t(locale, "app-title");
        let lang_label = locale.toggled().display_name();

        let entities = self.entities.clone();

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .bg(FormColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            .child(
                div()
                    .text_color(FormColors::text_light())
                    .text_size(px(18.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(title),
            )
            // Language switcher
            .child(
                div()
                    .id("lang-switcher")
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .bg(gpui::rgba(0xffffff22))
                    .text_color(FormColors::text_light())
                    .text_size(px(13.0))
                    .cursor_pointer()
                    .hover(|s| s.bg(gpui::rgba(0xffffff44)))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        toggle_locale(&entities, cx);
                    })
                    .child(lang_label),
            )
    }
}
