//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::sync::Arc;

use gpui::{
    actions, px, App, AppContext, Application, Bounds, KeyBinding, TitlebarOptions, WindowBounds,
    WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::domain::config::AppConfig;
use crate::eventing::app_event::AppEvent;
use crate::i18n::t;
use crate::services::{FormSubmitter, ServiceHub, SimulatedSubmitter};

actions!(hobby_form, [Quit]);

/// Run the Hobby Form application
///
/// `loaded` tells whether `config` came from the settings file.
pub fn run_app(config: AppConfig, loaded: bool) {
    Application::new().run(move |cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.bind_keys([KeyBinding::new("secondary-q", Quit, None)]);

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let title = t(config.locale, "app-title");
        let simulated = SimulatedSubmitter::new(config.submit_delay());
        tracing::info!(
            "Submissions simulated with a {} ms delay",
            simulated.delay().as_millis()
        );
        let submitter: Arc<dyn FormSubmitter> = Arc::new(simulated);

        // Initialize global entities
        let entities = AppEntities::init(config, cx);
        cx.set_global(entities.clone());

        // Create event channel for service -> UI communication
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();

        let service_hub = ServiceHub::new(event_tx, submitter);
        if loaded {
            service_hub.log(AppEvent::info("Settings loaded"));
        }
        cx.set_global(service_hub);

        // Create main window
        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(title),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), event_rx, cx))
        });
        if let Err(e) = opened {
            tracing::error!("Failed to open main window: {}", e);
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
