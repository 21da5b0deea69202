//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use tracing::{error, info};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, REGISTRY_PATH_ENV};
use crate::domain::config::GalleryConfig;
use crate::eventing::app_event::AppEvent;

actions!(registry_gui, [Quit]);

/// Run the registry gallery application
pub fn run_app(config: GalleryConfig) {
    Application::new().run(move |cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global entities
        let entities = AppEntities::init(&config, cx);
        cx.set_global(entities.clone());

        // Create event channel for loader -> UI communication
        let (event_tx, event_rx) = smol::channel::unbounded::<AppEvent>();

        let source = config.document_source(std::env::var_os(REGISTRY_PATH_ENV).map(Into::into));
        info!("Registry source: {}", source);

        // Create main window
        let size = gpui::size(
            px(config.window_width.max(MIN_WINDOW_WIDTH)),
            px(config.window_height.max(MIN_WINDOW_HEIGHT)),
        );
        let bounds = Bounds::centered(None, size, cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Component Registry")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), source, event_tx, event_rx, cx))
        });
        if let Err(e) = opened {
            error!("Failed to open main window: {}", e);
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
