//! Prompt Practice Studio - Desktop GUI Application
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use iced::Size;
use iced::window;
use pps_gui::app::App;
use pps_gui::component::LUCIDE_FONT_BYTES;
use tracing_subscriber::EnvFilter;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging; RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Prompt Practice Studio");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .font(LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1280.0, 860.0),
            min_size: Some(Size::new(960.0, 640.0)),
            ..Default::default()
        })
        .run()
}
