mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::audio::NarrationPlayer;
use crate::config::AppConfig;
use crate::transcript::Transcript;
use iced::{Size, Theme, window};

/// Helper to launch the app with the prepared transcript and player.
pub fn run_app(
    config: AppConfig,
    transcript: Transcript,
    player: Option<NarrationPlayer>,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    let title = config.title.clone();
    iced::application(move |_app: &App| title.clone(), App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| {
            if matches!(app.config.theme, crate::config::ThemeMode::Night) {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
        .run_with(move || App::bootstrap(config, transcript, player))
}
