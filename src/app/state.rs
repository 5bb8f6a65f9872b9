use crate::audio::NarrationPlayer;
use crate::config::{AppConfig, ThemeMode};
use crate::timecode::{format_timestamp, progress_percent};
use crate::transcript::Transcript;
use iced::widget::scrollable::Id as ScrollId;
use iced::{Color, Task};
use once_cell::sync::Lazy;
use std::time::Duration;

use super::messages::Message;

/// Limits and defaults for transport controls.
pub(crate) const MIN_VOLUME: f32 = 0.0;
pub(crate) const MAX_VOLUME: f32 = 1.5;
pub(crate) static TRANSCRIPT_SCROLL_ID: Lazy<ScrollId> =
    Lazy::new(|| ScrollId::new("transcript-scroll"));

/// Core application state.
///
/// `player` is `None` when the narration file could not be opened; every
/// handler then updates the visual state only, so the UI stays coherent
/// with no audio attached.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) transcript: Transcript,
    pub(super) player: Option<NarrationPlayer>,
    pub(super) playing: bool,
    pub(super) position: Duration,
    pub(super) duration: Option<Duration>,
    pub(super) active_segment: Option<usize>,
    pub(super) volume: f32,
}

impl App {
    pub(super) fn bootstrap(
        config: AppConfig,
        transcript: Transcript,
        player: Option<NarrationPlayer>,
    ) -> (App, Task<Message>) {
        let volume = config.volume.clamp(MIN_VOLUME, MAX_VOLUME);
        let duration = player.as_ref().and_then(NarrationPlayer::duration);
        if let Some(player) = &player {
            player.set_volume(volume);
        }

        let app = App {
            config,
            transcript,
            player,
            playing: false,
            position: Duration::ZERO,
            duration,
            active_segment: None,
            volume,
        };
        (app, Task::none())
    }

    /// Recompute the active segment from the current position.
    /// Returns true when the highlight moved.
    pub(super) fn sync_active_segment(&mut self) -> bool {
        let active = self.transcript.active_at(self.position.as_secs_f32());
        if active != self.active_segment {
            self.active_segment = active;
            return true;
        }
        false
    }

    /// Back to the pre-playback presentation: paused control, zeroed
    /// progress and elapsed label, no highlight.
    pub(super) fn reset_to_idle(&mut self) {
        self.playing = false;
        self.position = Duration::ZERO;
        self.active_segment = None;
    }

    pub(super) fn progress_value(&self) -> f32 {
        progress_percent(self.position, self.duration)
    }

    pub(super) fn elapsed_label(&self) -> String {
        format_timestamp(self.position.as_secs_f32())
    }

    pub(super) fn duration_label(&self) -> String {
        format_timestamp(
            self.duration
                .map(|total| total.as_secs_f32())
                .unwrap_or(f32::NAN),
        )
    }

    pub(super) fn highlight_color(&self) -> Color {
        let base = if matches!(self.config.theme, ThemeMode::Night) {
            self.config.night_highlight
        } else {
            self.config.day_highlight
        };
        Color {
            r: base.r,
            g: base.g,
            b: base.b,
            a: base.a,
        }
    }
}
