use super::messages::Message;
use super::state::{App, MAX_VOLUME, MIN_VOLUME};
use crate::config::ThemeMode;
use crate::timecode::percent_to_position;
use iced::time;
use iced::{Subscription, Task};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        if app.playing {
            time::every(Duration::from_millis(app.config.tick_interval_ms.max(16)))
                .map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TogglePlayPause => self.handle_toggle_play_pause(),
            Message::SegmentClicked(idx) => self.handle_segment_clicked(idx),
            Message::Scrubbed(percent) => self.handle_scrubbed(percent),
            Message::SetVolume(volume) => self.handle_set_volume(volume),
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::Tick(now) => self.handle_tick(now),
        }
        Task::none()
    }

    fn handle_toggle_play_pause(&mut self) {
        if self.playing {
            info!("Pausing narration");
            if let Some(player) = &self.player {
                player.pause();
            }
            self.playing = false;
        } else {
            info!("Starting narration");
            let drained = self.player.as_ref().map(|p| p.finished()).unwrap_or(false);
            if drained {
                // Replay from the top after the track ran out.
                self.seek_to(Duration::ZERO);
            }
            if let Some(player) = &self.player {
                player.play();
            }
            self.playing = true;
        }
    }

    fn handle_segment_clicked(&mut self, idx: usize) {
        let Some(segment) = self.transcript.segments().get(idx) else {
            warn!(idx, "Clicked segment index out of range");
            return;
        };
        let target = Duration::from_secs_f32(segment.start);
        info!(idx, start_secs = segment.start, "Jumping to clicked segment");
        self.seek_to(target);
        if !self.playing {
            if let Some(player) = &self.player {
                player.play();
            }
            self.playing = true;
        }
    }

    /// Manual scrub: slider value is 0-100 against the known duration.
    /// Play state is left alone; a paused track stays paused.
    fn handle_scrubbed(&mut self, percent: f32) {
        let Some(target) = percent_to_position(percent, self.duration) else {
            debug!(percent, "Ignoring scrub while duration is unknown");
            return;
        };
        debug!(
            percent,
            target_secs = target.as_secs_f32(),
            "Scrubbing narration"
        );
        self.seek_to(target);
    }

    fn handle_set_volume(&mut self, volume: f32) {
        let clamped = volume.clamp(MIN_VOLUME, MAX_VOLUME);
        self.volume = clamped;
        if let Some(player) = &self.player {
            player.set_volume(clamped);
        }
        debug!(volume = clamped, "Adjusted narration volume");
    }

    fn handle_toggle_theme(&mut self) {
        self.config.theme = match self.config.theme {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        };
        info!(theme = %self.config.theme, "Switched theme");
    }

    /// Position update: read the playhead, resync the highlight, and fold
    /// the drained sink into the idle presentation.
    fn handle_tick(&mut self, _now: Instant) {
        let Some(player) = &self.player else {
            return;
        };
        if player.finished() {
            info!("Narration finished");
            self.reset_to_idle();
            return;
        }
        self.position = player.position();
        if self.sync_active_segment() {
            debug!(segment = ?self.active_segment, "Highlight moved");
        }
    }

    /// Update the position state, resync the highlight, and move the real
    /// playhead when audio is attached. Seek failures are logged and the
    /// visual state keeps the target so the UI never desyncs from itself.
    ///
    /// The sink may have been re-created by the seek, so the app's play
    /// state is re-asserted afterwards; `playing` stays authoritative and
    /// a seek alone can never start or stop audio.
    fn seek_to(&mut self, target: Duration) {
        self.position = target;
        self.sync_active_segment();
        if let Some(player) = &mut self.player {
            if let Err(err) = player.seek(target) {
                warn!("Failed to seek narration: {err:#}");
            } else if self.playing {
                player.play();
            } else {
                player.pause();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::messages::Message;
    use super::super::state::App;
    use crate::config::AppConfig;
    use crate::transcript::Transcript;
    use std::time::{Duration, Instant};

    fn silent_app() -> App {
        let transcript =
            Transcript::new(vec![(0.0, 4.0, "first"), (4.0, 11.0, "second")]).unwrap();
        App {
            config: AppConfig::default(),
            transcript,
            player: None,
            playing: false,
            position: Duration::ZERO,
            duration: Some(Duration::from_secs(60)),
            active_segment: None,
            volume: 1.0,
        }
    }

    #[test]
    fn clicking_a_segment_seeks_and_starts_playback() {
        let mut app = silent_app();
        let _ = app.update(Message::SegmentClicked(1));
        assert_eq!(app.position, Duration::from_secs(4));
        assert_eq!(app.active_segment, Some(1));
        assert!(app.playing);
    }

    #[test]
    fn clicking_while_playing_keeps_playing() {
        let mut app = silent_app();
        app.playing = true;
        let _ = app.update(Message::SegmentClicked(0));
        assert_eq!(app.position, Duration::ZERO);
        assert!(app.playing);
    }

    #[test]
    fn out_of_range_click_is_a_no_op() {
        let mut app = silent_app();
        let _ = app.update(Message::SegmentClicked(99));
        assert_eq!(app.position, Duration::ZERO);
        assert!(!app.playing);
    }

    #[test]
    fn scrub_maps_slider_value_against_duration() {
        let mut app = silent_app();
        let _ = app.update(Message::Scrubbed(50.0));
        assert!((app.position.as_secs_f32() - 30.0).abs() < 1e-3);
        assert!(!app.playing, "scrubbing must not start playback");
    }

    #[test]
    fn scrub_without_duration_is_ignored() {
        let mut app = silent_app();
        app.duration = None;
        app.position = Duration::from_secs(2);
        let _ = app.update(Message::Scrubbed(50.0));
        assert_eq!(app.position, Duration::from_secs(2));
    }

    #[test]
    fn scrub_resyncs_the_highlight() {
        let mut app = silent_app();
        let _ = app.update(Message::Scrubbed(10.0));
        // 10% of 60s lands at 6s, inside the second window.
        assert_eq!(app.active_segment, Some(1));
    }

    #[test]
    fn scrub_after_track_end_stays_paused() {
        let mut app = silent_app();
        app.playing = true;
        app.position = Duration::from_secs(60);
        app.reset_to_idle();

        let _ = app.update(Message::Scrubbed(50.0));
        assert!(!app.playing, "seeking a finished track must not resume it");
        assert!((app.position.as_secs_f32() - 30.0).abs() < 1e-3);
        assert_eq!(app.elapsed_label(), "0:30");
    }

    #[test]
    fn toggle_flips_play_state() {
        let mut app = silent_app();
        let _ = app.update(Message::TogglePlayPause);
        assert!(app.playing);
        let _ = app.update(Message::TogglePlayPause);
        assert!(!app.playing);
    }

    #[test]
    fn volume_is_clamped() {
        let mut app = silent_app();
        let _ = app.update(Message::SetVolume(9.0));
        assert_eq!(app.volume, super::MAX_VOLUME);
        let _ = app.update(Message::SetVolume(-1.0));
        assert_eq!(app.volume, super::MIN_VOLUME);
    }

    #[test]
    fn theme_toggles_between_day_and_night() {
        let mut app = silent_app();
        let before = app.config.theme;
        let _ = app.update(Message::ToggleTheme);
        assert_ne!(app.config.theme, before);
        let _ = app.update(Message::ToggleTheme);
        assert_eq!(app.config.theme, before);
    }

    #[test]
    fn tick_without_audio_never_moves_the_position() {
        let mut app = silent_app();
        app.playing = true;
        app.position = Duration::from_secs(5);
        app.active_segment = Some(1);
        let _ = app.update(Message::Tick(Instant::now()));
        assert_eq!(app.position, Duration::from_secs(5));
        assert_eq!(app.active_segment, Some(1));
    }
}
