use std::time::Instant;

/// Messages emitted by the UI and the playback subscription.
#[derive(Debug, Clone)]
pub enum Message {
    TogglePlayPause,
    SegmentClicked(usize),
    Scrubbed(f32),
    SetVolume(f32),
    ToggleTheme,
    Tick(Instant),
}
