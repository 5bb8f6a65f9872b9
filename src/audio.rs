//! Narration playback on top of `rodio`.
//!
//! One track, one sink. The sink is the single source of truth for the
//! playback position; the app only writes it through [`NarrationPlayer::seek`].

use anyhow::{Context, Result, anyhow};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct NarrationPlayer {
    path: PathBuf,
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Sink,
    duration: Option<Duration>,
}

impl NarrationPlayer {
    /// Open the narration track and park it paused at the beginning.
    pub fn load(path: &Path) -> Result<Self> {
        let (stream, handle) = OutputStream::try_default().context("Opening audio output")?;
        let sink = Sink::try_new(&handle).context("Creating playback sink")?;

        let source = decode(path)?;
        let duration = rodio::Source::total_duration(&source).or_else(|| wav_duration(path));
        match duration {
            Some(total) => info!(
                path = %path.display(),
                secs = total.as_secs_f32(),
                "Loaded narration track"
            ),
            None => warn!(
                path = %path.display(),
                "Narration duration unknown; progress and scrubbing disabled"
            ),
        }

        sink.append(source);
        sink.pause();

        Ok(Self {
            path: path.to_path_buf(),
            _stream: stream,
            handle,
            sink,
            duration,
        })
    }

    pub fn play(&self) {
        debug!("Resuming playback");
        self.sink.play();
    }

    pub fn pause(&self) {
        debug!("Pausing playback");
        self.sink.pause();
    }

    pub fn set_volume(&self, volume: f32) {
        self.sink.set_volume(volume);
    }

    /// Current playback position as reported by the sink.
    pub fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    /// True once the sink has drained the track.
    pub fn finished(&self) -> bool {
        self.sink.empty()
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Move the playhead. Re-appends a fresh decoder first when the track
    /// already drained, so seeking after the end restarts the source.
    ///
    /// A re-created sink always starts paused; a drained sink's own pause
    /// flag says nothing about what the user wants. The caller re-asserts
    /// play or pause after the seek.
    pub fn seek(&mut self, position: Duration) -> Result<()> {
        if self.sink.empty() {
            debug!("Sink drained; reloading track before seek");
            let volume = self.sink.volume();
            let sink = Sink::try_new(&self.handle).context("Recreating playback sink")?;
            sink.set_volume(volume);
            sink.append(decode(&self.path)?);
            sink.pause();
            self.sink = sink;
        }
        self.sink
            .try_seek(position)
            .map_err(|err| anyhow!("Seeking to {:.1}s: {err}", position.as_secs_f32()))
    }
}

fn decode(path: &Path) -> Result<Decoder<BufReader<File>>> {
    let file = File::open(path).with_context(|| format!("Opening {}", path.display()))?;
    Decoder::new(BufReader::new(file)).with_context(|| format!("Decoding {}", path.display()))
}

/// Duration straight from the WAV header, for decoders that cannot report it.
fn wav_duration(path: &Path) -> Option<Duration> {
    let reader = hound::WavReader::open(path).ok()?;
    let spec = reader.spec();
    if spec.sample_rate == 0 {
        return None;
    }
    Some(Duration::from_secs_f64(
        f64::from(reader.duration()) / f64::from(spec.sample_rate),
    ))
}
