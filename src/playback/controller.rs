use crate::api::{Catalog, Track};
use crate::playback::device::{AudioSink, DeviceEvent};
use crate::playback::error::{PlaybackError, Result};
use crate::playback::state::PlaybackState;

/// Single owner of the playback state and the audio device.
///
/// Every intent leaves [`PlaybackState`] consistent before returning, and
/// the device only ever hears from this type.
#[derive(Debug)]
pub struct PlaybackController<S: AudioSink> {
    catalog: Catalog,
    state: PlaybackState,
    sink: S,
}

impl<S: AudioSink> PlaybackController<S> {
    pub fn new(sink: S) -> Self {
        Self::with_volume(sink, 1.0)
    }

    pub fn with_volume(mut sink: S, volume: f64) -> Self {
        let volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            1.0
        };
        sink.set_volume(volume);
        Self {
            catalog: Catalog::default(),
            state: PlaybackState::with_volume(volume),
            sink,
        }
    }

    /// Install the session catalog once the loader has it.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn snapshot(&self) -> PlaybackState {
        self.state.clone()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Pause/resume when `track` is already current, otherwise switch to it
    /// and start playing.
    pub fn select_or_toggle(&mut self, track: &Track) {
        if self.state.is_current(track) {
            self.state.is_playing = !self.state.is_playing;
            if self.state.is_playing {
                self.sink.play();
            } else {
                self.sink.pause();
            }
            return;
        }
        self.start_track(track.clone());
    }

    fn start_track(&mut self, track: Track) {
        tracing::debug!(source = %track.source_url, title = %track.title, "switching track");
        self.sink.load(&track.source_url);
        self.sink.set_volume(self.state.volume);
        self.sink.play();
        self.state.current_track = Some(track);
        self.state.current_time = 0.0;
        self.state.duration = 0.0;
        self.state.is_playing = true;
    }

    /// Advance in catalog order, wrapping to the first track. Always plays.
    pub fn next(&mut self) -> Result<()> {
        self.step(true)
    }

    /// Step back in catalog order, wrapping to the last track. Always plays.
    pub fn previous(&mut self) -> Result<()> {
        self.step(false)
    }

    fn step(&mut self, forward: bool) -> Result<()> {
        let current = self
            .state
            .current_track
            .as_ref()
            .ok_or(PlaybackError::NoActiveTrack)?;
        let len = self.catalog.len();
        if len == 0 {
            return Err(PlaybackError::EmptyCatalog);
        }
        let target = match self.catalog.position_of(&current.source_url) {
            Some(index) if forward => (index + 1) % len,
            Some(index) => (index + len - 1) % len,
            // Current track is no longer listed: enter the catalog at its edge.
            None if forward => 0,
            None => len - 1,
        };
        let track = self.catalog.tracks()[target].clone();
        self.start_track(track);
        Ok(())
    }

    /// Jump within the current track, clamped to `[0, duration]`.
    pub fn seek(&mut self, seconds: f64) {
        if !self.state.has_track() || !seconds.is_finite() {
            return;
        }
        let position = seconds.clamp(0.0, self.state.duration);
        self.sink.seek(position);
        self.state.current_time = position;
    }

    pub fn set_volume(&mut self, level: f64) {
        if !level.is_finite() {
            return;
        }
        let level = level.clamp(0.0, 1.0);
        self.sink.set_volume(level);
        self.state.volume = level;
    }

    /// The device finished the current track: auto-advance like [`Self::next`].
    pub fn on_track_ended(&mut self) -> Result<()> {
        self.next()
    }

    pub fn on_metadata_loaded(&mut self, duration: f64) {
        // Live streams report an infinite duration; keep treating it as unknown.
        if !self.state.has_track() || !duration.is_finite() || duration < 0.0 {
            return;
        }
        self.state.duration = duration;
        self.state.current_time = self.state.current_time.min(duration);
    }

    pub fn on_time_update(&mut self, seconds: f64) {
        if !self.state.has_track() || !seconds.is_finite() {
            return;
        }
        let mut position = seconds.max(0.0);
        if self.state.duration_known() {
            position = position.min(self.state.duration);
        }
        self.state.current_time = position;
    }

    pub fn handle_device_event(&mut self, event: DeviceEvent) -> Result<()> {
        match event {
            DeviceEvent::MetadataLoaded { duration } => self.on_metadata_loaded(duration),
            DeviceEvent::TimeUpdate { current_time } => self.on_time_update(current_time),
            DeviceEvent::Ended => return self.on_track_ended(),
        }
        Ok(())
    }
}
