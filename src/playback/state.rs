use crate::api::Track;

/// Everything the UI needs to render transport controls.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub current_track: Option<Track>,
    pub is_playing: bool,
    /// Seconds into the current track.
    pub current_time: f64,
    /// Seconds; 0 until the device reports metadata.
    pub duration: f64,
    /// 0..=1, kept across track changes.
    pub volume: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::with_volume(1.0)
    }
}

impl PlaybackState {
    pub fn with_volume(volume: f64) -> Self {
        Self {
            current_track: None,
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume,
        }
    }

    pub fn has_track(&self) -> bool {
        self.current_track.is_some()
    }

    pub fn is_current(&self, track: &Track) -> bool {
        self.current_track
            .as_ref()
            .map(|current| current.is_same_track(track))
            .unwrap_or(false)
    }

    /// True when `track` is current and not paused.
    pub fn is_playing_track(&self, track: &Track) -> bool {
        self.is_playing && self.is_current(track)
    }

    pub fn duration_known(&self) -> bool {
        self.duration > 0.0
    }
}
