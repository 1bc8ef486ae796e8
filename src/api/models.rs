use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One song as served by the music API. The source URL is the track's identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    #[serde(rename = "songTitle", alias = "title")]
    pub title: String,
    #[serde(rename = "artistName", alias = "artist", default)]
    pub artist_name: String,
    #[serde(rename = "songImage", alias = "image", default)]
    pub image_url: String,
    #[serde(rename = "songUrl", alias = "url")]
    pub source_url: String,
}

impl Track {
    pub fn new(
        title: impl Into<String>,
        artist_name: impl Into<String>,
        image_url: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist_name: artist_name.into(),
            image_url: image_url.into(),
            source_url: source_url.into(),
        }
    }

    pub fn is_same_track(&self, other: &Track) -> bool {
        self.source_url == other.source_url
    }
}

/// Ordered, fixed list of tracks for the session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    /// Index of the entry sharing `source_url`, if any.
    pub fn position_of(&self, source_url: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t.source_url == source_url)
    }

    /// Source URLs that appear more than once. Selection is ambiguous for these.
    pub fn duplicate_sources(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for track in &self.tracks {
            let url = track.source_url.as_str();
            if !seen.insert(url) && !duplicates.contains(&url) {
                duplicates.push(url);
            }
        }
        duplicates
    }
}

impl From<Vec<Track>> for Catalog {
    fn from(tracks: Vec<Track>) -> Self {
        Self::new(tracks)
    }
}

/// `m:ss` label for a position in seconds. Unknown or negative values read as 0:00.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let mins = total / 60;
    let secs = total % 60;
    format!("{}:{:02}", mins, secs)
}
