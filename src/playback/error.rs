//! Error types for playback navigation

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// Navigation needs a current track to move from
    #[error("No track is selected")]
    NoActiveTrack,

    /// Nothing to navigate to
    #[error("Catalog is empty")]
    EmptyCatalog,
}

pub type Result<T> = std::result::Result<T, PlaybackError>;
