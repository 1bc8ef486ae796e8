//! Playback state and the controller that owns the audio device.

mod controller;
mod device;
mod error;
mod state;

pub use controller::PlaybackController;
pub use device::{AudioSink, DeviceEvent, NullSink};
pub use error::{PlaybackError, Result};
pub use state::PlaybackState;
