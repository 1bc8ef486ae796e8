//! The components module contains all shared components for our app.

mod app;
mod audio_manager;
mod button;
mod equalizer;
mod icons;
mod player;
mod track_grid;

pub use app::*;
pub use audio_manager::*;
pub use button::*;
pub use equalizer::*;
pub use icons::*;
pub use player::*;
pub use track_grid::*;
