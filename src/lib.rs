//! Robo Player - a browser music player built on Dioxus.
//!
//! The crate is split the same way the app is wired at runtime:
//! - [`api`] loads the track catalog from the remote music API
//! - [`playback`] owns the playback state and the single audio device
//! - [`components`] renders the grid, transport bar and loading animation

pub mod api;
pub mod components;
pub mod config;
pub mod diagnostics;
pub mod playback;
