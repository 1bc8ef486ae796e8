//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use robo_player::api::{Catalog, Track};
use robo_player::playback::{AudioSink, PlaybackController};

/// One command as seen by the fake device.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCommand {
    Load(String),
    Play,
    Pause,
    Seek(f64),
    Volume(f64),
}

/// Device double that remembers every command in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub commands: Vec<SinkCommand>,
}

impl RecordingSink {
    pub fn last_load(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            SinkCommand::Load(url) => Some(url.as_str()),
            _ => None,
        })
    }

    pub fn last_volume(&self) -> Option<f64> {
        self.commands.iter().rev().find_map(|c| match c {
            SinkCommand::Volume(level) => Some(*level),
            _ => None,
        })
    }
}

impl AudioSink for RecordingSink {
    fn load(&mut self, url: &str) {
        self.commands.push(SinkCommand::Load(url.to_string()));
    }

    fn play(&mut self) {
        self.commands.push(SinkCommand::Play);
    }

    fn pause(&mut self) {
        self.commands.push(SinkCommand::Pause);
    }

    fn seek(&mut self, seconds: f64) {
        self.commands.push(SinkCommand::Seek(seconds));
    }

    fn set_volume(&mut self, level: f64) {
        self.commands.push(SinkCommand::Volume(level));
    }
}

pub fn track(name: &str) -> Track {
    Track::new(
        format!("Song {name}"),
        format!("Artist {name}"),
        format!("https://img.example/{name}.png"),
        format!("https://audio.example/{name}.mp3"),
    )
}

pub fn catalog(names: &[&str]) -> Catalog {
    Catalog::new(names.iter().map(|name| track(name)).collect())
}

pub fn controller(names: &[&str]) -> PlaybackController<RecordingSink> {
    let mut controller = PlaybackController::new(RecordingSink::default());
    controller.set_catalog(catalog(names));
    controller
}

pub fn current_url(controller: &PlaybackController<RecordingSink>) -> Option<String> {
    controller
        .state()
        .current_track
        .as_ref()
        .map(|t| t.source_url.clone())
}
