//! Audio Manager - binds the playback controller to the page's audio element.
//! The element lives outside the component tree so re-renders never restart audio.

use crate::playback::PlaybackController;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::playback::{AudioSink, DeviceEvent};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

#[cfg(target_arch = "wasm32")]
const AUDIO_ELEMENT_ID: &str = "robo-player-audio";
/// Minimum clock movement (seconds) before a time update reaches the controller.
#[cfg(target_arch = "wasm32")]
const TIME_UPDATE_CADENCE_SECS: f64 = 0.2;

#[cfg(target_arch = "wasm32")]
pub type PlayerSink = WebAudioSink;

#[cfg(not(target_arch = "wasm32"))]
pub type PlayerSink = crate::playback::NullSink;

/// Context handle for the one controller of the session.
#[derive(Clone, Copy)]
pub struct ControllerSignal(pub Signal<PlaybackController<PlayerSink>>);

/// Find the shared audio element, creating it on first use.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    // Stream instead of buffering whole files
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

/// [`AudioSink`] backed by the hidden `<audio>` element.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WebAudioSink;

#[cfg(target_arch = "wasm32")]
impl AudioSink for WebAudioSink {
    fn load(&mut self, url: &str) {
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_src(url);
        }
    }

    fn play(&mut self) {
        if let Some(audio) = get_or_create_audio_element() {
            // Autoplay policy may reject the promise; state stays as requested.
            let _ = audio.play();
        }
    }

    fn pause(&mut self) {
        if let Some(audio) = get_or_create_audio_element() {
            let _ = audio.pause();
        }
    }

    fn seek(&mut self, seconds: f64) {
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_current_time(seconds);
        }
    }

    fn set_volume(&mut self, level: f64) {
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_volume(level);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn dispatch(controller: &mut Signal<PlaybackController<PlayerSink>>, event: DeviceEvent) {
    if let Err(err) = controller.write().handle_device_event(event) {
        tracing::debug!(%err, ?event, "device event ignored");
    }
}

/// Without a browser there is no element to listen to.
#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController() -> Element {
    rsx! {}
}

/// Forwards element events (metadata, time, ended) to the controller.
#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController() -> Element {
    let controller = use_context::<ControllerSignal>().0;

    use_effect(move || {
        let Some(audio) = get_or_create_audio_element() else {
            tracing::warn!("no audio element available; playback disabled");
            return;
        };

        let mut time_controller = controller;
        let mut last_emit = 0.0f64;
        let time_closure = Closure::wrap(Box::new(move || {
            if let Some(audio) = get_or_create_audio_element() {
                let time = audio.current_time();
                if (time - last_emit).abs() >= TIME_UPDATE_CADENCE_SECS {
                    last_emit = time;
                    dispatch(
                        &mut time_controller,
                        DeviceEvent::TimeUpdate { current_time: time },
                    );
                }
            }
        }) as Box<dyn FnMut()>);
        audio.set_ontimeupdate(Some(time_closure.as_ref().unchecked_ref()));
        time_closure.forget();

        let mut metadata_controller = controller;
        let metadata_closure = Closure::wrap(Box::new(move || {
            if let Some(audio) = get_or_create_audio_element() {
                let duration = audio.duration();
                if !duration.is_nan() {
                    dispatch(
                        &mut metadata_controller,
                        DeviceEvent::MetadataLoaded { duration },
                    );
                }
            }
        }) as Box<dyn FnMut()>);
        audio.set_onloadedmetadata(Some(metadata_closure.as_ref().unchecked_ref()));
        metadata_closure.forget();

        let mut ended_controller = controller;
        let ended_closure = Closure::wrap(Box::new(move || {
            dispatch(&mut ended_controller, DeviceEvent::Ended);
        }) as Box<dyn FnMut()>);
        audio.set_onended(Some(ended_closure.as_ref().unchecked_ref()));
        ended_closure.forget();
    });

    rsx! {}
}
