use crate::api::format_time;
use crate::components::{ControllerSignal, Icon, IconKind, PillButton};
use dioxus::prelude::*;

/// Transport bar pinned to the bottom of the page while a track is current.
#[component]
pub fn Player() -> Element {
    let mut controller = use_context::<ControllerSignal>().0;
    let state = controller.read().snapshot();

    let Some(track) = state.current_track.clone() else {
        return rsx! {};
    };

    let current_time = state.current_time;
    let duration = state.duration;
    let volume = state.volume;
    let is_playing = state.is_playing;
    let elapsed_label = format_time(current_time);
    let toggle_label = if is_playing { "Pause" } else { "Play" };
    let duration_label = format_time(duration);

    let on_previous = move |_: MouseEvent| {
        if let Err(err) = controller.write().previous() {
            tracing::debug!(%err, "previous ignored");
        }
    };

    let on_next = move |_: MouseEvent| {
        if let Err(err) = controller.write().next() {
            tracing::debug!(%err, "next ignored");
        }
    };

    let on_toggle = {
        let track = track.clone();
        move |_: MouseEvent| controller.write().select_or_toggle(&track)
    };

    let on_seek = move |e: Event<FormData>| {
        if let Ok(seconds) = e.value().parse::<f64>() {
            controller.write().seek(seconds);
        }
    };

    let on_volume_change = move |e: Event<FormData>| {
        if let Ok(level) = e.value().parse::<f64>() {
            controller.write().set_volume(level);
        }
    };

    rsx! {
        div { class: "player-bar",
            // Now playing
            div { class: "player-bar__info",
                img {
                    class: "player-bar__cover",
                    src: "{track.image_url}",
                    alt: "Cover",
                }
                p { class: "player-bar__label", "{track.title} - {track.artist_name}" }
            }

            // Transport
            div { class: "player-bar__controls",
                PillButton { label: "Previous".to_string(), onclick: on_previous,
                    Icon { kind: IconKind::SkipBack, class: "icon".to_string() }
                }
                PillButton {
                    label: toggle_label.to_string(),
                    onclick: on_toggle,
                    if is_playing {
                        Icon { kind: IconKind::Pause, class: "icon".to_string() }
                    } else {
                        Icon { kind: IconKind::Play, class: "icon".to_string() }
                    }
                }
                PillButton { label: "Next".to_string(), onclick: on_next,
                    Icon { kind: IconKind::SkipForward, class: "icon".to_string() }
                }
            }

            // Progress and volume
            div { class: "player-bar__sliders",
                div { class: "player-bar__progress",
                    span { class: "player-bar__time", "{elapsed_label}" }
                    input {
                        r#type: "range",
                        class: "player-bar__range",
                        aria_label: "Seek",
                        min: "0",
                        max: "{duration}",
                        step: "any",
                        value: "{current_time}",
                        disabled: duration <= 0.0,
                        oninput: on_seek,
                    }
                    span { class: "player-bar__time", "{duration_label}" }
                }
                div { class: "player-bar__volume",
                    Icon { kind: IconKind::Volume, class: "icon icon--small".to_string() }
                    input {
                        r#type: "range",
                        class: "player-bar__range",
                        aria_label: "Volume",
                        min: "0",
                        max: "1",
                        step: "0.01",
                        value: "{volume}",
                        oninput: on_volume_change,
                    }
                }
            }
        }
    }
}
