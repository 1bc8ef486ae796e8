use crate::api::Track;
use crate::components::{ControllerSignal, Icon, IconKind, PillButton};
use dioxus::prelude::*;

/// Grid of every catalog entry. Clicking a card selects it or toggles it.
#[component]
pub fn TrackGrid() -> Element {
    let controller = use_context::<ControllerSignal>().0;
    let tracks = controller.read().catalog().tracks().to_vec();
    let has_track = controller.read().state().has_track();

    rsx! {
        div { class: if has_track { "track-grid track-grid--with-player" } else { "track-grid" },
            for track in tracks {
                TrackCard { key: "{track.source_url}", track: track.clone() }
            }
        }
    }
}

#[component]
fn TrackCard(track: Track) -> Element {
    let mut controller = use_context::<ControllerSignal>().0;
    let (is_current, is_playing) = {
        let guard = controller.read();
        let state = guard.state();
        (state.is_current(&track), state.is_playing_track(&track))
    };
    let title = track.title.clone();
    let toggle_label = if is_playing { "Pause" } else { "Play" };
    let artist = track.artist_name.clone();
    let image = track.image_url.clone();

    rsx! {
        div { class: if is_current { "track-card track-card--current" } else { "track-card" },
            div { class: "track-card__veil" }
            div { class: "track-card__body",
                div { class: "track-card__text",
                    h3 { class: "track-card__title", "{title}" }
                    p { class: "track-card__artist", "{artist}" }
                }
                img {
                    class: "track-card__cover",
                    src: "{image}",
                    alt: "Cover",
                    loading: "lazy",
                }
            }
            div { class: "track-card__action",
                PillButton {
                    label: toggle_label.to_string(),
                    onclick: move |_: MouseEvent| controller.write().select_or_toggle(&track),
                    if is_playing {
                        Icon { kind: IconKind::Pause, class: "icon".to_string() }
                    } else {
                        Icon { kind: IconKind::Play, class: "icon".to_string() }
                    }
                }
            }
        }
    }
}
