use crate::api::{load_catalog, CatalogClient, CatalogStatus};
use crate::components::{
    AudioController, CatalogStatusSignal, ControllerSignal, Equalizer, Player, PlayerSink,
    TrackGrid,
};
use crate::config::PlayerConfig;
use crate::playback::PlaybackController;
use dioxus::prelude::*;

/// Root of the player: owns the controller, kicks off the catalog load and
/// lays out the grid, transport bar and loading overlay.
#[component]
pub fn MusicPlayer() -> Element {
    let config = use_hook(PlayerConfig::from_build_env);
    let initial_volume = config.initial_volume;
    let controller =
        use_signal(|| PlaybackController::with_volume(PlayerSink::default(), initial_volume));
    let catalog_status = use_signal(CatalogStatus::default);

    use_context_provider(|| config.clone());
    use_context_provider(|| ControllerSignal(controller));
    use_context_provider(|| CatalogStatusSignal(catalog_status));

    // One catalog request per session; never retried.
    let catalog_url = config.catalog_url.clone();
    use_hook(move || {
        let mut controller = controller;
        let mut catalog_status = catalog_status;
        spawn(async move {
            let client = CatalogClient::new(catalog_url);
            let (catalog, status) = load_catalog(&client).await;
            controller.write().set_catalog(catalog);
            catalog_status.set(status);
        });
    });

    let has_track = controller.read().state().has_track();

    rsx! {
        AudioController {}
        div { class: "player-root",
            Equalizer {}
            header { class: "player-header",
                h1 { class: "player-title", "Music Player" }
            }
            TrackGrid {}
            if has_track {
                Player {}
            }
        }
    }
}
