use dioxus::prelude::*;

use robo_player::components::MusicPlayer;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Music Player" }
        document::Meta { name: "theme-color", content: "#111827" }
        document::Stylesheet { href: APP_CSS }

        MusicPlayer {}
    }
}
