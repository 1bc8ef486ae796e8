use dioxus::prelude::*;

/// Rounded accent button shared by the grid and the transport bar.
#[component]
pub fn PillButton(
    onclick: EventHandler<MouseEvent>,
    #[props(default)] class: String,
    #[props(default)] label: String,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "pill-button {class}",
            aria_label: "{label}",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
