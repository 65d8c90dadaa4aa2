use dioxus::prelude::*;

#[component]
pub fn FullStationModal(open: Signal<bool>, message: Signal<String>, on_close: EventHandler<()>) -> Element {
    if !*open.read() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal full",
                id: "fullStationModal",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                span {
                    class: "close",
                    onclick: move |_| on_close.call(()),
                    "\u{00d7}"
                }
                h2 { "Station Full" }
                p { id: "fullStationMessage", "{message}" }
                button {
                    onclick: move |_| on_close.call(()),
                    "OK"
                }
            }
        }
    }
}
