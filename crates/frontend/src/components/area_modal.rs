use dioxus::prelude::*;

/// "Do you want to occupy ...?" confirmation.
#[component]
pub fn AreaModal(
    open: Signal<bool>,
    message: Signal<String>,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    if !*open.read() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "modal",
                id: "areaModal",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                span {
                    class: "close",
                    onclick: move |_| on_cancel.call(()),
                    "\u{00d7}"
                }
                p { id: "modalMessage", "{message}" }
                div { class: "modal-actions",
                    button {
                        id: "confirmBtn",
                        onclick: move |_| on_confirm.call(()),
                        "Confirm"
                    }
                    button {
                        id: "cancelBtn",
                        class: "secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
