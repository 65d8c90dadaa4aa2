use charge_shared::models::{FormField, OccupationForm};
use dioxus::prelude::*;

fn set_field(form: &mut OccupationForm, field: FormField, value: String) {
    match field {
        FormField::Name => form.name = value,
        FormField::PlacardNumber => form.placard_number = value,
        FormField::HomeAddress => form.home_address = value,
        FormField::PhoneNumber => form.phone_number = value,
    }
}

/// Occupation details form. Values live in `form` until submitted.
#[component]
pub fn OccupationModal(
    open: Signal<bool>,
    mut form: Signal<OccupationForm>,
    on_submit: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    if !*open.read() {
        return rsx! {};
    }

    let current = form.read().clone();

    rsx! {
        div {
            class: "modal-backdrop",

            div {
                class: "modal",
                id: "occupationModal",

                span {
                    class: "close",
                    onclick: move |_| on_close.call(()),
                    "\u{00d7}"
                }
                h2 { "Occupation Details" }
                for field in FormField::ALL {
                    div { class: "form-row", key: "{field.element_id()}",
                        label { r#for: field.element_id(), "{field}" }
                        input {
                            id: field.element_id(),
                            r#type: if field == FormField::PhoneNumber { "tel" } else { "text" },
                            value: "{current.value(field)}",
                            oninput: move |evt: Event<FormData>| {
                                set_field(&mut form.write(), field, evt.value());
                            },
                        }
                    }
                }
                div { class: "modal-actions",
                    button {
                        id: "submitOccupationBtn",
                        onclick: move |_| on_submit.call(()),
                        "Submit"
                    }
                }
            }
        }
    }
}
