use dioxus::prelude::*;

use crate::config::{StationButton, STATION_BUTTONS};

#[component]
pub fn StationButtons(disabled: bool, on_select: EventHandler<StationButton>) -> Element {
    rsx! {
        div { class: "panel",
            h3 { "Charging Stations" }
            div { class: "station-buttons",
                for station in STATION_BUTTONS {
                    button {
                        disabled,
                        title: if disabled { "Map is loading..." } else { "" },
                        onclick: move |_| on_select.call(station),
                        "{station.name}"
                    }
                }
            }
        }
    }
}
