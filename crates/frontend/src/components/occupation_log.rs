use charge_shared::models::OccupancyRecord;
use dioxus::prelude::*;

/// Occupations recorded during this session. Contact details stay out of the UI.
#[component]
pub fn OccupationLog(records: Vec<OccupancyRecord>) -> Element {
    let count = records.len();

    rsx! {
        div { class: "panel", id: "logContainer",
            h3 { "Occupation Log ({count})" }
            if records.is_empty() {
                p { class: "dim", "No stations occupied yet." }
            }
            for (i, record) in records.iter().enumerate().rev() {
                div { class: "log-item", key: "{i}",
                    span { class: "log-station", "{record.station}" }
                    span { class: "log-name", "{record.name} \u{00b7} {record.placard_number}" }
                }
            }
        }
    }
}
