use charge_shared::{OccupancyError, OccupancyTracker};
use dioxus::prelude::*;

use crate::api;
use crate::components::area_modal::AreaModal;
use crate::components::full_station_modal::FullStationModal;
use crate::components::occupation_log::OccupationLog;
use crate::components::occupation_modal::OccupationModal;
use crate::components::station_buttons::StationButtons;
use crate::config;
use crate::leaflet;
use crate::surfaces::{use_dialog_signals, DialogSignals, LeafletMapWidget};

type Tracker = OccupancyTracker<LeafletMapWidget, DialogSignals>;

/// Run one user action against the tracker. The tracker has already shown
/// any error to the user, so rejected actions are only logged.
fn dispatch<T>(
    mut tracker: Signal<Option<Tracker>>,
    action: &'static str,
    f: impl FnOnce(&mut Tracker) -> Result<T, OccupancyError>,
) {
    let mut guard = tracker.write();
    let Some(t) = guard.as_mut() else {
        tracing::debug!(action, "Map not ready yet");
        return;
    };
    if let Err(e) = f(t) {
        tracing::debug!(action, error = %e, "Occupation action rejected");
    }
}

#[component]
pub fn ChargeMap() -> Element {
    let dialogs = use_dialog_signals();
    let mut tracker = use_signal(|| None::<Tracker>);
    let mut map_failed = use_signal(|| false);

    // Build the map once Leaflet and the container are available, then
    // preload the station feed. The feed only ever adds markers.
    use_future(move || async move {
        if !leaflet::wait_until_ready(config::MAP_CONTAINER_ID).await {
            tracing::error!("Leaflet did not load, map is unavailable");
            map_failed.set(true);
            return;
        }

        let widget = LeafletMapWidget::mount(config::MAP_CONTAINER_ID, move |station: String| {
            dispatch(tracker, "marker click", |t| {
                t.marker_clicked(&station);
                Ok(())
            });
        });
        tracker.set(Some(OccupancyTracker::new(widget, dialogs)));

        let feed = api::fetch_station_feed().await;
        dispatch(tracker, "load station feed", |t| {
            t.load_feed(feed);
            Ok(())
        });
    });

    let ready = tracker.read().is_some();
    let records = tracker
        .read()
        .as_ref()
        .map(|t| t.records().to_vec())
        .unwrap_or_default();

    rsx! {
        div { class: "app",
            div { class: "header",
                h1 { "Charging Station Map" }
            }

            div { class: "sidebar",
                StationButtons {
                    disabled: !ready,
                    on_select: move |station: config::StationButton| {
                        dispatch(tracker, "request occupation", |t| {
                            t.request_occupation(station.name, station.position)
                        });
                    },
                }
                OccupationLog { records }
            }

            div { class: "map-panel",
                div { id: config::MAP_CONTAINER_ID, class: "map" }
                if *map_failed.read() {
                    div { class: "map-error", "The map could not be loaded." }
                }
            }

            AreaModal {
                open: dialogs.confirm_open,
                message: dialogs.confirm_message,
                on_confirm: move |_| dispatch(tracker, "confirm occupation", |t| t.confirm_occupation()),
                on_cancel: move |_| {
                    dispatch(tracker, "cancel confirmation", |t| {
                        t.cancel_confirmation();
                        Ok(())
                    })
                },
            }

            FullStationModal {
                open: dialogs.full_open,
                message: dialogs.full_message,
                on_close: move |_| {
                    dispatch(tracker, "dismiss full notice", |t| {
                        t.dismiss_full_notice();
                        Ok(())
                    })
                },
            }

            OccupationModal {
                open: dialogs.occupation_open,
                form: dialogs.form,
                on_submit: move |_| dispatch(tracker, "submit occupation", |t| t.submit_from_dialog()),
                on_close: move |_| {
                    dispatch(tracker, "close occupation form", |t| {
                        t.close_occupation_form();
                        Ok(())
                    })
                },
            }
        }
    }
}
