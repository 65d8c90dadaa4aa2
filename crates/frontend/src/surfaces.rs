use std::rc::Rc;

use charge_shared::models::{FormField, OccupationForm, Position};
use charge_shared::surface::{DialogId, DialogSurface, MapWidget, TextSlot};
use dioxus::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config;
use crate::leaflet;

/// Leaflet map backing the tracker's markers.
pub struct LeafletMapWidget {
    map: leaflet::Map,
    on_station_click: Rc<dyn Fn(String)>,
}

impl LeafletMapWidget {
    /// Create the map inside `container_id` with the OpenStreetMap tile layer.
    /// Marker clicks are reported to `on_station_click` with the station name.
    pub fn mount(container_id: &str, on_station_click: impl Fn(String) + 'static) -> Self {
        let map = leaflet::map(container_id);
        map.set_view(&leaflet::lat_lng(config::MAP_CENTER), config::MAP_ZOOM);
        leaflet::tile_layer(
            config::TILE_URL,
            &leaflet::tile_options(config::TILE_MAX_ZOOM, config::TILE_ATTRIBUTION),
        )
        .add_to(&map);
        tracing::debug!(container_id, "Leaflet map mounted");

        LeafletMapWidget {
            map,
            on_station_click: Rc::new(on_station_click),
        }
    }
}

impl MapWidget for LeafletMapWidget {
    type Handle = leaflet::Marker;

    fn place_marker(&mut self, position: Position) -> leaflet::Marker {
        leaflet::marker(&leaflet::lat_lng(position)).add_to(&self.map)
    }

    fn bind_popup_and_open(&mut self, handle: &leaflet::Marker, text: &str) {
        handle.bind_popup(text).open_popup();
    }

    fn on_click(&mut self, handle: &leaflet::Marker, station: &str) {
        let station = station.to_string();
        let callback = Rc::clone(&self.on_station_click);
        let handler = Closure::<dyn FnMut()>::new(move || callback(station.clone()));
        handle.on("click", handler.as_ref().unchecked_ref());
        // Markers are never removed, so the handler lives as long as the page.
        handler.forget();
    }
}

/// Dialog visibility, texts and form contents, held in signals the modal
/// components render from.
#[derive(Clone, Copy, PartialEq)]
pub struct DialogSignals {
    pub confirm_open: Signal<bool>,
    pub full_open: Signal<bool>,
    pub occupation_open: Signal<bool>,
    pub confirm_message: Signal<String>,
    pub full_message: Signal<String>,
    pub form: Signal<OccupationForm>,
}

pub fn use_dialog_signals() -> DialogSignals {
    DialogSignals {
        confirm_open: use_signal(|| false),
        full_open: use_signal(|| false),
        occupation_open: use_signal(|| false),
        confirm_message: use_signal(String::new),
        full_message: use_signal(String::new),
        form: use_signal(OccupationForm::default),
    }
}

impl DialogSignals {
    fn visibility(&mut self, dialog: DialogId) -> &mut Signal<bool> {
        match dialog {
            DialogId::AreaConfirm => &mut self.confirm_open,
            DialogId::FullStation => &mut self.full_open,
            DialogId::Occupation => &mut self.occupation_open,
        }
    }
}

impl DialogSurface for DialogSignals {
    fn show(&mut self, dialog: DialogId) {
        self.visibility(dialog).set(true);
    }

    fn hide(&mut self, dialog: DialogId) {
        self.visibility(dialog).set(false);
    }

    fn set_text(&mut self, slot: TextSlot, text: &str) {
        match slot {
            TextSlot::ConfirmMessage => self.confirm_message.set(text.to_string()),
            TextSlot::FullStationMessage => self.full_message.set(text.to_string()),
        }
    }

    fn read_field(&self, field: FormField) -> String {
        self.form.peek().value(field).to_string()
    }

    fn alert(&mut self, message: &str) {
        if let Some(window) = web_sys::window() {
            window.alert_with_message(message).ok();
        }
    }
}
