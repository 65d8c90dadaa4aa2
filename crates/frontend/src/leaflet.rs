//! Bindings to the Leaflet global (`L`), loaded from a CDN by the page.

use charge_shared::models::Position;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;

const LOAD_POLL_MS: u32 = 50;
const LOAD_ATTEMPTS: u32 = 200;

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn map(container_id: &str) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;
}

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map) -> TileLayer;
}

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(lat_lng: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, content: &str) -> Marker;

    #[wasm_bindgen(method, js_name = openPopup)]
    pub fn open_popup(this: &Marker) -> Marker;

    #[wasm_bindgen(method)]
    pub fn on(this: &Marker, event: &str, handler: &js_sys::Function) -> Marker;
}

/// `[lat, lon]` array as Leaflet expects it.
pub fn lat_lng(position: Position) -> JsValue {
    js_sys::Array::of2(&JsValue::from_f64(position.lat), &JsValue::from_f64(position.lon)).into()
}

pub fn tile_options(max_zoom: f64, attribution: &str) -> JsValue {
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &options,
        &JsValue::from_str("maxZoom"),
        &JsValue::from_f64(max_zoom),
    );
    let _ = js_sys::Reflect::set(
        &options,
        &JsValue::from_str("attribution"),
        &JsValue::from_str(attribution),
    );
    options.into()
}

fn is_loaded() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("L")).unwrap_or(false)
}

fn container_exists(container_id: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id))
        .is_some()
}

/// Wait until the Leaflet script has run and the map container is in the DOM.
pub async fn wait_until_ready(container_id: &str) -> bool {
    for _ in 0..LOAD_ATTEMPTS {
        if is_loaded() && container_exists(container_id) {
            return true;
        }
        TimeoutFuture::new(LOAD_POLL_MS).await;
    }
    false
}
