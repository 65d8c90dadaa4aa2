use charge_shared::models::Position;

pub const MAP_CONTAINER_ID: &str = "map";
pub const MAP_CENTER: Position = Position {
    lat: 8.359735,
    lon: 124.869206,
};
pub const MAP_ZOOM: f64 = 18.0;

pub const TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_MAX_ZOOM: f64 = 19.0;
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";

/// Same-origin path of the station feed.
pub const FEED_PATH: &str = "/charge.json";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationButton {
    pub name: &'static str,
    pub position: Position,
}

pub const STATION_BUTTONS: [StationButton; 3] = [
    StationButton {
        name: "Manolo Fortich Charging Station",
        position: Position {
            lat: 8.371400,
            lon: 124.855103,
        },
    },
    StationButton {
        name: "Dalirig Charging Station",
        position: Position {
            lat: 8.376177,
            lon: 124.903178,
        },
    },
    StationButton {
        name: "Alae Charging Station",
        position: Position {
            lat: 8.420810,
            lon: 124.813377,
        },
    },
];
