use serde::{Deserialize, Serialize};

/// Maximum number of people that can occupy a single station.
pub const STATION_CAPACITY: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl Position {
    pub fn new(lat: f64, lon: f64) -> Self {
        Position { lat, lon }
    }

    /// Finite latitude in [-90, 90] and longitude in [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lon)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub name: String,
    pub position: Position,
    pub occupancy: u8,
}

impl Station {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Station {
            name: name.into(),
            position,
            occupancy: 0,
        }
    }

    pub fn capacity(&self) -> u8 {
        STATION_CAPACITY
    }

    pub fn is_full(&self) -> bool {
        self.occupancy >= STATION_CAPACITY
    }

    pub fn remaining(&self) -> u8 {
        STATION_CAPACITY.saturating_sub(self.occupancy)
    }
}

/// One record of the station feed. `message` carries the station name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationFeedEntry {
    pub latitude: f64,
    pub longitude: f64,
    pub message: String,
}

impl StationFeedEntry {
    pub fn position(&self) -> Position {
        Position::new(self.latitude, self.longitude)
    }
}

/// The station the user is in the middle of occupying.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub station_name: String,
    pub position: Position,
}

/// Details typed into the occupation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupationForm {
    pub name: String,
    pub placard_number: String,
    pub home_address: String,
    pub phone_number: String,
}

impl OccupationForm {
    pub fn new(
        name: impl Into<String>,
        placard_number: impl Into<String>,
        home_address: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        OccupationForm {
            name: name.into(),
            placard_number: placard_number.into(),
            home_address: home_address.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Fields left empty (or whitespace only), in form order.
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::PlacardNumber => &self.placard_number,
            FormField::HomeAddress => &self.home_address,
            FormField::PhoneNumber => &self.phone_number,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    PlacardNumber,
    HomeAddress,
    PhoneNumber,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::PlacardNumber,
        FormField::HomeAddress,
        FormField::PhoneNumber,
    ];

    /// DOM id of the matching input element.
    pub fn element_id(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::PlacardNumber => "placardNumber",
            FormField::HomeAddress => "homeAddress",
            FormField::PhoneNumber => "phoneNumber",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormField::Name => write!(f, "Name"),
            FormField::PlacardNumber => write!(f, "Placard Number"),
            FormField::HomeAddress => write!(f, "Home Address"),
            FormField::PhoneNumber => write!(f, "Phone Number"),
        }
    }
}

/// A completed occupation. Kept in memory for the session only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyRecord {
    pub station: String,
    pub name: String,
    pub placard_number: String,
    pub home_address: String,
    pub phone_number: String,
}

/// A marker placed on the map, with the popup text it was last bound to.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker<H> {
    pub station: String,
    pub position: Position,
    pub popup: String,
    pub handle: H,
}

pub fn popup_text(station: &str, count: u8) -> String {
    format!("{station}<br>Number of People Occupied this area: {count}")
}

pub fn confirm_message(station: &str) -> String {
    format!("Do you want to occupy the {station}?")
}

pub fn full_station_message(station: &str) -> String {
    format!("{station} is already fully occupied. Please choose another station.")
}
