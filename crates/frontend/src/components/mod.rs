pub mod area_modal;
pub mod full_station_modal;
pub mod occupation_log;
pub mod occupation_modal;
pub mod station_buttons;
