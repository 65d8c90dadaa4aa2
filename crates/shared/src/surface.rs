//! Capabilities the tracker drives: a map that shows markers and a set of
//! modal dialogs. The browser implements both; tests use recording fakes.

use crate::models::{FormField, Position};

pub trait MapWidget {
    type Handle: Clone;

    fn place_marker(&mut self, position: Position) -> Self::Handle;

    fn bind_popup_and_open(&mut self, handle: &Self::Handle, text: &str);

    /// Route clicks on `handle` back to the tracker as clicks on `station`.
    fn on_click(&mut self, handle: &Self::Handle, station: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogId {
    AreaConfirm,
    FullStation,
    Occupation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSlot {
    ConfirmMessage,
    FullStationMessage,
}

pub trait DialogSurface {
    fn show(&mut self, dialog: DialogId);

    fn hide(&mut self, dialog: DialogId);

    fn set_text(&mut self, slot: TextSlot, text: &str);

    fn read_field(&self, field: FormField) -> String;

    fn alert(&mut self, message: &str);
}
