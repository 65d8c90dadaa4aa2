//! Occupancy tracker: the station occupation workflow and the marker state
//! that mirrors it.
//!
//! The tracker owns every station's count and every placed marker. It is
//! driven one user action at a time:
//!
//! ```text
//! Idle -> AwaitingConfirmation -> AwaitingDetails -> Idle
//!   \                                   |
//!    `-------> FullNotice <------------'
//! ```
//!
//! Errors are shown to the user through the [`DialogSurface`] before they are
//! returned, so callers only need to log them.

use std::collections::HashMap;

use crate::error::{FeedLoadError, OccupancyError};
use crate::feed::FeedBatch;
use crate::models::{
    confirm_message, full_station_message, popup_text, FormField, OccupancyRecord,
    OccupationForm, PendingRequest, PlacedMarker, Position, Station, StationFeedEntry,
    STATION_CAPACITY,
};
use crate::surface::{DialogId, DialogSurface, MapWidget, TextSlot};

pub const MISSING_FIELDS_ALERT: &str = "Please fill in all the fields.";
pub const MAX_OCCUPANCY_ALERT: &str = "This station has reached its maximum occupancy.";

#[derive(Debug, Clone, PartialEq)]
pub enum TrackerState {
    Idle,
    AwaitingConfirmation(PendingRequest),
    AwaitingDetails(PendingRequest),
    FullNotice { station: String },
}

impl TrackerState {
    fn label(&self) -> &'static str {
        match self {
            TrackerState::Idle => "idle",
            TrackerState::AwaitingConfirmation(_) => "awaiting confirmation",
            TrackerState::AwaitingDetails(_) => "awaiting occupation details",
            TrackerState::FullNotice { .. } => "showing the full-station notice",
        }
    }
}

pub struct OccupancyTracker<M: MapWidget, D: DialogSurface> {
    map: M,
    dialogs: D,
    stations: HashMap<String, Station>,
    markers: Vec<PlacedMarker<M::Handle>>,
    records: Vec<OccupancyRecord>,
    state: TrackerState,
}

impl<M: MapWidget, D: DialogSurface> OccupancyTracker<M, D> {
    pub fn new(map: M, dialogs: D) -> Self {
        OccupancyTracker {
            map,
            dialogs,
            stations: HashMap::new(),
            markers: Vec::new(),
            records: Vec::new(),
            state: TrackerState::Idle,
        }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Current count for `station`; unknown stations count as zero.
    pub fn occupancy(&self, station: &str) -> u8 {
        self.stations.get(station).map_or(0, |s| s.occupancy)
    }

    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations.get(name)
    }

    pub fn markers(&self) -> &[PlacedMarker<M::Handle>] {
        &self.markers
    }

    pub fn records(&self) -> &[OccupancyRecord] {
        &self.records
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    /// Ask to occupy a station. Opens the confirm dialog, or the full-station
    /// notice when the station is at capacity.
    pub fn request_occupation(
        &mut self,
        station_name: &str,
        position: Position,
    ) -> Result<(), OccupancyError> {
        let station_name = station_name.trim();
        if station_name.is_empty() {
            tracing::warn!("Ignoring occupation request without a station name");
            return Err(OccupancyError::EmptyStationName);
        }
        match self.state {
            TrackerState::AwaitingDetails(_) => return Err(self.invalid("request occupation")),
            TrackerState::FullNotice { .. } => self.dialogs.hide(DialogId::FullStation),
            TrackerState::AwaitingConfirmation(_) | TrackerState::Idle => {}
        }

        if self.register(station_name, position).is_full() {
            self.dialogs.hide(DialogId::AreaConfirm);
            self.show_full_notice(station_name);
            return Err(OccupancyError::StationFull {
                station: station_name.to_string(),
            });
        }

        self.dialogs
            .set_text(TextSlot::ConfirmMessage, &confirm_message(station_name));
        self.dialogs.show(DialogId::AreaConfirm);
        self.state = TrackerState::AwaitingConfirmation(PendingRequest {
            station_name: station_name.to_string(),
            position,
        });
        tracing::debug!(station = station_name, "Awaiting occupation confirmation");
        Ok(())
    }

    pub fn confirm_occupation(&mut self) -> Result<(), OccupancyError> {
        let pending = match &self.state {
            TrackerState::AwaitingConfirmation(pending) => pending.clone(),
            _ => return Err(self.invalid("confirm occupation")),
        };

        self.dialogs.hide(DialogId::AreaConfirm);
        if self.occupancy(&pending.station_name) >= STATION_CAPACITY {
            self.show_full_notice(&pending.station_name);
            return Err(OccupancyError::StationFull {
                station: pending.station_name,
            });
        }

        self.dialogs.show(DialogId::Occupation);
        self.state = TrackerState::AwaitingDetails(pending);
        Ok(())
    }

    /// Read the occupation form through the dialog surface and submit it.
    pub fn submit_from_dialog(&mut self) -> Result<OccupancyRecord, OccupancyError> {
        let form = OccupationForm {
            name: self.dialogs.read_field(FormField::Name),
            placard_number: self.dialogs.read_field(FormField::PlacardNumber),
            home_address: self.dialogs.read_field(FormField::HomeAddress),
            phone_number: self.dialogs.read_field(FormField::PhoneNumber),
        };
        self.submit_occupation_details(form)
    }

    pub fn submit_occupation_details(
        &mut self,
        form: OccupationForm,
    ) -> Result<OccupancyRecord, OccupancyError> {
        let pending = match &self.state {
            TrackerState::AwaitingDetails(pending) => pending.clone(),
            _ => return Err(self.invalid("submit occupation details")),
        };

        let missing = form.missing_fields();
        if !missing.is_empty() {
            self.dialogs.alert(MISSING_FIELDS_ALERT);
            return Err(OccupancyError::Validation { missing });
        }

        let PendingRequest {
            station_name,
            position,
        } = pending;
        let station = self.register(&station_name, position);
        if station.is_full() {
            self.dialogs.alert(MAX_OCCUPANCY_ALERT);
            self.dialogs.hide(DialogId::Occupation);
            self.show_full_notice(&station_name);
            return Err(OccupancyError::StationFull {
                station: station_name,
            });
        }
        station.occupancy += 1;
        let count = station.occupancy;

        if !self.refresh_popups(&station_name) {
            self.place_station_marker(&station_name, position);
        }

        let record = OccupancyRecord {
            station: station_name,
            name: form.name.trim().to_string(),
            placard_number: form.placard_number.trim().to_string(),
            home_address: form.home_address.trim().to_string(),
            phone_number: form.phone_number.trim().to_string(),
        };
        tracing::info!(
            station = %record.station,
            name = %record.name,
            placard = %record.placard_number,
            address = %record.home_address,
            phone = %record.phone_number,
            occupancy = count,
            "Station occupied"
        );
        self.records.push(record.clone());

        self.dialogs.hide(DialogId::Occupation);
        self.state = TrackerState::Idle;
        Ok(record)
    }

    pub fn cancel_confirmation(&mut self) {
        self.dialogs.hide(DialogId::AreaConfirm);
        if matches!(self.state, TrackerState::AwaitingConfirmation(_)) {
            self.state = TrackerState::Idle;
        }
    }

    pub fn close_occupation_form(&mut self) {
        self.dialogs.hide(DialogId::Occupation);
        if matches!(self.state, TrackerState::AwaitingDetails(_)) {
            self.state = TrackerState::Idle;
        }
    }

    pub fn dismiss_full_notice(&mut self) {
        self.dialogs.hide(DialogId::FullStation);
        if matches!(self.state, TrackerState::FullNotice { .. }) {
            self.state = TrackerState::Idle;
        }
    }

    /// Rebind and open the popups of `station` with its current count.
    pub fn marker_clicked(&mut self, station: &str) {
        if !self.refresh_popups(station) {
            tracing::debug!(station, "Click on a station without markers");
        }
    }

    /// Place a zero-count marker for every usable feed entry. Returns the
    /// number of markers placed.
    pub fn load_initial_stations<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = StationFeedEntry>,
    {
        let mut placed = 0;
        for entry in entries {
            let name = entry.message.trim();
            let position = entry.position();
            if name.is_empty() || !position.is_valid() {
                tracing::warn!(station = name, %position, "Skipping unusable feed entry");
                continue;
            }
            self.register(name, position);
            self.place_station_marker(name, position);
            placed += 1;
        }
        tracing::info!(markers = placed, "Loaded stations from feed");
        placed
    }

    /// Apply the outcome of fetching the station feed. Failures are logged
    /// and leave the map without preloaded markers.
    pub fn load_feed(&mut self, feed: Result<FeedBatch, FeedLoadError>) -> usize {
        match feed {
            Ok(batch) => self.load_initial_stations(batch.stations),
            Err(e) => {
                tracing::error!(error = %e, "Error loading station feed");
                0
            }
        }
    }

    fn register(&mut self, name: &str, position: Position) -> &mut Station {
        self.stations
            .entry(name.to_string())
            .or_insert_with(|| Station::new(name, position))
    }

    fn show_full_notice(&mut self, station: &str) {
        self.dialogs
            .set_text(TextSlot::FullStationMessage, &full_station_message(station));
        self.dialogs.show(DialogId::FullStation);
        self.state = TrackerState::FullNotice {
            station: station.to_string(),
        };
        tracing::info!(station, "Station is fully occupied");
    }

    fn place_station_marker(&mut self, station: &str, position: Position) {
        let text = popup_text(station, self.occupancy(station));
        let handle = self.map.place_marker(position);
        self.map.bind_popup_and_open(&handle, &text);
        self.map.on_click(&handle, station);
        self.markers.push(PlacedMarker {
            station: station.to_string(),
            position,
            popup: text,
            handle,
        });
    }

    fn refresh_popups(&mut self, station: &str) -> bool {
        let text = popup_text(station, self.occupancy(station));
        let mut refreshed = false;
        for marker in self.markers.iter_mut().filter(|m| m.station == station) {
            self.map.bind_popup_and_open(&marker.handle, &text);
            marker.popup.clone_from(&text);
            refreshed = true;
        }
        refreshed
    }

    fn invalid(&self, action: &'static str) -> OccupancyError {
        let state = self.state.label();
        tracing::warn!(action, state, "Ignoring out-of-order occupation action");
        OccupancyError::InvalidTransition { action, state }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::feed::parse_feed;

    const ALAE: &str = "Alae Charging Station";

    fn alae() -> Position {
        Position::new(8.420810, 124.813377)
    }

    #[derive(Default)]
    struct RecordingMap {
        placed: Vec<Position>,
        popups: HashMap<usize, String>,
        opened: Vec<usize>,
        click_routes: HashMap<usize, String>,
    }

    impl MapWidget for RecordingMap {
        type Handle = usize;

        fn place_marker(&mut self, position: Position) -> usize {
            self.placed.push(position);
            self.placed.len() - 1
        }

        fn bind_popup_and_open(&mut self, handle: &usize, text: &str) {
            self.popups.insert(*handle, text.to_string());
            self.opened.push(*handle);
        }

        fn on_click(&mut self, handle: &usize, station: &str) {
            self.click_routes.insert(*handle, station.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingDialogs {
        visible: HashSet<DialogId>,
        texts: HashMap<TextSlot, String>,
        fields: HashMap<FormField, String>,
        alerts: Vec<String>,
    }

    impl DialogSurface for RecordingDialogs {
        fn show(&mut self, dialog: DialogId) {
            self.visible.insert(dialog);
        }

        fn hide(&mut self, dialog: DialogId) {
            self.visible.remove(&dialog);
        }

        fn set_text(&mut self, slot: TextSlot, text: &str) {
            self.texts.insert(slot, text.to_string());
        }

        fn read_field(&self, field: FormField) -> String {
            self.fields.get(&field).cloned().unwrap_or_default()
        }

        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }
    }

    type TestTracker = OccupancyTracker<RecordingMap, RecordingDialogs>;

    fn tracker() -> TestTracker {
        OccupancyTracker::new(RecordingMap::default(), RecordingDialogs::default())
    }

    fn jdoe() -> OccupationForm {
        OccupationForm::new("J. Doe", "PL-123", "123 Main St", "555-1234")
    }

    fn occupy(t: &mut TestTracker, station: &str) -> Result<OccupancyRecord, OccupancyError> {
        t.request_occupation(station, alae())?;
        t.confirm_occupation()?;
        t.submit_occupation_details(jdoe())
    }

    fn force_count(t: &mut TestTracker, station: &str, count: u8) {
        t.register(station, alae()).occupancy = count;
    }

    #[test]
    fn test_full_occupation_flow() {
        let mut t = tracker();

        t.request_occupation(ALAE, alae()).unwrap();
        assert!(matches!(t.state(), TrackerState::AwaitingConfirmation(_)));
        assert!(t.dialogs().visible.contains(&DialogId::AreaConfirm));
        assert_eq!(
            t.dialogs().texts[&TextSlot::ConfirmMessage],
            "Do you want to occupy the Alae Charging Station?"
        );

        t.confirm_occupation().unwrap();
        assert!(matches!(t.state(), TrackerState::AwaitingDetails(_)));
        assert!(!t.dialogs().visible.contains(&DialogId::AreaConfirm));
        assert!(t.dialogs().visible.contains(&DialogId::Occupation));

        let record = t.submit_occupation_details(jdoe()).unwrap();
        assert_eq!(record.station, ALAE);
        assert_eq!(record.placard_number, "PL-123");
        assert_eq!(t.occupancy(ALAE), 1);
        assert_eq!(t.station(ALAE).unwrap().remaining(), 7);
        assert_eq!(t.markers().len(), 1);
        assert_eq!(
            t.markers()[0].popup,
            "Alae Charging Station<br>Number of People Occupied this area: 1"
        );
        assert_eq!(t.map().popups[&0], t.markers()[0].popup);
        assert_eq!(t.map().click_routes[&0], ALAE);
        assert_eq!(t.records().len(), 1);
        assert_eq!(*t.state(), TrackerState::Idle);
        assert!(t.dialogs().visible.is_empty());
    }

    #[test]
    fn test_request_at_capacity_shows_full_notice() {
        let mut t = tracker();
        force_count(&mut t, ALAE, 8);

        let err = t.request_occupation(ALAE, alae()).unwrap_err();
        assert_eq!(
            err,
            OccupancyError::StationFull {
                station: ALAE.to_string()
            }
        );
        assert_eq!(t.occupancy(ALAE), 8);
        assert!(!t.dialogs().visible.contains(&DialogId::AreaConfirm));
        assert!(t.dialogs().visible.contains(&DialogId::FullStation));
        assert_eq!(
            t.dialogs().texts[&TextSlot::FullStationMessage],
            "Alae Charging Station is already fully occupied. Please choose another station."
        );
        assert!(matches!(t.state(), TrackerState::FullNotice { .. }));

        t.dismiss_full_notice();
        assert_eq!(*t.state(), TrackerState::Idle);
        assert!(t.dialogs().visible.is_empty());
    }

    #[test]
    fn test_occupancy_never_exceeds_capacity() {
        let mut t = tracker();
        for _ in 0..8 {
            occupy(&mut t, ALAE).unwrap();
        }
        assert_eq!(t.occupancy(ALAE), 8);

        for _ in 0..3 {
            let err = occupy(&mut t, ALAE).unwrap_err();
            assert!(matches!(err, OccupancyError::StationFull { .. }));
            t.dismiss_full_notice();
        }
        assert_eq!(t.occupancy(ALAE), 8);
        assert_eq!(t.records().len(), 8);
    }

    #[test]
    fn test_any_empty_field_is_rejected_without_mutation() {
        let complete = jdoe();
        for field in FormField::ALL {
            let mut t = tracker();
            t.request_occupation(ALAE, alae()).unwrap();
            t.confirm_occupation().unwrap();

            let mut form = complete.clone();
            match field {
                FormField::Name => form.name.clear(),
                FormField::PlacardNumber => form.placard_number.clear(),
                FormField::HomeAddress => form.home_address.clear(),
                FormField::PhoneNumber => form.phone_number = "  ".to_string(),
            }

            let err = t.submit_occupation_details(form).unwrap_err();
            assert_eq!(err, OccupancyError::Validation { missing: vec![field] });
            assert_eq!(t.occupancy(ALAE), 0);
            assert!(t.markers().is_empty());
            assert!(t.map().placed.is_empty());
            assert_eq!(t.dialogs().alerts, vec![MISSING_FIELDS_ALERT.to_string()]);
            assert!(t.dialogs().visible.contains(&DialogId::Occupation));
            assert!(matches!(t.state(), TrackerState::AwaitingDetails(_)));
        }
    }

    #[test]
    fn test_resubmission_after_validation_error_succeeds() {
        let mut t = tracker();
        t.request_occupation(ALAE, alae()).unwrap();
        t.confirm_occupation().unwrap();
        assert!(t
            .submit_occupation_details(OccupationForm::default())
            .is_err());
        t.submit_occupation_details(jdoe()).unwrap();
        assert_eq!(t.occupancy(ALAE), 1);
    }

    #[test]
    fn test_second_occupation_refreshes_existing_marker() {
        let mut t = tracker();
        occupy(&mut t, ALAE).unwrap();
        occupy(&mut t, ALAE).unwrap();

        assert_eq!(t.markers().len(), 1);
        assert_eq!(t.map().placed.len(), 1);
        assert!(t.markers()[0].popup.ends_with(": 2"));
        assert_eq!(t.map().popups[&0], t.markers()[0].popup);
    }

    #[test]
    fn test_feed_markers_start_at_zero_and_are_refreshed() {
        let mut t = tracker();
        let feed = parse_feed(
            r#"[
                {"longitude": 124.9, "message": "Broken"},
                {"latitude": 8.42081, "longitude": 124.813377, "message": "Alae Charging Station"},
                {"latitude": 8.376177, "longitude": 124.903178, "message": "Dalirig Charging Station"}
            ]"#,
        );
        assert_eq!(t.load_feed(feed), 2);
        assert_eq!(t.markers().len(), 2);
        assert!(t.markers()[0].popup.ends_with(": 0"));
        assert_eq!(t.occupancy(ALAE), 0);

        occupy(&mut t, ALAE).unwrap();
        assert_eq!(t.markers().len(), 2);
        assert_eq!(
            t.markers()[0].popup,
            "Alae Charging Station<br>Number of People Occupied this area: 1"
        );
        assert!(t.markers()[1].popup.ends_with(": 0"));
    }

    #[test]
    fn test_feed_arriving_after_occupation_shows_current_count() {
        let mut t = tracker();
        occupy(&mut t, ALAE).unwrap();
        let placed = t.load_initial_stations(vec![StationFeedEntry {
            latitude: 8.42081,
            longitude: 124.813377,
            message: ALAE.to_string(),
        }]);
        assert_eq!(placed, 1);
        assert_eq!(t.occupancy(ALAE), 1);
        assert!(t.markers().iter().all(|m| m.popup.ends_with(": 1")));
    }

    #[test]
    fn test_unusable_entries_are_skipped_by_loader() {
        let mut t = tracker();
        let placed = t.load_initial_stations(vec![
            StationFeedEntry {
                latitude: 200.0,
                longitude: 0.0,
                message: "Nowhere".to_string(),
            },
            StationFeedEntry {
                latitude: 1.0,
                longitude: 1.0,
                message: String::new(),
            },
            StationFeedEntry {
                latitude: 8.376177,
                longitude: 124.903178,
                message: "Dalirig Charging Station".to_string(),
            },
        ]);
        assert_eq!(placed, 1);
        assert_eq!(t.markers()[0].station, "Dalirig Charging Station");
    }

    #[test]
    fn test_feed_error_places_no_markers() {
        let mut t = tracker();
        assert_eq!(t.load_feed(Err(FeedLoadError::NotAList)), 0);
        assert_eq!(
            t.load_feed(Err(FeedLoadError::Fetch("404".to_string()))),
            0
        );
        assert!(t.markers().is_empty());
        assert_eq!(*t.state(), TrackerState::Idle);
    }

    #[test]
    fn test_confirm_when_capacity_reached_meanwhile_shows_notice() {
        let mut t = tracker();
        t.request_occupation(ALAE, alae()).unwrap();
        force_count(&mut t, ALAE, 8);

        let err = t.confirm_occupation().unwrap_err();
        assert!(matches!(err, OccupancyError::StationFull { .. }));
        assert!(!t.dialogs().visible.contains(&DialogId::Occupation));
        assert!(!t.dialogs().visible.contains(&DialogId::AreaConfirm));
        assert!(t.dialogs().visible.contains(&DialogId::FullStation));
        assert!(matches!(t.state(), TrackerState::FullNotice { .. }));
    }

    #[test]
    fn test_submit_when_capacity_reached_meanwhile_alerts() {
        let mut t = tracker();
        t.request_occupation(ALAE, alae()).unwrap();
        t.confirm_occupation().unwrap();
        force_count(&mut t, ALAE, 8);

        let err = t.submit_occupation_details(jdoe()).unwrap_err();
        assert!(matches!(err, OccupancyError::StationFull { .. }));
        assert_eq!(t.occupancy(ALAE), 8);
        assert!(t.markers().is_empty());
        assert_eq!(t.dialogs().alerts, vec![MAX_OCCUPANCY_ALERT.to_string()]);
        assert!(!t.dialogs().visible.contains(&DialogId::Occupation));
        assert!(matches!(t.state(), TrackerState::FullNotice { .. }));
    }

    #[test]
    fn test_out_of_order_actions_are_rejected() {
        let mut t = tracker();
        assert!(matches!(
            t.confirm_occupation(),
            Err(OccupancyError::InvalidTransition { state: "idle", .. })
        ));
        assert!(matches!(
            t.submit_occupation_details(jdoe()),
            Err(OccupancyError::InvalidTransition { .. })
        ));

        t.request_occupation(ALAE, alae()).unwrap();
        t.confirm_occupation().unwrap();
        assert!(matches!(
            t.request_occupation("Dalirig Charging Station", Position::new(8.376177, 124.903178)),
            Err(OccupancyError::InvalidTransition { .. })
        ));
        assert!(matches!(t.state(), TrackerState::AwaitingDetails(_)));
    }

    #[test]
    fn test_request_retargets_pending_station() {
        let mut t = tracker();
        t.request_occupation(ALAE, alae()).unwrap();
        t.request_occupation("Dalirig Charging Station", Position::new(8.376177, 124.903178))
            .unwrap();
        t.confirm_occupation().unwrap();
        let record = t.submit_occupation_details(jdoe()).unwrap();
        assert_eq!(record.station, "Dalirig Charging Station");
        assert_eq!(t.occupancy(ALAE), 0);
        assert_eq!(t.map().placed, vec![Position::new(8.376177, 124.903178)]);
    }

    #[test]
    fn test_cancel_and_close_return_to_idle() {
        let mut t = tracker();
        t.request_occupation(ALAE, alae()).unwrap();
        t.cancel_confirmation();
        assert_eq!(*t.state(), TrackerState::Idle);

        t.request_occupation(ALAE, alae()).unwrap();
        t.confirm_occupation().unwrap();
        t.close_occupation_form();
        assert_eq!(*t.state(), TrackerState::Idle);
        assert!(t.dialogs().visible.is_empty());
        assert_eq!(t.occupancy(ALAE), 0);
    }

    #[test]
    fn test_submit_from_dialog_reads_fields() {
        let mut t = tracker();
        t.dialogs.fields.insert(FormField::Name, " J. Doe ".to_string());
        t.dialogs.fields.insert(FormField::PlacardNumber, "PL-123".to_string());
        t.dialogs.fields.insert(FormField::HomeAddress, "123 Main St".to_string());
        t.dialogs.fields.insert(FormField::PhoneNumber, "555-1234".to_string());

        t.request_occupation(ALAE, alae()).unwrap();
        t.confirm_occupation().unwrap();
        let record = t.submit_from_dialog().unwrap();
        assert_eq!(record.name, "J. Doe");
        assert_eq!(record.phone_number, "555-1234");
    }

    #[test]
    fn test_marker_click_reopens_current_popup() {
        let mut t = tracker();
        occupy(&mut t, ALAE).unwrap();
        let opened_before = t.map().opened.len();
        t.marker_clicked(ALAE);
        assert_eq!(t.map().opened.len(), opened_before + 1);
        t.marker_clicked("Unknown Station");
        assert_eq!(t.map().opened.len(), opened_before + 1);
    }

    #[test]
    fn test_empty_station_name_is_rejected() {
        let mut t = tracker();
        assert_eq!(
            t.request_occupation("   ", alae()),
            Err(OccupancyError::EmptyStationName)
        );
        assert_eq!(*t.state(), TrackerState::Idle);
        assert!(t.dialogs().visible.is_empty());
    }
}
