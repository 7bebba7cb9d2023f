//! Location picker state.
//!
//! The picker only remembers which record is selected. The map viewport is
//! told to recenter separately (see `AppState::select_location`) instead of
//! being rebuilt for each selection.

use campus_map::external_maps_url;
use campus_model::{LOCATIONS, LocationRecord, location_index};

/// Outcome of [`LocationPicker::select`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    /// A different record is now selected.
    Changed(&'static LocationRecord),
    /// The record was already selected.
    Unchanged,
    /// No record has this id. The selection was left alone.
    Unknown,
}

/// Currently selected campus location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocationPicker {
    /// Index into [`LOCATIONS`]. Starts at the first record.
    selected: usize,
}

impl LocationPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected record.
    pub fn selected(&self) -> &'static LocationRecord {
        &LOCATIONS[self.selected]
    }

    /// Select the record with `id`.
    pub fn select(&mut self, id: &str) -> Selection {
        let Some(index) = location_index(id) else {
            tracing::warn!(id, "Unknown location id; selection unchanged");
            return Selection::Unknown;
        };
        if index == self.selected {
            return Selection::Unchanged;
        }
        self.selected = index;
        let record = self.selected();
        tracing::info!(id = record.id, name = record.name, "Selected location");
        Selection::Changed(record)
    }

    /// External map-search link for the selected record.
    pub fn external_url(&self) -> String {
        external_maps_url(self.selected().point())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_first_record() {
        let picker = LocationPicker::new();
        assert_eq!(picker.selected().id, LOCATIONS[0].id);
    }

    #[test]
    fn test_select_known_id() {
        let mut picker = LocationPicker::new();
        let selection = picker.select("lib");
        assert!(matches!(selection, Selection::Changed(record) if record.id == "lib"));
        assert_eq!(picker.selected().id, "lib");
    }

    #[test]
    fn test_select_twice_is_idempotent() {
        let mut picker = LocationPicker::new();
        picker.select("mess1");
        assert_eq!(picker.select("mess1"), Selection::Unchanged);
        assert_eq!(picker.selected().id, "mess1");
    }

    #[test]
    fn test_unknown_id_leaves_selection() {
        let mut picker = LocationPicker::new();
        picker.select("lib");
        assert_eq!(picker.select("atlantis"), Selection::Unknown);
        assert_eq!(picker.selected().id, "lib");
    }

    #[test]
    fn test_external_url_names_coordinates() {
        let mut picker = LocationPicker::new();
        picker.select("lib");
        let record = picker.selected();
        let pair = format!("{},{}", record.latitude, record.longitude);
        assert!(picker.external_url().ends_with(&format!("query={pair}")));
    }
}
