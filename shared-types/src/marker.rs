use serde::{Deserialize, Serialize};

use crate::record::{CountryRecord, LatLng};

/// View model for one marker on the map.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MarkerSpec {
    pub key: usize,
    pub position: LatLng,
    pub region: String,
    pub panel_text: String,
}

impl MarkerSpec {
    pub fn from_record(key: usize, record: &CountryRecord) -> Self {
        MarkerSpec {
            key,
            position: record.position(),
            region: record.region.clone(),
            panel_text: record.panel_text(),
        }
    }
}

/// One marker per record, in input order.
pub fn markers_for(records: &[CountryRecord]) -> Vec<MarkerSpec> {
    records
        .iter()
        .enumerate()
        .map(|(key, record)| MarkerSpec::from_record(key, record))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    MarkerClicked,
    CloseRequested,
}

/// Open/closed state of a marker's info panel. A fresh marker is collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Collapsed,
    Expanded,
}

impl PanelState {
    pub fn apply(self, event: PanelEvent) -> Self {
        match (self, event) {
            (PanelState::Collapsed, PanelEvent::MarkerClicked) => PanelState::Expanded,
            (PanelState::Expanded, PanelEvent::CloseRequested) => PanelState::Collapsed,
            (state, _) => state,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == PanelState::Expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{decode_page, ResponseShape};
    use serde_json::json;

    fn country(region: &str, lat: f64, lng: f64) -> CountryRecord {
        serde_json::from_value(json!({
            "region": region,
            "population": 1000,
            "cases_median": 5,
            "latlng": [lat, lng]
        }))
        .unwrap()
    }

    #[test]
    fn panel_starts_collapsed() {
        assert_eq!(PanelState::default(), PanelState::Collapsed);
        assert!(!PanelState::default().is_expanded());
    }

    #[test]
    fn click_then_close_round_trips() {
        let opened = PanelState::default().apply(PanelEvent::MarkerClicked);
        assert_eq!(opened, PanelState::Expanded);

        let closed = opened.apply(PanelEvent::CloseRequested);
        assert_eq!(closed, PanelState::Collapsed);
    }

    #[test]
    fn other_inputs_leave_state_unchanged() {
        assert_eq!(
            PanelState::Collapsed.apply(PanelEvent::CloseRequested),
            PanelState::Collapsed
        );
        assert_eq!(
            PanelState::Expanded.apply(PanelEvent::MarkerClicked),
            PanelState::Expanded
        );
    }

    #[test]
    fn one_marker_per_record_in_order() {
        let records = vec![
            country("Nigeria", 10.0, 8.0),
            country("Congo", -1.0, 15.0),
            country("Uganda", 1.0, 32.0),
        ];

        let markers = markers_for(&records);

        assert_eq!(markers.len(), 3);
        let regions: Vec<&str> = markers.iter().map(|m| m.region.as_str()).collect();
        assert_eq!(regions, ["Nigeria", "Congo", "Uganda"]);
        let keys: Vec<usize> = markers.iter().map(|m| m.key).collect();
        assert_eq!(keys, [0, 1, 2]);
    }

    #[test]
    fn duplicate_records_are_not_collapsed() {
        let records = vec![country("Mali", 17.0, -4.0), country("Mali", 17.0, -4.0)];

        assert_eq!(markers_for(&records).len(), 2);
    }

    #[test]
    fn empty_list_renders_no_markers() {
        assert!(markers_for(&[]).is_empty());
    }

    #[test]
    fn single_record_scenario() {
        let body = json!({
            "malaria_data": [
                { "region": "AF", "population": 1000, "cases_median": 5, "latlng": [1.0, 2.0] }
            ]
        })
        .to_string();
        let page = decode_page(&body, ResponseShape::Envelope).unwrap();

        let markers = markers_for(&page.malaria_data);

        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].position, LatLng { lat: 1.0, lng: 2.0 });
        let lines: Vec<&str> = markers[0].panel_text.lines().collect();
        assert_eq!(lines, ["region: AF", "population: 1000", "cases median: 5"]);
    }

    #[test]
    fn refetching_equal_data_yields_equal_markers() {
        let first = vec![country("Chad", 15.0, 19.0), country("Niger", 16.0, 8.0)];
        let second = first.clone();

        assert_eq!(markers_for(&first), markers_for(&second));
        assert_eq!(markers_for(&second).len(), first.len());
    }
}
