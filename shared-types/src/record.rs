use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        LatLng { lat, lng }
    }
}

/// One country's malaria statistics as published by the malaria API.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CountryRecord {
    pub region: String,
    pub population: u64,
    pub cases_median: f64,
    pub latlng: [f64; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deaths_median: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub who_region: Option<String>,
}

impl CountryRecord {
    pub fn position(&self) -> LatLng {
        LatLng::from(self.latlng)
    }

    /// Text shown in the info panel, one attribute per line.
    pub fn panel_text(&self) -> String {
        format!(
            "region: {}\npopulation: {}\ncases median: {}",
            self.region, self.population, self.cases_median
        )
    }
}
