use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::LatLng;
use crate::response::ResponseShape;

/// Which flavour of the malaria API a profile talks to.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `/malaria/filter?per_page=N`, enveloped response
    Filtered,
    /// `/malaria?_limit=N`, bare array response
    Plain,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Filtered => "malaria/filter",
            Endpoint::Plain => "malaria",
        }
    }

    pub fn limit_param(self) -> &'static str {
        match self {
            Endpoint::Filtered => "per_page",
            Endpoint::Plain => "_limit",
        }
    }

    pub fn response_shape(self) -> ResponseShape {
        match self {
            Endpoint::Filtered => ResponseShape::Envelope,
            Endpoint::Plain => ResponseShape::BareArray,
        }
    }
}

/// Everything that differs between the map variants.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MapProfile {
    pub name: String,
    pub endpoint: Endpoint,
    pub page_size: u32,
    pub center: LatLng,
    pub zoom: f64,
    pub show_navbar: bool,
    pub show_info_panel: bool,
}

impl MapProfile {
    pub const NAMES: [&'static str; 3] = ["detailed", "navigable", "basic"];

    /// Info panels on, ten countries around Hamburg.
    pub fn detailed() -> Self {
        MapProfile {
            name: "detailed".to_string(),
            endpoint: Endpoint::Filtered,
            page_size: 10,
            center: LatLng {
                lat: 53.54992,
                lng: 10.00678,
            },
            zoom: 5.0,
            show_navbar: true,
            show_info_panel: true,
        }
    }

    pub fn navigable() -> Self {
        MapProfile {
            name: "navigable".to_string(),
            endpoint: Endpoint::Filtered,
            page_size: 200,
            center: LatLng { lat: 0.0, lng: 0.0 },
            zoom: 2.0,
            show_navbar: true,
            show_info_panel: false,
        }
    }

    pub fn basic() -> Self {
        MapProfile {
            name: "basic".to_string(),
            endpoint: Endpoint::Plain,
            page_size: 200,
            center: LatLng { lat: 0.0, lng: 0.0 },
            zoom: 2.0,
            show_navbar: false,
            show_info_panel: false,
        }
    }
}

impl Default for MapProfile {
    fn default() -> Self {
        MapProfile::detailed()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown map profile '{0}' (expected one of: detailed, navigable, basic)")]
pub struct UnknownProfile(pub String);

impl FromStr for MapProfile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detailed" => Ok(MapProfile::detailed()),
            "navigable" => Ok(MapProfile::navigable()),
            "basic" => Ok(MapProfile::basic()),
            _ => Err(UnknownProfile(s.to_string())),
        }
    }
}

impl fmt::Display for MapProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}?{}={}, zoom {})",
            self.name,
            self.endpoint.path(),
            self.endpoint.limit_param(),
            self.page_size,
            self.zoom
        )
    }
}

/// The part of the server configuration the browser needs to draw the map.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MapSettings {
    pub profile: MapProfile,
    pub tile_url: String,
    pub attribution: String,
}
