pub mod country_map;
pub mod country_marker;
pub mod info_panel;

pub use country_map::{CountryMap, MalariaMapPage};
