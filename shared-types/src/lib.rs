pub mod marker;
pub mod profile;
pub mod record;
pub mod response;

pub use marker::{markers_for, MarkerSpec, PanelEvent, PanelState};
pub use profile::{Endpoint, MapProfile, MapSettings, UnknownProfile};
pub use record::{CountryRecord, LatLng};
pub use response::{decode_page, DecodeError, MalariaPage, ResponseShape};
