use leptos::logging::log;
use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use shared_types::{markers_for, CountryRecord, MapSettings, MarkerSpec};

use crate::{
    components::{ErrorView, LoadingView, Navbar},
    server::{fetch_countries, get_map_settings},
    views::map::country_marker::CountryMarker,
};

/// Loads the map settings, then draws the chrome and the map they describe.
#[component]
pub fn MalariaMapPage() -> impl IntoView {
    let settings = OnceResource::new(async move { get_map_settings().await });

    view! {
        <Suspense fallback=|| view! { <LoadingView /> }>
            {move ||
                match settings.get() {
                    Some(Ok(settings)) => view! {
                        {settings.profile.show_navbar.then(|| view! { <Navbar /> })}
                        <main class="map-page">
                            <CountryMap settings=settings />
                        </main>
                    }.into_any(),
                    Some(Err(err)) => {
                        log!("Error occurred while loading map settings: {}", err);
                        view! {
                            <ErrorView title="Map unavailable." message=Some(err.to_string()) />
                        }.into_any()
                    },
                    None => view! { <LoadingView /> }.into_any(),
                }
            }
        </Suspense>
    }
}

/// Fetches one page of countries on mount and renders one marker per record.
/// A failed fetch leaves the map empty and shows the error above it.
#[component]
pub fn CountryMap(settings: MapSettings) -> impl IntoView {
    let countries = OnceResource::new(async move { fetch_countries().await });
    let MapSettings {
        profile,
        tile_url,
        attribution,
    } = settings;
    let center = profile.center;
    let zoom = profile.zoom;
    let show_info_panel = profile.show_info_panel;

    view! {
        <Suspense fallback=|| view! { <LoadingView message="Fetching malaria data..." /> }>
            {move || countries.get().map(|result| {
                let (markers, error) = markers_or_error(result);

                let tile_url = tile_url.clone();
                let attribution = attribution.clone();

                view! {
                    {error.map(|message| view! {
                        <ErrorView title="Couldn't load malaria data." message=Some(message) />
                    })}
                    <MapContainer
                        style="height: 80vh"
                        center=Position::new(center.lat, center.lng)
                        zoom=zoom
                        set_view=true
                    >
                        <TileLayer url=tile_url attribution=attribution />
                        <For
                            each=move || markers.clone()
                            key=|marker| marker.key
                            children=move |marker: MarkerSpec| view! {
                                <CountryMarker marker=marker show_info_panel=show_info_panel />
                            }
                        />
                    </MapContainer>
                }
            })}
        </Suspense>
    }
}

/// A failed load draws no markers and carries the message for the banner.
pub fn markers_or_error(
    result: Result<Vec<CountryRecord>, ServerFnError>,
) -> (Vec<MarkerSpec>, Option<String>) {
    match result {
        Ok(records) => (markers_for(&records), None),
        Err(err) => {
            log!("Error occurred while fetching countries: {}", err);
            (Vec::new(), Some(err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::LatLng;

    fn country(region: &str, lat: f64, lng: f64) -> CountryRecord {
        CountryRecord {
            region: region.to_string(),
            population: 1000,
            cases_median: 5.0,
            latlng: [lat, lng],
            year: None,
            deaths_median: None,
            who_region: None,
        }
    }

    #[test]
    fn failed_load_gives_empty_map_and_message() {
        let (markers, error) = markers_or_error(Err(ServerFnError::new("upstream down")));

        assert!(markers.is_empty());
        assert!(error.unwrap().contains("upstream down"));
    }

    #[test]
    fn successful_load_gives_one_marker_per_record() {
        let records = vec![country("Ghana", 8.0, -2.0), country("Togo", 8.0, 1.1)];

        let (markers, error) = markers_or_error(Ok(records));

        assert!(error.is_none());
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[1].position, LatLng { lat: 8.0, lng: 1.1 });
    }

    #[test]
    fn empty_load_is_not_an_error() {
        let (markers, error) = markers_or_error(Ok(Vec::new()));

        assert!(markers.is_empty());
        assert!(error.is_none());
    }
}
