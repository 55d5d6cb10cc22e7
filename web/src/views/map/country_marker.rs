use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use shared_types::{MarkerSpec, PanelEvent, PanelState};

use crate::views::map::info_panel::InfoPanel;

const MARKER_FILL: &str = "%231dbe80";
const MARKER_STROKE: &str = "%230e6443";
const MARKER_SIZE: (f64, f64) = (20.0, 20.0);
const MARKER_ANCHOR: (f64, f64) = (10.0, 10.0);

/// 16px disc with a 2px border, drawn as an inline SVG.
pub fn marker_icon() -> String {
    format!(
        "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='20' height='20' viewBox='0 0 20 20'%3E%3Ccircle cx='10' cy='10' r='8' fill='{}' stroke='{}' stroke-width='2'/%3E%3C/svg%3E",
        MARKER_FILL, MARKER_STROKE
    )
}

/// Markers without an info panel never leave `Collapsed`.
pub fn next_panel_state(show_info_panel: bool, state: PanelState, event: PanelEvent) -> PanelState {
    if show_info_panel {
        state.apply(event)
    } else {
        state
    }
}

/// The panel is mounted as a standalone popup only while `Expanded`. Leaflet's
/// own ways of closing a popup are switched off, so the panel's close button
/// is the only way back to `Collapsed`.
#[component]
pub fn CountryMarker(marker: MarkerSpec, show_info_panel: bool) -> impl IntoView {
    let panel = RwSignal::new(PanelState::default());
    let send = move |event: PanelEvent| {
        panel.update(|state| *state = next_panel_state(show_info_panel, *state, event));
    };

    let mouse_events = if show_info_panel {
        MouseEvents::new().on_click(move |_| send(PanelEvent::MarkerClicked))
    } else {
        MouseEvents::new()
    };
    let on_close = Callback::new(move |_: ()| send(PanelEvent::CloseRequested));

    let MarkerSpec {
        position,
        region,
        panel_text,
        ..
    } = marker;

    view! {
        <Marker
            position=Position::new(position.lat, position.lng)
            draggable=false
            icon_url=Some(marker_icon())
            icon_size=Some(MARKER_SIZE)
            icon_anchor=Some(MARKER_ANCHOR)
            mouse_events=mouse_events
        />
        {move || panel.get().is_expanded().then(|| {
            let region = region.clone();
            let text = panel_text.clone();
            view! {
                <Popup
                    position=Position::new(position.lat, position.lng)
                    close_button=false
                    auto_close=false
                    close_on_click=false
                    close_on_escape_key=false
                >
                    <InfoPanel region=region text=text on_close=on_close />
                </Popup>
            }
        })}
    }
}
