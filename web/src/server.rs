use leptos::prelude::*;
use leptos::server;
use shared_types::{CountryRecord, MapSettings};

#[cfg(feature = "ssr")]
use crate::{api::MalariaClient, config::AppConfig};

#[server]
pub async fn get_map_settings() -> Result<MapSettings, ServerFnError> {
    let config = use_context::<AppConfig>()
        .ok_or_else(|| ServerFnError::new("Application config is not available".to_string()))?;

    Ok(config.map_settings())
}

#[server]
pub async fn fetch_countries() -> Result<Vec<CountryRecord>, ServerFnError> {
    let client = use_context::<MalariaClient>()
        .ok_or_else(|| ServerFnError::new("Malaria client is not available".to_string()))?;

    match client.fetch_page().await {
        Ok(page) => Ok(page.malaria_data),
        Err(e) => {
            tracing::warn!(error = %e, url = %client.url(), "Malaria fetch failed");
            Err(ServerFnError::new(format!("Malaria API error: {}", e)))
        }
    }
}
