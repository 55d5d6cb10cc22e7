use std::fmt;
use std::time::Duration;

use shared_types::{LatLng, MapProfile, MapSettings, UnknownProfile};
use thiserror::Error;

pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
pub const API_KEY_PLACEHOLDER: &str = "{api_key}";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MAX_ZOOM: f64 = 22.0;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
    #[error("MAP_PROFILE: {0}")]
    Profile(#[from] UnknownProfile),
}

/// Server configuration, read once at startup and handed to server functions
/// through the Leptos context.
#[derive(Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub profile: MapProfile,
    pub tile_url_template: String,
    pub map_api_key: Option<String>,
    pub attribution: String,
    pub request_timeout: Duration,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_base_url", &self.api_base_url)
            .field("profile", &self.profile.name)
            .field("tile_url_template", &self.tile_url_template)
            .field("map_api_key", &self.map_api_key.as_ref().map(|_| "<redacted>"))
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_base_url = get("MALARIA_API_URL").ok_or(ConfigError::Missing("MALARIA_API_URL"))?;
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                var: "MALARIA_API_URL",
                value: api_base_url,
                reason: "expected an http(s) URL",
            });
        }
        let api_base_url = api_base_url.trim_end_matches('/').to_string();

        let mut profile = match get("MAP_PROFILE") {
            Some(name) => name.parse::<MapProfile>()?,
            None => MapProfile::default(),
        };

        if let Some(value) = get("MAP_PAGE_SIZE") {
            profile.page_size = match value.parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "MAP_PAGE_SIZE",
                        value,
                        reason: "expected a positive integer",
                    })
                }
            };
        }

        if let Some(value) = get("MAP_ZOOM") {
            profile.zoom = match value.parse::<f64>() {
                Ok(zoom) if (0.0..=MAX_ZOOM).contains(&zoom) => zoom,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "MAP_ZOOM",
                        value,
                        reason: "expected a number between 0 and 22",
                    })
                }
            };
        }

        if let Some(value) = get("MAP_CENTER") {
            profile.center = parse_center(&value).ok_or(ConfigError::Invalid {
                var: "MAP_CENTER",
                value,
                reason: "expected 'lat,lng' within [-90, 90] and [-180, 180]",
            })?;
        }

        let tile_url_template = get("MAP_TILE_URL").unwrap_or_else(|| DEFAULT_TILE_URL.to_string());
        let map_api_key = get("MAP_API_KEY");
        if tile_url_template.contains(API_KEY_PLACEHOLDER) && map_api_key.is_none() {
            return Err(ConfigError::Missing("MAP_API_KEY"));
        }

        let attribution = get("MAP_ATTRIBUTION").unwrap_or_else(|| DEFAULT_ATTRIBUTION.to_string());

        let request_timeout = match get("MALARIA_API_TIMEOUT_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "MALARIA_API_TIMEOUT_SECS",
                        value,
                        reason: "expected a positive number of seconds",
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(AppConfig {
            api_base_url,
            profile,
            tile_url_template,
            map_api_key,
            attribution,
            request_timeout,
        })
    }

    pub fn map_settings(&self) -> MapSettings {
        let tile_url = match &self.map_api_key {
            Some(key) => self.tile_url_template.replace(API_KEY_PLACEHOLDER, key),
            None => self.tile_url_template.clone(),
        };

        MapSettings {
            profile: self.profile.clone(),
            tile_url,
            attribution: self.attribution.clone(),
        }
    }
}

fn parse_center(value: &str) -> Option<LatLng> {
    let (lat, lng) = value.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lng: f64 = lng.trim().parse().ok()?;

    ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)).then_some(LatLng { lat, lng })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Endpoint;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_detailed_profile() {
        let config = config_from(&[("MALARIA_API_URL", "https://api.example.org/")]).unwrap();

        assert_eq!(config.api_base_url, "https://api.example.org");
        assert_eq!(config.profile, MapProfile::detailed());
        assert_eq!(config.tile_url_template, DEFAULT_TILE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert!(config.map_api_key.is_none());
    }

    #[test]
    fn api_url_is_required() {
        assert_eq!(
            config_from(&[]).unwrap_err(),
            ConfigError::Missing("MALARIA_API_URL")
        );
        assert_eq!(
            config_from(&[("MALARIA_API_URL", "   ")]).unwrap_err(),
            ConfigError::Missing("MALARIA_API_URL")
        );
    }

    #[test]
    fn api_url_must_be_http() {
        let err = config_from(&[("MALARIA_API_URL", "ftp://api.example.org")]).unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { var: "MALARIA_API_URL", .. }));
    }

    #[test]
    fn overrides_apply_on_top_of_profile() {
        let config = config_from(&[
            ("MALARIA_API_URL", "http://localhost:8080/api"),
            ("MAP_PROFILE", "basic"),
            ("MAP_PAGE_SIZE", "50"),
            ("MAP_ZOOM", "3.5"),
            ("MAP_CENTER", "-1.5, 30.25"),
        ])
        .unwrap();

        assert_eq!(config.profile.name, "basic");
        assert_eq!(config.profile.endpoint, Endpoint::Plain);
        assert_eq!(config.profile.page_size, 50);
        assert_eq!(config.profile.zoom, 3.5);
        assert_eq!(config.profile.center, LatLng { lat: -1.5, lng: 30.25 });
    }

    #[test]
    fn rejects_bad_numbers() {
        let base = ("MALARIA_API_URL", "https://api.example.org");

        for (var, value) in [
            ("MAP_PAGE_SIZE", "0"),
            ("MAP_PAGE_SIZE", "ten"),
            ("MAP_ZOOM", "40"),
            ("MAP_CENTER", "95,10"),
            ("MAP_CENTER", "10"),
            ("MALARIA_API_TIMEOUT_SECS", "0"),
        ] {
            let err = config_from(&[base, (var, value)]).unwrap_err();
            match err {
                ConfigError::Invalid { var: reported, .. } => assert_eq!(reported, var),
                other => panic!("expected invalid {var}, got {other:?}"),
            }
        }
    }

    #[test]
    fn unknown_profile_is_reported() {
        let err = config_from(&[
            ("MALARIA_API_URL", "https://api.example.org"),
            ("MAP_PROFILE", "terrain"),
        ])
        .unwrap_err();

        assert_eq!(err, ConfigError::Profile(UnknownProfile("terrain".to_string())));
    }

    #[test]
    fn keyed_tile_template_needs_a_key() {
        let err = config_from(&[
            ("MALARIA_API_URL", "https://api.example.org"),
            ("MAP_TILE_URL", "https://tiles.example.com/{z}/{x}/{y}.png?key={api_key}"),
        ])
        .unwrap_err();

        assert_eq!(err, ConfigError::Missing("MAP_API_KEY"));
    }

    #[test]
    fn map_settings_substitute_the_key() {
        let config = config_from(&[
            ("MALARIA_API_URL", "https://api.example.org"),
            ("MAP_TILE_URL", "https://tiles.example.com/{z}/{x}/{y}.png?key={api_key}"),
            ("MAP_API_KEY", "abc123"),
        ])
        .unwrap();

        let settings = config.map_settings();

        assert_eq!(
            settings.tile_url,
            "https://tiles.example.com/{z}/{x}/{y}.png?key=abc123"
        );
        assert_eq!(settings.profile, MapProfile::detailed());
        assert!(!format!("{config:?}").contains("abc123"));
    }
}
