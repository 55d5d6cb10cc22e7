use shared_types::{DecodeError, Endpoint};
use thiserror::Error;

#[cfg(feature = "ssr")]
use shared_types::{decode_page, MalariaPage};

#[cfg(feature = "ssr")]
use crate::config::AppConfig;

const ERROR_BODY_LIMIT: usize = 200;

#[derive(Debug, Error)]
pub enum MalariaApiError {
    #[cfg(feature = "ssr")]
    #[error("request to malaria API failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("malaria API answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// `<base>/malaria/filter?per_page=N` or `<base>/malaria?_limit=N`.
pub fn endpoint_url(base_url: &str, endpoint: Endpoint, page_size: u32) -> String {
    format!(
        "{}/{}?{}={}",
        base_url.trim_end_matches('/'),
        endpoint.path(),
        endpoint.limit_param(),
        page_size
    )
}

pub fn body_snippet(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(ERROR_BODY_LIMIT) {
        Some((cut, _)) => format!("{}…", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}

/// Thin client for the malaria statistics service.
#[cfg(feature = "ssr")]
#[derive(Clone)]
pub struct MalariaClient {
    http: reqwest::Client,
    base_url: String,
    endpoint: Endpoint,
    page_size: u32,
}

#[cfg(feature = "ssr")]
impl MalariaClient {
    pub fn new(config: &AppConfig) -> Result<Self, MalariaApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(MalariaClient {
            http,
            base_url: config.api_base_url.clone(),
            endpoint: config.profile.endpoint,
            page_size: config.profile.page_size,
        })
    }

    pub fn url(&self) -> String {
        endpoint_url(&self.base_url, self.endpoint, self.page_size)
    }

    /// One GET for one bounded page. Pagination links are reported, never followed.
    pub async fn fetch_page(&self) -> Result<MalariaPage, MalariaApiError> {
        let url = self.url();
        tracing::debug!(%url, "Fetching malaria records");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(MalariaApiError::Status {
                status: status.as_u16(),
                body: body_snippet(&body),
            });
        }

        let page = decode_page(&body, self.endpoint.response_shape())?;
        tracing::info!(
            records = page.malaria_data.len(),
            total_items = ?page.total_items,
            has_more = page.has_more(),
            "Loaded malaria records"
        );

        Ok(page)
    }
}
