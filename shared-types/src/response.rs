use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::CountryRecord;

/// How the malaria API wraps the record array.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `{ "malaria_data": [...], "next_url": ..., ... }`
    Envelope,
    /// `[...]`
    BareArray,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct MalariaPage {
    #[serde(default)]
    pub malaria_data: Vec<CountryRecord>,
    #[serde(default)]
    pub prev_url: Option<String>,
    #[serde(default)]
    pub next_url: Option<String>,
    #[serde(default)]
    pub current_url: Option<String>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_items: Option<u64>,
}

impl MalariaPage {
    pub fn has_more(&self) -> bool {
        self.next_url.is_some()
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed malaria payload: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn decode_page(body: &str, shape: ResponseShape) -> Result<MalariaPage, DecodeError> {
    let page = match shape {
        ResponseShape::Envelope => serde_json::from_str(body)?,
        ResponseShape::BareArray => MalariaPage {
            malaria_data: serde_json::from_str(body)?,
            ..MalariaPage::default()
        },
    };
    Ok(page)
}
