use chrono::Utc;
use gloo_net::http::Request;
use web_sys::RequestCache;

use super::endpoints::{activities_url, participants_url, signup_url};
use super::http::execute_request;
use crate::config::BoardConfig;
use crate::core::error::ApiError;
use crate::core::models::{ActivityCatalog, Participation};

// Load the full roster, bypassing every cache layer
pub async fn load_catalog(config: &BoardConfig) -> Result<ActivityCatalog, ApiError> {
    let url = activities_url(config, Utc::now().timestamp_millis());
    let response = execute_request(
        "GET /activities",
        Request::get(&url).cache(RequestCache::NoStore),
    )
    .await?;

    let catalog: ActivityCatalog = response.json()?;
    web_sys::console::log_1(&format!("Loaded {} activities", catalog.len()).into());
    Ok(catalog)
}

// Sign a student up; returns the server's confirmation text
pub async fn sign_up(config: &BoardConfig, participation: &Participation) -> Result<Option<String>, ApiError> {
    let url = signup_url(config, participation);
    execute_request("POST signup", Request::post(&url)).await?.message()
}

// Remove a participant; returns the server's confirmation text
pub async fn remove_participant(
    config: &BoardConfig,
    participation: &Participation,
) -> Result<Option<String>, ApiError> {
    let url = participants_url(config, participation);
    execute_request("DELETE participant", Request::delete(&url)).await?.message()
}
