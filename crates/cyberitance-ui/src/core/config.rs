//! API endpoint configuration.
//!
//! # Design
//! - Resolution is pure so the wasm layer only supplies raw inputs.
//! - An explicit override wins; otherwise the UI talks to its own origin.

use cyberitance_api_models::HEALTH_PATH;

/// Storage key for a user-provided API base URL.
pub const API_BASE_URL_KEY: &str = "cyberitance.api_base_url";
/// Fallback API base when neither an override nor a page origin is available.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Pick the API base URL from an optional override and the page origin.
#[must_use]
pub fn resolve_api_base_url(stored: Option<&str>, origin: Option<&str>) -> String {
    [stored, origin]
        .into_iter()
        .flatten()
        .map(|value| value.trim().trim_end_matches('/'))
        .find(|value| !value.is_empty() && *value != "null")
        .map_or_else(|| DEFAULT_API_BASE_URL.to_string(), ToString::to_string)
}

/// Absolute URL of the health endpoint under `base_url`.
#[must_use]
pub fn health_url(base_url: &str) -> String {
    format!("{}{HEALTH_PATH}", base_url.trim_end_matches('/'))
}
