#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the Cyberitance public API.
//!
//! The web UI decodes these directly from response bodies, so field names
//! follow the wire format exactly.
use serde::{Deserialize, Serialize};

/// Relative path of the backend health endpoint.
pub const HEALTH_PATH: &str = "/api/health";

/// Body returned by `GET /api/health` on success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Coarse service status (for example `healthy`).
    pub status: String,
    /// Human-readable detail from the backend.
    pub message: String,
}

impl HealthResponse {
    /// Build a response from its two fields.
    #[must_use]
    pub fn new(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            message: message.into(),
        }
    }
}
