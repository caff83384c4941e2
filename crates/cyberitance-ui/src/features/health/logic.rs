//! Display rules for the backend status screen.

use crate::core::routes::Route;
use crate::features::health::state::{HealthPhase, HealthState};

/// Heading shown on the status screen.
pub const STATUS_TITLE: &str = "Backend Status";
/// Label of the manual re-fetch control.
pub const REFRESH_LABEL: &str = "Refresh";
/// Label of the navigation control back to the landing page.
pub const BACK_LABEL: &str = "Back to Home";
/// Destination of the back control.
pub const BACK_ROUTE: Route = Route::Home;
/// Placeholder shown before the first health check has been issued.
pub const IDLE_HINT: &str = "No health check has run yet.";

/// What the status screen should render for a given health slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusView {
    /// Render the loading indicator.
    pub show_spinner: bool,
    /// Placeholder line while no fetch has been issued.
    pub idle_hint: Option<&'static str>,
    /// Inline error line, prefixed for display.
    pub error_line: Option<String>,
    /// Status/message rows from the latest successful fetch.
    pub details: Option<StatusDetails>,
}

/// Rows shown for a successful health response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusDetails {
    /// Reported status string.
    pub status: String,
    /// Reported message string.
    pub message: String,
    /// Pill tone derived from the status string.
    pub tone: &'static str,
}

impl StatusView {
    /// Derive the screen contents from the health slice.
    #[must_use]
    pub fn from_state(state: &HealthState) -> Self {
        let phase = state.phase();
        Self {
            show_spinner: phase == HealthPhase::Loading,
            idle_hint: (phase == HealthPhase::Idle).then_some(IDLE_HINT),
            error_line: state
                .error_message
                .as_ref()
                .map(|message| format!("Error: {message}")),
            details: state.payload.as_ref().map(|payload| StatusDetails {
                status: payload.status.clone(),
                message: payload.message.clone(),
                tone: status_tone(&payload.status),
            }),
        }
    }
}

/// Map a reported status onto a pill tone.
#[must_use]
pub fn status_tone(status: &str) -> &'static str {
    match status.trim().to_ascii_lowercase().as_str() {
        "ok" | "healthy" | "up" | "running" => "ok",
        "warn" | "warning" | "degraded" => "warn",
        "error" | "failed" | "unhealthy" | "down" => "error",
        _ => "subtle",
    }
}
