//! Health check state slice and its reducer.
//!
//! # Design
//! - Model the fetch lifecycle as three events applied by one reducer.
//! - Keep the slice DOM-free so transitions are tested natively.
//! - A failed fetch never clears a previously fetched payload.

use cyberitance_api_models::HealthResponse;

/// Latest outcome of the backend health check.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HealthState {
    /// Body of the most recent successful fetch.
    pub payload: Option<HealthResponse>,
    /// True between dispatch and completion of a fetch.
    pub is_loading: bool,
    /// Failure description from the most recent failed fetch.
    pub error_message: Option<String>,
    /// Number of fetches that have settled this session.
    pub settled: u32,
}

/// Coarse lifecycle phase derived from [`HealthState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthPhase {
    /// No fetch has been dispatched yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// At least one fetch has completed and none is loading.
    Settled,
}

impl HealthState {
    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> HealthPhase {
        if self.is_loading {
            HealthPhase::Loading
        } else if self.settled == 0 {
            HealthPhase::Idle
        } else {
            HealthPhase::Settled
        }
    }
}

/// Transition emitted by a single health check request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HealthEvent {
    /// Request dispatched.
    Pending,
    /// Request completed with a decoded body.
    Fulfilled(HealthResponse),
    /// Request failed; carries the human-readable reason.
    Rejected(String),
}

/// Apply a request transition to the health slice.
pub fn apply_health_event(state: &mut HealthState, event: HealthEvent) {
    match event {
        HealthEvent::Pending => {
            state.is_loading = true;
            state.error_message = None;
        }
        HealthEvent::Fulfilled(payload) => {
            state.is_loading = false;
            state.payload = Some(payload);
            state.error_message = None;
            state.settled = state.settled.saturating_add(1);
        }
        HealthEvent::Rejected(message) => {
            state.is_loading = false;
            state.error_message = Some(message);
            state.settled = state.settled.saturating_add(1);
        }
    }
}
