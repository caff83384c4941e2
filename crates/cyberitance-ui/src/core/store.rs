//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Each slice owns its reducer; the store only aggregates.

use crate::features::health::state::{HealthEvent, HealthState, apply_health_event};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Backend health check slice.
    pub health: HealthState,
}

impl AppStore {
    /// Route a health request transition into its slice.
    pub fn apply_health(&mut self, event: HealthEvent) {
        apply_health_event(&mut self.health, event);
    }
}
