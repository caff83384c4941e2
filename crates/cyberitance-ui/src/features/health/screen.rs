//! Status screen lifecycle.
//!
//! # Design
//! - One `StatusScreen` per mounted page; a remount builds a fresh one.
//! - Mounting fetches exactly once; refresh always fetches.
//! - Nothing is cached across unmounts; outcomes live in the store, not here.

use crate::features::health::actions::{HealthSource, request_health_check};
use crate::features::health::state::HealthEvent;
use std::cell::Cell;
use std::rc::Rc;

/// Receiver for health request transitions (the store in the browser).
pub type HealthSink = Rc<dyn Fn(HealthEvent)>;

/// Fetch policy of a single status screen instance.
pub struct StatusScreen {
    source: Rc<dyn HealthSource>,
    sink: HealthSink,
    mounted: Cell<bool>,
}

impl StatusScreen {
    /// Bind a screen to its request source and transition sink.
    #[must_use]
    pub fn new(source: Rc<dyn HealthSource>, sink: HealthSink) -> Self {
        Self {
            source,
            sink,
            mounted: Cell::new(false),
        }
    }

    /// Whether the screen is currently mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Fetch once on mount; repeated calls while mounted do nothing.
    #[allow(clippy::future_not_send)]
    pub async fn mount(&self) -> Option<HealthEvent> {
        if self.mounted.replace(true) {
            return None;
        }
        Some(self.fetch().await)
    }

    /// Re-fetch on user request.
    #[allow(clippy::future_not_send)]
    pub async fn refresh(&self) -> HealthEvent {
        self.fetch().await
    }

    /// Mark the screen as left; the next mount fetches again.
    pub fn unmount(&self) {
        self.mounted.set(false);
    }

    #[allow(clippy::future_not_send)]
    async fn fetch(&self) -> HealthEvent {
        request_health_check(self.source.as_ref(), |event| (self.sink)(event)).await
    }
}
