//! Health source context shared by the status screen.
//!
//! # Design
//! - Create exactly one API client per app boot.
//! - Hand it out as a `HealthSource` so screens never name the transport.

use crate::features::health::actions::HealthSource;
use crate::services::api::ApiClient;
use std::rc::Rc;

/// Context carrying the health source for the current session.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Source used by every health check in the session.
    pub(crate) source: Rc<dyn HealthSource>,
}

impl ApiCtx {
    /// Build the REST-backed source for `base_url`.
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            source: Rc::new(ApiClient::new(base_url)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.source, &other.source)
    }
}
