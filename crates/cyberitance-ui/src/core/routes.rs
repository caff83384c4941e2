//! Routing definitions for the Cyberitance UI.
use yew_router::prelude::*;

/// Client-side routes.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Landing page.
    #[at("/")]
    Home,
    /// Backend health check screen.
    #[at("/status")]
    Status,
    /// Fallback for unknown paths.
    #[not_found]
    #[at("/404")]
    NotFound,
}
