//! Landing page feature slice.
//!
//! Static content only; the page holds no state.

use crate::core::routes::Route;

#[cfg(target_arch = "wasm32")]
pub mod view;

/// Product name shown as the landing heading.
pub const HOME_TITLE: &str = "Cyberitance";
/// Welcome line under the heading.
pub const HOME_BODY: &str = "Welcome to the Cyberitance platform.";
/// Label of the navigation control to the status screen.
pub const STATUS_LINK_LABEL: &str = "Backend Status";
/// Destination of the navigation control.
pub const STATUS_LINK_ROUTE: Route = Route::Status;
