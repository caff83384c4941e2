//! Backend health feature slice.
//!
//! # Design
//! - Own the health check request and its store slice.
//! - Keep the per-mount fetch policy in `screen`, outside the view.
//! - Keep render decisions in `logic` so they are testable without a DOM.

pub mod actions;
pub mod logic;
pub mod screen;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
