//! Feature slices (state, actions, and views per screen).
pub mod health;
pub mod home;
