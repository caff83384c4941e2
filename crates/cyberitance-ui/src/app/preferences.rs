//! Persistence and environment helpers for the app shell.

use crate::core::config::{API_BASE_URL_KEY, resolve_api_base_url};
use gloo::console;
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

pub(crate) fn api_base_url() -> String {
    let stored = load_stored_base_url();
    let origin = window().location().origin().ok();
    resolve_api_base_url(stored.as_deref(), origin.as_deref())
}

fn load_stored_base_url() -> Option<String> {
    match LocalStorage::get::<String>(API_BASE_URL_KEY) {
        Ok(value) => Some(value),
        Err(StorageError::KeyNotFound(_)) => None,
        Err(err) => {
            report_storage_error("read", API_BASE_URL_KEY, &err);
            None
        }
    }
}

fn report_storage_error(operation: &str, key: &str, err: &StorageError) {
    let detail = err.to_string();
    console::error!("storage operation failed", operation, key, detail);
}
