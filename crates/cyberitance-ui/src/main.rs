#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Cyberitance UI wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    cyberitance_ui::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::{self, Write};

    let mut stderr = io::stderr().lock();
    stderr.write_all(native_notice().as_bytes())?;
    Ok(())
}

/// Explain how to run the client when started outside a browser.
#[cfg(not(target_arch = "wasm32"))]
fn native_notice() -> String {
    use cyberitance_ui::core::config::{DEFAULT_API_BASE_URL, health_url};

    format!(
        "cyberitance-ui runs in the browser; build it with `trunk build` or \
         `cargo build --target wasm32-unknown-unknown`.\n\
         Without a stored override it queries {} when served outside the backend.\n",
        health_url(DEFAULT_API_BASE_URL)
    )
}
