//! Browser-backed session storage and environment discovery.
//!
//! # Design
//! - Raw `localStorage` access: the keys hold exactly what the login flow
//!   wrote (opaque token, JSON identity record, plain strings), so the
//!   typed gloo codecs are bypassed on purpose.
//! - Write failures (quota, private mode) are logged and swallowed; the
//!   session layer is best effort by contract.

use crate::core::session::SessionStore;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use web_sys::Url;

/// [`SessionStore`] over the browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserSession;

impl SessionStore for BrowserSession {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            console::error!("storage write failed", key.to_string(), err);
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = LocalStorage::raw().remove_item(key) {
            console::error!("storage delete failed", key.to_string(), err);
        }
    }
}

/// Base URL of the API, derived once from the window location. The dev
/// server (trunk on :3000) maps to the API on :8080; any other origin is
/// assumed to serve the API itself.
pub(crate) fn api_base_url() -> String {
    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:8080".to_string());

    if let Ok(url) = Url::new(&href) {
        let protocol = url.protocol();
        let host = url.hostname();
        let port = url.port();
        let mapped_port = match port.as_str() {
            "" => None,
            "3000" => Some("8080"),
            other => Some(other),
        };

        let mut base = format!("{protocol}//{host}");
        if let Some(port) = mapped_port {
            base.push(':');
            base.push_str(port);
        }
        return base;
    }

    "http://localhost:8080".to_string()
}
