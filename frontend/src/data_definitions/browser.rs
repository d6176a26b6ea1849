//! Browser-only helpers. Outside the browser they do nothing.

#[cfg(not(target_arch = "wasm32"))]
use common::session::Session;

#[cfg(target_arch = "wasm32")]
mod web {
    use common::session::Session;
    use dioxus::logger::tracing::warn;

    const SESSION_STORAGE_KEY: &str = "zenshin-freelance.session";

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn load_session() -> Option<Session> {
        let raw = local_storage()?.get_item(SESSION_STORAGE_KEY).ok().flatten()?;
        serde_json::from_str(&raw)
            .map_err(|e| warn!("discarding stored session: {e}"))
            .ok()
    }

    pub fn store_session(session: Option<&Session>) {
        let Some(storage) = local_storage() else { return };
        let result = match session.map(serde_json::to_string) {
            Some(Ok(raw)) => storage.set_item(SESSION_STORAGE_KEY, &raw),
            Some(Err(e)) => {
                warn!("session not stored: {e}");
                return;
            }
            None => storage.remove_item(SESSION_STORAGE_KEY),
        };
        if result.is_err() {
            warn!("local storage rejected the session");
        }
    }

    pub fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{alert, load_session, store_session};

#[cfg(not(target_arch = "wasm32"))]
pub fn load_session() -> Option<Session> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn store_session(_session: Option<&Session>) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn alert(message: &str) {
    dioxus::logger::tracing::info!("alert: {message}");
}
