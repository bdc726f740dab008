//! Durable token slot backed by `localStorage`.
//!
//! The token is an opaque string; its presence proves nothing beyond "a
//! login succeeded at some point", and only the service can say whether
//! it is still honored. The auth gateway is the sole writer of this slot,
//! and the request helper its only other reader. Requires a browser
//! environment; outside the `csr` feature the slot is always empty.

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "medbook_auth_token";

/// Read the stored token, if any.
pub(super) fn read() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        window.local_storage().ok().flatten()?.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Store a freshly issued token, replacing any previous one.
pub(super) fn write(token: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}

/// Remove the stored token. Safe to call when none is stored.
pub(super) fn clear() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
