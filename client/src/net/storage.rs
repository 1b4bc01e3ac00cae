//! `localStorage` access.
//!
//! Browser-only; outside the `csr` build every read is `None` and every write
//! is a no-op, so native tests see an empty store.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Read the string stored under `key`.
pub fn read(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`. Failures (quota, private mode) are logged.
pub fn write(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("could not persist {key}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key`.
pub fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}

/// Read a boolean flag stored as `"true"` / `"false"`.
pub fn read_flag(key: &str) -> Option<bool> {
    read(key).and_then(|raw| parse_flag(&raw))
}

/// Store a boolean flag.
pub fn write_flag(key: &str, value: bool) {
    write(key, if value { "true" } else { "false" });
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
