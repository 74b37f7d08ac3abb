use log::warn;
use web_sys::{window, Storage};

use crate::config;

/// Key/value persistence for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`. Silently empty when storage is unavailable
/// (private mode, sandboxed iframes).
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<Storage> {
        window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    warn!("could not persist preference {}", key);
                }
            }
            None => warn!("localStorage unavailable, preference {} not saved", key),
        }
    }
}

/// Stored dark-mode choice, if the user ever made one.
pub fn stored_dark_mode(store: &impl PreferenceStore) -> Option<bool> {
    match store.get(config::DARK_MODE_KEY)?.as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Startup value: an explicit stored choice wins over the system preference.
pub fn resolve_dark_mode(store: &impl PreferenceStore, system_prefers_dark: bool) -> bool {
    stored_dark_mode(store).unwrap_or(system_prefers_dark)
}

pub fn persist_dark_mode(store: &impl PreferenceStore, dark: bool) {
    store.set(config::DARK_MODE_KEY, if dark { "true" } else { "false" });
}

/// Flips and persists the preference, returning the new value.
pub fn toggle_dark_mode(store: &impl PreferenceStore, current: bool) -> bool {
    let next = !current;
    persist_dark_mode(store, next);
    next
}

fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn system_prefers_dark() -> bool {
    media_matches("(prefers-color-scheme: dark)")
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}


#[cfg(test)]
mod tests {
    use super::testing::MemoryStore;
    use super::*;

    #[test]
    fn stored_choice_overrides_system() {
        let store = MemoryStore::default();
        assert!(resolve_dark_mode(&store, true));
        assert!(!resolve_dark_mode(&store, false));

        persist_dark_mode(&store, false);
        assert!(!resolve_dark_mode(&store, true));
        assert_eq!(store.get(config::DARK_MODE_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn garbage_value_falls_back_to_system() {
        let store = MemoryStore::default();
        store.set(config::DARK_MODE_KEY, "yes please");
        assert_eq!(stored_dark_mode(&store), None);
        assert!(resolve_dark_mode(&store, true));
    }

    #[test]
    fn toggling_twice_restores_the_starting_preference() {
        let store = MemoryStore::default();
        persist_dark_mode(&store, true);
        let once = toggle_dark_mode(&store, true);
        let twice = toggle_dark_mode(&store, once);
        assert!(twice);
        assert_eq!(stored_dark_mode(&store), Some(true));
        assert_eq!(*store.writes.borrow(), 3);
    }
}
