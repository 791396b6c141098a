//! Session preferences: the theme choice and the first-run tour flag.
//!
//! Both are plain strings under their own keys, separate from the gradient
//! collection so that a malformed collection never takes the preferences
//! down with it.

use crate::kv::KeyValueStore;

/// Storage key for the saved-gradient collection.
pub const GRADIENTS_KEY: &str = "iris-gradients";
/// Storage key for the active theme id.
pub const THEME_KEY: &str = "iris-theme";
/// Storage key for the tour-seen flag.
pub const TOUR_SEEN_KEY: &str = "iris-tour-seen";

/// Preference accessors over a key-value store.
#[derive(Debug)]
pub struct SessionPrefs<S> {
    store: S,
}

impl<S: KeyValueStore> SessionPrefs<S> {
    #[inline]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The persisted theme id, if one was ever chosen.
    pub fn theme(&self) -> Option<String> {
        self.store.get(THEME_KEY)
    }

    pub fn set_theme(&mut self, id: &str) {
        self.store.set(THEME_KEY, id);
    }

    /// Whether the first-run tour has been seen (or skipped).
    pub fn tour_seen(&self) -> bool {
        self.store.get(TOUR_SEEN_KEY).as_deref() == Some("true")
    }

    pub fn mark_tour_seen(&mut self) {
        self.store.set(TOUR_SEEN_KEY, "true");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn defaults_when_nothing_is_stored() {
        let prefs = SessionPrefs::new(MemoryStore::new());
        assert_eq!(prefs.theme(), None);
        assert!(!prefs.tour_seen());
    }

    #[test]
    fn theme_round_trips() {
        let mut prefs = SessionPrefs::new(MemoryStore::new());
        prefs.set_theme("cyberpunk");
        assert_eq!(prefs.theme(), Some("cyberpunk".to_string()));
    }

    #[test]
    fn tour_flag_sticks_once_marked() {
        let mut prefs = SessionPrefs::new(MemoryStore::new());
        prefs.mark_tour_seen();
        assert!(prefs.tour_seen());
    }

    #[test]
    fn unexpected_flag_values_read_as_unseen() {
        let mut store = MemoryStore::new();
        store.set(TOUR_SEEN_KEY, "yes");
        assert!(!SessionPrefs::new(store).tour_seen());
    }
}
