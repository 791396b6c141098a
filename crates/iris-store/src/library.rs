//! The saved-gradient library.
//!
//! Every operation is a whole-collection cycle: read the stored array,
//! transform it in memory, write it back. There is no partial update and no
//! cache, so two libraries over the same file-backed store always observe
//! each other's writes.

use iris_core::Gradient;

use crate::config::{GradientConfig, SavedCollection};
use crate::kv::KeyValueStore;
use crate::session;

/// Saved gradients under one storage key.
#[derive(Debug)]
pub struct GradientLibrary<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> GradientLibrary<S> {
    /// Library under the default storage key.
    #[inline]
    pub fn new(store: S) -> Self {
        Self::with_key(store, session::GRADIENTS_KEY)
    }

    /// Library under a caller-chosen key.
    #[inline]
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// The whole collection, newest first.
    pub fn all(&self) -> SavedCollection {
        SavedCollection::load_from(&self.store, &self.key)
    }

    /// Snapshots the live document under `name` and prepends it.
    ///
    /// Returns the stored record (its minted id is how callers refer to it
    /// later).
    pub fn save(&mut self, name: &str, gradient: &Gradient) -> GradientConfig {
        let config = GradientConfig::capture(name, gradient);
        let mut collection = self.all();
        collection.prepend(config.clone());
        collection.persist_to(&mut self.store, &self.key);
        log::info!("saved gradient {:?} as {}", config.name, config.id);
        config
    }

    /// Deletes the record with `id`. Unknown ids are a no-op returning
    /// `false`, and nothing is rewritten for them.
    pub fn delete(&mut self, id: &str) -> bool {
        let mut collection = self.all();
        if !collection.remove(id) {
            log::debug!("ignoring delete of unknown gradient {id:?}");
            return false;
        }
        collection.persist_to(&mut self.store, &self.key);
        true
    }

    /// Looks up one record by id.
    pub fn get(&self, id: &str) -> Option<GradientConfig> {
        self.all().find(id).cloned()
    }
}
