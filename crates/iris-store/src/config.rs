//! Persisted gradient records.
//!
//! The wire format is a JSON array of configs with camelCase field names:
//!
//! ```json
//! [{
//!   "id": "1714070000000",
//!   "name": "Sunset",
//!   "direction": "to right",
//!   "colorStops": [{"id": "1", "color": "#ff6b6b", "position": 0.0, "opacity": 1.0}],
//!   "createdAt": "2024-01-15T10:30:00Z"
//! }]
//! ```
//!
//! A config is immutable once saved; re-saving under the same name mints a
//! new record rather than editing the old one.

use chrono::{DateTime, Utc};
use iris_core::{ColorStop, Gradient, ident};
use serde::{Deserialize, Serialize};

use crate::kv::KeyValueStore;

/// One saved gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientConfig {
    pub id: String,
    pub name: String,
    pub direction: String,
    pub color_stops: Vec<ColorStop>,
    pub created_at: DateTime<Utc>,
}

impl GradientConfig {
    /// Snapshots the live document under a fresh id and the current time.
    ///
    /// The stops are cloned by value, so later edits to the document never
    /// reach the saved record.
    pub fn capture(name: impl Into<String>, gradient: &Gradient) -> Self {
        Self {
            id: ident::next_id(),
            name: name.into(),
            direction: gradient.direction().to_string(),
            color_stops: gradient.stops().to_vec(),
            created_at: Utc::now(),
        }
    }

    /// Loads this record into the live document (clones, never aliases).
    pub fn apply_to(&self, gradient: &mut Gradient) {
        gradient.load(self.direction.clone(), self.color_stops.clone());
    }
}

/// Insertion-ordered saved gradients, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedCollection {
    configs: Vec<GradientConfig>,
}

impl SavedCollection {
    /// Reads the collection stored under `key`.
    ///
    /// An absent key or malformed payload yields the empty collection; the
    /// malformed case is logged and the data is overwritten on next save.
    pub fn load_from(store: &dyn KeyValueStore, key: &str) -> Self {
        let Some(text) = store.get(key) else {
            return Self::default();
        };
        match serde_json::from_str(&text) {
            Ok(configs) => Self { configs },
            Err(err) => {
                log::warn!("discarding malformed gradient collection under {key:?}: {err}");
                Self::default()
            }
        }
    }

    /// Writes the whole collection under `key`, replacing what was there.
    pub fn persist_to(&self, store: &mut dyn KeyValueStore, key: &str) {
        match serde_json::to_string(&self.configs) {
            Ok(text) => store.set(key, &text),
            Err(err) => log::warn!("cannot encode gradient collection: {err}"),
        }
    }

    /// Saved configs, newest first.
    #[inline]
    pub fn configs(&self) -> &[GradientConfig] {
        &self.configs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Adds a config at the front.
    pub fn prepend(&mut self, config: GradientConfig) {
        self.configs.insert(0, config);
    }

    /// Deletes the config with `id`. Returns whether one was deleted.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.configs.len();
        self.configs.retain(|c| c.id != id);
        self.configs.len() != before
    }

    pub fn find(&self, id: &str) -> Option<&GradientConfig> {
        self.configs.iter().find(|c| c.id == id)
    }
}
