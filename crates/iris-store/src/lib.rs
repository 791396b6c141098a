//! Persistence for the Iris workbench.
//!
//! Storage is a string key-value surface with browser-local-storage
//! semantics: whole values under flat keys, absent-on-error reads, silent
//! last-write-wins writes. Everything above it (the saved-gradient library,
//! session preferences) stays total; broken storage degrades a session to
//! an ephemeral one instead of failing it.
//!
//! | Module     | Role                                                  |
//! |------------|-------------------------------------------------------|
//! | [`kv`]      | `KeyValueStore` trait, in-memory and file-backed impls |
//! | [`config`]  | Persisted gradient records and the JSON collection    |
//! | [`library`] | Save / delete / list over one storage key             |
//! | [`session`] | Theme and tour preferences, storage key constants     |
//!
//! # Quick start
//!
//! ```
//! use iris_core::Gradient;
//! use iris_store::{GradientLibrary, MemoryStore};
//!
//! let mut library = GradientLibrary::new(MemoryStore::new());
//! let saved = library.save("default ramp", &Gradient::default());
//!
//! let mut restored = Gradient::default();
//! library.get(&saved.id).unwrap().apply_to(&mut restored);
//! assert_eq!(restored.to_css(), Gradient::default().to_css());
//! ```

pub mod config;
pub mod kv;
pub mod library;
pub mod session;

pub use config::{GradientConfig, SavedCollection};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use library::GradientLibrary;
pub use session::SessionPrefs;
