//! Injectable key-value persistence for the Stride storefront.
//!
//! The storefront keeps exactly one piece of state alive across views: the
//! favorites list. This crate provides the storage seam for it as a trait,
//! so domain code never reaches for a global storage handle.
//!
//! - [`KeyValueStore`] — read/write/delete over opaque byte values.
//! - [`MemoryStore`] — in-process store for tests and ephemeral sessions.
//! - [`JsonFileStore`] — single-file JSON store, the terminal equivalent of
//!   the browser's local storage.
//!
//! # Example
//!
//! ```rust
//! use stride_kv::{KeyValueStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.set("favorites", b"[1, 7]").unwrap();
//! let bytes = store.get("favorites").unwrap();
//! assert_eq!(bytes.as_deref(), Some(&b"[1, 7]"[..]));
//! ```

mod error;
mod file;
mod store;

pub use error::KvError;
pub use file::JsonFileStore;
pub use store::{KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{JsonFileStore, KeyValueStore, KvError, MemoryStore};
}
