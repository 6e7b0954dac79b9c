//! Persisted favorites set.

use tracing::{debug, warn};

use stride_kv::KeyValueStore;

use crate::error::CommerceError;
use crate::ids::ProductId;

/// Storage key for the favorites record.
pub const FAVORITES_KEY: &str = "favorites";

/// A user-maintained set of favorite product ids over an injected store.
///
/// The set is read from storage once when loaded and written back
/// synchronously after every mutation; the store is treated as a
/// single-writer resource, last writer wins. The persisted value is a plain
/// JSON array of integer ids, so an absent record is an empty set and a
/// malformed one degrades to empty instead of failing.
pub struct Favorites<S: KeyValueStore> {
    store: S,
    ids: Vec<ProductId>,
}

impl<S: KeyValueStore> Favorites<S> {
    /// Load the favorites set from the given store.
    pub fn load(store: S) -> Result<Self, CommerceError> {
        let ids = match store.get(FAVORITES_KEY)? {
            Some(bytes) => match serde_json::from_slice::<Vec<u32>>(&bytes) {
                Ok(raw) => {
                    let mut ids: Vec<ProductId> = Vec::with_capacity(raw.len());
                    for id in raw.into_iter().map(ProductId::new) {
                        if !ids.contains(&id) {
                            ids.push(id);
                        }
                    }
                    ids
                }
                Err(e) => {
                    warn!(error = %e, "malformed favorites record, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        debug!(count = ids.len(), "favorites loaded");
        Ok(Self { store, ids })
    }

    /// The favorite ids, in insertion order.
    pub fn list(&self) -> &[ProductId] {
        &self.ids
    }

    /// Check membership.
    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if there are no favorites.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Add an id. Adding an id already present is a no-op.
    pub fn add(&mut self, id: ProductId) -> Result<(), CommerceError> {
        if self.ids.contains(&id) {
            return Ok(());
        }
        self.ids.push(id);
        self.persist()
    }

    /// Remove an id. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: ProductId) -> Result<(), CommerceError> {
        let before = self.ids.len();
        self.ids.retain(|existing| *existing != id);
        if self.ids.len() != before {
            self.persist()?;
        }
        Ok(())
    }

    /// Flip membership, returning whether the id is now a favorite.
    pub fn toggle(&mut self, id: ProductId) -> Result<bool, CommerceError> {
        if self.contains(id) {
            self.remove(id)?;
            Ok(false)
        } else {
            self.add(id)?;
            Ok(true)
        }
    }

    /// Remove everything, deleting the stored record.
    pub fn clear(&mut self) -> Result<(), CommerceError> {
        self.ids.clear();
        self.store.delete(FAVORITES_KEY)?;
        Ok(())
    }

    fn persist(&self) -> Result<(), CommerceError> {
        self.store.set_json(FAVORITES_KEY, &self.ids)?;
        debug!(count = self.ids.len(), "favorites written");
        Ok(())
    }
}
