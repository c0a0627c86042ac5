//! The registry of pairs, keyed by literal asset order.
//!
//! Pairs live in a [`DashMap`]; each entry is an `Arc<Mutex<Pair>>` so an
//! operation can hold its pair's lock for the whole
//! read, compute, apply and commit sequence without blocking other pairs or
//! the map shard.

use std::sync::{Arc, Mutex, PoisonError};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::{AssetId, PairKey};
use crate::error::AmmError;
use crate::pools::Pair;

/// Concurrent map from [`PairKey`] to its [`Pair`].
///
/// `(X, Y)` and `(Y, X)` are distinct keys and address independent pools.
///
/// # Example
///
/// ```rust
/// use hydra_pairs::domain::{AssetId, PairKey};
/// use hydra_pairs::registry::PoolRegistry;
///
/// let x = AssetId::from_bytes([1; 32]);
/// let y = AssetId::from_bytes([2; 32]);
///
/// let registry = PoolRegistry::new();
/// registry.create_pair(x, y).expect("new pair");
/// registry.create_pair(y, x).expect("reverse order is a separate pair");
/// assert_eq!(registry.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct PoolRegistry {
    pairs: DashMap<PairKey, Arc<Mutex<Pair>>>,
}

impl PoolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an empty pair for `(asset_a, asset_b)` in that order.
    ///
    /// Creation is atomic: of two concurrent calls for the same key exactly
    /// one succeeds.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPair`] if both assets are the same.
    /// - [`AmmError::PairAlreadyExists`] if the key is taken.
    pub fn create_pair(&self, asset_a: AssetId, asset_b: AssetId) -> Result<Pair, AmmError> {
        let key = PairKey::new(asset_a, asset_b)?;
        match self.pairs.entry(key) {
            Entry::Occupied(_) => Err(AmmError::PairAlreadyExists),
            Entry::Vacant(slot) => {
                let pair = Pair::new(key);
                slot.insert(Arc::new(Mutex::new(pair)));
                tracing::info!(%key, "pair created");
                Ok(pair)
            }
        }
    }

    /// Returns a snapshot of the pair registered under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PairNotFound`] if no such pair exists.
    pub fn lookup(&self, key: &PairKey) -> Result<Pair, AmmError> {
        let handle = self.handle(key)?;
        let pair = *handle.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(pair)
    }

    /// Runs `op` with exclusive access to the pair under `key`.
    ///
    /// The map entry is released before the pair lock is taken.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PairNotFound`] if no such pair exists, or
    /// whatever `op` returns.
    pub(crate) fn with_pair<T>(
        &self,
        key: &PairKey,
        op: impl FnOnce(&mut Pair) -> Result<T, AmmError>,
    ) -> Result<T, AmmError> {
        let handle = self.handle(key)?;
        let mut guard = handle.lock().unwrap_or_else(PoisonError::into_inner);
        op(&mut guard)
    }

    fn handle(&self, key: &PairKey) -> Result<Arc<Mutex<Pair>>, AmmError> {
        self.pairs
            .get(key)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(AmmError::PairNotFound)
    }

    /// Number of registered pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no pair has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Snapshots of every pair, ordered by key.
    #[must_use]
    pub fn pairs(&self) -> Vec<Pair> {
        let handles: Vec<_> = self
            .pairs
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        let mut pairs: Vec<Pair> = handles
            .iter()
            .map(|h| *h.lock().unwrap_or_else(PoisonError::into_inner))
            .collect();
        pairs.sort_by_key(Pair::key);
        pairs
    }
}
