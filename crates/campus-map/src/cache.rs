//! Bounded tile cache.
//!
//! The cache is generic over the decoded tile type so the GUI can keep
//! ready-to-draw image handles instead of raw bytes.

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::tile::TileId;

/// Default number of tiles kept in memory.
pub const DEFAULT_CAPACITY: usize = 256;

/// Load state of a cached tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileState<T> {
    /// A fetch has been issued.
    Pending,
    /// The tile is available.
    Ready(T),
    /// The fetch failed. The tile stays blank; there is no retry.
    Failed,
}

/// LRU cache of tile states.
#[derive(Debug)]
pub struct TileCache<T> {
    entries: LruCache<TileId, TileState<T>>,
}

impl<T> TileCache<T> {
    /// Create a cache holding at most `capacity` tiles (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Note that `tile` is wanted.
    ///
    /// Returns `true` when the tile was unknown and has been marked pending,
    /// meaning the caller should fetch it. Known tiles are only promoted.
    pub fn request(&mut self, tile: TileId) -> bool {
        if self.entries.get(&tile).is_some() {
            return false;
        }
        self.entries.put(tile, TileState::Pending);
        true
    }

    pub fn insert_ready(&mut self, tile: TileId, value: T) {
        self.entries.put(tile, TileState::Ready(value));
    }

    pub fn mark_failed(&mut self, tile: TileId) {
        self.entries.put(tile, TileState::Failed);
    }

    /// Look up a tile without touching recency.
    pub fn peek(&self, tile: &TileId) -> Option<&TileState<T>> {
        self.entries.peek(tile)
    }

    /// The ready value of a tile, if loaded.
    pub fn ready(&self, tile: &TileId) -> Option<&T> {
        match self.entries.peek(tile) {
            Some(TileState::Ready(value)) => Some(value),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }
}

impl<T> Default for TileCache<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(x: u32) -> TileId {
        TileId { zoom: 18, x, y: 0 }
    }

    #[test]
    fn test_request_marks_pending_once() {
        let mut cache: TileCache<Vec<u8>> = TileCache::new(4);
        assert!(cache.request(tile(1)));
        assert!(!cache.request(tile(1)));
        assert_eq!(cache.peek(&tile(1)), Some(&TileState::Pending));
    }

    #[test]
    fn test_failed_tiles_are_not_refetched() {
        let mut cache: TileCache<Vec<u8>> = TileCache::new(4);
        cache.request(tile(1));
        cache.mark_failed(tile(1));
        assert!(!cache.request(tile(1)));
        assert!(cache.ready(&tile(1)).is_none());
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let mut cache = TileCache::new(2);
        cache.insert_ready(tile(1), "one");
        cache.insert_ready(tile(2), "two");
        // Touch tile 1 so tile 2 becomes the eviction candidate.
        assert!(!cache.request(tile(1)));
        cache.insert_ready(tile(3), "three");

        assert_eq!(cache.ready(&tile(1)), Some(&"one"));
        assert!(cache.peek(&tile(2)).is_none());
        assert_eq!(cache.ready(&tile(3)), Some(&"three"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let cache: TileCache<()> = TileCache::new(0);
        assert_eq!(cache.capacity(), 1);
        assert!(cache.is_empty());
    }
}
