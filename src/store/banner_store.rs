//! Banner Store Module
//!
//! Per-board banner lists behind one reader/writer lock.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use rand::Rng;

use crate::store::{Asset, StoreStats};

// == Random Pick ==
/// Result of a random selection: the chosen index and its MIME type.
///
/// The payload is deliberately absent; fetch it with [`BannerStore::get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomPick {
    /// Position of the chosen banner in the board's list
    pub index: usize,
    /// MIME type of the chosen banner
    pub mime: Arc<str>,
}

// == Banner Store ==
/// Stores ordered banner lists by board.
///
/// Each list is an immutable snapshot, so replacing a board only swaps one map
/// slot and readers see either the old list or the new one in full.
///
/// Boards are never removed. A board deleted upstream keeps its last list
/// until the process restarts.
#[derive(Debug)]
pub struct BannerStore {
    boards: RwLock<HashMap<String, Arc<[Asset]>>>,
}

impl BannerStore {
    // == Constructor ==
    /// Creates an empty store with room for `capacity` boards.
    ///
    /// The capacity is only a hint; the map grows as needed.
    pub fn new(capacity: usize) -> Self {
        Self {
            boards: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    // == Replace ==
    /// Sets the banners of a board, discarding whatever was stored before.
    pub fn replace(&self, board: impl Into<String>, assets: Vec<Asset>) {
        let board = board.into();
        let assets: Arc<[Asset]> = assets.into();
        self.boards.write().insert(board, assets);
    }

    // == Get ==
    /// Returns the banner at `index` on `board`, if any.
    ///
    /// The returned asset shares its payload with the store and every other
    /// reader.
    pub fn get(&self, board: &str, index: usize) -> Option<Asset> {
        self.boards.read().get(board)?.get(index).cloned()
    }

    // == Random ==
    /// Picks a uniformly random banner on `board`.
    ///
    /// Returns `None` if the board is unknown or has no banners.
    pub fn random(&self, board: &str) -> Option<RandomPick> {
        let boards = self.boards.read();
        let assets = boards.get(board)?;
        if assets.is_empty() {
            return None;
        }

        let index = rand::rng().random_range(0..assets.len());
        Some(RandomPick {
            index,
            mime: assets[index].mime_handle(),
        })
    }

    // == Banners ==
    /// Returns the full current list of a board as one consistent snapshot.
    pub fn banners(&self, board: &str) -> Option<Arc<[Asset]>> {
        self.boards.read().get(board).cloned()
    }

    // == Stats ==
    /// Returns a summary of the current contents.
    pub fn stats(&self) -> StoreStats {
        let boards = self.boards.read();
        let mut stats = StoreStats::new();
        for assets in boards.values() {
            stats.record_board(assets.iter().map(Asset::len));
        }
        stats
    }

    // == Length ==
    /// Returns the number of boards with an entry.
    pub fn len(&self) -> usize {
        self.boards.read().len()
    }

    // == Is Empty ==
    /// Returns true if no board has ever been populated.
    pub fn is_empty(&self) -> bool {
        self.boards.read().is_empty()
    }
}

impl Default for BannerStore {
    fn default() -> Self {
        Self::new(crate::store::DEFAULT_INITIAL_CAPACITY)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use std::thread;

    fn png(data: &'static [u8]) -> Asset {
        Asset::new(data, "image/png")
    }

    #[test]
    fn test_store_new() {
        let store = BannerStore::new(16);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_scenario() {
        let store = BannerStore::default();
        store.replace(
            "a",
            vec![
                Asset::new(&b"X"[..], "image/png"),
                Asset::new(&b"Y"[..], "image/gif"),
            ],
        );

        let first = store.get("a", 0).unwrap();
        assert_eq!(first.data().as_ref(), b"X");
        assert_eq!(first.mime(), "image/png");

        assert!(store.get("a", 2).is_none());
        assert!(store.get("b", 0).is_none());

        let pick = store.random("a").unwrap();
        assert!(pick.index < 2);
        let expected = if pick.index == 0 { "image/png" } else { "image/gif" };
        assert_eq!(&*pick.mime, expected);
    }

    #[test]
    fn test_store_unknown_board() {
        let store = BannerStore::default();

        assert!(store.get("missing", 0).is_none());
        assert!(store.random("missing").is_none());
        assert!(store.banners("missing").is_none());
    }

    #[test]
    fn test_store_index_out_of_range() {
        let store = BannerStore::default();
        store.replace("a", vec![png(b"1")]);

        assert!(store.get("a", 0).is_some());
        assert!(store.get("a", 1).is_none());
        assert!(store.get("a", usize::MAX).is_none());
    }

    #[test]
    fn test_store_empty_list() {
        let store = BannerStore::default();
        store.replace("a", Vec::new());

        assert!(store.get("a", 0).is_none());
        assert!(store.random("a").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_empty_board_key() {
        let store = BannerStore::default();
        assert!(store.get("", 0).is_none());

        store.replace("", vec![png(b"1")]);
        assert_eq!(store.get("", 0).unwrap().data().as_ref(), b"1");
        assert_eq!(store.random("").unwrap().index, 0);
    }

    #[test]
    fn test_store_replace_supersedes() {
        let store = BannerStore::default();
        store.replace("a", vec![png(b"old0"), png(b"old1"), png(b"old2")]);
        store.replace("a", vec![Asset::new(&b"new"[..], "image/gif")]);

        assert_eq!(store.get("a", 0).unwrap().data().as_ref(), b"new");
        assert!(store.get("a", 1).is_none());
        assert!(store.get("a", 2).is_none());
        assert_eq!(&*store.random("a").unwrap().mime, "image/gif");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_board_isolation() {
        let store = BannerStore::default();
        store.replace("a", vec![png(b"a0")]);
        store.replace("b", vec![png(b"b0"), png(b"b1")]);
        store.replace("a", Vec::new());

        assert!(store.get("a", 0).is_none());
        assert_eq!(store.get("b", 1).unwrap().data().as_ref(), b"b1");
        assert!(store.random("b").is_some());
    }

    #[test]
    fn test_store_random_single() {
        let store = BannerStore::default();
        store.replace("a", vec![Asset::new(&b"only"[..], "video/webm")]);

        for _ in 0..20 {
            let pick = store.random("a").unwrap();
            assert_eq!(pick.index, 0);
            assert_eq!(&*pick.mime, "video/webm");
        }
    }

    #[test]
    fn test_store_random_covers_all_indices() {
        let store = BannerStore::default();
        store.replace("a", vec![png(b"0"), png(b"1"), png(b"2"), png(b"3")]);

        let mut counts = [0usize; 4];
        for _ in 0..4000 {
            counts[store.random("a").unwrap().index] += 1;
        }

        // Expected 1000 each; bounds are far outside normal variance
        for count in counts {
            assert!(count > 800 && count < 1200, "skewed counts: {:?}", counts);
        }
    }

    #[test]
    fn test_store_get_shares_payload() {
        let store = BannerStore::default();
        store.replace("a", vec![Asset::new(vec![7u8; 4096], "image/png")]);

        let first = store.get("a", 0).unwrap();
        let second = store.get("a", 0).unwrap();
        assert_eq!(first.data().as_ptr(), second.data().as_ptr());
    }

    #[test]
    fn test_store_snapshot_survives_replace() {
        let store = BannerStore::default();
        store.replace("a", vec![png(b"old")]);

        let snapshot = store.banners("a").unwrap();
        store.replace("a", vec![png(b"new0"), png(b"new1")]);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].data().as_ref(), b"old");
        assert_eq!(store.banners("a").unwrap().len(), 2);
    }

    #[test]
    fn test_store_stats() {
        let store = BannerStore::default();
        store.replace("a", vec![png(b"12"), png(b"345")]);
        store.replace("b", Vec::new());

        let stats = store.stats();
        assert_eq!(stats.boards, 2);
        assert_eq!(stats.banners, 2);
        assert_eq!(stats.total_bytes, 5);
    }

    #[test]
    fn test_store_concurrent_replace_is_atomic() {
        let store = Arc::new(BannerStore::default());
        store.replace("a", vec![Asset::new(&b"0"[..], "gen-0")]);

        // Generation n is a list of n + 1 assets all tagged "gen-n"
        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for generation in 1..200usize {
                    let mime = format!("gen-{}", generation);
                    let assets = (0..=generation)
                        .map(|_| Asset::new(Bytes::new(), mime.as_str()))
                        .collect();
                    store.replace("a", assets);
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..500 {
                        let snapshot = store.banners("a").unwrap();
                        let expected = format!("gen-{}", snapshot.len() - 1);
                        assert!(snapshot.iter().all(|asset| asset.mime() == expected));

                        let pick = store.random("a").unwrap();
                        assert!(pick.mime.starts_with("gen-"));
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }

        assert_eq!(store.banners("a").unwrap().len(), 200);
    }
}
