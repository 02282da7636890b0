//! Store Statistics Module
//!
//! Point-in-time summary of what the banner store currently holds.

use serde::Serialize;

// == Store Stats ==
/// Snapshot of the store contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Number of boards with an entry, including explicitly empty ones
    pub boards: usize,
    /// Total number of banners across all boards
    pub banners: usize,
    /// Total payload size across all banners
    pub total_bytes: usize,
}

impl StoreStats {
    // == Constructor ==
    /// Creates a new StoreStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Board ==
    /// Accounts for one board and the payload sizes of its banners.
    pub fn record_board<I>(&mut self, sizes: I)
    where
        I: IntoIterator<Item = usize>,
    {
        self.boards += 1;
        for size in sizes {
            self.banners += 1;
            self.total_bytes += size;
        }
    }
}
