//! Store Module
//!
//! Provides the in-memory banner cache: per-board ordered asset lists behind a
//! single reader/writer lock, with indexed lookup and random selection.

mod asset;
mod banner_store;
mod stats;


// Re-export public types
pub use asset::Asset;
pub use banner_store::{BannerStore, RandomPick};
pub use stats::StoreStats;

// == Public Constants ==
/// Default number of boards the store pre-allocates room for
pub const DEFAULT_INITIAL_CAPACITY: usize = 64;
