//! Local persistence for fetched address histories.

mod tx_cache;

pub use tx_cache::TxCache;
