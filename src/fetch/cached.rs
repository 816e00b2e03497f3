//! Cache-first decorator over any fetcher.

use super::TransactionFetcher;
use crate::error::FetchError;
use crate::ledger::Transaction;
use crate::storage::TxCache;
use tracing::{debug, warn};

pub struct CachedFetcher<F> {
    inner: F,
    cache: TxCache,
}

impl<F: TransactionFetcher> CachedFetcher<F> {
    pub fn new(inner: F, cache: TxCache) -> Self {
        Self { inner, cache }
    }

    pub fn cache(&self) -> &TxCache {
        &self.cache
    }
}

impl<F: TransactionFetcher> TransactionFetcher for CachedFetcher<F> {
    fn fetch(&self, address: &str) -> Result<Vec<Transaction>, FetchError> {
        if let Some(txs) = self.cache.get(address)? {
            return Ok(txs);
        }
        debug!(address, "cache miss");

        let txs = self.inner.fetch(address)?;
        if let Err(e) = self.cache.put(address, &txs) {
            warn!(address, error = %e, "failed to cache transactions");
        }
        Ok(txs)
    }
}
