//! Address history sources. The feature pipeline only ever sees the returned
//! list; where it came from is up to the fetcher.

mod cached;
mod http;

pub use cached::CachedFetcher;
pub use http::BlockchainInfoFetcher;

use crate::error::FetchError;
use crate::ledger::Transaction;

pub trait TransactionFetcher {
    /// Full history for `address`. An empty list is a valid answer.
    fn fetch(&self, address: &str) -> Result<Vec<Transaction>, FetchError>;
}

impl<T: TransactionFetcher + ?Sized> TransactionFetcher for &T {
    fn fetch(&self, address: &str) -> Result<Vec<Transaction>, FetchError> {
        (**self).fetch(address)
    }
}

impl<T: TransactionFetcher + ?Sized> TransactionFetcher for Box<T> {
    fn fetch(&self, address: &str) -> Result<Vec<Transaction>, FetchError> {
        (**self).fetch(address)
    }
}
