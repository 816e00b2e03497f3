//! SQLite-backed transaction cache keyed by address. Histories are stored as
//! the JSON list they were fetched as, so re-analysis never hits the network.

use crate::error::CacheError;
use crate::ledger::Transaction;
use chrono::{DateTime, Duration, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

pub struct TxCache {
    conn: Mutex<Connection>,
}

impl TxCache {
    /// Open or create the cache database at `path`.
    pub fn open(path: &Path) -> Result<Self, CacheError> {
        Self::init(Connection::open(path)?)
    }

    pub fn in_memory() -> Result<Self, CacheError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, CacheError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS tx_cache (
                address TEXT PRIMARY KEY,
                fetched_at INTEGER NOT NULL,
                tx_count INTEGER NOT NULL,
                payload TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_tx_cache_fetched_at ON tx_cache(fetched_at);
            "#,
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, CacheError> {
        self.conn.lock().map_err(|_| CacheError::LockPoisoned)
    }

    /// Cached history for `address`, if any. An empty list is a valid entry.
    pub fn get(&self, address: &str) -> Result<Option<Vec<Transaction>>, CacheError> {
        let payload: Option<String> = self
            .conn()?
            .query_row(
                "SELECT payload FROM tx_cache WHERE address = ?1",
                params![address],
                |row| row.get(0),
            )
            .optional()?;

        match payload {
            Some(json) => {
                let txs: Vec<Transaction> = serde_json::from_str(&json)?;
                debug!(address, count = txs.len(), "cache hit");
                Ok(Some(txs))
            }
            None => Ok(None),
        }
    }

    /// Store (or replace) the history for `address`, stamped now.
    pub fn put(&self, address: &str, transactions: &[Transaction]) -> Result<(), CacheError> {
        self.put_at(address, transactions, Utc::now().timestamp())
    }

    pub fn put_at(&self, address: &str, transactions: &[Transaction], fetched_at: i64) -> Result<(), CacheError> {
        let payload = serde_json::to_string(transactions)?;
        self.conn()?.execute(
            "INSERT OR REPLACE INTO tx_cache (address, fetched_at, tx_count, payload) VALUES (?1, ?2, ?3, ?4)",
            params![address, fetched_at, transactions.len() as i64, payload],
        )?;
        Ok(())
    }

    /// Retention: delete entries fetched before `ts` (unix seconds).
    pub fn prune_before(&self, ts: i64) -> Result<u64, CacheError> {
        let n = self
            .conn()?
            .execute("DELETE FROM tx_cache WHERE fetched_at < ?1", params![ts])?;
        Ok(n as u64)
    }

    /// Delete entries fetched more than `days` days ago.
    pub fn prune_older_than(&self, days: i64) -> Result<u64, CacheError> {
        self.prune_before(age_cutoff(Utc::now(), days)?)
    }

    pub fn len(&self) -> Result<u64, CacheError> {
        let n: i64 = self
            .conn()?
            .query_row("SELECT COUNT(*) FROM tx_cache", [], |row| row.get(0))?;
        Ok(n as u64)
    }

    pub fn is_empty(&self) -> Result<bool, CacheError> {
        Ok(self.len()? == 0)
    }
}

/// Unix-seconds instant `days` days before `now`.
fn age_cutoff(now: DateTime<Utc>, days: i64) -> Result<i64, CacheError> {
    if days < 0 {
        return Err(CacheError::InvalidAge(days));
    }
    Duration::try_days(days)
        .and_then(|age| now.checked_sub_signed(age))
        .map(|cutoff| cutoff.timestamp())
        .ok_or(CacheError::InvalidAge(days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TxOutput;

    fn history() -> Vec<Transaction> {
        vec![Transaction {
            hash: Some("h1".into()),
            time: 10,
            block_height: 100,
            fee: 5,
            inputs: Vec::new(),
            outputs: vec![TxOutput {
                addr: Some("1Addr".into()),
                value: 42,
            }],
        }]
    }

    #[test]
    fn miss_then_hit() {
        let cache = TxCache::in_memory().unwrap();
        assert!(cache.get("1Addr").unwrap().is_none());

        cache.put("1Addr", &history()).unwrap();
        assert_eq!(cache.get("1Addr").unwrap(), Some(history()));
        assert_eq!(cache.len().unwrap(), 1);
    }

    #[test]
    fn empty_history_is_cached() {
        let cache = TxCache::in_memory().unwrap();
        cache.put("1Quiet", &[]).unwrap();
        assert_eq!(cache.get("1Quiet").unwrap(), Some(Vec::new()));
    }

    #[test]
    fn put_replaces() {
        let cache = TxCache::in_memory().unwrap();
        cache.put("1Addr", &[]).unwrap();
        cache.put("1Addr", &history()).unwrap();
        assert_eq!(cache.get("1Addr").unwrap().unwrap().len(), 1);
        assert_eq!(cache.len().unwrap(), 1);
    }

    #[test]
    fn prune_drops_old_entries_only() {
        let cache = TxCache::in_memory().unwrap();
        cache.put_at("old", &[], 1_000).unwrap();
        cache.put_at("new", &[], 2_000).unwrap();

        assert_eq!(cache.prune_before(1_500).unwrap(), 1);
        assert!(cache.get("old").unwrap().is_none());
        assert!(cache.get("new").unwrap().is_some());
    }

    #[test]
    fn age_cutoff_counts_whole_days() {
        let now = DateTime::from_timestamp(10 * 86_400, 0).unwrap();
        assert_eq!(age_cutoff(now, 0).unwrap(), 10 * 86_400);
        assert_eq!(age_cutoff(now, 3).unwrap(), 7 * 86_400);
    }

    #[test]
    fn age_out_of_range_is_an_error() {
        let now = Utc::now();
        assert!(matches!(
            age_cutoff(now, 999_999_999_999_999),
            Err(CacheError::InvalidAge(999_999_999_999_999))
        ));
        assert!(matches!(age_cutoff(now, -1), Err(CacheError::InvalidAge(-1))));
    }

    #[test]
    fn prune_by_age_keeps_fresh_entries() {
        let cache = TxCache::in_memory().unwrap();
        cache.put_at("ancient", &[], 1_000).unwrap();
        cache.put("fresh", &[]).unwrap();

        assert_eq!(cache.prune_older_than(1).unwrap(), 1);
        assert!(cache.get("fresh").unwrap().is_some());
        assert!(cache.prune_older_than(-5).is_err());
        assert_eq!(cache.len().unwrap(), 1);
    }

    #[test]
    fn survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tx_cache.db");
        {
            let cache = TxCache::open(&path).unwrap();
            cache.put("1Addr", &history()).unwrap();
        }
        let cache = TxCache::open(&path).unwrap();
        assert_eq!(cache.get("1Addr").unwrap(), Some(history()));
    }
}
