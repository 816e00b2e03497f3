//! Blocking client for the public `rawaddr` endpoint.

use super::TransactionFetcher;
use crate::config::FetcherConfig;
use crate::error::FetchError;
use crate::ledger::{RawAddress, Transaction};
use std::time::Duration;
use tracing::{info, warn};

pub struct BlockchainInfoFetcher {
    client: reqwest::blocking::Client,
    base_url: String,
    cooldown: Duration,
}

impl BlockchainInfoFetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("ransomware-screener/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cooldown: Duration::from_secs(config.cooldown_secs),
        })
    }

    pub fn url_for(&self, address: &str) -> String {
        format!("{}/rawaddr/{}", self.base_url, address)
    }
}

impl TransactionFetcher for BlockchainInfoFetcher {
    fn fetch(&self, address: &str) -> Result<Vec<Transaction>, FetchError> {
        let url = self.url_for(address);
        info!(address, url = %url, "fetching address history");

        let res = self.client.get(&url).send()?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().unwrap_or_default();
            warn!(address, status = status.as_u16(), "remote fetch failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let raw: RawAddress = res.json()?;
        info!(address, count = raw.txs.len(), "fetched transactions");

        if !self.cooldown.is_zero() {
            std::thread::sleep(self.cooldown);
        }
        Ok(raw.txs)
    }
}
