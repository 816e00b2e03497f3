//! Ledger transaction records as served by the `rawaddr` endpoint, plus the
//! per-transaction views the feature pipeline needs.
//!
//! Every field is optional on the wire; `null` and missing both decode to the
//! type's default so partial records never fail a whole history.

mod counterparty;
mod flow;

pub use counterparty::{counterparties, CounterpartyTally};
pub use flow::TxFlow;

use serde::{Deserialize, Deserializer, Serialize};

/// Minor units (satoshi) per major unit (BTC).
pub const SATOSHI_PER_BTC: f64 = 100_000_000.0;

/// Convert a minor-unit amount to major units.
pub fn to_btc(satoshi: u64) -> f64 {
    satoshi as f64 / SATOSHI_PER_BTC
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Unix seconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: i64,
    /// 0 (or absent) while unconfirmed
    #[serde(default, deserialize_with = "null_as_default")]
    pub block_height: i64,
    /// Satoshi
    #[serde(default, deserialize_with = "null_as_default")]
    pub fee: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inputs: Vec<TxInput>,
    #[serde(rename = "out", default, deserialize_with = "null_as_default")]
    pub outputs: Vec<TxOutput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TxInput {
    #[serde(default)]
    pub prev_out: Option<PrevOut>,
}

/// The previous output an input spends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrevOut {
    #[serde(default)]
    pub addr: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TxOutput {
    #[serde(default)]
    pub addr: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: u64,
}

/// Response body of `GET /rawaddr/{address}`; only the history is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAddress {
    #[serde(default, deserialize_with = "null_as_default")]
    pub txs: Vec<Transaction>,
}

impl Transaction {
    /// Addresses of the previous outputs spent by this transaction. Empty
    /// strings are skipped like missing addresses.
    pub fn input_addresses(&self) -> impl Iterator<Item = &str> {
        self.inputs
            .iter()
            .filter_map(|i| i.prev_out.as_ref())
            .filter_map(|p| p.addr.as_deref())
            .filter(|a| !a.is_empty())
    }

    pub fn output_addresses(&self) -> impl Iterator<Item = &str> {
        self.outputs
            .iter()
            .filter_map(|o| o.addr.as_deref())
            .filter(|a| !a.is_empty())
    }
}
