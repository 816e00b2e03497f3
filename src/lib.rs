//! Ransomware screener. Bitcoin address history to classifier verdict.
//!
//! Modular structure:
//! - [`ledger`]: Transaction records and per-transaction flow/counterparty views
//! - [`features`]: Base aggregates, pattern ratios, schema alignment
//! - [`fetch`]: Address history sources (HTTP, cache-first)
//! - [`storage`]: SQLite transaction cache
//! - [`model`]: Model bundle, scaler, ONNX classifier
//! - [`risk`]: Threshold and confidence bands
//! - [`screener`]: End-to-end orchestration
//! - [`logging`]: Structured logging

pub mod config;
pub mod error;
pub mod features;
pub mod fetch;
pub mod ledger;
pub mod logging;
pub mod model;
pub mod risk;
pub mod screener;
pub mod storage;

pub use config::ScreenerConfig;
pub use error::{FeatureError, FetchError, ModelError, ScreenerError};
pub use features::{FeatureExtractor, FeatureVector};
pub use fetch::{BlockchainInfoFetcher, CachedFetcher, TransactionFetcher};
pub use ledger::Transaction;
pub use logging::StructuredLogger;
pub use model::{Classifier, ModelBundle, OnnxClassifier};
pub use risk::{RiskEngine, Verdict};
pub use screener::Screener;
pub use storage::TxCache;
