//! Error kinds for each concern. The screener folds them into [`ScreenerError`].

use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning a transaction history into features.
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("no transactions found for address {address}")]
    NoTransactions { address: String },

    #[error("feature {feature} is not finite ({value})")]
    NonFinite { feature: &'static str, value: f64 },
}

/// Transaction cache (SQLite) failures.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("cache payload error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("cache lock poisoned")]
    LockPoisoned,

    #[error("retention age out of range: {0} days")]
    InvalidAge(i64),
}

/// Failures fetching an address history, from the network or the cache.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("remote returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("cache unavailable: {0}")]
    Cache(#[from] CacheError),
}

/// Model bundle, scaler and classifier failures.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid model bundle: {0}")]
    Bundle(#[from] serde_json::Error),

    #[error("scaler width {scaler} does not match schema width {schema}")]
    SchemaMismatch { schema: usize, scaler: usize },

    #[error("input width {actual} does not match expected {expected}")]
    InputWidth { expected: usize, actual: usize },

    #[error("detection threshold {0} outside [0, 1]")]
    InvalidThreshold(f64),

    #[error("onnx runtime: {0}")]
    Ort(#[from] ort::OrtError),

    #[error("unexpected model output: {0}")]
    Output(String),
}

/// Caller-visible outcome of analysing one address.
#[derive(Debug, Error)]
pub enum ScreenerError {
    #[error("no transactions found for address {address}")]
    NoTransactions { address: String },

    #[error("failed to fetch transactions for {address}")]
    FetchFailed {
        address: String,
        #[source]
        source: FetchError,
    },

    #[error("feature extraction failed for {address}")]
    FeatureExtraction {
        address: String,
        #[source]
        source: FeatureError,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl ScreenerError {
    pub(crate) fn from_features(address: &str, err: FeatureError) -> Self {
        match err {
            FeatureError::NoTransactions { address } => ScreenerError::NoTransactions { address },
            other => ScreenerError::FeatureExtraction {
                address: address.to_string(),
                source: other,
            },
        }
    }
}
