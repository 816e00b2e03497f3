//! Screener configuration. Every path is injected from here; nothing reads
//! global state.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenerConfig {
    /// Data directory (transaction cache)
    pub data_dir: PathBuf,
    /// Classifier and its training metadata
    pub model: ModelConfig,
    /// Remote transaction source
    pub fetcher: FetcherConfig,
    /// Confidence bands
    pub risk: RiskConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// ONNX classifier
    pub model_path: PathBuf,
    /// JSON bundle: feature schema, threshold, scaler
    pub bundle_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Pause after every successful remote call (public endpoint rate limit)
    pub cooldown_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// |p - 0.5| above this is high confidence
    pub high_margin: f64,
    /// |p - 0.5| above this is medium confidence
    pub medium_margin: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        let data_dir = dirs::cache_dir()
            .map(|d| d.join("ransomware-screener"))
            .unwrap_or_else(|| PathBuf::from(".ransomware-screener"));
        Self {
            data_dir,
            model: ModelConfig::default(),
            fetcher: FetcherConfig::default(),
            risk: RiskConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("model.onnx"),
            bundle_path: PathBuf::from("model_bundle.json"),
        }
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: "https://blockchain.info".to_string(),
            timeout_secs: 45,
            cooldown_secs: 10,
        }
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            high_margin: 0.3,
            medium_margin: 0.1,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl ScreenerConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<ScreenerConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }

    pub fn cache_path(&self) -> PathBuf {
        self.data_dir.join("tx_cache.db")
    }
}
