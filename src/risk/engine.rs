//! Turns a classifier probability into a verdict: the bundle's threshold
//! decides the flag, distance from 0.5 decides the confidence band.

use crate::config::RiskConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    pub fn from_probability(probability: f64, config: &RiskConfig) -> Self {
        let margin = (probability - 0.5).abs();
        if margin > config.high_margin {
            ConfidenceLevel::High
        } else if margin > config.medium_margin {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

/// Outcome for a single address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub analysis_id: Uuid,
    pub address: String,
    pub ransomware_probability: f64,
    pub is_ransomware: bool,
    pub confidence_level: ConfidenceLevel,
    pub threshold_used: f64,
    pub feature_count: usize,
    pub transactions_analyzed: usize,
    pub analyzed_at: DateTime<Utc>,
}

pub struct RiskEngine {
    config: RiskConfig,
    threshold: f64,
}

impl RiskEngine {
    pub fn new(config: RiskConfig, threshold: f64) -> Self {
        Self { config, threshold }
    }

    pub fn assess(
        &self,
        address: &str,
        probability: f64,
        feature_count: usize,
        transactions_analyzed: usize,
    ) -> Verdict {
        Verdict {
            analysis_id: Uuid::new_v4(),
            address: address.to_string(),
            ransomware_probability: probability,
            is_ransomware: probability >= self.threshold,
            confidence_level: ConfidenceLevel::from_probability(probability, &self.config),
            threshold_used: self.threshold,
            feature_count,
            transactions_analyzed,
            analyzed_at: Utc::now(),
        }
    }
}
