//! End-to-end analysis of one address: fetch → features → align → scale →
//! score → verdict.

use crate::error::ScreenerError;
use crate::features::{AddressFeatures, FeatureExtractor};
use crate::fetch::TransactionFetcher;
use crate::model::{Classifier, ModelBundle, StandardScaler};
use crate::risk::{RiskEngine, Verdict};
use crate::config::RiskConfig;
use tracing::{info, info_span};

pub struct Screener<F, C> {
    fetcher: F,
    classifier: C,
    extractor: FeatureExtractor,
    scaler: StandardScaler,
    risk: RiskEngine,
}

impl<F: TransactionFetcher, C: Classifier> Screener<F, C> {
    pub fn new(fetcher: F, classifier: C, bundle: ModelBundle, risk: RiskConfig) -> Self {
        Self {
            fetcher,
            classifier,
            extractor: FeatureExtractor::new(bundle.feature_names),
            scaler: bundle.scaler,
            risk: RiskEngine::new(risk, bundle.threshold),
        }
    }

    /// Model-ready features for `address`, without scoring.
    pub fn features(&self, address: &str) -> Result<AddressFeatures, ScreenerError> {
        let transactions = self
            .fetcher
            .fetch(address)
            .map_err(|source| ScreenerError::FetchFailed {
                address: address.to_string(),
                source,
            })?;
        self.extractor
            .extract(address, &transactions)
            .map_err(|e| ScreenerError::from_features(address, e))
    }

    pub fn analyze(&self, address: &str) -> Result<Verdict, ScreenerError> {
        let span = info_span!("analyze", address);
        let _guard = span.enter();

        let features = self.features(address)?;
        let scaled = self.scaler.transform(&features.aligned.values)?;
        let probability = self.classifier.score(&scaled)?;

        let verdict = self.risk.assess(
            address,
            f64::from(probability),
            self.extractor.schema().len(),
            features.transactions_analyzed,
        );
        info!(
            analysis_id = %verdict.analysis_id,
            probability = verdict.ransomware_probability,
            flagged = verdict.is_ransomware,
            confidence = ?verdict.confidence_level,
            "address analyzed"
        );
        Ok(verdict)
    }
}
