//! Feature extraction pipeline: transactions → base features → pattern
//! features → schema-aligned vector.

use super::{AlignedFeatures, FeatureAligner, FeatureVector, FeatureVectorBuilder};
use crate::error::FeatureError;
use crate::ledger::Transaction;
use tracing::{debug, info};

/// Model-ready features for one address.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressFeatures {
    pub aligned: AlignedFeatures,
    pub transactions_analyzed: usize,
}

/// Runs the pipeline against a fixed schema (the classifier's training
/// feature list).
pub struct FeatureExtractor {
    schema: Vec<String>,
}

impl FeatureExtractor {
    pub fn new(schema: Vec<String>) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &[String] {
        &self.schema
    }

    /// Derived (unaligned) vector. Empty histories are rejected, never zero-filled.
    pub fn derive(address: &str, transactions: &[Transaction]) -> Result<FeatureVector, FeatureError> {
        if transactions.is_empty() {
            return Err(FeatureError::NoTransactions {
                address: address.to_string(),
            });
        }

        let base = FeatureVectorBuilder::new(address).build(transactions);
        let vector = FeatureVector::from_base(base);

        if let Some((feature, value)) = vector.iter().find(|(_, v)| !v.is_finite()) {
            return Err(FeatureError::NonFinite { feature, value });
        }

        info!(
            address,
            transactions = transactions.len(),
            features = vector.len(),
            non_zero = vector.non_zero_count(),
            "extracted features"
        );
        Ok(vector)
    }

    pub fn extract(&self, address: &str, transactions: &[Transaction]) -> Result<AddressFeatures, FeatureError> {
        let vector = Self::derive(address, transactions)?;
        let aligned = FeatureAligner::align(&vector, &self.schema);
        debug!(
            address,
            width = aligned.values.len(),
            exact = aligned.is_exact(),
            "aligned features"
        );
        Ok(AddressFeatures {
            aligned,
            transactions_analyzed: transactions.len(),
        })
    }
}
