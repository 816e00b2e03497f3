//! Reconcile the derived vector with the classifier's ordered schema.

use super::FeatureVector;
use std::collections::HashSet;
use tracing::warn;

/// Schema-ordered values plus whatever did not line up.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedFeatures {
    pub values: Vec<f64>,
    /// Schema names the vector does not produce (filled with 0.0), schema order.
    pub missing: Vec<String>,
    /// Produced names the schema does not use (dropped), vector order.
    pub extra: Vec<&'static str>,
}

impl AlignedFeatures {
    pub fn is_exact(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

pub struct FeatureAligner;

impl FeatureAligner {
    /// Output width always equals `schema.len()`.
    pub fn align(vector: &FeatureVector, schema: &[String]) -> AlignedFeatures {
        let mut missing = Vec::new();
        let values = schema
            .iter()
            .map(|name| match vector.get(name) {
                Some(v) => v,
                None => {
                    missing.push(name.clone());
                    0.0
                }
            })
            .collect();

        let wanted: HashSet<&str> = schema.iter().map(String::as_str).collect();
        let extra: Vec<&'static str> = vector
            .iter()
            .map(|(name, _)| name)
            .filter(|name| !wanted.contains(name))
            .collect();

        if !missing.is_empty() {
            warn!(count = missing.len(), features = ?missing, "missing features filled with 0.0");
        }
        if !extra.is_empty() {
            warn!(count = extra.len(), features = ?extra, "extra features ignored");
        }

        AlignedFeatures {
            values,
            missing,
            extra,
        }
    }
}
