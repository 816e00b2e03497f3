//! Feature construction: transaction history → base aggregates → pattern
//! ratios → vector aligned to the classifier's schema.

mod align;
mod base;
mod fee_share;
mod intervals;
mod names;
mod pattern;
mod pipeline;
mod stats;

pub use align::{AlignedFeatures, FeatureAligner};
pub use base::{BaseFeatures, FeatureVectorBuilder};
pub use fee_share::fee_shares;
pub use intervals::block_intervals;
pub use names::{BaseFeature, FeatureKey, PatternFeature, StatGroup};
pub use pattern::{PatternFeatureDeriver, PatternFeatures, EPSILON};
pub use pipeline::{AddressFeatures, FeatureExtractor};
pub use stats::StatsSummary;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Derived feature vector: the 56 base features followed by the 10 pattern
/// features.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub base: BaseFeatures,
    pub pattern: PatternFeatures,
}

impl FeatureVector {
    pub fn from_base(base: BaseFeatures) -> Self {
        let pattern = PatternFeatureDeriver::derive(&base);
        Self { base, pattern }
    }

    pub fn len(&self) -> usize {
        BaseFeature::COUNT + PatternFeature::COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn value(&self, key: FeatureKey) -> f64 {
        match key {
            FeatureKey::Base(f) => self.base.get(f),
            FeatureKey::Pattern(f) => self.pattern.get(f),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        FeatureKey::lookup(name).map(|k| self.value(k))
    }

    /// `(name, value)`, base features first.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.base
            .iter()
            .map(|(f, v)| (f.name(), v))
            .chain(self.pattern.iter().map(|(f, v)| (f.name(), v)))
    }

    pub fn non_zero_count(&self) -> usize {
        self.iter().filter(|(_, v)| *v != 0.0).count()
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}
