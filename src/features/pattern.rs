//! Second-order pattern features over the base vector.

use super::base::BaseFeatures;
use super::names::{BaseFeature as B, PatternFeature};

/// Added to every denominator.
pub const EPSILON: f64 = 1e-8;

#[derive(Debug, Clone, PartialEq)]
pub struct PatternFeatures {
    values: [f64; PatternFeature::COUNT],
}

impl PatternFeatures {
    pub fn get(&self, feature: PatternFeature) -> f64 {
        self.values[feature.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (PatternFeature, f64)> + '_ {
        PatternFeature::ALL
            .iter()
            .map(|f| (*f, self.values[f.index()]))
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    numerator / (denominator + EPSILON)
}

/// Computes the pattern features. `burst_activity` and `mixing_intensity`
/// consume ratios computed earlier in the same pass.
pub struct PatternFeatureDeriver;

impl PatternFeatureDeriver {
    pub fn derive(base: &BaseFeatures) -> PatternFeatures {
        let total_txs = base.get(B::TotalTxs);
        let interaction_total = base.get(B::TransactedWAddressTotal);
        let transacted_total = base.get(B::BtcTransactedTotal);

        let partner_transaction_ratio = ratio(interaction_total, total_txs);
        let activity_density = ratio(total_txs, base.get(B::LifetimeInBlocks));
        let transaction_size_variance = ratio(
            base.get(B::BtcTransactedMax) - base.get(B::BtcTransactedMin),
            base.get(B::BtcTransactedMean),
        );
        let flow_imbalance = ratio(
            base.get(B::BtcSentTotal) - base.get(B::BtcReceivedTotal),
            transacted_total,
        );
        let temporal_spread = ratio(
            base.get(B::LastBlockAppearedIn) - base.get(B::FirstBlockAppearedIn),
            base.get(B::NumTimestepsAppearedIn),
        );
        let fee_percentile = ratio(base.get(B::FeesTotal), transacted_total);
        let interaction_intensity =
            ratio(base.get(B::NumAddrTransactedMultiple), interaction_total);
        let value_per_transaction = ratio(transacted_total, total_txs);
        let burst_activity = total_txs * activity_density;
        let mixing_intensity = partner_transaction_ratio * interaction_intensity;

        PatternFeatures {
            values: [
                partner_transaction_ratio,
                activity_density,
                transaction_size_variance,
                flow_imbalance,
                temporal_spread,
                fee_percentile,
                interaction_intensity,
                value_per_transaction,
                burst_activity,
                mixing_intensity,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(pairs: &[(B, f64)]) -> BaseFeatures {
        BaseFeatures::from_fn(|f| {
            pairs
                .iter()
                .find(|(k, _)| *k == f)
                .map(|(_, v)| *v)
                .unwrap_or(0.0)
        })
    }

    #[test]
    fn all_zero_input_is_finite() {
        let p = PatternFeatureDeriver::derive(&BaseFeatures::zeroed());
        for (f, v) in p.iter() {
            assert!(v.is_finite(), "{f} = {v}");
            assert_eq!(v, 0.0, "{f}");
        }
    }

    #[test]
    fn ratios_use_epsilon_guard() {
        let b = base(&[(B::TotalTxs, 1.0), (B::LifetimeInBlocks, 0.0)]);
        let p = PatternFeatureDeriver::derive(&b);
        assert_eq!(p.get(PatternFeature::ActivityDensity), 1.0 / 1e-8);
        assert_eq!(p.get(PatternFeature::BurstActivity), 1.0 / 1e-8);
    }

    #[test]
    fn products_consume_earlier_ratios() {
        let b = base(&[
            (B::TotalTxs, 4.0),
            (B::LifetimeInBlocks, 2.0),
            (B::TransactedWAddressTotal, 8.0),
            (B::NumAddrTransactedMultiple, 2.0),
        ]);
        let p = PatternFeatureDeriver::derive(&b);
        let partner = p.get(PatternFeature::PartnerTransactionRatio);
        let intensity = p.get(PatternFeature::InteractionIntensity);
        let density = p.get(PatternFeature::ActivityDensity);

        assert!((partner - 2.0).abs() < 1e-6);
        assert!((intensity - 0.25).abs() < 1e-6);
        assert_eq!(p.get(PatternFeature::MixingIntensity), partner * intensity);
        assert_eq!(p.get(PatternFeature::BurstActivity), 4.0 * density);
    }

    #[test]
    fn flow_imbalance_keeps_sign() {
        let b = base(&[
            (B::BtcSentTotal, 1.0),
            (B::BtcReceivedTotal, 3.0),
            (B::BtcTransactedTotal, 4.0),
        ]);
        let p = PatternFeatureDeriver::derive(&b);
        assert!(p.get(PatternFeature::FlowImbalance) < 0.0);
        assert!((p.get(PatternFeature::FlowImbalance) + 0.5).abs() < 1e-6);
    }
}
