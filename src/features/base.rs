//! Base feature assembly: one pass over the time-ordered history, then
//! summary statistics per group.

use super::fee_share::fee_shares;
use super::intervals::block_intervals;
use super::names::{BaseFeature, StatGroup};
use super::stats::StatsSummary;
use crate::ledger::{to_btc, CounterpartyTally, Transaction, TxFlow};
use std::collections::HashSet;

/// Fixed-shape base vector. Every slot starts at 0.0, so names that no edge
/// case produced are still present.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseFeatures {
    values: [f64; BaseFeature::COUNT],
}

impl Default for BaseFeatures {
    fn default() -> Self {
        Self {
            values: [0.0; BaseFeature::COUNT],
        }
    }
}

impl BaseFeatures {
    pub fn get(&self, feature: BaseFeature) -> f64 {
        self.values[feature.index()]
    }

    fn set(&mut self, feature: BaseFeature, value: f64) {
        self.values[feature.index()] = value;
    }

    fn set_stats(&mut self, group: StatGroup, values: &[f64]) {
        let s = StatsSummary::of(values);
        self.set(group.total, s.total);
        self.set(group.min, s.min);
        self.set(group.max, s.max);
        self.set(group.mean, s.mean);
        self.set(group.median, s.median);
    }

    /// `(name, value)` in training order.
    pub fn iter(&self) -> impl Iterator<Item = (BaseFeature, f64)> + '_ {
        BaseFeature::ALL.iter().map(|f| (*f, self.values[f.index()]))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// All-zero vector, for callers that need a synthetic input.
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn from_fn(mut f: impl FnMut(BaseFeature) -> f64) -> Self {
        let mut out = Self::default();
        for feature in BaseFeature::ALL {
            out.set(*feature, f(*feature));
        }
        out
    }
}

struct Side {
    value: u64,
    block: i64,
}

/// Builds [`BaseFeatures`] for one target address.
pub struct FeatureVectorBuilder<'a> {
    address: &'a str,
}

impl<'a> FeatureVectorBuilder<'a> {
    pub fn new(address: &'a str) -> Self {
        Self { address }
    }

    pub fn build(&self, transactions: &[Transaction]) -> BaseFeatures {
        let mut ordered: Vec<&Transaction> = transactions.iter().collect();
        ordered.sort_by_key(|tx| tx.time);

        let history: Vec<(&Transaction, TxFlow)> = ordered
            .iter()
            .map(|tx| (*tx, TxFlow::classify(tx, self.address)))
            .collect();

        let mut sent = Vec::new();
        let mut received = Vec::new();
        let mut transacted = Vec::new();
        let mut heights = Vec::new();
        let mut fees = Vec::with_capacity(history.len());

        for (tx, flow) in &history {
            if tx.block_height > 0 {
                heights.push(tx.block_height);
            }
            fees.push(to_btc(tx.fee));

            if flow.counts_as_sent() {
                sent.push(Side {
                    value: flow.sent_value,
                    block: tx.block_height,
                });
                transacted.push(to_btc(flow.sent_value));
            }
            if flow.counts_as_received() {
                received.push(Side {
                    value: flow.received_value,
                    block: tx.block_height,
                });
                transacted.push(to_btc(flow.received_value));
            }
        }

        let tally = CounterpartyTally::from_transactions(ordered.iter().copied(), self.address);

        let sent_btc: Vec<f64> = sent.iter().map(|s| to_btc(s.value)).collect();
        let received_btc: Vec<f64> = received.iter().map(|s| to_btc(s.value)).collect();
        let sent_blocks: Vec<i64> = sent.iter().map(|s| s.block).filter(|b| *b > 0).collect();
        let received_blocks: Vec<i64> =
            received.iter().map(|s| s.block).filter(|b| *b > 0).collect();
        let distinct_blocks = heights.iter().collect::<HashSet<_>>().len() as f64;

        let first_block = heights.iter().min().copied();
        let last_block = heights.iter().max().copied();

        let mut features = BaseFeatures::default();
        use BaseFeature::*;

        features.set(NumTxsAsSender, sent.len() as f64);
        features.set(NumTxsAsReceiver, received.len() as f64);
        features.set(TotalTxs, transactions.len() as f64);

        features.set(FirstBlockAppearedIn, first_block.unwrap_or(0) as f64);
        features.set(LastBlockAppearedIn, last_block.unwrap_or(0) as f64);
        if let (Some(first), Some(last), true) = (first_block, last_block, heights.len() > 1) {
            features.set(LifetimeInBlocks, (last - first) as f64);
        }
        features.set(
            FirstSentBlock,
            sent_blocks.iter().min().copied().unwrap_or(0) as f64,
        );
        features.set(
            FirstReceivedBlock,
            received_blocks.iter().min().copied().unwrap_or(0) as f64,
        );
        features.set(NumTimestepsAppearedIn, distinct_blocks);
        // legacy column, same proxy
        features.set(TimeStep, distinct_blocks);

        features.set_stats(StatGroup::BTC_TRANSACTED, &transacted);
        features.set_stats(StatGroup::BTC_SENT, &sent_btc);
        features.set_stats(StatGroup::BTC_RECEIVED, &received_btc);

        features.set_stats(StatGroup::FEES, &fees);
        features.set_stats(StatGroup::FEES_AS_SHARE, &fee_shares(&history));

        features.set_stats(StatGroup::BLOCKS_BTWN_TXS, &block_intervals(heights));
        features.set_stats(StatGroup::BLOCKS_BTWN_INPUT_TXS, &block_intervals(sent_blocks));
        features.set_stats(
            StatGroup::BLOCKS_BTWN_OUTPUT_TXS,
            &block_intervals(received_blocks),
        );

        features.set(NumAddrTransactedMultiple, tally.repeat_count() as f64);
        features.set_stats(StatGroup::TRANSACTED_W_ADDRESS, &tally.frequencies());

        features
    }
}
