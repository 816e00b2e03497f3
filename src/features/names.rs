//! Statically enumerated feature names, in the order the classifier was
//! trained on. Names are wire identifiers and must not be "cleaned up"
//! (`num_txs_as receiver` really has a space).

use std::collections::HashMap;
use std::sync::OnceLock;

macro_rules! feature_set {
    ($(#[$meta:meta])* $vis:vis enum $name:ident { $($variant:ident => $label:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];
            pub const COUNT: usize = Self::ALL.len();

            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub const fn index(self) -> usize {
                self as usize
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

feature_set! {
    /// The 56 aggregate features built straight from the transaction history.
    pub enum BaseFeature {
        TimeStep => "Time step",
        NumTxsAsSender => "num_txs_as_sender",
        NumTxsAsReceiver => "num_txs_as receiver",
        FirstBlockAppearedIn => "first_block_appeared_in",
        LastBlockAppearedIn => "last_block_appeared_in",
        LifetimeInBlocks => "lifetime_in_blocks",
        TotalTxs => "total_txs",
        FirstSentBlock => "first_sent_block",
        FirstReceivedBlock => "first_received_block",
        NumTimestepsAppearedIn => "num_timesteps_appeared_in",
        BtcTransactedTotal => "btc_transacted_total",
        BtcTransactedMin => "btc_transacted_min",
        BtcTransactedMax => "btc_transacted_max",
        BtcTransactedMean => "btc_transacted_mean",
        BtcTransactedMedian => "btc_transacted_median",
        BtcSentTotal => "btc_sent_total",
        BtcSentMin => "btc_sent_min",
        BtcSentMax => "btc_sent_max",
        BtcSentMean => "btc_sent_mean",
        BtcSentMedian => "btc_sent_median",
        BtcReceivedTotal => "btc_received_total",
        BtcReceivedMin => "btc_received_min",
        BtcReceivedMax => "btc_received_max",
        BtcReceivedMean => "btc_received_mean",
        BtcReceivedMedian => "btc_received_median",
        FeesTotal => "fees_total",
        FeesMin => "fees_min",
        FeesMax => "fees_max",
        FeesMean => "fees_mean",
        FeesMedian => "fees_median",
        FeesAsShareTotal => "fees_as_share_total",
        FeesAsShareMin => "fees_as_share_min",
        FeesAsShareMax => "fees_as_share_max",
        FeesAsShareMean => "fees_as_share_mean",
        FeesAsShareMedian => "fees_as_share_median",
        BlocksBtwnTxsTotal => "blocks_btwn_txs_total",
        BlocksBtwnTxsMin => "blocks_btwn_txs_min",
        BlocksBtwnTxsMax => "blocks_btwn_txs_max",
        BlocksBtwnTxsMean => "blocks_btwn_txs_mean",
        BlocksBtwnTxsMedian => "blocks_btwn_txs_median",
        BlocksBtwnInputTxsTotal => "blocks_btwn_input_txs_total",
        BlocksBtwnInputTxsMin => "blocks_btwn_input_txs_min",
        BlocksBtwnInputTxsMax => "blocks_btwn_input_txs_max",
        BlocksBtwnInputTxsMean => "blocks_btwn_input_txs_mean",
        BlocksBtwnInputTxsMedian => "blocks_btwn_input_txs_median",
        BlocksBtwnOutputTxsTotal => "blocks_btwn_output_txs_total",
        BlocksBtwnOutputTxsMin => "blocks_btwn_output_txs_min",
        BlocksBtwnOutputTxsMax => "blocks_btwn_output_txs_max",
        BlocksBtwnOutputTxsMean => "blocks_btwn_output_txs_mean",
        BlocksBtwnOutputTxsMedian => "blocks_btwn_output_txs_median",
        NumAddrTransactedMultiple => "num_addr_transacted_multiple",
        TransactedWAddressTotal => "transacted_w_address_total",
        TransactedWAddressMin => "transacted_w_address_min",
        TransactedWAddressMax => "transacted_w_address_max",
        TransactedWAddressMean => "transacted_w_address_mean",
        TransactedWAddressMedian => "transacted_w_address_median",
    }
}

feature_set! {
    /// Second-order ratios derived from the base features.
    pub enum PatternFeature {
        PartnerTransactionRatio => "partner_transaction_ratio",
        ActivityDensity => "activity_density",
        TransactionSizeVariance => "transaction_size_variance",
        FlowImbalance => "flow_imbalance",
        TemporalSpread => "temporal_spread",
        FeePercentile => "fee_percentile",
        InteractionIntensity => "interaction_intensity",
        ValuePerTransaction => "value_per_transaction",
        BurstActivity => "burst_activity",
        MixingIntensity => "mixing_intensity",
    }
}

/// Either kind of feature, as resolved from a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKey {
    Base(BaseFeature),
    Pattern(PatternFeature),
}

impl FeatureKey {
    /// Resolve a feature name (exact match).
    pub fn lookup(name: &str) -> Option<FeatureKey> {
        static INDEX: OnceLock<HashMap<&'static str, FeatureKey>> = OnceLock::new();
        INDEX
            .get_or_init(|| {
                BaseFeature::ALL
                    .iter()
                    .map(|f| (f.name(), FeatureKey::Base(*f)))
                    .chain(
                        PatternFeature::ALL
                            .iter()
                            .map(|f| (f.name(), FeatureKey::Pattern(*f))),
                    )
                    .collect()
            })
            .get(name)
            .copied()
    }
}

/// The five summary slots of one statistic group, in schema order.
#[derive(Debug, Clone, Copy)]
pub struct StatGroup {
    pub total: BaseFeature,
    pub min: BaseFeature,
    pub max: BaseFeature,
    pub mean: BaseFeature,
    pub median: BaseFeature,
}

impl StatGroup {
    /// Group whose `total` slot is `total`; the remaining four follow it.
    const fn starting_at(total: BaseFeature) -> Self {
        let i = total.index();
        Self {
            total: BaseFeature::ALL[i],
            min: BaseFeature::ALL[i + 1],
            max: BaseFeature::ALL[i + 2],
            mean: BaseFeature::ALL[i + 3],
            median: BaseFeature::ALL[i + 4],
        }
    }

    pub const BTC_TRANSACTED: Self = Self::starting_at(BaseFeature::BtcTransactedTotal);
    pub const BTC_SENT: Self = Self::starting_at(BaseFeature::BtcSentTotal);
    pub const BTC_RECEIVED: Self = Self::starting_at(BaseFeature::BtcReceivedTotal);
    pub const FEES: Self = Self::starting_at(BaseFeature::FeesTotal);
    pub const FEES_AS_SHARE: Self = Self::starting_at(BaseFeature::FeesAsShareTotal);
    pub const BLOCKS_BTWN_TXS: Self = Self::starting_at(BaseFeature::BlocksBtwnTxsTotal);
    pub const BLOCKS_BTWN_INPUT_TXS: Self = Self::starting_at(BaseFeature::BlocksBtwnInputTxsTotal);
    pub const BLOCKS_BTWN_OUTPUT_TXS: Self = Self::starting_at(BaseFeature::BlocksBtwnOutputTxsTotal);
    pub const TRANSACTED_W_ADDRESS: Self = Self::starting_at(BaseFeature::TransactedWAddressTotal);
}
