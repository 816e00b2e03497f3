//! Pipeline benchmark: transaction history → derived feature vector.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ransomware_screener::features::{FeatureExtractor, FeatureVectorBuilder};
use ransomware_screener::ledger::{PrevOut, Transaction, TxInput, TxOutput};

const TARGET: &str = "1BenchTarget";

fn make_history(n: usize) -> Vec<Transaction> {
    (0..n)
        .map(|i| {
            let sending = i % 3 == 0;
            let counterparty = format!("1Peer{}", i % 17);
            let (from, to) = if sending {
                (TARGET.to_string(), counterparty)
            } else {
                (counterparty, TARGET.to_string())
            };
            Transaction {
                hash: Some(format!("tx{}", i)),
                time: 1_600_000_000 + (i as i64 * 7919) % 100_000,
                block_height: 700_000 + (i as i64 * 13) % 5_000,
                fee: 500 + (i as u64 % 40) * 25,
                inputs: vec![TxInput {
                    prev_out: Some(PrevOut {
                        addr: Some(from),
                        value: 10_000 + i as u64 * 1_000,
                    }),
                }],
                outputs: vec![
                    TxOutput {
                        addr: Some(to),
                        value: 9_000 + i as u64 * 1_000,
                    },
                    TxOutput {
                        addr: Some(format!("1Change{}", i % 5)),
                        value: 500,
                    },
                ],
            }
        })
        .collect()
}

fn bench_base_features(c: &mut Criterion) {
    let history = make_history(500);
    c.bench_function("base_features_500_txs", |b| {
        b.iter(|| black_box(FeatureVectorBuilder::new(TARGET).build(black_box(&history))))
    });
}

fn bench_derive_by_size(c: &mut Criterion) {
    let mut g = c.benchmark_group("derive_by_history_size");
    for n in [10usize, 100, 1_000, 5_000] {
        let history = make_history(n);
        g.bench_with_input(BenchmarkId::from_parameter(n), &history, |b, h| {
            b.iter(|| black_box(FeatureExtractor::derive(TARGET, black_box(h))))
        });
    }
    g.finish();
}

criterion_group!(benches, bench_base_features, bench_derive_by_size);
criterion_main!(benches);
