//! Fee as a percentage of the value the address moved.

use crate::ledger::{Transaction, TxFlow};

fn share(fee: u64, value: u64) -> f64 {
    fee as f64 / value as f64 * 100.0
}

/// Fee shares over `history` (time-ordered transactions paired with their flow
/// for the target address).
///
/// First every counted send contributes `fee / sent`. Then every fee-paying
/// transaction contributes `fee / (sent + received)` unless an equal value is
/// already present. The dedup is by value, not by transaction, so two
/// unrelated transactions with the same share collapse into one entry.
pub fn fee_shares(history: &[(&Transaction, TxFlow)]) -> Vec<f64> {
    let mut shares: Vec<f64> = history
        .iter()
        .filter(|(tx, flow)| flow.counts_as_sent() && tx.fee > 0)
        .map(|(tx, flow)| share(tx.fee, flow.sent_value))
        .collect();

    for (tx, flow) in history {
        if tx.fee == 0 {
            continue;
        }
        let moved = flow.moved_value();
        if moved == 0 {
            continue;
        }
        let s = share(tx.fee, moved);
        if !shares.contains(&s) {
            shares.push(s);
        }
    }

    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(fee: u64, sent: u64, received: u64) -> (Transaction, TxFlow) {
        let tx = Transaction {
            fee,
            ..Default::default()
        };
        let flow = TxFlow {
            is_sender: sent > 0,
            sent_value: sent,
            is_receiver: received > 0,
            received_value: received,
        };
        (tx, flow)
    }

    fn run(entries: &[(Transaction, TxFlow)]) -> Vec<f64> {
        let history: Vec<(&Transaction, TxFlow)> = entries.iter().map(|(t, f)| (t, *f)).collect();
        fee_shares(&history)
    }

    #[test]
    fn plain_send_is_not_counted_twice() {
        assert_eq!(run(&[entry(1_000, 100_000, 0)]), vec![1.0]);
    }

    #[test]
    fn self_transfer_adds_combined_share() {
        // send pass: 100/400; combined pass: 100/500
        assert_eq!(run(&[entry(100, 400, 100)]), vec![25.0, 20.0]);
    }

    #[test]
    fn receives_contribute_in_second_pass() {
        assert_eq!(run(&[entry(50, 0, 1_000), entry(0, 0, 1_000)]), vec![5.0]);
    }

    #[test]
    fn equal_shares_from_distinct_transactions_collapse() {
        let shares = run(&[entry(10, 0, 1_000), entry(20, 0, 2_000)]);
        assert_eq!(shares, vec![1.0]);
    }

    #[test]
    fn duplicate_sends_are_kept_in_first_pass() {
        let shares = run(&[entry(10, 1_000, 0), entry(20, 2_000, 0)]);
        assert_eq!(shares, vec![1.0, 1.0]);
    }
}
