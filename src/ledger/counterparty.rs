//! Counterparty extraction and interaction frequency tally.

use super::Transaction;
use std::collections::{BTreeSet, HashMap};

/// Every address other than `address` touched by `tx`, on either side.
pub fn counterparties<'a>(tx: &'a Transaction, address: &str) -> BTreeSet<&'a str> {
    tx.input_addresses()
        .chain(tx.output_addresses())
        .filter(|a| *a != address)
        .collect()
}

/// Number of distinct transactions mentioning each counterparty, in first-seen
/// order.
#[derive(Debug, Clone, Default)]
pub struct CounterpartyTally {
    entries: Vec<(String, u32)>,
    index: HashMap<String, usize>,
}

impl CounterpartyTally {
    pub fn from_transactions<'a>(
        transactions: impl IntoIterator<Item = &'a Transaction>,
        address: &str,
    ) -> Self {
        let mut tally = Self::default();
        for tx in transactions {
            tally.record(tx, address);
        }
        tally
    }

    pub fn record(&mut self, tx: &Transaction, address: &str) {
        for addr in counterparties(tx, address) {
            match self.index.get(addr) {
                Some(&i) => self.entries[i].1 += 1,
                None => {
                    self.index.insert(addr.to_string(), self.entries.len());
                    self.entries.push((addr.to_string(), 1));
                }
            }
        }
    }

    pub fn unique_count(&self) -> usize {
        self.entries.len()
    }

    /// Counterparties seen in more than one transaction.
    pub fn repeat_count(&self) -> usize {
        self.entries.iter().filter(|(_, n)| *n > 1).count()
    }

    /// Per-counterparty frequencies, first-seen order.
    pub fn frequencies(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, n)| f64::from(*n)).collect()
    }

    pub fn get(&self, addr: &str) -> u32 {
        self.index.get(addr).map(|&i| self.entries[i].1).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{PrevOut, TxInput, TxOutput};

    fn tx(inputs: &[&str], outputs: &[&str]) -> Transaction {
        Transaction {
            inputs: inputs
                .iter()
                .map(|a| TxInput {
                    prev_out: Some(PrevOut {
                        addr: Some(a.to_string()),
                        value: 1,
                    }),
                })
                .collect(),
            outputs: outputs
                .iter()
                .map(|a| TxOutput {
                    addr: Some(a.to_string()),
                    value: 1,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn excludes_target_and_dedups_within_tx() {
        let t = tx(&["me", "a", "a"], &["a", "b", "me"]);
        let set = counterparties(&t, "me");
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn empty_addresses_are_not_counterparties() {
        let t = tx(&[""], &["me", ""]);
        assert!(counterparties(&t, "me").is_empty());

        let history = vec![t.clone(), t];
        let tally = CounterpartyTally::from_transactions(&history, "me");
        assert_eq!(tally.unique_count(), 0);
        assert_eq!(tally.repeat_count(), 0);
        assert!(tally.frequencies().is_empty());
    }

    #[test]
    fn counts_transactions_per_counterparty() {
        let history = vec![
            tx(&["me"], &["a", "b"]),
            tx(&["a"], &["me"]),
            tx(&["c"], &["me", "a"]),
        ];
        let tally = CounterpartyTally::from_transactions(&history, "me");
        assert_eq!(tally.unique_count(), 3);
        assert_eq!(tally.get("a"), 3);
        assert_eq!(tally.get("b"), 1);
        assert_eq!(tally.get("zzz"), 0);
        assert_eq!(tally.repeat_count(), 1);
        assert_eq!(tally.frequencies(), vec![3.0, 1.0, 1.0]);
    }
}
