//! Which side of a transaction the target address is on, and how much moved.

use super::Transaction;

/// Per-transaction participation of one address.
///
/// Sender and receiver sides are accumulated independently, so a
/// self-transfer (or change output) counts on both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TxFlow {
    pub is_sender: bool,
    pub sent_value: u64,
    pub is_receiver: bool,
    pub received_value: u64,
}

impl TxFlow {
    pub fn classify(tx: &Transaction, address: &str) -> Self {
        let mut flow = TxFlow::default();

        for prev in tx.inputs.iter().filter_map(|i| i.prev_out.as_ref()) {
            if prev.addr.as_deref() == Some(address) {
                flow.is_sender = true;
                flow.sent_value = flow.sent_value.saturating_add(prev.value);
            }
        }

        for out in &tx.outputs {
            if out.addr.as_deref() == Some(address) {
                flow.is_receiver = true;
                flow.received_value = flow.received_value.saturating_add(out.value);
            }
        }

        flow
    }

    /// A zero-value match is not a participation event.
    pub fn counts_as_sent(&self) -> bool {
        self.is_sender && self.sent_value > 0
    }

    pub fn counts_as_received(&self) -> bool {
        self.is_receiver && self.received_value > 0
    }

    /// Value moved by the address on either side.
    pub fn moved_value(&self) -> u64 {
        self.sent_value.saturating_add(self.received_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{PrevOut, TxInput, TxOutput};

    fn input(addr: &str, value: u64) -> TxInput {
        TxInput {
            prev_out: Some(PrevOut {
                addr: Some(addr.to_string()),
                value,
            }),
        }
    }

    fn output(addr: &str, value: u64) -> TxOutput {
        TxOutput {
            addr: Some(addr.to_string()),
            value,
        }
    }

    #[test]
    fn self_transfer_counts_both_sides() {
        let tx = Transaction {
            inputs: vec![input("me", 2), input("me", 3), input("other", 9)],
            outputs: vec![output("me", 3), output("other", 10)],
            ..Default::default()
        };
        let flow = TxFlow::classify(&tx, "me");
        assert!(flow.counts_as_sent());
        assert!(flow.counts_as_received());
        assert_eq!(flow.sent_value, 5);
        assert_eq!(flow.received_value, 3);
        assert_eq!(flow.moved_value(), 8);
    }

    #[test]
    fn zero_value_match_is_not_counted() {
        let tx = Transaction {
            outputs: vec![output("me", 0)],
            ..Default::default()
        };
        let flow = TxFlow::classify(&tx, "me");
        assert!(flow.is_receiver);
        assert!(!flow.counts_as_received());
        assert!(!flow.is_sender);
    }

    #[test]
    fn inputs_without_prev_out_are_ignored() {
        let tx = Transaction {
            inputs: vec![TxInput { prev_out: None }],
            outputs: vec![TxOutput { addr: None, value: 7 }],
            ..Default::default()
        };
        assert_eq!(TxFlow::classify(&tx, "me"), TxFlow::default());
    }
}
