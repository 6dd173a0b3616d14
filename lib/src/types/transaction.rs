use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Verified,
    // never assigned by any command yet
    Rejected,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Verified => "verified",
            TransactionStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub from: usize,
    pub to: usize,
    pub data: String,
    pub status: TransactionStatus,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    pub fn new(id: String, from: usize, to: usize, data: String) -> Self {
        Transaction {
            id,
            from,
            to,
            data,
            status: TransactionStatus::Pending,
            timestamp: Utc::now(),
        }
    }
}

/// Every transaction ever issued, keyed by id. Entries are never removed.
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    transactions: HashMap<String, Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger::default()
    }
    pub fn insert(&mut self, transaction: Transaction) {
        self.transactions.insert(transaction.id.clone(), transaction);
    }
    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.get(id)
    }
    pub fn contains(&self, id: &str) -> bool {
        self.transactions.contains_key(id)
    }
    pub fn len(&self) -> usize {
        self.transactions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
    pub fn pending_count(&self) -> usize {
        self.transactions
            .values()
            .filter(|tx| tx.status == TransactionStatus::Pending)
            .count()
    }
    /// Flip every pending transaction to verified and return them.
    ///
    /// The order follows the map's iteration order and must not be relied on.
    pub fn verify_pending(&mut self) -> Vec<Transaction> {
        self.transactions
            .values_mut()
            .filter(|tx| tx.status == TransactionStatus::Pending)
            .map(|tx| {
                tx.status = TransactionStatus::Verified;
                tx.clone()
            })
            .collect()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.values()
    }
}
