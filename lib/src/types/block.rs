use super::Transaction;
use crate::hash::Hash;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Block {
    pub height: u64,
    pub hash: Hash,
    // None only for genesis
    pub previous_hash: Option<Hash>,
    pub timestamp: DateTime<Utc>,
    pub transactions: Vec<Transaction>,
    pub miner: usize,
}

impl Block {
    pub fn genesis() -> Self {
        Block {
            height: 0,
            hash: Hash::zero(),
            previous_hash: None,
            timestamp: Utc::now(),
            transactions: vec![],
            miner: 0,
        }
    }
    /// Build the block that follows `previous`, with a fresh random hash.
    pub fn next(previous: &Block, transactions: Vec<Transaction>, miner: usize) -> Self {
        Block {
            height: previous.height + 1,
            hash: Hash::random(),
            previous_hash: Some(previous.hash),
            timestamp: Utc::now(),
            transactions,
            miner,
        }
    }
    pub fn is_genesis(&self) -> bool {
        self.previous_hash.is_none()
    }
}
