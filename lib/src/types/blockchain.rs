use super::{Block, Transaction};

/// Append-only chain, seeded with genesis so it is never empty.
#[derive(Clone, Debug)]
pub struct Blockchain {
    blocks: Vec<Block>,
}

impl Default for Blockchain {
    fn default() -> Self {
        Self::new()
    }
}

impl Blockchain {
    pub fn new() -> Self {
        Blockchain {
            blocks: vec![Block::genesis()],
        }
    }
    pub fn tip(&self) -> &Block {
        // genesis is pushed at construction and nothing is ever removed
        &self.blocks[self.blocks.len() - 1]
    }
    pub fn block_height(&self) -> u64 {
        self.tip().height
    }
    /// Seal `transactions` into a new block on top of the tip.
    pub fn append(&mut self, transactions: Vec<Transaction>, miner: usize) -> &Block {
        let block = Block::next(self.tip(), transactions, miner);
        self.blocks.push(block);
        self.tip()
    }
    pub fn get(&self, height: u64) -> Option<&Block> {
        usize::try_from(height).ok().and_then(|i| self.blocks.get(i))
    }
    pub fn len(&self) -> usize {
        self.blocks.len()
    }
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }
}
