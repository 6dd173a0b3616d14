use crate::HASH_PREVIEW_LEN;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque 32-byte block token, displayed as 64 lowercase hex characters.
///
/// Tokens are drawn at random and have no relation to the block they are
/// attached to, so the chain of back-references is cosmetic: nothing can be
/// recomputed or verified from block contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash([u8; 32]);

impl Hash {
    pub fn zero() -> Self {
        Hash([0; 32])
    }
    /// Every hex digit of the result is independent and uniform.
    pub fn random() -> Self {
        Hash(rand::random())
    }
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
    // leading characters shown in block and consensus reports
    pub fn preview(&self) -> String {
        let mut hex = self.to_hex();
        hex.truncate(HASH_PREVIEW_LEN);
        hex
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_hash_is_sixty_four_zeros() {
        assert_eq!(Hash::zero().to_hex(), "0".repeat(64));
        assert_eq!(Hash::zero().preview(), "0".repeat(16));
    }

    #[test]
    fn random_hash_is_lowercase_hex() {
        let hash = Hash::random().to_string();
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test]
    fn random_hashes_differ() {
        assert_ne!(Hash::random(), Hash::random());
    }
}
