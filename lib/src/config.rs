use crate::error::{Result, TopoError};
use serde::{Deserialize, Serialize};

/// How `vector.send` names new transactions.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TxIdScheme {
    /// `tx_<unix millis>_<0..999>`, re-drawn on collision within the ledger
    #[default]
    Timestamp,
    /// `tx_<uuid v4>`
    Uuid,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    pub node_count: usize,
    pub version: String,
    pub tx_id_scheme: TxIdScheme,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            node_count: crate::DEFAULT_NODE_COUNT,
            version: crate::VERSION.to_string(),
            tx_id_scheme: TxIdScheme::default(),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        if self.node_count == 0 {
            return Err(TopoError::InvalidConfig(
                "node_count must be at least 1".to_string(),
            ));
        }
        if self.node_count > crate::MAX_NODE_COUNT {
            return Err(TopoError::InvalidConfig(format!(
                "node_count must be at most {}",
                crate::MAX_NODE_COUNT
            )));
        }
        if self.version.trim().is_empty() {
            return Err(TopoError::InvalidConfig(
                "version must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
