use crate::config::TxIdScheme;
use crate::types::Ledger;
use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

/// Allocate an id not yet present in `ledger`.
pub fn generate_tx_id(scheme: TxIdScheme, ledger: &Ledger) -> String {
    match scheme {
        TxIdScheme::Timestamp => {
            let mut rng = rand::thread_rng();
            loop {
                let id = format!(
                    "tx_{}_{}",
                    Utc::now().timestamp_millis(),
                    rng.gen_range(0..crate::TX_ID_SUFFIX_RANGE)
                );
                // only a thousand suffixes per millisecond
                if !ledger.contains(&id) {
                    return id;
                }
            }
        }
        TxIdScheme::Uuid => format!("tx_{}", Uuid::new_v4()),
    }
}
