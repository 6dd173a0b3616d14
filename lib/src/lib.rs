pub mod config;
pub mod error;
pub mod hash;
pub mod os;
pub mod router;
pub mod types;
pub mod util;

pub use os::BlockchainOs;

// ring size when no configuration overrides it
pub const DEFAULT_NODE_COUNT: usize = 10;
pub const VERSION: &str = "1.0.4";

// topology.map without an argument
pub const DEFAULT_MAP_RANGE: usize = 10;
// topology.map silently clamps anything larger
pub const MAX_MAP_RANGE: usize = 20;
/// Upper bound on `node_count`; the ring is allocated eagerly.
pub const MAX_NODE_COUNT: usize = 1_000_000;

// percentage of live nodes at or above which the network reports HEALTHY
pub const CONSENSUS_THRESHOLD: f64 = 66.0;
// number of hash characters shown in reports
pub const HASH_PREVIEW_LEN: usize = 16;
// exclusive upper bound of the random suffix in timestamp transaction ids
pub const TX_ID_SUFFIX_RANGE: u32 = 1000;
