mod block;
mod blockchain;
mod node;
mod transaction;

pub use block::Block;
pub use blockchain::Blockchain;
pub use node::{Node, NodeRegistry, NodeStatus};
pub use transaction::{Ledger, Transaction, TransactionStatus};
