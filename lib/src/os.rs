//! The simulator session: one ring, one ledger, one chain and the operator's
//! cursor, driven one command line at a time.

mod command;
pub mod report;

pub use command::{Command, IntArg};

use crate::config::SimConfig;
use crate::error::{Result, TopoError};
use crate::router;
use crate::types::{Blockchain, Ledger, NodeRegistry, NodeStatus, Transaction};
use crate::util::generate_tx_id;
use chrono::Local;
use report::Report;
use tracing::{debug, info, warn};

/// All state of one simulation session. Sessions are independent values;
/// nothing is shared between two instances.
#[derive(Clone, Debug)]
pub struct BlockchainOs {
    config: SimConfig,
    nodes: NodeRegistry,
    ledger: Ledger,
    chain: Blockchain,
    current_position: usize,
    incoming_vectors: u64,
    outgoing_vectors: u64,
}

impl Default for BlockchainOs {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockchainOs {
    pub fn new() -> Self {
        Self::build(SimConfig::default())
    }

    pub fn with_config(config: SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SimConfig) -> Self {
        BlockchainOs {
            nodes: NodeRegistry::initialize(config.node_count),
            ledger: Ledger::new(),
            chain: Blockchain::new(),
            current_position: 0,
            incoming_vectors: 0,
            outgoing_vectors: 0,
            config,
        }
    }

    pub fn welcome_message(&self) -> String {
        Report::new()
            .line("Welcome to BlockchainOS - Linear Topology Network")
            .line("Type 'help' to see available commands.")
            .finish(&self.status())
    }

    /// Header printed at the top of every report.
    pub fn status(&self) -> String {
        format!(
            "[BlockchainOS v{}] - Linear Topology Network\n\
             Position: {}\n\
             Block Height: {}\n\
             Vector Flow: {} → {}\n\
             {}",
            self.config.version,
            self.current_position,
            self.block_height(),
            self.incoming_vectors,
            self.outgoing_vectors,
            report::RULE
        )
    }

    /// Run one command line. Never fails: errors come back as a report
    /// carrying an `Error:` line, and leave the session untouched.
    pub fn process_command(&mut self, line: &str) -> String {
        match Command::parse(line).and_then(|command| self.execute(command)) {
            Ok(report) => report,
            Err(e) => {
                warn!(command = line.trim(), error = %e, "command rejected");
                Report::new()
                    .line(format!("Error: {e}"))
                    .finish(&self.status())
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<String> {
        match command {
            Command::Help => Ok(self.help()),
            Command::NodeInfo(position) => self.node_info(&position),
            Command::VectorSend { start, end, data } => self.send_vector(&start, &end, data),
            Command::TopologyMap(range) => Ok(self.topology_map(range)),
            Command::BlockMine => self.mine_block(),
            Command::TransactionVerify(id) => self.verify_transaction(&id),
            Command::ConsensusStatus => Ok(self.consensus_status()),
            Command::PositionChange(position) => self.change_position(&position),
            Command::Unknown(name) => {
                debug!(command = %name, "unrecognized command");
                Ok(Report::new()
                    .line(format!("Error: Command not recognized: {name}"))
                    .line("Type 'help' to see available commands.")
                    .finish(&self.status()))
            }
        }
    }

    fn help(&self) -> String {
        Report::new()
            .line("Available Commands:")
            .line("- help                       Display this help message")
            .line("- node.info [position]       Display information about a node at a specific position")
            .line("- vector.send [start] [end] [data]  Send data from one position to another")
            .line("- topology.map [range]       Visualize the network topology within a specified range")
            .line("- block.mine                 Mine a new block")
            .line("- transaction.verify [id]    Verify the status of a transaction")
            .line("- consensus.status           Check the current consensus state of the network")
            .line("- position.change [position] Change your current position in the network")
            .finish(&self.status())
    }

    fn node_info(&self, raw: &IntArg) -> Result<String> {
        let position = self.nodes.resolve(raw.as_str())?;
        let node = self
            .nodes
            .get(position)
            .ok_or_else(|| TopoError::NodeNotFound(raw.to_string()))?;
        Ok(Report::new()
            .line("Node Information:")
            .line(format!("Position: {}", node.position))
            .line(format!("Status: {}", node.status))
            .line(format!("Connections: {}", join(node.connections(), ", ")))
            .line(format!("Vector Potential: {}", node.connections().len()))
            .finish(&self.status()))
    }

    fn send_vector(&mut self, start: &IntArg, end: &IntArg, data: String) -> Result<String> {
        let from = self.nodes.resolve(start.as_str())?;
        let to = self.nodes.resolve(end.as_str())?;
        if data.trim().is_empty() {
            return Err(TopoError::EmptyPayload);
        }

        let id = generate_tx_id(self.config.tx_id_scheme, &self.ledger);
        self.ledger
            .insert(Transaction::new(id.clone(), from, to, data.clone()));
        self.outgoing_vectors += 1;

        let path = router::route(from, to, self.nodes.len());
        debug!(tx = %id, from, to, hops = path.len() - 1, "vector sent");

        Ok(Report::new()
            .line("Vector Sent:")
            .line(format!("Transaction ID: {id}"))
            .line(format!("From Position: {from}"))
            .line(format!("To Position: {to}"))
            .line(format!("Data: {data}"))
            .line("Status: Pending")
            .line(format!("Vector Path: {}", join(&path, " → ")))
            .finish(&self.status()))
    }

    fn topology_map(&self, range: usize) -> String {
        let range = range.min(crate::MAX_MAP_RANGE);

        let mut map = String::new();
        let mut positions = Vec::new();
        for i in (0..range).filter(|i| self.nodes.contains(*i)) {
            if i == self.current_position {
                map.push_str("[*]");
            } else {
                map.push_str(&format!("[{i}]"));
            }
            if i < range - 1 {
                map.push_str("---");
            }
            if let Some(node) = self.nodes.get(i) {
                positions.push(format!(
                    "Position {i}: {}",
                    node.status.as_str().to_uppercase()
                ));
            }
        }

        Report::new()
            .line(format!("Network Topology Map (Range: {range}):"))
            .blank()
            .line(map)
            .blank()
            .lines(positions)
            .finish(&self.status())
    }

    fn mine_block(&mut self) -> Result<String> {
        let miner = self.current_position;
        self.nodes
            .set_status(miner, NodeStatus::Mining)
            .map_err(|_| TopoError::CursorNodeMissing(miner))?;

        let verified = self.ledger.verify_pending();
        let count = verified.len();
        let previous_timestamp = self.chain.tip().timestamp;
        let block = self.chain.append(verified, miner);
        let (height, preview) = (block.height, block.hash.preview());
        let elapsed = (block.timestamp - previous_timestamp).num_milliseconds() as f64 / 1000.0;

        self.nodes.set_status(miner, NodeStatus::Active)?;
        info!(height, transactions = count, miner, "block mined");

        Ok(Report::new()
            .line("Block Successfully Mined:")
            .line(format!("Height: {height}"))
            .line(format!("Hash: {preview}..."))
            .line(format!("Transactions: {count}"))
            .line(format!("Mining Position: {miner}"))
            .line(format!("Mining Time: {elapsed} seconds"))
            .finish(&self.status()))
    }

    fn verify_transaction(&self, id: &str) -> Result<String> {
        if id.is_empty() {
            return Err(TopoError::MissingTransactionId);
        }
        let tx = self
            .ledger
            .get(id)
            .ok_or_else(|| TopoError::TransactionNotFound(id.to_string()))?;
        let timestamp = tx
            .timestamp
            .with_timezone(&Local)
            .format("%-m/%-d/%Y, %-I:%M:%S %p");

        Ok(Report::new()
            .line("Transaction Verification:")
            .line(format!("ID: {}", tx.id))
            .line(format!("From Position: {}", tx.from))
            .line(format!("To Position: {}", tx.to))
            .line(format!("Status: {}", tx.status.as_str().to_uppercase()))
            .line(format!("Timestamp: {timestamp}"))
            .line(format!("Data: {}", tx.data))
            .finish(&self.status()))
    }

    fn consensus_status(&self) -> String {
        let live = self.nodes.live_count();
        let total = self.nodes.len();
        let percentage = live as f64 / total as f64 * 100.0;
        let health = if percentage >= crate::CONSENSUS_THRESHOLD {
            "HEALTHY"
        } else {
            "AT RISK"
        };

        Report::new()
            .line("Consensus Status:")
            .line(format!("Active Nodes: {live}/{total}"))
            .line(format!("Consensus Percentage: {percentage:.2}%"))
            .line(format!("Latest Block: {}", self.block_height()))
            .line(format!("Latest Block Hash: {}...", self.chain.tip().hash.preview()))
            .line(format!("Network Health: {health}"))
            .finish(&self.status())
    }

    fn change_position(&mut self, raw: &IntArg) -> Result<String> {
        let position = self.nodes.resolve(raw.as_str())?;
        let node = self
            .nodes
            .get(position)
            .ok_or_else(|| TopoError::NodeNotFound(raw.to_string()))?;
        let status = node.status.as_str().to_uppercase();
        let connections = join(node.connections(), ", ");
        self.current_position = position;
        debug!(position, "cursor moved");

        Ok(Report::new()
            .line("Position Changed:")
            .line(format!("New Position: {position}"))
            .line(format!("Node Status: {status}"))
            .line(format!("Connected To: {connections}"))
            .finish(&self.status()))
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
    pub fn nodes(&self) -> &NodeRegistry {
        &self.nodes
    }
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
    pub fn chain(&self) -> &Blockchain {
        &self.chain
    }
    pub fn current_position(&self) -> usize {
        self.current_position
    }
    pub fn block_height(&self) -> u64 {
        self.chain.block_height()
    }
    pub fn incoming_vectors(&self) -> u64 {
        self.incoming_vectors
    }
    pub fn outgoing_vectors(&self) -> u64 {
        self.outgoing_vectors
    }
}

fn join(positions: &[usize], separator: &str) -> String {
    positions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_inactive(os: &mut BlockchainOs, count: usize) {
        for position in 0..count {
            os.nodes
                .set_status(position, NodeStatus::Inactive)
                .unwrap();
        }
    }

    #[test]
    fn healthy_network_reports_full_consensus() {
        let mut os = BlockchainOs::new();
        let report = os.process_command("consensus.status");
        assert!(report.contains("Active Nodes: 10/10"));
        assert!(report.contains("Consensus Percentage: 100.00%"));
        assert!(report.contains("Network Health: HEALTHY"));
    }

    #[test]
    fn three_inactive_nodes_is_still_healthy() {
        let mut os = BlockchainOs::new();
        set_inactive(&mut os, 3);
        let report = os.process_command("consensus.status");
        assert!(report.contains("Consensus Percentage: 70.00%"));
        assert!(report.contains("Network Health: HEALTHY"));
    }

    #[test]
    fn four_inactive_nodes_is_at_risk() {
        let mut os = BlockchainOs::new();
        set_inactive(&mut os, 4);
        let report = os.process_command("consensus.status");
        assert!(report.contains("Active Nodes: 6/10"));
        assert!(report.contains("Consensus Percentage: 60.00%"));
        assert!(report.contains("Network Health: AT RISK"));
    }

    #[test]
    fn mining_restores_cursor_node_status() {
        let mut os = BlockchainOs::new();
        os.process_command("position.change 4");
        os.process_command("block.mine");
        assert_eq!(os.nodes.get(4).unwrap().status, NodeStatus::Active);
        assert_eq!(os.chain.tip().miner, 4);
    }

    #[test]
    fn mining_an_inactive_cursor_reactivates_it() {
        let mut os = BlockchainOs::new();
        set_inactive(&mut os, 1);
        os.process_command("block.mine");
        assert_eq!(os.nodes.get(0).unwrap().status, NodeStatus::Active);
    }

    #[test]
    fn empty_payload_leaves_state_untouched() {
        let mut os = BlockchainOs::new();
        let report = os.process_command("vector.send 1 2");
        assert!(report.contains("Error: No data provided for the vector"));
        assert!(os.ledger.is_empty());
        assert_eq!(os.outgoing_vectors, 0);
    }

    #[test]
    fn configured_ring_size_drives_topology() {
        let config = SimConfig {
            node_count: 4,
            ..SimConfig::default()
        };
        let mut os = BlockchainOs::with_config(config).unwrap();
        assert_eq!(os.nodes.len(), 4);
        assert!(os.process_command("node.info 3").contains("Connections: 2, 0"));
        assert!(os.process_command("node.info 4").contains("No node exists at position 4"));
        let report = os.process_command("consensus.status");
        assert!(report.contains("Active Nodes: 4/4"));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SimConfig {
            node_count: 0,
            ..SimConfig::default()
        };
        assert!(BlockchainOs::with_config(config).is_err());
    }
}
