use crate::error::{Result, TopoError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Active,
    Mining,
    Validating,
    Inactive,
}

impl NodeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStatus::Active => "active",
            NodeStatus::Mining => "mining",
            NodeStatus::Validating => "validating",
            NodeStatus::Inactive => "inactive",
        }
    }
    /// Anything but `Inactive` counts towards consensus.
    pub fn is_live(&self) -> bool {
        !matches!(self, NodeStatus::Inactive)
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Node {
    pub position: usize,
    pub status: NodeStatus,
    connections: [usize; 2],
    /// Reserved payload slot. No command reads or writes it.
    pub data: BTreeMap<String, String>,
}

impl Node {
    pub fn new(position: usize, node_count: usize) -> Self {
        Node {
            position,
            status: NodeStatus::Active,
            connections: [
                (position + node_count - 1) % node_count,
                (position + 1) % node_count,
            ],
            data: BTreeMap::new(),
        }
    }
    /// Previous and next neighbour on the ring, fixed at creation.
    pub fn connections(&self) -> &[usize; 2] {
        &self.connections
    }
}

/// The fixed ring of nodes. Nodes are created once and never added or
/// removed; only their status changes.
#[derive(Clone, Debug)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
}

impl NodeRegistry {
    pub fn initialize(node_count: usize) -> Self {
        NodeRegistry {
            nodes: (0..node_count)
                .map(|position| Node::new(position, node_count))
                .collect(),
        }
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn get(&self, position: usize) -> Option<&Node> {
        self.nodes.get(position)
    }
    pub fn contains(&self, position: usize) -> bool {
        position < self.nodes.len()
    }
    /// Turn an operator-supplied integer into a position on the ring. The
    /// text may be negative or wider than any machine integer.
    pub fn resolve(&self, raw: &str) -> Result<usize> {
        raw.parse::<usize>()
            .ok()
            .filter(|position| self.contains(*position))
            .ok_or_else(|| TopoError::NodeNotFound(raw.to_string()))
    }
    pub fn set_status(&mut self, position: usize, status: NodeStatus) -> Result<()> {
        let node = self
            .nodes
            .get_mut(position)
            .ok_or_else(|| TopoError::NodeNotFound(position.to_string()))?;
        node.status = status;
        Ok(())
    }
    pub fn live_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.status.is_live()).count()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}
