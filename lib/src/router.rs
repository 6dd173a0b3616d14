//! Hop-by-hop routing around the ring.
//!
//! The route is a display artifact: any two existing positions may transact
//! whatever the distance between them.

use tracing::debug;

/// Positions visited walking from `start` to `end` one neighbour at a time,
/// both ends included.
///
/// The walk steps up while below the target and down while above it, with
/// ring arithmetic modulo `node_count`. The path never grows past
/// `node_count + 1` entries.
pub fn route(start: usize, end: usize, node_count: usize) -> Vec<usize> {
    let mut path = vec![start];
    if node_count == 0 {
        return path;
    }
    let mut current = start;
    while current != end {
        current = if current < end {
            (current + 1) % node_count
        } else {
            (current + node_count - 1) % node_count
        };
        path.push(current);
        if path.len() > node_count {
            break;
        }
    }
    debug!(start, end, hops = path.len() - 1, "route computed");
    path
}
