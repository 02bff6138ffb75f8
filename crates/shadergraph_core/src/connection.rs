// SPDX-License-Identifier: MIT OR Apache-2.0
//! Connection (edge) definitions for the graph.

use crate::node::NodeId;
use serde::{Deserialize, Serialize};

/// A directed edge from one node's output port to another node's input port.
///
/// Ports are addressed by their index in the owning node's port list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    /// Source node ID
    pub source_node: NodeId,
    /// Index into the source node's outputs
    pub source_output: usize,
    /// Target node ID
    pub target_node: NodeId,
    /// Index into the target node's inputs
    pub target_input: usize,
}

impl Connection {
    /// Create a new connection
    pub fn new(
        source_node: NodeId,
        source_output: usize,
        target_node: NodeId,
        target_input: usize,
    ) -> Self {
        Self {
            source_node,
            source_output,
            target_node,
            target_input,
        }
    }

    /// Check if this connection involves a specific node
    pub fn involves_node(&self, node_id: NodeId) -> bool {
        self.source_node == node_id || self.target_node == node_id
    }

    /// Check if this connection feeds a specific input
    pub fn feeds(&self, node_id: NodeId, input: usize) -> bool {
        self.target_node == node_id && self.target_input == input
    }
}
