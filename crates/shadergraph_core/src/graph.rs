// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph data structure containing nodes and connections.

use crate::connection::Connection;
use crate::node::{Node, NodeId};
use crate::port::{Port, PortDirection, PortType};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How [`Graph::add_connection`] treats the port types of both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConnectionPolicy {
    /// Any output may feed any input
    #[default]
    Permissive,
    /// Reject outputs whose type cannot feed the input type
    Strict,
}

/// A node graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    /// Graph name
    pub name: String,
    /// Port type checking applied to new connections
    pub policy: ConnectionPolicy,
    /// Nodes in the graph
    nodes: IndexMap<NodeId, Node>,
    /// Connections between nodes, in creation order
    connections: Vec<Connection>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            policy: ConnectionPolicy::default(),
            nodes: IndexMap::new(),
            connections: Vec::new(),
        }
    }

    /// Set the connection policy
    pub fn with_policy(mut self, policy: ConnectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Create a node with a fresh ID and add it to the graph
    pub fn add_node(
        &mut self,
        position: [f32; 2],
        inputs: Vec<Port>,
        outputs: Vec<Port>,
        label: impl Into<String>,
    ) -> &Node {
        let node = Node::new(position, inputs, outputs, label.into());
        let id = node.id();
        tracing::debug!(
            node = %id,
            label = node.label(),
            inputs = node.inputs().len(),
            outputs = node.outputs().len(),
            "Added node"
        );
        self.nodes.entry(id).or_insert(node)
    }

    /// Remove a node and its connections
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<Node> {
        let node = self.nodes.shift_remove(&node_id)?;
        let before = self.connections.len();
        self.connections.retain(|c| !c.involves_node(node_id));
        tracing::debug!(
            node = %node_id,
            dropped_connections = before - self.connections.len(),
            "Removed node"
        );
        Some(node)
    }

    /// Get a node by ID
    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    /// Get a mutable node by ID
    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&node_id)
    }

    /// Move a node to a new position
    pub fn move_node(&mut self, node_id: NodeId, position: [f32; 2]) -> Result<(), GraphError> {
        let node = self
            .nodes
            .get_mut(&node_id)
            .ok_or(GraphError::NodeNotFound(node_id))?;
        node.set_position(position);
        Ok(())
    }

    /// Get all nodes, in creation order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get all node IDs
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Connect an output of one node to an input of another.
    ///
    /// Both node IDs are resolved before any port index is checked. Nothing
    /// is appended unless every check passes. Cycles, self-connections and
    /// repeated connections are accepted.
    pub fn add_connection(
        &mut self,
        source_node: NodeId,
        source_output: usize,
        target_node: NodeId,
        target_input: usize,
    ) -> Result<Connection, GraphError> {
        let source = self
            .nodes
            .get(&source_node)
            .ok_or(GraphError::NodeNotFound(source_node))?;
        let target = self
            .nodes
            .get(&target_node)
            .ok_or(GraphError::NodeNotFound(target_node))?;

        let output = port_at(source, PortDirection::Output, source_output)?;
        let input = port_at(target, PortDirection::Input, target_input)?;

        if self.policy == ConnectionPolicy::Strict && !output.can_connect(input) {
            return Err(GraphError::IncompatiblePorts {
                output: output.port_type.clone(),
                input: input.port_type.clone(),
            });
        }

        let connection = Connection::new(source_node, source_output, target_node, target_input);
        self.connections.push(connection);
        tracing::debug!(
            source = %source_node,
            source_output,
            target = %target_node,
            target_input,
            "Added connection"
        );
        Ok(connection)
    }

    /// Remove the first connection equal to `connection`
    pub fn remove_connection(&mut self, connection: &Connection) -> bool {
        match self.connections.iter().position(|c| c == connection) {
            Some(index) => {
                self.connections.remove(index);
                true
            }
            None => false,
        }
    }

    /// Get all connections, in creation order
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Get connections involving a node
    pub fn connections_for_node(&self, node_id: NodeId) -> impl Iterator<Item = &Connection> {
        self.connections.iter().filter(move |c| c.involves_node(node_id))
    }

    /// Get connections feeding one input of a node
    pub fn connections_into(
        &self,
        node_id: NodeId,
        input: usize,
    ) -> impl Iterator<Item = &Connection> {
        self.connections.iter().filter(move |c| c.feeds(node_id, input))
    }

    /// Get the number of connections
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Connections whose output type cannot feed the input type.
    ///
    /// Only a permissive graph can hold these.
    pub fn type_mismatches(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter().filter(move |c| {
            let output = self.node(c.source_node).and_then(|n| n.output(c.source_output));
            let input = self.node(c.target_node).and_then(|n| n.input(c.target_input));
            matches!((output, input), (Some(o), Some(i)) if !o.can_connect(i))
        })
    }

    /// Remove every node and connection
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.connections.clear();
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

fn port_at(node: &Node, direction: PortDirection, index: usize) -> Result<&Port, GraphError> {
    let port = match direction {
        PortDirection::Input => node.input(index),
        PortDirection::Output => node.output(index),
    };
    port.ok_or(GraphError::PortIndexOutOfRange {
        node: node.id(),
        direction,
        index,
        len: node.port_count(direction),
    })
}

/// Broad classification of [`GraphError`]s
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A node ID did not resolve
    Reference,
    /// A port index was past the end of the port list
    IndexOutOfRange,
    /// Port types could not be connected
    TypeMismatch,
}

/// Error from a graph operation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// Node not found
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// Port index past the end of the node's ports
    #[error("Node {node} has {len} {direction} port(s), index {index} is out of range")]
    PortIndexOutOfRange {
        /// Node whose ports were indexed
        node: NodeId,
        /// Which side of the node
        direction: PortDirection,
        /// Requested index
        index: usize,
        /// Number of ports on that side
        len: usize,
    },

    /// Incompatible port types
    #[error("Cannot connect {output} output to {input} input")]
    IncompatiblePorts {
        /// Output port type
        output: PortType,
        /// Input port type
        input: PortType,
    },
}

impl GraphError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NodeNotFound(_) => ErrorKind::Reference,
            Self::PortIndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::IncompatiblePorts { .. } => ErrorKind::TypeMismatch,
        }
    }
}
