// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions for the graph model.

use crate::port::{Port, PortDirection};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A node instance in the graph.
///
/// Nodes are only created by [`Graph::add_node`](crate::Graph::add_node);
/// the port lists cannot change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    label: String,
    position: [f32; 2],
    inputs: Vec<Port>,
    outputs: Vec<Port>,
}

impl Node {
    pub(crate) fn new(
        position: [f32; 2],
        inputs: Vec<Port>,
        outputs: Vec<Port>,
        label: String,
    ) -> Self {
        Self {
            id: NodeId::new(),
            label,
            position,
            inputs,
            outputs,
        }
    }

    /// Unique instance ID
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Display label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Position in graph space
    pub fn position(&self) -> [f32; 2] {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: [f32; 2]) {
        self.position = position;
    }

    /// Rename the node
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Input ports, in declaration order
    pub fn inputs(&self) -> &[Port] {
        &self.inputs
    }

    /// Output ports, in declaration order
    pub fn outputs(&self) -> &[Port] {
        &self.outputs
    }

    /// Get an input port by index
    pub fn input(&self, index: usize) -> Option<&Port> {
        self.inputs.get(index)
    }

    /// Get an output port by index
    pub fn output(&self, index: usize) -> Option<&Port> {
        self.outputs.get(index)
    }

    /// Number of ports on one side of the node
    pub fn port_count(&self, direction: PortDirection) -> usize {
        match direction {
            PortDirection::Input => self.inputs.len(),
            PortDirection::Output => self.outputs.len(),
        }
    }
}
