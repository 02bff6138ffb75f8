// SPDX-License-Identifier: MIT OR Apache-2.0
//! Built-in shader graph nodes.
//!
//! Every node kind is a [`ShaderNode`] variant, so the full set can be
//! enumerated (for menus, docs and tests) without touching any UI code.

use crate::catalog::{NodeCatalog, NodeFactory};
use crate::graph::{Graph, GraphError};
use crate::node::{Node, NodeId};
use crate::port::{Port, PortType};

/// Shader node kinds available from the context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderNode {
    /// Component-wise `A * B`
    Multiply,
    /// Component-wise `A + B`
    Add,
    /// Component-wise `A - B`
    Subtract,
    /// Linear blend from `A` to `B` by `T`
    Lerp,
    /// Split a color into RGB and alpha
    Split,
    /// Join RGB and alpha into a color
    Combine,
    /// Physically based surface output
    PbrShader,
}

impl ShaderNode {
    /// Every kind, in menu order
    pub const ALL: [ShaderNode; 7] = [
        Self::Multiply,
        Self::Add,
        Self::Subtract,
        Self::Lerp,
        Self::Split,
        Self::Combine,
        Self::PbrShader,
    ];

    /// Menu category
    pub fn category(self) -> &'static str {
        match self {
            Self::Multiply | Self::Add | Self::Subtract | Self::Lerp => "Math",
            Self::Split | Self::Combine => "Vector",
            Self::PbrShader => "Output",
        }
    }

    /// Node label
    pub fn label(self) -> &'static str {
        match self {
            Self::Multiply => "Multiply",
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Lerp => "Lerp",
            Self::Split => "Split",
            Self::Combine => "Combine",
            Self::PbrShader => "PBR Shader",
        }
    }

    /// Input ports
    pub fn inputs(self) -> Vec<Port> {
        match self {
            Self::Multiply | Self::Add | Self::Subtract => vec![
                Port::new("A", PortType::Float3),
                Port::new("B", PortType::Float3),
            ],
            Self::Lerp => vec![
                Port::new("A", PortType::Float3),
                Port::new("B", PortType::Float3),
                Port::new("T", PortType::Float),
            ],
            Self::Split => vec![Port::new("Source", PortType::Float4)],
            Self::Combine => vec![
                Port::new("RGB", PortType::Float3),
                Port::new("Alpha", PortType::Float),
            ],
            Self::PbrShader => vec![
                Port::new("Albedo", PortType::Float4),
                Port::new("Normal", PortType::Float3),
                Port::new("Roughness", PortType::Float3),
                Port::new("Metalness", PortType::Float3),
            ],
        }
    }

    /// Output ports
    pub fn outputs(self) -> Vec<Port> {
        match self {
            Self::Multiply | Self::Add | Self::Subtract | Self::Lerp => {
                vec![Port::new("Result", PortType::Float3)]
            }
            Self::Split => vec![
                Port::new("RGB", PortType::Float3),
                Port::new("Alpha", PortType::Float),
            ],
            Self::Combine => vec![Port::new("Result", PortType::Float4)],
            Self::PbrShader => vec![Port::new("Color", PortType::Float4)],
        }
    }
}

impl NodeFactory for ShaderNode {
    fn build<'g>(&self, graph: &'g mut Graph, position: [f32; 2]) -> Result<&'g Node, GraphError> {
        Ok(graph.add_node(position, self.inputs(), self.outputs(), self.label()))
    }
}

/// Catalog holding every built-in shader node
pub fn shader_catalog() -> NodeCatalog {
    let mut catalog = NodeCatalog::new();
    for kind in ShaderNode::ALL {
        catalog.register(kind.category(), kind.label(), kind);
    }
    catalog
}

/// Populate `graph` with a PBR shader feeding a split node.
///
/// Returns the IDs of the PBR and split nodes.
pub fn seed_example(graph: &mut Graph) -> Result<(NodeId, NodeId), GraphError> {
    let pbr = ShaderNode::PbrShader.build(graph, [10.0, 10.0])?.id();
    let split = ShaderNode::Split.build(graph, [500.0, 60.0])?.id();
    graph.add_connection(pbr, 0, split, 0)?;
    Ok((pbr, split))
}
