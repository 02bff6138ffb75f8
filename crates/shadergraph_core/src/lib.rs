// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node graph model for shader graph editors.
//!
//! This crate is the data side of a visual shader editor. The widget that
//! draws nodes and handles pointer input calls into it:
//! - [`Graph`] stores nodes, their typed ports and the connections between them
//! - [`NodeCatalog`] holds the factories behind the "add node" context menu
//! - [`shader`] defines the built-in shader nodes
//!
//! ## Architecture
//!
//! Everything is synchronous and single-threaded. Ports are addressed by
//! index; connections are validated against the node IDs and port counts,
//! and optionally against port types (see [`ConnectionPolicy`]).

pub mod port;
pub mod node;
pub mod connection;
pub mod graph;
pub mod catalog;
pub mod shader;

pub use catalog::{
    CatalogEntry, EntryId, MenuCategory, MenuItem, NodeCatalog, NodeFactory, PortTemplate,
};
pub use connection::Connection;
pub use graph::{ConnectionPolicy, ErrorKind, Graph, GraphError};
pub use node::{Node, NodeId};
pub use port::{Port, PortDirection, PortType};
pub use shader::{seed_example, shader_catalog, ShaderNode};
