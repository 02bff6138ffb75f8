// SPDX-License-Identifier: MIT OR Apache-2.0
//! Startup sequence: catalog registration, seed graph, menu picks.

use crate::config::DemoConfig;
use shadergraph_core::{seed_example, shader_catalog, Graph, GraphError, NodeCatalog, NodeId};
use thiserror::Error;

/// Errors raised while running the demo
#[derive(Debug, Error)]
pub enum AppError {
    /// No catalog entry at the requested menu location
    #[error("No catalog entry for {category}/{label}")]
    UnknownEntry {
        /// Requested category
        category: String,
        /// Requested label
        label: String,
    },

    /// Graph operation failed
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// The state a host widget would drive
pub struct DemoApp {
    /// Factories behind the context menu
    pub catalog: NodeCatalog,
    /// The displayed graph
    pub graph: Graph,
}

impl DemoApp {
    /// Register the catalog and build the initial graph
    pub fn startup(config: &DemoConfig) -> Result<Self, AppError> {
        let catalog = shader_catalog();
        let mut graph = Graph::new(config.graph_name.clone()).with_policy(config.connection_policy);

        if config.seed_example {
            let (pbr, split) = seed_example(&mut graph)?;
            tracing::info!(%pbr, %split, "Seeded example graph");
        }

        let mut app = Self { catalog, graph };
        if let Some(insert) = &config.demo_insert {
            app.pick(&insert.category, &insert.label, insert.position)?;
        }
        Ok(app)
    }

    /// Handle a context-menu pick at `position`
    pub fn pick(
        &mut self,
        category: &str,
        label: &str,
        position: [f32; 2],
    ) -> Result<NodeId, AppError> {
        let entry = self
            .catalog
            .find(category, label)
            .ok_or_else(|| AppError::UnknownEntry {
                category: category.to_string(),
                label: label.to_string(),
            })?;
        let node = self.catalog.invoke(entry, &mut self.graph, position)?;
        Ok(node.id())
    }

    /// Log the menu and graph contents
    pub fn log_summary(&self) {
        for category in self.catalog.menu() {
            let labels: Vec<&str> = category.items.iter().map(|i| i.label.as_str()).collect();
            tracing::info!(category = %category.name, items = ?labels, "Menu");
        }

        tracing::info!(
            graph = %self.graph.name,
            nodes = self.graph.node_count(),
            connections = self.graph.connection_count(),
            "Graph ready"
        );
        for node in self.graph.nodes() {
            tracing::info!(
                id = %node.id(),
                label = node.label(),
                x = node.position()[0],
                y = node.position()[1],
                inputs = node.inputs().len(),
                outputs = node.outputs().len(),
                "Node"
            );
        }
        for connection in self.graph.type_mismatches() {
            tracing::warn!(
                source = %connection.source_node,
                source_output = connection.source_output,
                target = %connection.target_node,
                target_input = connection.target_input,
                "Connection joins incompatible port types"
            );
        }
    }
}
