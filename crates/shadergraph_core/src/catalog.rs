// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node catalog backing the "add node" context menu.
//!
//! Each entry pairs a menu location (category + label) with a
//! [`NodeFactory`]. The catalog is an ordinary value owned by whoever builds
//! the editor UI; there is no process-wide registry.

use crate::graph::{Graph, GraphError};
use crate::node::Node;
use crate::port::Port;

/// Builds one kind of node into a graph
pub trait NodeFactory: Send + Sync {
    /// Create the node at `position` and return it
    fn build<'g>(&self, graph: &'g mut Graph, position: [f32; 2]) -> Result<&'g Node, GraphError>;
}

/// Factory for nodes with a fixed label and port layout
#[derive(Debug, Clone, PartialEq)]
pub struct PortTemplate {
    /// Label given to created nodes
    pub label: String,
    /// Input ports
    pub inputs: Vec<Port>,
    /// Output ports
    pub outputs: Vec<Port>,
}

impl PortTemplate {
    /// Create a new template
    pub fn new(label: impl Into<String>, inputs: Vec<Port>, outputs: Vec<Port>) -> Self {
        Self {
            label: label.into(),
            inputs,
            outputs,
        }
    }
}

impl NodeFactory for PortTemplate {
    fn build<'g>(&self, graph: &'g mut Graph, position: [f32; 2]) -> Result<&'g Node, GraphError> {
        Ok(graph.add_node(
            position,
            self.inputs.clone(),
            self.outputs.clone(),
            self.label.clone(),
        ))
    }
}

/// Position of an entry in its catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(usize);

impl EntryId {
    /// Registration index
    pub fn index(self) -> usize {
        self.0
    }
}

/// A registered node-creation action
pub struct CatalogEntry {
    id: EntryId,
    category: String,
    label: String,
    factory: Box<dyn NodeFactory>,
}

impl CatalogEntry {
    /// Entry ID
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Menu category
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Menu label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Run the factory
    pub fn invoke<'g>(
        &self,
        graph: &'g mut Graph,
        position: [f32; 2],
    ) -> Result<&'g Node, GraphError> {
        self.factory.build(graph, position)
    }
}

impl std::fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// One item of the context menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Entry to invoke when picked
    pub entry: EntryId,
    /// Display label
    pub label: String,
}

/// A submenu holding every entry of one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCategory {
    /// Category name
    pub name: String,
    /// Items, in registration order
    pub items: Vec<MenuItem>,
}

/// Registry of node factories, in registration order
#[derive(Debug, Default)]
pub struct NodeCatalog {
    entries: Vec<CatalogEntry>,
}

impl NodeCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under a menu location.
    ///
    /// Duplicate locations are allowed and each gets its own entry.
    pub fn register(
        &mut self,
        category: impl Into<String>,
        label: impl Into<String>,
        factory: impl NodeFactory + 'static,
    ) -> EntryId {
        let id = EntryId(self.entries.len());
        let entry = CatalogEntry {
            id,
            category: category.into(),
            label: label.into(),
            factory: Box::new(factory),
        };
        tracing::trace!(
            category = entry.category(),
            label = entry.label(),
            "Registered node factory"
        );
        self.entries.push(entry);
        id
    }

    /// Run an entry's factory against `graph`.
    ///
    /// The entry is not looked up in this catalog, so an entry borrowed from
    /// another catalog runs its own factory just the same. Factory errors are
    /// returned as-is.
    pub fn invoke<'g>(
        &self,
        entry: &CatalogEntry,
        graph: &'g mut Graph,
        position: [f32; 2],
    ) -> Result<&'g Node, GraphError> {
        tracing::debug!(
            category = entry.category(),
            label = entry.label(),
            x = position[0],
            y = position[1],
            "Invoking catalog entry"
        );
        entry.invoke(graph, position)
    }

    /// Get an entry by ID
    pub fn entry(&self, id: EntryId) -> Option<&CatalogEntry> {
        self.entries.get(id.0)
    }

    /// Get all entries
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// First entry registered under `category` / `label`
    pub fn find(&self, category: &str, label: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|e| e.category == category && e.label == label)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Category names, in order of first registration
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !names.contains(&entry.category()) {
                names.push(entry.category());
            }
        }
        names
    }

    /// Build the grouped context menu
    pub fn menu(&self) -> Vec<MenuCategory> {
        let mut menu: Vec<MenuCategory> = Vec::new();
        for entry in &self.entries {
            let item = MenuItem {
                entry: entry.id,
                label: entry.label.clone(),
            };
            match menu.iter_mut().find(|c| c.name == entry.category) {
                Some(category) => category.items.push(item),
                None => menu.push(MenuCategory {
                    name: entry.category.clone(),
                    items: vec![item],
                }),
            }
        }
        menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ErrorKind;
    use crate::node::NodeId;
    use crate::port::PortType;

    fn multiply() -> PortTemplate {
        PortTemplate::new(
            "Multiply",
            vec![Port::new("A", "float3"), Port::new("B", "float3")],
            vec![Port::new("Result", "float3")],
        )
    }

    #[test]
    fn test_invoke_builds_node_at_position() {
        let mut catalog = NodeCatalog::new();
        let id = catalog.register("Math", "Multiply", multiply());
        let mut graph = Graph::default();

        let entry = catalog.entry(id).unwrap();
        let node = catalog.invoke(entry, &mut graph, [10.0, 20.0]).unwrap();
        assert_eq!(node.position(), [10.0, 20.0]);
        assert_eq!(node.label(), "Multiply");
        assert_eq!(node.inputs().len(), 2);
        assert!(node.inputs().iter().all(|p| p.port_type == PortType::Float3));
        assert_eq!(node.outputs(), &[Port::new("Result", "float3")]);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_duplicate_registrations_are_kept() {
        let mut catalog = NodeCatalog::new();
        let first = catalog.register("Math", "Multiply", multiply());
        let second = catalog.register("Math", "Multiply", multiply());

        assert_ne!(first, second);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("Math", "Multiply").unwrap().id(), first);

        let menu = catalog.menu();
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].items.len(), 2);
    }

    #[test]
    fn test_menu_groups_by_category_in_registration_order() {
        let mut catalog = NodeCatalog::new();
        catalog.register("Math", "Multiply", multiply());
        catalog.register("Vector", "Split", PortTemplate::new("Split", vec![], vec![]));
        catalog.register("Math", "Add", PortTemplate::new("Add", vec![], vec![]));

        assert_eq!(catalog.categories(), vec!["Math", "Vector"]);

        let menu = catalog.menu();
        let labels: Vec<Vec<&str>> = menu
            .iter()
            .map(|c| c.items.iter().map(|i| i.label.as_str()).collect())
            .collect();
        assert_eq!(labels, vec![vec!["Multiply", "Add"], vec!["Split"]]);
        assert_eq!(menu[0].items[1].entry.index(), 2);
    }

    #[test]
    fn test_invoke_accepts_entry_from_another_catalog() {
        let mut math = NodeCatalog::new();
        math.register("Math", "Multiply", multiply());
        let empty = NodeCatalog::new();
        let mut graph = Graph::default();

        let entry = math.find("Math", "Multiply").unwrap();
        let node = empty.invoke(entry, &mut graph, [5.0, 5.0]).unwrap();
        assert_eq!(node.label(), "Multiply");
        assert!(empty.is_empty());
        assert_eq!(graph.node_count(), 1);
    }

    struct Failing;

    impl NodeFactory for Failing {
        fn build<'g>(
            &self,
            _graph: &'g mut Graph,
            _position: [f32; 2],
        ) -> Result<&'g Node, GraphError> {
            Err(GraphError::NodeNotFound(NodeId(uuid::Uuid::nil())))
        }
    }

    #[test]
    fn test_factory_errors_propagate_unchanged() {
        let mut catalog = NodeCatalog::new();
        catalog.register("Broken", "Failing", Failing);
        let mut graph = Graph::default();

        let entry = catalog.find("Broken", "Failing").unwrap();
        let err = catalog.invoke(entry, &mut graph, [0.0, 0.0]).unwrap_err();
        assert_eq!(err, GraphError::NodeNotFound(NodeId(uuid::Uuid::nil())));
        assert_eq!(err.kind(), ErrorKind::Reference);
        assert_eq!(graph.node_count(), 0);
    }
}
