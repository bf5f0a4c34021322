use std::collections::HashMap;

use crate::types::TypeInfo;

/// Graph of every type known to a container
///
/// An edge `from -> to` means `from` must be fully constructed before `to`.
/// Nodes are created on first sight (either as a dependency or as a product) and
/// are never removed. Both nodes and each node's outgoing edges keep insertion
/// order, so traversal is deterministic for a given registration sequence.
#[derive(Default, Clone)]
pub struct DependencyGraph {
    nodes: Vec<TypeInfo>,
    index: HashMap<TypeInfo, usize>,
    /// Outgoing edges per node, by node index
    edges: Vec<Vec<usize>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the node if it is not known yet
    ///
    /// Returns the index of the node
    pub fn add_node(&mut self, info: TypeInfo) -> usize {
        if let Some(index) = self.index.get(&info) {
            return *index;
        }

        let index = self.nodes.len();
        self.nodes.push(info);
        self.edges.push(Vec::new());
        self.index.insert(info, index);
        index
    }

    /// Records that `from` has to be constructed before `to`
    ///
    /// Missing endpoints are added as nodes. Adding the same edge twice stores it
    /// twice, traversal does not care about multiplicity.
    pub fn add_edge(&mut self, from: TypeInfo, to: TypeInfo) {
        let from = self.add_node(from);
        let to = self.add_node(to);
        self.edges[from].push(to);
    }

    pub fn contains(&self, info: &TypeInfo) -> bool {
        self.index.contains_key(info)
    }

    /// All nodes in the order they were first seen
    pub fn nodes(&self) -> &[TypeInfo] {
        &self.nodes
    }

    /// Types which have to wait for `info`, in edge insertion order
    pub fn edges_from(&self, info: &TypeInfo) -> impl Iterator<Item = TypeInfo> + '_ {
        self.index
            .get(info)
            .into_iter()
            .flat_map(|index| self.edges[*index].iter())
            .map(|target| self.nodes[*target])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn node(&self, index: usize) -> TypeInfo {
        self.nodes[index]
    }

    pub(crate) fn targets(&self, index: usize) -> &[usize] {
        &self.edges[index]
    }
}

impl std::fmt::Debug for DependencyGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (index, node) in self.nodes.iter().enumerate() {
            let targets: Vec<&str> = self.edges[index]
                .iter()
                .map(|target| self.nodes[*target].type_name)
                .collect();
            map.entry(&node.type_name, &targets);
        }
        map.finish()
    }
}
