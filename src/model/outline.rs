//! Mind-map graph types produced by the outline parser.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Node identifier. Assigned sequentially from 1.
pub type NodeId = u32;

/// A graph vertex for one non-empty outline line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Sequential id, starting at 1
    pub id: NodeId,

    /// Line content with the bullet marker and surrounding whitespace removed
    pub label: String,

    /// Depth derived from indentation (0 = top level)
    pub level: usize,
}

impl Node {
    /// Create a new node.
    pub fn new(id: NodeId, label: impl Into<String>, level: usize) -> Self {
        Self {
            id,
            label: label.into(),
            level,
        }
    }
}

/// A parent-to-child relation between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Parent node id
    pub from: NodeId,

    /// Child node id
    pub to: NodeId,
}

impl Edge {
    /// Create a new edge.
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }
}

/// A forest of outline nodes, kept as flat node and edge lists.
///
/// Both lists are in construction order. Every node has at most one
/// incoming edge, and edges always point from an earlier node to a later
/// one, so the graph is acyclic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// Nodes in input order
    pub nodes: Vec<Node>,

    /// Edges in input order
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        // Ids are dense and start at 1, so the index is usually exact.
        match self.nodes.get((id as usize).wrapping_sub(1)) {
            Some(node) if node.id == id => Some(node),
            _ => self.nodes.iter().find(|n| n.id == id),
        }
    }

    /// The parent of a node, if it has an incoming edge.
    pub fn parent_of(&self, id: NodeId) -> Option<&Node> {
        self.edges
            .iter()
            .find(|e| e.to == id)
            .and_then(|e| self.node(e.from))
    }

    /// Children of a node, in edge order.
    pub fn children_of(&self, id: NodeId) -> Vec<&Node> {
        self.edges
            .iter()
            .filter(|e| e.from == id)
            .filter_map(|e| self.node(e.to))
            .collect()
    }

    /// Nodes without an incoming edge, in node order.
    pub fn roots(&self) -> Vec<&Node> {
        let targets: HashSet<NodeId> = self.edges.iter().map(|e| e.to).collect();
        self.nodes
            .iter()
            .filter(|n| !targets.contains(&n.id))
            .collect()
    }

    /// Index the graph as a forest for repeated traversal.
    pub fn forest(&self) -> Forest<'_> {
        let mut children: HashMap<NodeId, Vec<&Node>> = HashMap::new();
        for edge in &self.edges {
            if let Some(child) = self.node(edge.to) {
                children.entry(edge.from).or_default().push(child);
            }
        }
        Forest {
            roots: self.roots(),
            children,
        }
    }

    /// Roots that sit below the top level (their parent level never appeared).
    pub fn orphans(&self) -> Vec<&Node> {
        self.roots().into_iter().filter(|n| n.level > 0).collect()
    }

    /// Deepest level present, or `None` for an empty graph.
    pub fn max_level(&self) -> Option<usize> {
        self.nodes.iter().map(|n| n.level).max()
    }
}

/// Roots and child lists of a [`Graph`], built once in a single pass.
#[derive(Debug, Clone)]
pub struct Forest<'a> {
    roots: Vec<&'a Node>,
    children: HashMap<NodeId, Vec<&'a Node>>,
}

impl<'a> Forest<'a> {
    /// Nodes without an incoming edge, in node order.
    pub fn roots(&self) -> &[&'a Node] {
        &self.roots
    }

    /// Children of a node, in edge order.
    pub fn children_of(&self, id: NodeId) -> &[&'a Node] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }
}
