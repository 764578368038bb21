//! Indented bullet outline to graph conversion.
//!
//! Each line may start with whitespace and a run of dashes. Two whitespace
//! characters before the dash make one level of nesting; a line without a
//! dash sits at level 0. A node's parent is the most recent node seen one
//! level up. That table is never cleared, so a deep line following an
//! unrelated shallow branch attaches to whatever node last held the parent
//! level.

use crate::model::{Edge, Graph, Node, NodeId};
use std::collections::HashMap;

/// Incremental outline parser.
///
/// Holds the id counter and the per-level parent table for one parse. Feed
/// lines with [`push_line`](Self::push_line) and take the graph with
/// [`finish`](Self::finish), or use [`OutlineParser::parse`] for a whole
/// string.
#[derive(Debug)]
pub struct OutlineParser {
    next_id: NodeId,
    last_seen_at_level: HashMap<usize, NodeId>,
    graph: Graph,
}

impl OutlineParser {
    /// Create a parser with an empty graph.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            last_seen_at_level: HashMap::new(),
            graph: Graph::new(),
        }
    }

    /// Parse a complete outline. Lines are separated by `\n`.
    pub fn parse(text: &str) -> Graph {
        let mut parser = Self::new();
        for line in text.split('\n') {
            parser.push_line(line);
        }
        parser.finish()
    }

    /// Add one line. Returns the id of the emitted node, or `None` when the
    /// line has no content and was skipped.
    pub fn push_line(&mut self, line: &str) -> Option<NodeId> {
        let (level, label) = split_line(line);
        if label.is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;

        self.graph.nodes.push(Node::new(id, label, level));
        self.last_seen_at_level.insert(level, id);

        if level > 0 {
            match self.last_seen_at_level.get(&(level - 1)) {
                Some(&parent) => self.graph.edges.push(Edge::new(parent, id)),
                None => log::debug!("outline node {} at level {} has no parent", id, level),
            }
        }

        Some(id)
    }

    /// Consume the parser and return the graph built so far.
    pub fn finish(self) -> Graph {
        let orphans = self.graph.orphans().len();
        if orphans > 0 {
            log::warn!("outline has {} node(s) with skipped indentation", orphans);
        }
        log::debug!(
            "parsed outline: {} nodes, {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        );
        self.graph
    }
}

impl Default for OutlineParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse outline text into a node/edge graph.
///
/// Never fails: malformed indentation yields parentless nodes instead of an
/// error.
///
/// # Example
///
/// ```
/// use pdfstudy::parser::parse_outline;
///
/// let graph = parse_outline("- Cells\n  - Nucleus\n  - Membrane");
/// assert_eq!(graph.nodes.len(), 3);
/// assert_eq!(graph.edges.len(), 2);
/// ```
pub fn parse_outline(text: &str) -> Graph {
    OutlineParser::parse(text)
}

/// Nesting level of a line: half the leading whitespace, rounded down, when
/// a dash follows it; otherwise 0.
pub fn indent_level(line: &str) -> usize {
    split_line(line).0
}

/// Line content with the leading whitespace-and-dashes marker removed.
pub fn line_label(line: &str) -> &str {
    split_line(line).1
}

fn split_line(line: &str) -> (usize, &str) {
    let body = line.trim_start();
    match body.strip_prefix('-') {
        Some(rest) => {
            let indent = line[..line.len() - body.len()].chars().count();
            (indent / 2, rest.trim_start_matches('-').trim())
        }
        None => (0, body.trim_end()),
    }
}
