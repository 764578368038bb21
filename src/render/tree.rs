//! Plain-text tree view of a mind-map graph.

use crate::model::{Forest, Graph, Node};

/// Walk the graph as a forest, depth first, roots in node order.
///
/// Returns each node with its depth in the forest. Depth follows the edges,
/// not the node's outline level, so an orphan shows up as a root at depth 0.
pub fn walk(graph: &Graph) -> Vec<(usize, &Node)> {
    let forest = graph.forest();
    let mut out = Vec::with_capacity(graph.node_count());
    let mut stack: Vec<(usize, &Node)> = forest.roots().iter().rev().map(|n| (0, *n)).collect();

    while let Some((depth, node)) = stack.pop() {
        out.push((depth, node));
        for child in forest.children_of(node.id).iter().rev() {
            stack.push((depth + 1, *child));
        }
    }

    out
}

/// Render the graph as a box-drawing tree.
///
/// ```
/// use pdfstudy::parse_mind_map;
/// use pdfstudy::render::to_tree;
///
/// let graph = parse_mind_map("- Biology\n  - Cells\n  - Genetics");
/// assert_eq!(to_tree(&graph), "Biology\n├─ Cells\n└─ Genetics\n");
/// ```
pub fn to_tree(graph: &Graph) -> String {
    let forest = graph.forest();
    let mut output = String::new();
    for root in forest.roots() {
        output.push_str(&root.label);
        output.push('\n');
        render_children(&forest, root, "", &mut output);
    }
    output
}

fn render_children(forest: &Forest<'_>, node: &Node, prefix: &str, output: &mut String) {
    let children = forest.children_of(node.id);
    let count = children.len();

    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == count;
        output.push_str(prefix);
        output.push_str(if last { "└─ " } else { "├─ " });
        output.push_str(&child.label);
        output.push('\n');

        let next = format!("{}{}", prefix, if last { "   " } else { "│  " });
        render_children(forest, child, &next, output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_outline;

    #[test]
    fn test_nested_tree() {
        let graph = parse_outline("- A\n  - B\n    - C\n  - D\n- E");
        assert_eq!(to_tree(&graph), "A\n├─ B\n│  └─ C\n└─ D\nE\n");
    }

    #[test]
    fn test_orphan_is_a_root() {
        // Level 2 with no level-1 ancestor has no parent.
        let graph = parse_outline("- A\n    - B");
        assert_eq!(to_tree(&graph), "A\nB\n");
    }

    #[test]
    fn test_walk_order() {
        let graph = parse_outline("- A\n  - B\n    - C\n  - D\n- E");
        let order: Vec<(usize, &str)> = walk(&graph)
            .into_iter()
            .map(|(d, n)| (d, n.label.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![(0, "A"), (1, "B"), (2, "C"), (1, "D"), (0, "E")]
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_tree(&Graph::new()), "");
        assert!(walk(&Graph::new()).is_empty());
    }
}
