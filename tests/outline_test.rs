//! Integration tests for outline parsing.

use pdfstudy::{parse_mind_map, Edge, Node, OutlineParser};
use proptest::prelude::*;

#[test]
fn test_empty_input() {
    let graph = parse_mind_map("");
    assert!(graph.nodes.is_empty());
    assert!(graph.edges.is_empty());
}

#[test]
fn test_single_root() {
    let graph = parse_mind_map("- Root");
    assert_eq!(graph.nodes, vec![Node::new(1, "Root", 0)]);
    assert!(graph.edges.is_empty());
}

#[test]
fn test_one_child() {
    let graph = parse_mind_map("- A\n  - B");
    assert_eq!(graph.nodes, vec![Node::new(1, "A", 0), Node::new(2, "B", 1)]);
    assert_eq!(graph.edges, vec![Edge::new(1, 2)]);
}

#[test]
fn test_second_root_has_no_parent() {
    let graph = parse_mind_map("- A\n  - B\n- C");
    assert_eq!(
        graph.nodes,
        vec![
            Node::new(1, "A", 0),
            Node::new(2, "B", 1),
            Node::new(3, "C", 0)
        ]
    );
    assert_eq!(graph.edges, vec![Edge::new(1, 2)]);
}

#[test]
fn test_blank_dash_line_consumes_no_id() {
    let graph = parse_mind_map("- A\n  -  \n  - B");
    let ids: Vec<u32> = graph.nodes.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(graph.nodes[1].label, "B");
}

#[test]
fn test_service_outline() {
    let outline = "\
- Photosynthesis
  - Light reactions
    - Thylakoid membrane
    - ATP and NADPH
  - Calvin cycle
    - Carbon fixation
- Respiration
  - Glycolysis";

    let graph = parse_mind_map(outline);
    assert_eq!(graph.node_count(), 8);
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.roots().len(), 2);
    assert_eq!(graph.max_level(), Some(2));
    assert_eq!(graph.parent_of(7).map(|n| n.label.as_str()), None);
    assert_eq!(
        graph.parent_of(8).map(|n| n.label.as_str()),
        Some("Respiration")
    );
    assert_eq!(
        graph
            .children_of(2)
            .iter()
            .map(|n| n.label.as_str())
            .collect::<Vec<_>>(),
        vec!["Thylakoid membrane", "ATP and NADPH"]
    );
}

#[test]
fn test_stale_parent_is_reused() {
    // Level 1 was last held by "B" under "A"; "D" attaches there even though
    // a new root "C" came in between.
    let graph = parse_mind_map("- A\n  - B\n- C\n    - D");
    assert_eq!(graph.edges, vec![Edge::new(1, 2), Edge::new(2, 4)]);
}

#[test]
fn test_skipped_level_is_an_orphan() {
    let graph = parse_mind_map("- A\n      - Deep");
    assert_eq!(graph.nodes[1].level, 3);
    assert!(graph.edges.is_empty());
    assert_eq!(graph.orphans().len(), 1);
}

#[test]
fn test_crlf_lines() {
    let graph = parse_mind_map("- A\r\n  - B\r\n");
    assert_eq!(graph.nodes[0].label, "A");
    assert_eq!(graph.nodes[1].label, "B");
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_incremental_matches_whole() {
    let outline = "- A\n  - B\n\n    - C\n- D";
    let mut parser = OutlineParser::new();
    for line in outline.lines() {
        parser.push_line(line);
    }
    assert_eq!(parser.finish(), parse_mind_map(outline));
}

fn outline_line() -> impl Strategy<Value = String> {
    (0usize..8, prop::bool::ANY, "[ -~]{0,12}").prop_map(|(indent, dash, text)| {
        let marker = if dash { "- " } else { "" };
        format!("{}{}{}", " ".repeat(indent), marker, text)
    })
}

proptest! {
    #[test]
    fn prop_fewer_edges_than_nodes(lines in prop::collection::vec(outline_line(), 0..40)) {
        let graph = parse_mind_map(&lines.join("\n"));
        if graph.nodes.is_empty() {
            prop_assert!(graph.edges.is_empty());
        } else {
            prop_assert!(graph.edges.len() < graph.nodes.len());
        }
    }

    #[test]
    fn prop_ids_are_sequential(text in "[ a-z\\-\n]{0,200}") {
        let graph = parse_mind_map(&text);
        for (i, node) in graph.nodes.iter().enumerate() {
            prop_assert_eq!(node.id as usize, i + 1);
            prop_assert!(!node.label.is_empty());
        }
    }

    #[test]
    fn prop_edges_point_forward_one_level(text in "[ a-z\\-\n]{0,200}") {
        let graph = parse_mind_map(&text);
        for edge in &graph.edges {
            let from = graph.node(edge.from).unwrap();
            let to = graph.node(edge.to).unwrap();
            prop_assert!(from.id < to.id);
            prop_assert_eq!(from.level + 1, to.level);
        }
    }
}
