//! Integration tests for rendering decoded service replies.

use pdfstudy::render::{
    self, to_markdown, to_markdown_with_stats, to_text, to_tree, CleanupPreset, Section,
    SectionSelection,
};
use pdfstudy::{
    GraphOptions, JsonFormat, McqItem, Metadata, MindMap, PdfstudyResult, RenderOptions,
    StudyMaterials, StudyPlan, Summary,
};

/// Materials as the service would send them, MCQ list straight from JSON.
fn materials() -> StudyMaterials {
    let mcqs: Vec<McqItem> = serde_json::from_str(
        r#"[
            {"question": "What is the unit of heredity?",
             "options": {"A": "Gene", "B": "Cell", "C": "Organ", "D": "Tissue"},
             "answer": "A",
             "explanation": "Genes carry hereditary information."},
            {"error": "Could not parse question 2"},
            {"question": "DNA is made of?",
             "options": {"D": "Lipids", "C": "Nucleotides", "B": "Sugars", "A": "Amino acids"},
             "answer": "C"}
        ]"#,
    )
    .unwrap();

    let mut metadata = Metadata::new("genetics.pdf", 4096, "http://127.0.0.1:8000");
    metadata.pdf_version = Some("1.7".to_string());

    StudyMaterials::new(
        metadata,
        Summary::new(
            "* Genes are units of heredity.\n* DNA has a \u{FB01}xed double helix.",
            "Mendel studied peas.  Traits follow patterns.",
        ),
        MindMap::parse("- Genetics\n  - Genes\n    - Alleles\n  - DNA\n- Evolution"),
        mcqs,
        StudyPlan::new("**Day 1:** Genes\n\n\n\n**Day 2:** DNA"),
    )
}

#[test]
fn test_markdown_document() {
    let md = to_markdown(&materials(), &RenderOptions::new().with_frontmatter(true)).unwrap();

    assert!(md.starts_with("---\nsource: \"genetics.pdf\"\nsize_bytes: 4096\npdf_version: \"1.7\""));
    assert!(md.contains("# Study notes: genetics.pdf"));
    assert!(md.contains("- Genetics\n  - Genes\n    - Alleles\n  - DNA\n- Evolution\n"));
    // Service option order is kept.
    assert!(md.contains("- D. Lipids\n- C. Nucleotides\n- B. Sugars\n- A. Amino acids"));
    assert!(md.contains("**Answer:** C. Nucleotides"));
    assert!(md.contains("> **Error:** Could not parse question 2"));
}

#[test]
fn test_cleanup_touches_output_not_graph() {
    let materials = materials();
    let options = RenderOptions::new().with_cleanup_preset(CleanupPreset::Standard);
    let md = to_markdown(&materials, &options).unwrap();

    assert!(md.contains("fixed double helix"));
    assert!(!md.contains("\n\n\n"));
    assert_eq!(materials.mind_map.graph.node_count(), 5);
}

#[test]
fn test_cleanup_keeps_rendered_nesting() {
    let mut materials = materials();
    materials.mind_map = MindMap::parse("- Biology\n  - Cells\n    - Nucleus\n      - DNA");

    for preset in [CleanupPreset::Standard, CleanupPreset::Aggressive] {
        let options = RenderOptions::new().with_cleanup_preset(preset);

        let md = to_markdown(&materials, &options).unwrap();
        assert!(md.contains("- Biology\n  - Cells\n    - Nucleus\n      - DNA\n"));

        let text = to_text(&materials, &options).unwrap();
        assert!(text.contains("Biology\n└─ Cells\n   └─ Nucleus\n      └─ DNA"));
        assert!(text.contains("1. What is the unit of heredity?\n   A. Gene\n   B. Cell"));
        assert!(text.contains("   Answer: A"));
    }
}

#[test]
fn test_aggressive_text() {
    let options = RenderOptions::new()
        .with_sections(SectionSelection::Only(vec![Section::StudyPlan]))
        .with_cleanup_preset(CleanupPreset::Aggressive);
    let text = to_text(&materials(), &options).unwrap();
    // One newline at most: headings and body run together.
    assert_eq!(text, "STUDY PLAN\n==========\nDay 1: Genes\nDay 2: DNA");
}

#[test]
fn test_stats() {
    let result = to_markdown_with_stats(&materials(), &RenderOptions::default()).unwrap();
    let stats = &result.stats;

    assert_eq!(stats.key_point_count, 2);
    assert_eq!(stats.sentence_count, 2);
    assert_eq!(stats.node_count, 5);
    assert_eq!(stats.edge_count, 3);
    assert_eq!(stats.max_level, 2);
    assert_eq!(stats.orphan_count, 0);
    assert_eq!(stats.question_count, 2);
    assert_eq!(stats.mcq_error_count, 1);
    assert_eq!(result.content_len(), result.content.len());
}

#[test]
fn test_tree() {
    assert_eq!(
        to_tree(&materials().mind_map.graph),
        "Genetics\n├─ Genes\n│  └─ Alleles\n└─ DNA\nEvolution\n"
    );
}

#[test]
fn test_html_page() {
    let options = RenderOptions::new()
        .with_title("Genetics <review>")
        .with_active_section(Section::MindMap)
        .with_graph_options(GraphOptions::new().with_fit_delay(750));
    let html = render::to_html(&materials(), &options).unwrap();

    assert!(html.contains("<title>Genetics &lt;review&gt;</title>"));
    assert!(html.contains("<div id=\"mindmap\" class=\"section active\">"));
    assert!(html.contains("\"label\":\"Alleles\""));
    assert!(html.contains("network.fit(), 750)"));
    assert!(html.contains("<strong>Q3:</strong> DNA is made of?"));
    assert!(html.contains("data-answer=\"C\""));
}

#[test]
fn test_json_round_trip_keeps_mcq_shapes() {
    let json = render::to_json(&materials(), JsonFormat::Pretty).unwrap();
    let back: StudyMaterials = serde_json::from_str(&json).unwrap();

    assert!(back.mcqs[1].is_error());
    assert_eq!(back.questions().count(), 2);
    assert_eq!(back.mind_map, materials().mind_map);
}

#[test]
fn test_result_wrapper() {
    let result = PdfstudyResult::new(
        materials(),
        RenderOptions::new().with_sections(SectionSelection::parse("summary").unwrap()),
    );
    let text = result.to_text().unwrap();
    assert!(text.starts_with("SUMMARY"));
    assert!(!text.contains("MIND MAP"));
}
