//! Markdown rendering for study materials.

use crate::error::Result;
use crate::model::{McqItem, Question, StudyMaterials};

use super::tree::walk;
use super::{CleanupPipeline, MaterialStats, RenderOptions, RenderResult, Section};

/// Convert study materials to Markdown.
pub fn to_markdown(materials: &StudyMaterials, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(materials)
}

/// Convert study materials to Markdown with statistics.
pub fn to_markdown_with_stats(
    materials: &StudyMaterials,
    options: &RenderOptions,
) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = MarkdownRenderer::new(options);
    renderer.render_with_stats(materials)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render materials to Markdown.
    pub fn render(self, materials: &StudyMaterials) -> Result<String> {
        Ok(self.render_internal(materials))
    }

    /// Render materials to Markdown with statistics.
    pub fn render_with_stats(self, materials: &StudyMaterials) -> Result<RenderResult> {
        let content = self.render_internal(materials);

        let mut stats = MaterialStats::from_materials(materials);
        stats.count_text(&content);

        Ok(RenderResult::new(content, materials.metadata.clone(), stats))
    }

    fn render_internal(&self, materials: &StudyMaterials) -> String {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&materials.metadata.to_yaml_frontmatter());
            output.push('\n');
        }

        let title = self.options.title_for(&materials.metadata.file_name);
        output.push_str(&format!("# {}\n\n", title));

        for section in self.options.sections.sections() {
            output.push_str(&format!("## {}\n\n", section.title()));
            match section {
                Section::Summary => self.render_summary(&mut output, materials),
                Section::Snippet => self.render_snippet(&mut output, materials),
                Section::MindMap => self.render_mind_map(&mut output, materials),
                Section::Mcqs => self.render_mcqs(&mut output, &materials.mcqs),
                Section::StudyPlan => {
                    output.push_str(materials.study_plan.as_str().trim());
                    output.push_str("\n\n");
                }
            }
        }

        if let Some(ref cleanup_options) = self.options.cleanup {
            let pipeline = CleanupPipeline::new(cleanup_options.clone());
            output = pipeline.process(&output);
        }

        format!("{}\n", output.trim_end())
    }

    fn render_summary(&self, output: &mut String, materials: &StudyMaterials) {
        push_bullets(output, materials.summary.key_points());
    }

    fn render_snippet(&self, output: &mut String, materials: &StudyMaterials) {
        push_bullets(output, materials.summary.snippet_sentences());
    }

    fn render_mind_map(&self, output: &mut String, materials: &StudyMaterials) {
        for (depth, node) in walk(&materials.mind_map.graph) {
            output.push_str(&"  ".repeat(depth));
            output.push_str("- ");
            output.push_str(&node.label);
            output.push('\n');
        }
        output.push('\n');
    }

    /// Questions are numbered by list position; error items keep their slot.
    fn render_mcqs(&self, output: &mut String, mcqs: &[McqItem]) {
        for (i, item) in mcqs.iter().enumerate() {
            match item {
                McqItem::Error(e) => {
                    output.push_str(&format!("> **Error:** {}\n\n", e.error));
                }
                McqItem::Question(q) => render_question(output, i + 1, q),
            }
        }
    }
}

fn push_bullets(output: &mut String, items: Vec<String>) {
    for item in items {
        output.push_str("- ");
        output.push_str(&item);
        output.push('\n');
    }
    output.push('\n');
}

fn render_question(output: &mut String, number: usize, q: &Question) {
    output.push_str(&format!("### {}. {}\n\n", number, q.question));

    for key in q.options.keys() {
        if let Some(label) = q.option_label(key) {
            output.push_str(&format!("- {}\n", label));
        }
    }
    output.push('\n');

    let answer = q.option_label(&q.answer).unwrap_or_else(|| q.answer.clone());
    output.push_str(&format!("**Answer:** {}\n\n", answer));

    if !q.explanation.trim().is_empty() {
        output.push_str(&format!("*{}*\n\n", q.explanation.trim()));
    }
}
