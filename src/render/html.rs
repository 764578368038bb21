//! HTML rendering: a self-contained study page.
//!
//! The page carries one tab per section, the mind map drawn by vis-network,
//! and clickable multiple-choice questions. Everything except the
//! vis-network script is inlined.

use crate::error::{Error, Result};
use crate::model::{Graph, McqItem, Question, StudyMaterials};

use super::format::{escape_html, inline_markdown_to_html};
use super::{GraphOptions, RenderOptions, Section};

/// Where the page loads vis-network from.
pub const VIS_NETWORK_URL: &str =
    "https://unpkg.com/vis-network@9.1.9/standalone/umd/vis-network.min.js";

const STYLE: &str = r#"
body { background: #121212; color: #eee; font-family: sans-serif; margin: 0; padding: 24px; }
h1 { font-size: 1.4em; }
.tags { margin-bottom: 16px; }
.tag { background: #1d1d1d; color: #eee; border: 1px solid #444; border-radius: 4px; padding: 6px 12px; cursor: pointer; }
.tag.active { border-color: #fff; }
.section { display: none; }
.section.active { display: block; }
#mindMapContainer { height: 600px; border: 1px solid #444; }
.mindmap-text { white-space: pre-wrap; color: #aaa; }
.mcq-block { margin-bottom: 20px; }
.mcq-block button { display: block; margin: 4px 0; background: #1d1d1d; color: #eee; border: 1px solid #444; padding: 6px 10px; }
.mcq-block button.correct { background: #1e5e2a; }
.mcq-block button.incorrect { background: #6e1f1f; }
.explanation { margin-top: 10px; display: none; }
.mcq-error { color: red; }
.plan { white-space: pre-wrap; }
"#;

const SCRIPT: &str = r#"
function showSection(sectionId) {
  document.querySelectorAll('.section').forEach(s => s.classList.remove('active'));
  document.querySelectorAll('.tag').forEach(t => t.classList.remove('active'));
  document.getElementById(sectionId).classList.add('active');
  document.querySelector(`button[data-section="${sectionId}"]`).classList.add('active');
}

function answer(button) {
  const block = button.closest('.mcq-block');
  const correct = block.dataset.answer;
  const buttons = block.querySelectorAll('button');
  buttons.forEach(b => b.disabled = true);
  if (button.dataset.key === correct) {
    button.classList.add('correct');
  } else {
    button.classList.add('incorrect');
    buttons.forEach(b => { if (b.dataset.key === correct) b.classList.add('correct'); });
  }
  const explanation = block.querySelector('.explanation');
  if (explanation) explanation.style.display = 'block';
}
"#;

/// Convert study materials to a complete HTML page.
pub fn to_html(materials: &StudyMaterials, options: &RenderOptions) -> Result<String> {
    let title = options.title_for(&materials.metadata.file_name);
    let sections = options.sections.sections();
    let active = if sections.contains(&options.active_section) {
        Some(options.active_section)
    } else {
        sections.first().copied()
    };

    let mut body = String::new();
    body.push_str(&format!("<h1>{}</h1>\n", escape_html(&title)));

    body.push_str("<div class=\"tags\">\n");
    for section in &sections {
        body.push_str(&format!(
            "  <button class=\"tag{}\" data-section=\"{}\" onclick=\"showSection('{}')\">{}</button>\n",
            active_class(active == Some(*section)),
            section.id(),
            section.id(),
            section.title()
        ));
    }
    body.push_str("</div>\n");

    let mut scripts = String::new();
    for section in &sections {
        body.push_str(&format!(
            "<div id=\"{}\" class=\"section{}\">\n",
            section.id(),
            active_class(active == Some(*section))
        ));
        match section {
            Section::Summary => push_list(
                &mut body,
                materials
                    .summary
                    .key_points()
                    .iter()
                    .map(|p| inline_markdown_to_html(p)),
            ),
            Section::Snippet => push_list(
                &mut body,
                materials
                    .summary
                    .snippet_sentences()
                    .iter()
                    .map(|s| escape_html(s)),
            ),
            Section::MindMap => {
                body.push_str("<div id=\"mindMapContainer\"></div>\n");
                body.push_str(&format!(
                    "<div class=\"mindmap-text\">{}</div>\n",
                    escape_html(&materials.mind_map.text)
                ));
                scripts.push_str(&network_script(&materials.mind_map.graph, &options.graph)?);
            }
            Section::Mcqs => push_mcqs(&mut body, &materials.mcqs),
            Section::StudyPlan => {
                body.push_str(&format!(
                    "<div class=\"plan\">{}</div>\n",
                    escape_html(&materials.study_plan.plain_text())
                ));
            }
        }
        body.push_str("</div>\n");
    }

    let needs_vis = sections.contains(&Section::MindMap);
    Ok(page(&title, &body, &scripts, needs_vis))
}

/// A standalone page holding only the mind-map network.
pub fn mind_map_html(graph: &Graph, options: &GraphOptions, title: &str) -> Result<String> {
    let body = format!(
        "<h1>{}</h1>\n<div id=\"mindMapContainer\"></div>\n",
        escape_html(title)
    );
    let script = network_script(graph, options)?;
    Ok(page(title, &body, &script, true))
}

fn active_class(active: bool) -> &'static str {
    if active {
        " active"
    } else {
        ""
    }
}

fn push_list(body: &mut String, items: impl Iterator<Item = String>) {
    body.push_str("<ul>\n");
    for item in items {
        body.push_str(&format!("  <li>{}</li>\n", item));
    }
    body.push_str("</ul>\n");
}

fn push_mcqs(body: &mut String, mcqs: &[McqItem]) {
    for (i, item) in mcqs.iter().enumerate() {
        match item {
            McqItem::Error(e) => {
                body.push_str(&format!(
                    "<p class=\"mcq-error\">{}</p>\n",
                    escape_html(&e.error)
                ));
            }
            McqItem::Question(q) => push_question(body, i + 1, q),
        }
    }
}

fn push_question(body: &mut String, number: usize, q: &Question) {
    body.push_str(&format!(
        "<div class=\"mcq-block\" data-answer=\"{}\">\n",
        escape_html(&q.answer)
    ));
    body.push_str(&format!(
        "  <p><strong>Q{}:</strong> {}</p>\n",
        number,
        escape_html(&q.question)
    ));
    for (key, text) in &q.options {
        body.push_str(&format!(
            "  <button data-key=\"{}\" onclick=\"answer(this)\">{}. {}</button>\n",
            escape_html(key),
            escape_html(key),
            escape_html(text)
        ));
    }
    if !q.explanation.trim().is_empty() {
        body.push_str(&format!(
            "  <div class=\"explanation\"><em>{}</em></div>\n",
            escape_html(q.explanation.trim())
        ));
    }
    body.push_str("</div>\n");
}

/// Script that draws the graph into `#mindMapContainer` and fits the view.
fn network_script(graph: &Graph, options: &GraphOptions) -> Result<String> {
    let nodes = embed_json(&graph.nodes)?;
    let edges = embed_json(&graph.edges)?;
    let settings = embed(options.to_json()?);

    Ok(format!(
        r#"
(function () {{
  const container = document.getElementById('mindMapContainer');
  const data = {{ nodes: new vis.DataSet({nodes}), edges: new vis.DataSet({edges}) }};
  const network = new vis.Network(container, data, {settings});
  setTimeout(() => network.fit(), {delay});
}})();
"#,
        nodes = nodes,
        edges = edges,
        settings = settings,
        delay = options.fit_delay_ms
    ))
}

fn embed_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value)
        .map(embed)
        .map_err(|e| Error::Render(format!("graph serialization error: {}", e)))
}

/// Keep embedded JSON from closing the surrounding script element.
fn embed(json: String) -> String {
    json.replace("</", "<\\/")
}

fn page(title: &str, body: &str, scripts: &str, needs_vis: bool) -> String {
    let vis = if needs_vis {
        format!("<script src=\"{}\"></script>\n", VIS_NETWORK_URL)
    } else {
        String::new()
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n{}</head>\n<body>\n{}<script>{}{}</script>\n</body>\n</html>\n",
        escape_html(title),
        STYLE,
        vis,
        body,
        SCRIPT,
        scripts
    )
}
