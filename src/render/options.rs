//! Rendering options and configuration.

use super::{CleanupOptions, GraphOptions};
use std::str::FromStr;

/// One of the output sections, matching the tabs of the study page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Key points
    Summary,
    /// Sentence snippet
    Snippet,
    /// Mind map
    MindMap,
    /// Multiple-choice questions
    Mcqs,
    /// Study plan
    StudyPlan,
}

impl Section {
    /// All sections, in display order.
    pub const ALL: [Section; 5] = [
        Section::Summary,
        Section::Snippet,
        Section::MindMap,
        Section::Mcqs,
        Section::StudyPlan,
    ];

    /// Stable identifier (HTML element id, CLI value).
    pub fn id(&self) -> &'static str {
        match self {
            Section::Summary => "summary",
            Section::Snippet => "snippet",
            Section::MindMap => "mindmap",
            Section::Mcqs => "mcq",
            Section::StudyPlan => "studyplan",
        }
    }

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Summary => "Summary",
            Section::Snippet => "Snippet",
            Section::MindMap => "Mind Map",
            Section::Mcqs => "Questions",
            Section::StudyPlan => "Study Plan",
        }
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "summary" => Ok(Section::Summary),
            "snippet" => Ok(Section::Snippet),
            "mindmap" | "mind-map" | "mind_map" => Ok(Section::MindMap),
            "mcq" | "mcqs" | "quiz" | "questions" => Ok(Section::Mcqs),
            "studyplan" | "study-plan" | "study_plan" | "plan" => Ok(Section::StudyPlan),
            other => Err(format!("Unknown section: {}", other)),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Which sections to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SectionSelection {
    /// Render every section
    #[default]
    All,
    /// Render only these sections (always in display order)
    Only(Vec<Section>),
}

impl SectionSelection {
    /// Check if a section should be rendered.
    pub fn includes(&self, section: Section) -> bool {
        match self {
            SectionSelection::All => true,
            SectionSelection::Only(sections) => sections.contains(&section),
        }
    }

    /// Selected sections in display order.
    pub fn sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| self.includes(*s))
            .collect()
    }

    /// Parse a selection string (e.g., "all", "summary,mcq").
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(SectionSelection::All);
        }

        let mut sections = Vec::new();
        for part in s.split(',').filter(|p| !p.trim().is_empty()) {
            let section: Section = part.parse()?;
            if !sections.contains(&section) {
                sections.push(section);
            }
        }

        Ok(SectionSelection::Only(sections))
    }
}

/// Options for rendering study materials.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Sections to render
    pub sections: SectionSelection,

    /// Include YAML frontmatter with metadata (Markdown only)
    pub include_frontmatter: bool,

    /// Text cleanup options
    pub cleanup: Option<CleanupOptions>,

    /// Mind-map renderer configuration (HTML only)
    pub graph: GraphOptions,

    /// Document title; defaults to one derived from the file name
    pub title: Option<String>,

    /// Section shown first in HTML output
    pub active_section: Section,

    /// Collect statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the section selection.
    pub fn with_sections(mut self, sections: SectionSelection) -> Self {
        self.sections = sections;
        self
    }

    /// Render only the given sections.
    pub fn with_section_list(mut self, sections: Vec<Section>) -> Self {
        self.sections = SectionSelection::Only(sections);
        self
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup_preset(mut self, preset: super::CleanupPreset) -> Self {
        self.cleanup = Some(CleanupOptions::from_preset(preset));
        self
    }

    /// Set mind-map renderer options.
    pub fn with_graph_options(mut self, graph: GraphOptions) -> Self {
        self.graph = graph;
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the section shown first.
    pub fn with_active_section(mut self, section: Section) -> Self {
        self.active_section = section;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Title to use for a document with the given file name.
    pub fn title_for(&self, file_name: &str) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Study notes: {}", file_name))
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sections: SectionSelection::All,
            include_frontmatter: false,
            cleanup: None,
            graph: GraphOptions::default(),
            title: None,
            active_section: Section::Summary,
            collect_stats: false,
        }
    }
}
