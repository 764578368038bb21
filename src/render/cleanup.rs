//! Cleanup pipeline for text produced by the study service.
//!
//! The service relays language-model output, which arrives with code fences,
//! stray ligatures from the source PDF, and uneven blank lines. Cleanup runs
//! on rendered output only; the outline fed to the parser is never touched.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Cleanup preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPreset {
    /// Minimal cleanup: Unicode NFC normalization only
    Minimal,
    /// Standard cleanup: NFC + ligatures + fences + whitespace
    #[default]
    Standard,
    /// Aggressive cleanup: Standard plus emphasis markers removed
    Aggressive,
}

/// Options for text cleanup.
#[derive(Debug, Clone)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Fix ligatures (fi, fl, etc.)
    pub fix_ligatures: bool,

    /// Remove Unicode replacement character (U+FFFD)
    pub remove_replacement_char: bool,

    /// Remove Markdown code fence lines (```, ```json)
    pub strip_code_fences: bool,

    /// Remove `**bold**` and `*italic*` markers, keeping the text
    pub strip_emphasis: bool,

    /// Remove trailing spaces and collapse runs of 3+ spaces
    pub normalize_whitespace: bool,

    /// Maximum consecutive newlines (0 = unlimited)
    pub max_consecutive_newlines: u8,

    /// Preserve YAML frontmatter during cleanup
    pub preserve_frontmatter: bool,
}

impl CleanupOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        match preset {
            CleanupPreset::Minimal => Self::minimal(),
            CleanupPreset::Standard => Self::standard(),
            CleanupPreset::Aggressive => Self::aggressive(),
        }
    }

    /// Minimal cleanup options.
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: false,
            remove_replacement_char: false,
            strip_code_fences: false,
            strip_emphasis: false,
            normalize_whitespace: false,
            max_consecutive_newlines: 0,
            preserve_frontmatter: true,
        }
    }

    /// Standard cleanup options.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: true,
            remove_replacement_char: true,
            strip_code_fences: true,
            strip_emphasis: false,
            normalize_whitespace: true,
            max_consecutive_newlines: 2,
            preserve_frontmatter: true,
        }
    }

    /// Aggressive cleanup options.
    pub fn aggressive() -> Self {
        Self {
            strip_emphasis: true,
            max_consecutive_newlines: 1,
            ..Self::standard()
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Text cleanup pipeline.
pub struct CleanupPipeline {
    options: CleanupOptions,
    fence_regex: Regex,
    bold_regex: Regex,
    italic_regex: Regex,
    ligature_map: Vec<(&'static str, &'static str)>,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self {
            options,
            fence_regex: Regex::new(r"(?m)^[ \t]*```[\w-]*[ \t]*\n?").unwrap(),
            bold_regex: Regex::new(r"\*\*(.+?)\*\*").unwrap(),
            italic_regex: Regex::new(r"\*([^*\n]+?)\*").unwrap(),
            ligature_map: vec![
                ("\u{FB00}", "ff"),
                ("\u{FB01}", "fi"),
                ("\u{FB02}", "fl"),
                ("\u{FB03}", "ffi"),
                ("\u{FB04}", "ffl"),
                ("\u{FB05}", "st"),
                ("\u{FB06}", "st"),
            ],
        }
    }

    /// Create a pipeline from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        Self::new(CleanupOptions::from_preset(preset))
    }

    /// Process text through the cleanup pipeline.
    pub fn process(&self, text: &str) -> String {
        let frontmatter = if self.options.preserve_frontmatter {
            extract_frontmatter(text)
        } else {
            None
        };

        match frontmatter {
            Some((fm, content)) => format!("{}\n{}", fm, self.process_content(content)),
            None => self.process_content(text),
        }
    }

    fn process_content(&self, text: &str) -> String {
        let mut result = if self.options.normalize_unicode {
            text.nfc().collect::<String>()
        } else {
            text.to_string()
        };

        if self.options.fix_ligatures {
            for (ligature, replacement) in &self.ligature_map {
                result = result.replace(ligature, replacement);
            }
        }

        if self.options.remove_replacement_char {
            result = result.replace('\u{FFFD}', "");
        }

        if self.options.strip_code_fences {
            result = self.fence_regex.replace_all(&result, "").to_string();
        }

        if self.options.strip_emphasis {
            result = self.bold_regex.replace_all(&result, "$1").to_string();
            result = self.italic_regex.replace_all(&result, "$1").to_string();
        }

        if self.options.normalize_whitespace {
            result = normalize_whitespace(&result);
        }

        if self.options.max_consecutive_newlines > 0 {
            result = limit_newlines(&result, self.options.max_consecutive_newlines as usize);
        }

        result
    }
}

impl Default for CleanupPipeline {
    fn default() -> Self {
        Self::new(CleanupOptions::default())
    }
}

const TREE_CHARS: &str = "│├└─";

/// Split `---`-delimited frontmatter from the rest of the text.
fn extract_frontmatter(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix("---\n")?;
    let end = rest.find("\n---\n")?;
    let split = 4 + end + 4;
    Some((&text[..split], &text[split + 1..]))
}

/// Collapse inner runs of spaces.
///
/// The leading indent, including tree connectors (`│  └─ `), carries the
/// nesting and is kept as-is.
fn normalize_whitespace(text: &str) -> String {
    let runs = Regex::new(r"[ ]{3,}").unwrap();
    text.lines()
        .map(|line| {
            let line = line.trim_end();
            let body =
                line.trim_start_matches(|c: char| c.is_whitespace() || TREE_CHARS.contains(c));
            let indent = &line[..line.len() - body.len()];
            format!("{}{}", indent, runs.replace_all(body, " "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn limit_newlines(text: &str, max: usize) -> String {
    let pattern = format!(r"\n{{{},}}", max + 1);
    let re = Regex::new(&pattern).unwrap();
    re.replace_all(text, "\n".repeat(max).as_str()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_normalization() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Minimal);
        // "e" + combining acute accent composes to "é"
        assert_eq!(pipeline.process("caf\u{0065}\u{0301}"), "caf\u{00E9}");
    }

    #[test]
    fn test_ligature_fix() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Standard);
        assert_eq!(pipeline.process("\u{FB01}nal e\u{FB00}ort"), "final effort");
    }

    #[test]
    fn test_strip_code_fences() {
        let pipeline = CleanupPipeline::default();
        let text = "```json\n[{\"q\": 1}]\n```\n";
        assert_eq!(pipeline.process(text), "[{\"q\": 1}]");
    }

    #[test]
    fn test_strip_emphasis_only_when_aggressive() {
        let text = "**Day 1:** read *carefully*";
        assert_eq!(CleanupPipeline::default().process(text), text);
        assert_eq!(
            CleanupPipeline::from_preset(CleanupPreset::Aggressive).process(text),
            "Day 1: read carefully"
        );
    }

    #[test]
    fn test_limit_newlines() {
        let pipeline = CleanupPipeline::default();
        assert_eq!(pipeline.process("a\n\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_whitespace() {
        let pipeline = CleanupPipeline::default();
        assert_eq!(pipeline.process("a     b   \nc"), "a b\nc");
    }

    #[test]
    fn test_whitespace_keeps_indentation() {
        let pipeline = CleanupPipeline::default();
        let text = "- a\n  - b\n    - c     d\n   A. yes";
        assert_eq!(
            pipeline.process(text),
            "- a\n  - b\n    - c d\n   A. yes"
        );
        let tree = "A\n├─ B\n│     └─ C\n└─ D";
        assert_eq!(pipeline.process(tree), tree);
    }

    #[test]
    fn test_frontmatter_preservation() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Aggressive);
        let text = "---\ntitle: \"**x**\"\n---\n\n**body**";
        let result = pipeline.process(text);
        assert!(result.starts_with("---\ntitle: \"**x**\"\n---\n"));
        assert!(result.ends_with("body"));
        assert!(!result.ends_with("**body**"));
    }
}
