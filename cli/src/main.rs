//! pdfstudy CLI - study materials from a PDF

mod quiz;
mod typing;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfstudy::error::{FAILURE_MESSAGE, MISSING_INPUT_MESSAGE};
use pdfstudy::render::{self, Direction};
use pdfstudy::{
    ClientOptions, CleanupPreset, GraphOptions, JsonFormat, RenderOptions, Section,
    SectionSelection, StudyClient, StudyMaterials, UploadFile, DEFAULT_SERVER_URL,
};

#[derive(Parser)]
#[command(name = "pdfstudy")]
#[command(version)]
#[command(about = "Turn a PDF into a summary, mind map, quiz, and study plan", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Study service base URL
    #[arg(long, global = true, env = "PDFSTUDY_SERVER", default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Upload without checking the PDF header
    #[arg(long, global = true)]
    no_validate: bool,

    /// Text cleanup preset
    #[arg(long, value_enum)]
    cleanup: Option<CleanupLevel>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch everything and write Markdown, text, JSON, and the mind-map page
    Process {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,
    },

    /// Render study materials as Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include YAML frontmatter
        #[arg(short, long)]
        frontmatter: bool,

        /// Sections to render (e.g., "summary,mcq")
        #[arg(long, value_name = "LIST")]
        sections: Option<String>,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,
    },

    /// Render study materials as plain text
    Text {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Sections to render (e.g., "summary,mcq")
        #[arg(long, value_name = "LIST")]
        sections: Option<String>,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,

        /// Type the output one character at a time (milliseconds per character)
        #[arg(long, value_name = "MS", num_args = 0..=1, default_missing_value = "30")]
        typing: Option<u64>,
    },

    /// Render study materials as JSON
    Json {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Render study materials as a self-contained HTML page
    Html {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Sections to render (e.g., "summary,mcq")
        #[arg(long, value_name = "LIST")]
        sections: Option<String>,

        /// Mind-map layout direction
        #[arg(long, value_enum, default_value = "ud")]
        direction: LayoutDirection,
    },

    /// Show a single section
    Show {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Section to show (summary, snippet, mindmap, mcq, studyplan)
        #[arg(short, long, default_value = "summary")]
        section: Section,

        /// Copy the section text to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Take the multiple-choice quiz interactively
    Quiz {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Parse a mind-map outline offline
    Mindmap {
        /// Outline file, or "-" for stdin
        #[arg(value_name = "OUTLINE")]
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "tree")]
        format: MindMapFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Layout direction for HTML output
        #[arg(long, value_enum, default_value = "ud")]
        direction: LayoutDirection,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CleanupLevel {
    /// Minimal cleanup (Unicode normalization only)
    Minimal,
    /// Standard cleanup (default)
    Standard,
    /// Aggressive cleanup (also strips emphasis markers)
    Aggressive,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
            CleanupLevel::Aggressive => CleanupPreset::Aggressive,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LayoutDirection {
    /// Roots on top
    Ud,
    /// Roots at the bottom
    Du,
    /// Roots on the left
    Lr,
    /// Roots on the right
    Rl,
}

impl From<LayoutDirection> for Direction {
    fn from(direction: LayoutDirection) -> Self {
        match direction {
            LayoutDirection::Ud => Direction::UpDown,
            LayoutDirection::Du => Direction::DownUp,
            LayoutDirection::Lr => Direction::LeftRight,
            LayoutDirection::Rl => Direction::RightLeft,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum MindMapFormat {
    /// Indented terminal tree
    Tree,
    /// Node and edge lists
    Json,
    /// Standalone interactive page
    Html,
}

/// How to reach the study service.
struct Connection {
    server: String,
    validate: bool,
}

impl Connection {
    fn options(&self) -> ClientOptions {
        ClientOptions::new()
            .with_base_url(self.server.clone())
            .with_validation(self.validate)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let conn = Connection {
        server: cli.server,
        validate: !cli.no_validate,
    };

    let result = match cli.command {
        Some(Commands::Process {
            input,
            output,
            cleanup,
        }) => cmd_process(&conn, Some(input.as_path()), output.as_deref(), cleanup),
        Some(Commands::Markdown {
            input,
            output,
            frontmatter,
            sections,
            cleanup,
        }) => cmd_markdown(
            &conn,
            &input,
            output.as_deref(),
            frontmatter,
            sections.as_deref(),
            cleanup,
        ),
        Some(Commands::Text {
            input,
            output,
            sections,
            cleanup,
            typing,
        }) => cmd_text(
            &conn,
            &input,
            output.as_deref(),
            sections.as_deref(),
            cleanup,
            typing,
        ),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&conn, &input, output.as_deref(), compact),
        Some(Commands::Html {
            input,
            output,
            sections,
            direction,
        }) => cmd_html(
            &conn,
            &input,
            output.as_deref(),
            sections.as_deref(),
            direction,
        ),
        Some(Commands::Show {
            input,
            section,
            copy,
        }) => cmd_show(&conn, &input, section, copy),
        Some(Commands::Quiz { input }) => cmd_quiz(&conn, &input),
        Some(Commands::Mindmap {
            input,
            format,
            output,
            direction,
        }) => cmd_mindmap(&input, format, output.as_deref(), direction),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_process(&conn, cli.input.as_deref(), cli.output.as_deref(), cli.cleanup),
    };

    if let Err(e) = result {
        report(e.as_ref());
        std::process::exit(1);
    }
}

fn report(e: &(dyn std::error::Error + 'static)) {
    log::error!("{}", e);

    let message = user_message(e);
    if message == MISSING_INPUT_MESSAGE {
        eprintln!("{}", message.yellow());
        eprintln!("Usage: pdfstudy <FILE> [OUTPUT]");
        eprintln!("       pdfstudy --help for more information");
    } else if message == FAILURE_MESSAGE {
        eprintln!("{} {}", "❌".red(), message.red());
    } else {
        eprintln!("{}: {}", "Error".red().bold(), message);
    }
}

/// What the user sees for an error; details only go to the log.
///
/// Library and I/O errors collapse into the generic lines. Anything else is
/// an argument problem and is shown as is.
fn user_message(e: &(dyn std::error::Error + 'static)) -> String {
    if let Some(err) = e.downcast_ref::<pdfstudy::Error>() {
        err.user_message().to_string()
    } else if e.is::<io::Error>() {
        FAILURE_MESSAGE.to_string()
    } else {
        e.to_string()
    }
}

/// Upload the file to every endpoint behind a spinner.
fn fetch(conn: &Connection, input: Option<&Path>) -> Result<StudyMaterials, Box<dyn std::error::Error>> {
    let file = UploadFile::select(input, conn.validate)?;
    let client = StudyClient::new(conn.options())?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message("⏳ Uploading and processing...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let rt = tokio::runtime::Runtime::new()?;
    match rt.block_on(client.process(&file)) {
        Ok(materials) => {
            spinner.finish_with_message(format!("{}", "✅ All done!".green()));
            Ok(materials)
        }
        Err(e) => {
            spinner.finish_and_clear();
            Err(e.into())
        }
    }
}

fn render_options(
    sections: Option<&str>,
    cleanup: Option<CleanupLevel>,
) -> Result<RenderOptions, Box<dyn std::error::Error>> {
    let mut options = RenderOptions::new();

    if let Some(list) = sections {
        let selection =
            SectionSelection::parse(list).map_err(|e| format!("Invalid sections: {}", e))?;
        options = options.with_sections(selection);
    }
    if let Some(level) = cleanup {
        options = options.with_cleanup_preset(level.into());
    }

    Ok(options)
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_process(
    conn: &Connection,
    input: Option<&Path>,
    output: Option<&Path>,
    cleanup: Option<CleanupLevel>,
) -> Result<(), Box<dyn std::error::Error>> {
    let materials = fetch(conn, input)?;

    let output_dir = match (output, input) {
        (Some(dir), _) => dir.to_path_buf(),
        (None, Some(input)) => {
            let stem = input.file_stem().unwrap_or_default().to_string_lossy();
            PathBuf::from(format!("{}_study", stem))
        }
        (None, None) => PathBuf::from("study"),
    };
    fs::create_dir_all(&output_dir)?;

    let options = render_options(None, cleanup)?.with_frontmatter(true);

    let markdown = render::to_markdown(&materials, &options)?;
    fs::write(output_dir.join("study.md"), &markdown)?;

    let text = render::to_text(&materials, &options)?;
    fs::write(output_dir.join("study.txt"), &text)?;

    let json = render::to_json(&materials, JsonFormat::Pretty)?;
    fs::write(output_dir.join("study.json"), &json)?;

    let title = format!("Mind map: {}", materials.metadata.file_name);
    let html = render::mind_map_html(&materials.mind_map.graph, &options.graph, &title)?;
    fs::write(output_dir.join("mindmap.html"), &html)?;

    println!("\n{} {}", "Output files:".green().bold(), output_dir.display());
    println!("  {} study.md", "├─".dimmed());
    println!("  {} study.txt", "├─".dimmed());
    println!("  {} study.json", "├─".dimmed());
    println!("  {} mindmap.html", "└─".dimmed());

    Ok(())
}

fn cmd_markdown(
    conn: &Connection,
    input: &Path,
    output: Option<&Path>,
    frontmatter: bool,
    sections: Option<&str>,
    cleanup: Option<CleanupLevel>,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = render_options(sections, cleanup)?.with_frontmatter(frontmatter);
    let materials = fetch(conn, Some(input))?;

    let markdown = render::to_markdown(&materials, &options)?;
    write_or_print(output, &markdown)
}

fn cmd_text(
    conn: &Connection,
    input: &Path,
    output: Option<&Path>,
    sections: Option<&str>,
    cleanup: Option<CleanupLevel>,
    typing: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = render_options(sections, cleanup)?;
    let materials = fetch(conn, Some(input))?;

    let text = render::to_text(&materials, &options)?;

    match (output, typing) {
        (None, Some(ms)) => {
            let mut stdout = io::stdout().lock();
            typing::type_text(&mut stdout, &text, Duration::from_millis(ms))?;
            println!();
            Ok(())
        }
        _ => write_or_print(output, &text),
    }
}

fn cmd_json(
    conn: &Connection,
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let materials = fetch(conn, Some(input))?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = render::to_json(&materials, format)?;
    write_or_print(output, &json)
}

fn cmd_html(
    conn: &Connection,
    input: &Path,
    output: Option<&Path>,
    sections: Option<&str>,
    direction: LayoutDirection,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = render_options(sections, None)?
        .with_graph_options(GraphOptions::new().with_direction(direction.into()));
    let materials = fetch(conn, Some(input))?;

    let html = render::to_html(&materials, &options)?;
    write_or_print(output, &html)
}

fn cmd_show(
    conn: &Connection,
    input: &Path,
    section: Section,
    copy: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let materials = fetch(conn, Some(input))?;
    let text = render::section_text(&materials, section);

    println!("{}", section.title().cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}", text.trim_end());

    if copy {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        println!("\n{}", "Copied to clipboard!".green());
    }

    Ok(())
}

fn cmd_quiz(conn: &Connection, input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let materials = fetch(conn, Some(input))?;

    if materials.mcqs.is_empty() {
        println!("{}", "No questions were generated.".yellow());
        return Ok(());
    }

    println!();
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout().lock();
    let score = quiz::run_quiz(&materials.mcqs, &mut reader, &mut stdout)?;
    log::debug!("quiz finished: {}/{} answered", score.answered, score.total);

    Ok(())
}

fn cmd_mindmap(
    input: &Path,
    format: MindMapFormat,
    output: Option<&Path>,
    direction: LayoutDirection,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(input)?
    };

    let graph = pdfstudy::parse_mind_map(&text);
    log::info!(
        "parsed {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let content = match format {
        MindMapFormat::Tree => render::to_tree(&graph).trim_end().to_string(),
        MindMapFormat::Json => render::graph_to_json(&graph, JsonFormat::Pretty)?,
        MindMapFormat::Html => {
            let title = match input.file_stem() {
                Some(stem) if input != Path::new("-") => {
                    format!("Mind map: {}", stem.to_string_lossy())
                }
                _ => "Mind map".to_string(),
            };
            let options = GraphOptions::new().with_direction(direction.into());
            render::mind_map_html(&graph, &options, &title)?
        }
    };

    write_or_print(output, &content)
}

fn cmd_version() {
    println!("{} {}", "pdfstudy".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Summaries, mind maps, quizzes, and study plans from a PDF");
    println!();
    println!("Default server: {}", DEFAULT_SERVER_URL.dimmed());
    println!("License: MIT");
}
