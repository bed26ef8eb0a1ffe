use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2025-12-10" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("ARXIV_DAILY_GIT_HASH");
    const COMMIT_DATE: &str = env!("ARXIV_DAILY_COMMIT_DATE");
    const IS_RELEASE: &str = env!("ARXIV_DAILY_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, COMMIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Styled when stdout is a color terminal
    #[default]
    Term,
    /// No colors
    Plain,
    /// HTML pages
    Html,
}

#[derive(Parser, Debug)]
#[command(
    name = "arxiv-daily",
    bin_name = "arxiv-daily",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Browse recent arXiv computer science papers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON data file with paper records (defaults to the bundled set)
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Term,
        help_heading = "Options"
    )]
    pub output: OutputFormat,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List categories with their paper counts
    #[command(display_order = 1)]
    Index,

    /// List the papers of a category
    #[command(alias = "cat", display_order = 2)]
    Category {
        /// Category code, e.g. cs.CV
        cat: Option<String>,

        /// Most recently published first
        #[arg(long)]
        newest: bool,
    },

    /// Show a paper with its citation
    #[command(alias = "show", display_order = 3)]
    Detail {
        /// arXiv id, e.g. 2512.08931v1
        id: Option<String>,
    },

    /// Print the BibTeX citation of a paper
    #[command(display_order = 4)]
    Cite {
        id: String,

        /// Also copy it to the system clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Render the page a request target selects, e.g. "category.html?cat=cs.CV"
    #[command(display_order = 5)]
    Open { target: String },

    /// Write the static site
    #[command(display_order = 6)]
    Build {
        /// Output directory (defaults to the configured output_dir)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
}
