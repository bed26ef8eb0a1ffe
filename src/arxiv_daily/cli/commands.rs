//! # CLI Layer
//!
//! The binary is **one client** of the library. This layer is the only place that:
//! - Parses arguments
//! - Sets up logging
//! - Writes to stdout or stderr
//! - Decides the exit status (through `main.rs`)
//!
//! ## Structure
//!
//! - `run()`: parse, set up logging and context, dispatch
//! - `init_context()`: loads configuration and picks the data source
//! - `handle_*()`: call the API, then render the result in the requested format
//!
//! View conditions ("Paper not found." and friends) arrive as messages and are printed
//! like any other output; only real errors propagate out of `run()`.

use super::render::{
    print_messages, print_output, render_detail, render_files, render_index, render_listing,
};
use super::setup::{Cli, Commands, OutputFormat};
use arxiv_daily::api::DailyApi;
use arxiv_daily::clipboard::{copy_to_clipboard, CopyFeedback};
use arxiv_daily::commands::{CmdMessage, CmdResult, ListOrder};
use arxiv_daily::config::DailyConfig;
use arxiv_daily::error::Result;
use arxiv_daily::site::{LinkStyle, Route, SiteRenderer};
use arxiv_daily::store::fs::FileStore;
use arxiv_daily::store::memory::InMemoryStore;
use arxiv_daily::store::DataStore;
use clap::Parser;
use directories::ProjectDirs;
use inkstand::OutputMode;
use std::path::PathBuf;
use std::time::Instant;

struct AppContext {
    api: DailyApi<Box<dyn DataStore>>,
    output: OutputFormat,
}

impl AppContext {
    fn mode(&self) -> OutputMode {
        match self.output {
            OutputFormat::Term => OutputMode::detect(),
            OutputFormat::Plain => OutputMode::Plain,
            OutputFormat::Html => OutputMode::Html,
        }
    }

    fn site(&self) -> Result<SiteRenderer> {
        SiteRenderer::new(self.api.site_options(LinkStyle::Query))
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command.unwrap_or(Commands::Index) {
        Commands::Index => handle_index(&ctx),
        Commands::Category { cat, newest } => handle_category(&ctx, cat, newest),
        Commands::Detail { id } => handle_detail(&ctx, id),
        Commands::Cite { id, copy } => handle_cite(&ctx, &id, copy),
        Commands::Open { target } => handle_open(&ctx, &target),
        Commands::Build { out } => handle_build(&ctx, out),
    }
}

/// `RUST_LOG` wins; otherwise the `-v` count picks the level. Logs go to stderr.
fn init_logging(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let global_dir = ProjectDirs::from("org", "arxiv-daily", "arxiv-daily")
        .map(|dirs| dirs.config_dir().to_path_buf());

    let mut config = DailyConfig::load(&cwd, global_dir.as_deref())?;
    if let Some(data) = &cli.data {
        config.data_file = Some(data.clone());
    }

    let store: Box<dyn DataStore> = match &config.data_file {
        Some(path) => Box::new(FileStore::open(path)?),
        None => Box::new(InMemoryStore::bundled()?),
    };
    tracing::info!(records = store.len(), "records loaded");

    Ok(AppContext {
        api: DailyApi::new(store, config),
        output: cli.output,
    })
}

fn handle_index(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.index()?;
    show_index(ctx, &result)
}

fn handle_category(ctx: &AppContext, cat: Option<String>, newest: bool) -> Result<()> {
    let order = newest.then_some(ListOrder::Newest);
    let result = ctx.api.category(cat.as_deref(), order)?;
    show_category(ctx, &result)
}

fn handle_detail(ctx: &AppContext, id: Option<String>) -> Result<()> {
    let result = ctx.api.detail(id.as_deref())?;
    show_detail(ctx, &result)
}

fn handle_cite(ctx: &AppContext, id: &str, copy: bool) -> Result<()> {
    let mut result = ctx.api.cite(id)?;

    if let Some(citation) = &result.citation {
        let bibtex = citation.to_bibtex();
        println!("{}", bibtex);

        if copy {
            let mut feedback = CopyFeedback::new(ctx.api.config().copy_reset());
            let outcome = copy_to_clipboard(&bibtex);
            feedback.record(&outcome, Instant::now());
            match outcome {
                Ok(()) => result.add_message(CmdMessage::success(feedback.label())),
                Err(e) => {
                    tracing::warn!(error = %e, "clipboard write failed");
                    result.add_message(CmdMessage::warning(format!(
                        "Could not copy to clipboard: {}",
                        e
                    )));
                }
            }
        }
    }

    print_messages(&result.messages, ctx.mode());
    Ok(())
}

fn handle_open(ctx: &AppContext, target: &str) -> Result<()> {
    let (route, result) = ctx.api.open(target)?;
    match route {
        Route::Index => show_index(ctx, &result),
        Route::Category { .. } => show_category(ctx, &result),
        Route::Detail { .. } => show_detail(ctx, &result),
        Route::Unknown(_) => {
            print_messages(&result.messages, OutputMode::Plain);
            Ok(())
        }
    }
}

fn handle_build(ctx: &AppContext, out: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.build_site(out.as_deref())?;
    let mode = match ctx.mode() {
        OutputMode::Html => OutputMode::Plain,
        mode => mode,
    };
    print_messages(&result.messages, mode);
    print_output(&render_files(&result.written_files, mode));
    Ok(())
}

fn show_index(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    match ctx.mode() {
        OutputMode::Html => print_output(&ctx.site()?.render_index(result)?),
        mode => {
            let title = &ctx.api.config().site_title;
            print_output(&render_index(result, title, mode));
            print_messages(&result.messages, mode);
        }
    }
    Ok(())
}

fn show_category(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    match ctx.mode() {
        OutputMode::Html => print_output(&ctx.site()?.render_category(result)?),
        mode => {
            print_output(&render_listing(result, mode));
            print_messages(&result.messages, mode);
        }
    }
    Ok(())
}

fn show_detail(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    match ctx.mode() {
        OutputMode::Html => print_output(&ctx.site()?.render_detail(result)?),
        mode => {
            print_output(&render_detail(result, mode));
            print_messages(&result.messages, mode);
        }
    }
    Ok(())
}
