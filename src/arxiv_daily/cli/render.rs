//! # Rendering Module
//!
//! Turns command results into terminal text through `inkstand` templates and the
//! adaptive theme. Every function here is pure and takes the [`OutputMode`] explicitly;
//! the `print_*` helpers at the bottom are the only ones that write to stdout.
//!
//! Layout calculations (width, truncation, padding, wrapping) stay in Rust because they
//! need Unicode-aware widths. Templates decide placement and style names.

use super::styles::{names, DAILY_THEME};
use super::templates::{
    DETAIL_TEMPLATE, FILES_TEMPLATE, INDEX_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE,
};
use arxiv_daily::commands::{CmdMessage, CmdResult, MessageLevel};
use arxiv_daily::model::category_name;
use inkstand::{render_with_mode, OutputMode, ThemeChoice};
use serde::Serialize;
use std::path::PathBuf;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const WRAP_WIDTH: usize = 80;

#[derive(Serialize)]
struct CategoryLine {
    code: String,
    code_style: &'static str,
    padding: String,
    name: String,
    count: String,
}

#[derive(Serialize)]
struct IndexData<'a> {
    title: &'a str,
    categories: Vec<CategoryLine>,
}

#[derive(Serialize)]
struct PaperLine {
    index: String,
    indent: String,
    title: String,
    authors: String,
    id: String,
    published: String,
}

#[derive(Serialize)]
struct ListData {
    heading: Option<String>,
    papers: Vec<PaperLine>,
}

#[derive(Serialize)]
struct DetailEntry<'a> {
    title: &'a str,
    authors: String,
    published: &'a str,
    categories: String,
    comment: Option<&'a str>,
    summary_lines: Vec<String>,
    pdf_url: &'a str,
    abstract_url: &'a str,
    bibtex: &'a str,
}

#[derive(Serialize)]
struct DetailData<'a> {
    paper: DetailEntry<'a>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct FilesData {
    files: Vec<String>,
}

fn render_template<T: Serialize>(template: &str, data: &T, mode: OutputMode) -> String {
    render_with_mode(template, data, ThemeChoice::from(&*DAILY_THEME), mode)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Category table: code column padded to the widest code.
pub fn render_index(result: &CmdResult, title: &str, mode: OutputMode) -> String {
    let code_width = result
        .categories
        .iter()
        .map(|c| c.code.width())
        .max()
        .unwrap_or(0);

    let categories = result
        .categories
        .iter()
        .map(|c| CategoryLine {
            code: c.code.clone(),
            code_style: if c.featured {
                names::FEATURED
            } else {
                names::CODE
            },
            padding: " ".repeat(code_width.saturating_sub(c.code.width()) + 2),
            name: c.name.clone(),
            count: match c.count {
                1 => "1 paper".to_string(),
                n => format!("{} papers", n),
            },
        })
        .collect();

    render_template(INDEX_TEMPLATE, &IndexData { title, categories }, mode)
}

pub fn render_listing(result: &CmdResult, mode: OutputMode) -> String {
    let heading = result.query.as_deref().map(|code| match category_name(code) {
        Some(name) => format!("{} ({})", name, code),
        None => code.to_string(),
    });

    let count_width = result.listed_papers.len().to_string().len();
    let papers = result
        .listed_papers
        .iter()
        .enumerate()
        .map(|(i, paper)| {
            let index = format!("{:>width$}. ", i + 1, width = count_width);
            let indent = " ".repeat(index.width());
            let available = LINE_WIDTH.saturating_sub(index.width());
            PaperLine {
                title: truncate_to_width(&paper.title, available),
                authors: truncate_to_width(&paper.authors.join(", "), available),
                id: paper.id.clone(),
                published: paper.published.format("%Y-%m-%d").to_string(),
                index,
                indent,
            }
        })
        .collect();

    render_template(LIST_TEMPLATE, &ListData { heading, papers }, mode)
}

pub fn render_detail(result: &CmdResult, mode: OutputMode) -> String {
    let Some(detail) = &result.detail else {
        return String::new();
    };

    let paper = DetailEntry {
        title: &detail.title,
        authors: detail.authors.join(", "),
        published: &detail.published,
        categories: detail.categories.join(" "),
        comment: detail.comment.as_deref(),
        summary_lines: wrap_to_width(&detail.summary, WRAP_WIDTH),
        pdf_url: &detail.pdf_url,
        abstract_url: &detail.abstract_url,
        bibtex: &detail.bibtex,
    };
    render_template(DETAIL_TEMPLATE, &DetailData { paper }, mode)
}

pub fn render_messages(messages: &[CmdMessage], mode: OutputMode) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let messages = messages
        .iter()
        .map(|msg| MessageData {
            content: msg.content.clone(),
            style: match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            },
        })
        .collect();

    render_template(MESSAGES_TEMPLATE, &MessagesData { messages }, mode)
}

pub fn render_files(files: &[PathBuf], mode: OutputMode) -> String {
    let files = files.iter().map(|f| f.display().to_string()).collect();
    render_template(FILES_TEMPLATE, &FilesData { files }, mode)
}

/// Writes rendered output, adding the final newline templates drop.
pub fn print_output(output: &str) {
    if output.is_empty() {
        return;
    }
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}

pub fn print_messages(messages: &[CmdMessage], mode: OutputMode) {
    print_output(&render_messages(messages, mode));
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Greedy word wrap; words wider than the line are kept whole.
fn wrap_to_width(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if !line.is_empty() && line_width + 1 + word_width > max_width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if !line.is_empty() {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(word);
        line_width += word_width;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
