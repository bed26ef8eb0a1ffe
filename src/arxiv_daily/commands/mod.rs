use crate::citation::Citation;
use crate::model::PaperRecord;
use serde::Serialize;
use std::path::PathBuf;

pub mod build;
pub mod category;
pub mod cite;
pub mod detail;
pub mod index;

pub use category::ListOrder;
pub use detail::PaperDetail;
pub use index::CategorySummary;

pub const MISSING_CATEGORY: &str = "No category specified.";
pub const NO_PAPERS: &str = "No papers found for this category.";
pub const MISSING_ID: &str = "No paper ID specified.";
pub const NOT_FOUND: &str = "Paper not found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// The category query a listing was produced for, when one was given.
    pub query: Option<String>,
    pub listed_papers: Vec<PaperRecord>,
    pub detail: Option<PaperDetail>,
    pub categories: Vec<CategorySummary>,
    pub citation: Option<Citation>,
    pub written_files: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_query(mut self, query: Option<&str>) -> Self {
        self.query = query.map(str::to_string);
        self
    }

    pub fn with_listed_papers(mut self, papers: Vec<PaperRecord>) -> Self {
        self.listed_papers = papers;
        self
    }

    pub fn with_detail(mut self, detail: PaperDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_categories(mut self, categories: Vec<CategorySummary>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_citation(mut self, citation: Citation) -> Self {
        self.citation = Some(citation);
        self
    }

    pub fn with_written_files(mut self, files: Vec<PathBuf>) -> Self {
        self.written_files = files;
        self
    }
}
