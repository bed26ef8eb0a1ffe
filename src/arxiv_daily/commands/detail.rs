use super::{CmdMessage, CmdResult, MISSING_ID, NOT_FOUND};
use crate::citation::Citation;
use crate::error::Result;
use crate::model::PaperRecord;
use crate::store::DataStore;
use serde::Serialize;

/// A record projected for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperDetail {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    /// Long-form publication date, e.g. "December 9, 2025".
    pub published: String,
    pub summary: String,
    pub abstract_url: String,
    pub pdf_url: String,
    pub comment: Option<String>,
    pub category: String,
    pub categories: Vec<String>,
    pub citation: Citation,
    pub bibtex: String,
}

pub fn project(record: &PaperRecord) -> PaperDetail {
    let citation = Citation::for_record(record);
    PaperDetail {
        id: record.id.clone(),
        title: record.title.clone(),
        authors: record.authors.clone(),
        published: record.published_long(),
        summary: record.summary.clone(),
        abstract_url: record.abstract_url.clone(),
        pdf_url: record.pdf_url.clone(),
        comment: record.comment.clone(),
        category: record.category.clone(),
        categories: record.categories.clone(),
        bibtex: citation.to_bibtex(),
        citation,
    }
}

pub fn run<S: DataStore>(store: &S, id: Option<&str>) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(id) = id.filter(|id| !id.is_empty()) else {
        result.add_message(CmdMessage::warning(MISSING_ID));
        return Ok(result);
    };

    match store.get(id) {
        Some(record) => Ok(result.with_detail(project(record))),
        None => {
            tracing::debug!(id, "paper not found");
            result.add_message(CmdMessage::warning(NOT_FOUND));
            Ok(result)
        }
    }
}
