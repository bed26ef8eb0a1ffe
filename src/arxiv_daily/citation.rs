//! # Citations
//!
//! Every detail view carries a BibTeX `@article` entry derived from the record alone:
//!
//! - **key**: the id with every non-alphanumeric character removed (`2512.08931v1` ->
//!   `251208931v1`)
//! - **bare id**: the id cut at its first `v` (`2512.08931v1` -> `2512.08931`)
//! - **author**: each name rewritten `Last, First Middle`, joined with ` and `
//! - **journal** / **url**: built from the bare id
//! - **year**: the year of the `published` timestamp
//!
//! Single-token author names (`"Smith"`) pass through unchanged.

use crate::model::PaperRecord;
use serde::Serialize;
use std::fmt;

pub const ABS_URL_PREFIX: &str = "https://arxiv.org/abs/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Citation {
    pub key: String,
    pub title: String,
    pub author: String,
    pub journal: String,
    pub year: i32,
    pub url: String,
}

impl Citation {
    pub fn for_record(record: &PaperRecord) -> Self {
        let bare = bare_identifier(&record.id);
        Self {
            key: citation_key(&record.id),
            title: record.title.clone(),
            author: format_authors(&record.authors),
            journal: format!("arXiv preprint arXiv:{}", bare),
            year: record.published_year(),
            url: format!("{}{}", ABS_URL_PREFIX, bare),
        }
    }

    /// The BibTeX text, as shown in the citation block and copied to the clipboard.
    pub fn to_bibtex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@article{{{},", self.key)?;
        writeln!(f, "  title={{{}}},", self.title)?;
        writeln!(f, "  author={{{}}},", self.author)?;
        writeln!(f, "  journal={{{}}},", self.journal)?;
        writeln!(f, "  year={{{}}},", self.year)?;
        writeln!(f, "  url={{{}}}", self.url)?;
        write!(f, "}}")
    }
}

pub fn citation_key(id: &str) -> String {
    id.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// The id without its version suffix.
pub fn bare_identifier(id: &str) -> &str {
    id.split('v').next().unwrap_or(id)
}

/// `"First Middle Last"` -> `"Last, First Middle"`.
pub fn format_author(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.split_last() {
        Some((last, given)) if !given.is_empty() => format!("{}, {}", last, given.join(" ")),
        _ => name.to_string(),
    }
}

pub fn format_authors(authors: &[String]) -> String {
    authors
        .iter()
        .map(|a| format_author(a))
        .collect::<Vec<_>>()
        .join(" and ")
}
