use crate::error::{DailyError, Result};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// One paper's metadata entry, as found in the data file.
///
/// Records are created once when the store loads and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// `<arxiv-number>v<version>`, e.g. `2512.08931v1`.
    pub id: String,
    pub title: String,
    /// The abstract text.
    pub summary: String,
    pub authors: Vec<String>,
    pub categories: Vec<String>,
    /// Primary category, one of `categories`.
    pub category: String,
    pub published: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    /// Link to the abstract page on arxiv.org.
    #[serde(rename = "abstract")]
    pub abstract_url: String,
    pub pdf_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl PaperRecord {
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }

    /// Long-form US English date, e.g. "December 9, 2025".
    pub fn published_long(&self) -> String {
        self.published.format("%B %-d, %Y").to_string()
    }

    /// Checks the per-record invariants. Uniqueness of ids is the store's job.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(DailyError::InvalidRecord {
                id: self.id.clone(),
                reason: "id is empty".to_string(),
            });
        }
        if !self.categories.iter().any(|c| c == &self.category) {
            return Err(DailyError::InvalidRecord {
                id: self.id.clone(),
                reason: format!(
                    "primary category {} is not one of [{}]",
                    self.category,
                    self.categories.join(", ")
                ),
            });
        }
        Ok(())
    }
}

const CATEGORY_NAMES: &[(&str, &str)] = &[
    ("cs.AI", "Artificial Intelligence"),
    ("cs.AR", "Hardware Architecture"),
    ("cs.CC", "Computational Complexity"),
    ("cs.CL", "Computation and Language"),
    ("cs.CR", "Cryptography and Security"),
    ("cs.CV", "Computer Vision and Pattern Recognition"),
    ("cs.DB", "Databases"),
    ("cs.DC", "Distributed, Parallel, and Cluster Computing"),
    ("cs.DS", "Data Structures and Algorithms"),
    ("cs.GR", "Graphics"),
    ("cs.HC", "Human-Computer Interaction"),
    ("cs.IR", "Information Retrieval"),
    ("cs.LG", "Machine Learning"),
    ("cs.MA", "Multiagent Systems"),
    ("cs.NE", "Neural and Evolutionary Computing"),
    ("cs.NI", "Networking and Internet Architecture"),
    ("cs.OS", "Operating Systems"),
    ("cs.PL", "Programming Languages"),
    ("cs.RO", "Robotics"),
    ("cs.SE", "Software Engineering"),
];

/// Display name for a well-known arXiv CS category code.
pub fn category_name(code: &str) -> Option<&'static str> {
    CATEGORY_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::paper;

    #[test]
    fn deserializes_data_file_fields() {
        let json = r#"{
            "id": "2512.08931v1",
            "title": "Astra",
            "summary": "Abstract text.",
            "authors": ["Yixuan Zhu"],
            "categories": ["cs.CV", "cs.AI"],
            "category": "cs.CV",
            "published": "2025-12-09T18:59:57Z",
            "updated": "2025-12-09T18:59:57Z",
            "abstract": "https://arxiv.org/abs/2512.08931v1",
            "pdf_url": "https://arxiv.org/pdf/2512.08931v1"
        }"#;

        let record: PaperRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.abstract_url, "https://arxiv.org/abs/2512.08931v1");
        assert_eq!(record.comment, None);
        assert_eq!(record.published_year(), 2025);
    }

    #[test]
    fn formats_long_date() {
        let record = paper("2512.08931v1", "cs.CV");
        assert_eq!(record.published_long(), "December 9, 2025");
    }

    #[test]
    fn rejects_primary_category_outside_categories() {
        let mut record = paper("2512.08931v1", "cs.CV");
        record.categories = vec!["cs.AI".to_string()];
        assert!(matches!(
            record.validate(),
            Err(DailyError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn looks_up_category_names() {
        assert_eq!(category_name("cs.RO"), Some("Robotics"));
        assert_eq!(category_name("cs.XX"), None);
    }
}
