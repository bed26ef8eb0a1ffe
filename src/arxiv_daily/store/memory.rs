use super::{validate_records, DataStore};
use crate::error::Result;
use crate::model::PaperRecord;

/// The data set compiled into the binary, used when no data file is configured.
const BUNDLED_PAPERS: &str = include_str!("../data/papers.json");

/// In-memory storage. Nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<PaperRecord>,
}

impl InMemoryStore {
    pub fn new(records: Vec<PaperRecord>) -> Result<Self> {
        validate_records(&records)?;
        Ok(Self { records })
    }

    /// Parses a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<PaperRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_PAPERS)
    }
}

impl DataStore for InMemoryStore {
    fn records(&self) -> &[PaperRecord] {
        &self.records
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::{DateTime, Duration, Utc};

    pub const BASE_PUBLISHED: &str = "2025-12-09T18:59:57Z";

    fn base_time() -> DateTime<Utc> {
        BASE_PUBLISHED.parse().expect("valid fixture timestamp")
    }

    /// A valid record with the given id and primary category.
    pub fn paper(id: &str, category: &str) -> PaperRecord {
        let published = base_time();
        PaperRecord {
            id: id.to_string(),
            title: format!("Paper {}", id),
            summary: format!("Summary of {}", id),
            authors: vec!["Ada Lovelace".to_string(), "Alan Turing".to_string()],
            categories: vec![category.to_string()],
            category: category.to_string(),
            published,
            updated: published,
            abstract_url: format!("https://arxiv.org/abs/{}", id),
            pdf_url: format!("https://arxiv.org/pdf/{}", id),
            comment: None,
        }
    }

    pub struct StoreFixture {
        records: Vec<PaperRecord>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                records: Vec::new(),
            }
        }

        pub fn with_paper(mut self, id: &str, category: &str) -> Self {
            self.records.push(paper(id, category));
            self
        }

        /// Adds a paper published `hours_earlier` hours before the base timestamp.
        pub fn with_paper_at(mut self, id: &str, category: &str, hours_earlier: i64) -> Self {
            let mut record = paper(id, category);
            record.published = base_time() - Duration::hours(hours_earlier);
            record.updated = record.published;
            self.records.push(record);
            self
        }

        pub fn with_record(mut self, record: PaperRecord) -> Self {
            self.records.push(record);
            self
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::new(self.records).expect("fixture records are valid")
        }
    }
}
