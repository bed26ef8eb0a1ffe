//! Category listing.
//!
//! Matching is textual containment on the primary `category` field, so a query of
//! `cs.C` also lists `cs.CV` and `cs.CL` papers. An absent or empty query lists nothing.

use super::{CmdMessage, CmdResult, MISSING_CATEGORY, NO_PAPERS};
use crate::error::Result;
use crate::model::PaperRecord;
use crate::store::DataStore;
use serde::{Deserialize, Serialize};

/// Order of a listing after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
    /// Data file order.
    #[default]
    Store,
    /// Most recently published first; equal timestamps keep data file order.
    Newest,
}

impl ListOrder {
    pub fn apply(self, papers: &mut [PaperRecord]) {
        match self {
            ListOrder::Store => {}
            ListOrder::Newest => papers.sort_by(|a, b| b.published.cmp(&a.published)),
        }
    }
}

/// Records whose primary category contains `query`, in input order.
pub fn filter<'a>(
    records: &'a [PaperRecord],
    query: Option<&'a str>,
) -> impl Iterator<Item = &'a PaperRecord> + 'a {
    let query = query.unwrap_or_default();
    records
        .iter()
        .filter(move |r| !query.is_empty() && r.category.contains(query))
}

pub fn run<S: DataStore>(store: &S, query: Option<&str>, order: ListOrder) -> Result<CmdResult> {
    let query = query.filter(|q| !q.is_empty());
    let mut result = CmdResult::default().with_query(query);

    let Some(query) = query else {
        result.add_message(CmdMessage::warning(MISSING_CATEGORY));
        return Ok(result);
    };

    let mut listed: Vec<PaperRecord> = filter(store.records(), Some(query)).cloned().collect();
    order.apply(&mut listed);
    tracing::debug!(query, matches = listed.len(), ?order, "filtered category");

    if listed.is_empty() {
        result.add_message(CmdMessage::info(NO_PAPERS));
    }
    Ok(result.with_listed_papers(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn store() -> InMemoryStore {
        StoreFixture::new()
            .with_paper("2512.00001v1", "cs.CV")
            .with_paper("2512.00002v1", "cs.AI")
            .with_paper("2512.00003v1", "cs.CV")
            .with_paper("2512.00004v1", "cs.CL")
            .build()
    }

    fn ids(result: &CmdResult) -> Vec<&str> {
        result.listed_papers.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn every_present_category_returns_only_its_records_in_order() {
        let store = store();
        for code in ["cs.CV", "cs.AI", "cs.CL"] {
            let matched: Vec<_> = filter(store.records(), Some(code)).collect();
            assert!(!matched.is_empty());
            assert!(matched.iter().all(|r| r.category.contains(code)));

            let expected: Vec<_> = store
                .records()
                .iter()
                .filter(|r| r.category.contains(code))
                .collect();
            assert_eq!(matched, expected);
        }
    }

    #[test]
    fn lists_matching_papers_in_store_order() {
        let result = run(&store(), Some("cs.CV"), ListOrder::Store).unwrap();
        assert_eq!(ids(&result), vec!["2512.00001v1", "2512.00003v1"]);
        assert_eq!(result.query.as_deref(), Some("cs.CV"));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn matches_by_substring() {
        let result = run(&store(), Some("cs.C"), ListOrder::Store).unwrap();
        assert_eq!(
            ids(&result),
            vec!["2512.00001v1", "2512.00003v1", "2512.00004v1"]
        );
    }

    #[test]
    fn absent_or_empty_query_lists_nothing() {
        let store = store();
        assert_eq!(filter(store.records(), None).count(), 0);
        assert_eq!(filter(store.records(), Some("")).count(), 0);

        for query in [None, Some("")] {
            let result = run(&store, query, ListOrder::Store).unwrap();
            assert!(result.listed_papers.is_empty());
            assert_eq!(result.query, None);
            assert_eq!(result.messages.len(), 1);
            assert_eq!(result.messages[0].content, MISSING_CATEGORY);
            assert_eq!(result.messages[0].level, MessageLevel::Warning);
        }
    }

    #[test]
    fn no_matches_reports_no_results() {
        let result = run(&store(), Some("cs.RO"), ListOrder::Store).unwrap();
        assert!(result.listed_papers.is_empty());
        assert_eq!(result.messages[0].content, NO_PAPERS);
    }

    #[test]
    fn newest_order_sorts_by_published_descending() {
        let store = StoreFixture::new()
            .with_paper_at("2512.00001v1", "cs.RO", 5)
            .with_paper_at("2512.00002v1", "cs.RO", 1)
            .with_paper_at("2512.00003v1", "cs.RO", 5)
            .build();

        let result = run(&store, Some("cs.RO"), ListOrder::Newest).unwrap();
        assert_eq!(
            ids(&result),
            vec!["2512.00002v1", "2512.00001v1", "2512.00003v1"]
        );
    }
}
