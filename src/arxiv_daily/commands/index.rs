use super::category::filter;
use super::CmdResult;
use crate::error::Result;
use crate::model::category_name;
use crate::store::DataStore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub code: String,
    pub name: String,
    /// How many records the category listing would show.
    pub count: usize,
    pub featured: bool,
}

/// Featured categories first, then every other primary category in the store, in
/// order of first appearance.
pub fn run<S: DataStore>(store: &S, featured: &[String]) -> Result<CmdResult> {
    let mut codes: Vec<(&str, bool)> = Vec::new();
    for code in featured.iter().map(String::as_str) {
        if !code.is_empty() && !codes.iter().any(|(c, _)| *c == code) {
            codes.push((code, true));
        }
    }
    for record in store.records() {
        let code = record.category.as_str();
        if !codes.iter().any(|(c, _)| *c == code) {
            codes.push((code, false));
        }
    }

    let summaries = codes
        .into_iter()
        .map(|(code, featured)| CategorySummary {
            code: code.to_string(),
            name: category_name(code).unwrap_or(code).to_string(),
            count: filter(store.records(), Some(code)).count(),
            featured,
        })
        .collect();

    Ok(CmdResult::default().with_categories(summaries))
}
