use super::{CmdMessage, CmdResult, NOT_FOUND};
use crate::citation::Citation;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.get(id) {
        Some(record) => Ok(result.with_citation(Citation::for_record(record))),
        None => {
            result.add_message(CmdMessage::warning(NOT_FOUND));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returns_citation_for_known_id() {
        let store = StoreFixture::new().with_paper("2512.08931v1", "cs.CV").build();
        let result = run(&store, "2512.08931v1").unwrap();
        assert_eq!(result.citation.unwrap().key, "251208931v1");
    }

    #[test]
    fn unknown_id_has_no_citation() {
        let store = StoreFixture::new().with_paper("2512.08931v1", "cs.CV").build();
        let result = run(&store, "2512.08931").unwrap();
        assert!(result.citation.is_none());
        assert_eq!(result.messages[0].content, NOT_FOUND);
    }
}
