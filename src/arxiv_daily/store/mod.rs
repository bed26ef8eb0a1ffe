//! # Storage Layer
//!
//! Records are static data: the whole set is loaded once at startup and never mutated.
//! The [`DataStore`] trait exposes exactly what the views need from it, the ordered
//! record sequence and lookup by id.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: reads a JSON data file (an array of records) when opened
//! - [`memory::InMemoryStore`]: built from a `Vec`, or from the data set bundled into the
//!   binary; used for tests and as the default data source
//!
//! ## Load-time Validation
//!
//! Both implementations run [`validate_records`] before handing out a store, so every
//! store in the program upholds:
//! - ids are unique
//! - each record's primary `category` is one of its `categories`
//!
//! Records without authors are accepted with a warning; their citations carry an empty
//! author field.

use crate::error::{DailyError, Result};
use crate::model::PaperRecord;
use std::collections::HashSet;

pub mod fs;
pub mod memory;

/// Read-only access to the ordered record sequence.
pub trait DataStore {
    /// All records, in load order.
    fn records(&self) -> &[PaperRecord];

    /// The first record whose id equals `id`.
    fn get(&self, id: &str) -> Option<&PaperRecord> {
        self.records().iter().find(|r| r.id == id)
    }

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

/// Lets the binary pick a backend at runtime.
impl<T: DataStore + ?Sized> DataStore for Box<T> {
    fn records(&self) -> &[PaperRecord] {
        (**self).records()
    }
}

pub fn validate_records(records: &[PaperRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        record.validate()?;
        if !seen.insert(record.id.as_str()) {
            return Err(DailyError::DuplicateId(record.id.clone()));
        }
        if record.authors.is_empty() {
            tracing::warn!(id = %record.id, "record has no authors");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::memory::fixtures::paper;
    use super::*;

    #[test]
    fn rejects_duplicate_ids() {
        let records = vec![paper("2512.00001v1", "cs.AI"), paper("2512.00001v1", "cs.RO")];
        assert!(matches!(
            validate_records(&records),
            Err(DailyError::DuplicateId(id)) if id == "2512.00001v1"
        ));
    }

    #[test]
    fn accepts_distinct_versions_of_the_same_paper() {
        let records = vec![paper("2512.00001v1", "cs.AI"), paper("2512.00001v2", "cs.AI")];
        assert!(validate_records(&records).is_ok());
    }

    #[test]
    fn accepts_records_without_authors() {
        let mut record = paper("2512.00001v1", "cs.AI");
        record.authors.clear();
        assert!(validate_records(&[record]).is_ok());
    }

    #[test]
    fn boxed_store_looks_up_by_id() {
        let records = vec![paper("2512.00001v1", "cs.AI"), paper("2512.00002v1", "cs.RO")];
        let store: Box<dyn DataStore> = Box::new(memory::InMemoryStore::new(records).unwrap());

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("2512.00002v1").map(|r| r.category.as_str()), Some("cs.RO"));
        assert!(store.get("2512.00003v1").is_none());
    }
}
