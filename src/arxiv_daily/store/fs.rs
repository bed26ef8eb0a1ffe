use super::{validate_records, DataStore};
use crate::error::Result;
use crate::model::PaperRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// Records read from a JSON data file.
///
/// The file is read once, when the store is opened; later changes to it are not seen.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    records: Vec<PaperRecord>,
}

impl FileStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path)?;
        let records: Vec<PaperRecord> = serde_json::from_str(&content)?;
        validate_records(&records)?;
        tracing::debug!(path = %path.display(), count = records.len(), "loaded data file");
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataStore for FileStore {
    fn records(&self) -> &[PaperRecord] {
        &self.records
    }
}
