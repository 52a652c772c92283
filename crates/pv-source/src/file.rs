//! Record files on disk.

use std::path::{Path, PathBuf};

use crate::error::{SourceError, SourceResult};
use crate::records::{EdgeRecord, NodeRecord, RecordDocument};
use crate::source::GraphSource;

/// Reads a `RecordDocument` from a YAML (`.yaml`, `.yml`) or JSON (`.json`) file.
///
/// The file is read once per [`GraphSource::load_graph`], so each load sees
/// one consistent version of it.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole document.
    pub fn read_document(&self) -> SourceResult<RecordDocument> {
        let extension = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let yaml = match extension.as_deref() {
            Some("yaml") | Some("yml") => true,
            Some("json") => false,
            _ => {
                return Err(SourceError::UnsupportedFormat {
                    path: self.path.clone(),
                });
            }
        };

        let content = std::fs::read_to_string(&self.path).map_err(|e| SourceError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        let document = if yaml {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        Ok(document)
    }
}

impl GraphSource for FileSource {
    fn records(&self) -> SourceResult<RecordDocument> {
        self.read_document()
    }

    fn node_records(&self) -> SourceResult<Vec<NodeRecord>> {
        Ok(self.read_document()?.nodes)
    }

    fn edge_records(&self) -> SourceResult<Vec<EdgeRecord>> {
        Ok(self.read_document()?.edges)
    }
}
