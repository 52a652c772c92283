//! Visualiser implementations.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use pv_graph::Graph;
use tracing::debug;

use crate::dot::{dot_script, file_stem};
use crate::error::{RenderError, RenderResult};

/// Draws one graph.
pub trait Visualiser: Send + Sync {
    fn visualise(&self, graph: &Graph) -> RenderResult<()>;
}

/// Writes each graph as `<name>.gv` into an output folder.
#[derive(Debug, Clone)]
pub struct DotVisualiser {
    output_folder: PathBuf,
}

impl DotVisualiser {
    pub fn new(output_folder: impl Into<PathBuf>) -> Self {
        Self {
            output_folder: output_folder.into(),
        }
    }

    pub fn output_folder(&self) -> &Path {
        &self.output_folder
    }

    /// Where the diagram for a graph called `name` is written.
    pub fn script_path(&self, name: &str) -> PathBuf {
        self.output_folder.join(format!("{}.gv", file_stem(name)))
    }
}

impl Visualiser for DotVisualiser {
    fn visualise(&self, graph: &Graph) -> RenderResult<()> {
        if !self.output_folder.exists() {
            fs::create_dir_all(&self.output_folder).map_err(|e| RenderError::OutputFolder {
                path: self.output_folder.clone(),
                source: e,
            })?;
        }

        let path = self.script_path(graph.name());
        fs::write(&path, dot_script(graph)).map_err(|e| RenderError::Write {
            path: path.clone(),
            source: e,
        })?;
        debug!(path = %path.display(), nodes = graph.node_count(), "wrote diagram");
        Ok(())
    }
}

/// Remembers the names of the graphs it is asked to draw, in order.
///
/// A graph whose name matches `reject` fails with [`RenderError::Rejected`].
#[derive(Debug, Default)]
pub struct RecordingVisualiser {
    rendered: Mutex<Vec<String>>,
    reject: Option<String>,
}

impl RecordingVisualiser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting(name: impl Into<String>) -> Self {
        Self {
            rendered: Mutex::default(),
            reject: Some(name.into()),
        }
    }

    pub fn rendered(&self) -> Vec<String> {
        self.rendered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Visualiser for RecordingVisualiser {
    fn visualise(&self, graph: &Graph) -> RenderResult<()> {
        if self.reject.as_deref() == Some(graph.name()) {
            return Err(RenderError::Rejected {
                name: graph.name().to_string(),
                reason: "rejected by recorder".to_string(),
            });
        }
        self.rendered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(graph.name().to_string());
        Ok(())
    }
}
