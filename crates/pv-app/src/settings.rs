//! Settings file: one entry per pipeline instance.
//!
//! ```yaml
//! verbose: false
//! instances:
//!   - alias: dw
//!     source: dw-records.yaml
//!     output_folder: diagrams/dw
//!     max_size: { width: 12, height: 8 }
//!     subgraph_radius: 0
//! ```
//!
//! Relative `source` and `output_folder` paths are resolved against the
//! directory holding the settings file.

use std::path::{Path, PathBuf};

use pv_core::Size;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub instances: Vec<Instance>,
}

/// One pipeline to visualise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Instance {
    pub alias: String,
    /// Record file the graph is loaded from.
    pub source: PathBuf,
    pub output_folder: PathBuf,
    /// Largest subgraph diagram the best-fit search will accept.
    pub max_size: Size,
    /// Fixed radius for per-node subgraphs; 0 picks the best fit.
    #[serde(default)]
    pub subgraph_radius: usize,
}

impl Settings {
    /// Load and validate a settings file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::SettingsRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut settings = Self::from_yaml(&content)?;
        if let Some(base) = path.parent() {
            settings.resolve_paths(base);
        }
        Ok(settings)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let settings: Settings = serde_yaml::from_str(content)
            .map_err(|e| AppError::Settings(format!("Failed to parse settings YAML: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn instance(&self, alias: &str) -> AppResult<&Instance> {
        self.instances
            .iter()
            .find(|i| i.alias == alias)
            .ok_or_else(|| AppError::UnknownInstance(alias.to_string()))
    }

    fn validate(&self) -> AppResult<()> {
        for (i, instance) in self.instances.iter().enumerate() {
            if instance.alias.trim().is_empty() {
                return Err(AppError::Settings(format!(
                    "Instance {} has an empty alias",
                    i
                )));
            }
            if self.instances[..i].iter().any(|o| o.alias == instance.alias) {
                return Err(AppError::Settings(format!(
                    "Duplicate instance alias '{}'",
                    instance.alias
                )));
            }
            instance.max_size()?;
        }
        Ok(())
    }

    fn resolve_paths(&mut self, base: &Path) {
        for instance in &mut self.instances {
            if instance.source.is_relative() {
                instance.source = base.join(&instance.source);
            }
            if instance.output_folder.is_relative() {
                instance.output_folder = base.join(&instance.output_folder);
            }
        }
    }
}

impl Instance {
    /// The size budget, rejected if either dimension is zero.
    pub fn max_size(&self) -> AppResult<Size> {
        Ok(Size::budget(self.max_size.width, self.max_size.height)?)
    }
}
