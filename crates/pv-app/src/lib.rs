//! Application service layer for pipeviz.
//!
//! Ties settings, graph sources and visualisers together so the CLI only has
//! to parse arguments and print results.

pub mod error;
pub mod fit;
pub mod run_service;
pub mod settings;

pub use error::{AppError, AppResult};
pub use fit::fit_subgraph;
pub use run_service::{RunReport, run, run_instance};
pub use settings::{Instance, Settings};
