//! pv-render: turning pipeline graphs into diagrams.
//!
//! The [`Visualiser`] trait is the seam; [`DotVisualiser`] writes Graphviz
//! DOT scripts, one file per graph.

pub mod dot;
pub mod error;
pub mod visualiser;

pub use dot::{dot_script, file_stem};
pub use error::{RenderError, RenderResult};
pub use visualiser::{DotVisualiser, RecordingVisualiser, Visualiser};
