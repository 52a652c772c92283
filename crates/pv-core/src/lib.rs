//! pv-core: stable foundation for pipeviz.
//!
//! Contains:
//! - ids (compact arena handles for graph objects)
//! - size (width/height pairs measured in graph nodes)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod size;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use ids::*;
pub use size::Size;
