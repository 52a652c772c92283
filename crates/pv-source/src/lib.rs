//! pv-source: node and edge records for pipeviz, and the sources that supply them.
//!
//! A [`GraphSource`] yields node records and edge records; its provided
//! [`GraphSource::load_graph`] feeds them through a `GraphBuilder` and seals
//! the result.

pub mod error;
pub mod file;
pub mod records;
pub mod source;

pub use error::{SourceError, SourceResult};
pub use file::FileSource;
pub use records::{EdgeRecord, NodeRecord, RecordDocument, object_type_from_code};
pub use source::{GraphSource, MemorySource};
