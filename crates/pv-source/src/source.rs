//! The graph source seam.

use pv_graph::{Graph, GraphBuilder};
use tracing::debug;

use crate::error::SourceResult;
use crate::records::{EdgeRecord, NodeRecord, RecordDocument};

/// Something that can produce the records of a pipeline graph.
pub trait GraphSource {
    /// Every node record, in the order nodes should appear in the graph.
    fn node_records(&self) -> SourceResult<Vec<NodeRecord>>;

    /// Every edge record.
    fn edge_records(&self) -> SourceResult<Vec<EdgeRecord>>;

    /// Node and edge records taken together. Sources that read both from
    /// one place override this to read it once.
    fn records(&self) -> SourceResult<RecordDocument> {
        Ok(RecordDocument {
            nodes: self.node_records()?,
            edges: self.edge_records()?,
        })
    }

    /// Ingest all nodes, then all edges, and seal the graph.
    ///
    /// Any bad record aborts the whole load; no partial graph is returned.
    fn load_graph(&self, name: &str) -> SourceResult<Graph> {
        let RecordDocument { nodes, edges } = self.records()?;
        let mut builder = GraphBuilder::new(name);
        for record in nodes {
            builder.add_node(record.to_node()?)?;
        }
        for record in edges {
            builder.add_edge(&record.start_id, &record.end_id)?;
        }
        debug!(
            name,
            nodes = builder.node_count(),
            edges = builder.edge_count(),
            "loaded graph"
        );
        Ok(builder.build())
    }
}

/// Records held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    document: RecordDocument,
}

impl MemorySource {
    pub fn new(nodes: Vec<NodeRecord>, edges: Vec<EdgeRecord>) -> Self {
        Self {
            document: RecordDocument { nodes, edges },
        }
    }
}

impl From<RecordDocument> for MemorySource {
    fn from(document: RecordDocument) -> Self {
        Self { document }
    }
}

impl GraphSource for MemorySource {
    fn node_records(&self) -> SourceResult<Vec<NodeRecord>> {
        Ok(self.document.nodes.clone())
    }

    fn edge_records(&self) -> SourceResult<Vec<EdgeRecord>> {
        Ok(self.document.edges.clone())
    }
}
