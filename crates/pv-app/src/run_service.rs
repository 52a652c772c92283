//! Drawing every diagram for one pipeline instance.

use pv_core::Size;
use pv_graph::{DEFAULT_GRAPH_NAME, Graph, GraphResult};
use pv_render::{DotVisualiser, Visualiser};
use pv_source::{FileSource, GraphSource};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::error::AppResult;
use crate::fit::fit_subgraph;
use crate::settings::Instance;

/// Outcome of a run. Diagrams that could not be built or drawn are counted
/// in `failed` and named in `failures`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub rendered: usize,
    pub failed: usize,
    pub failures: Vec<String>,
}

impl RunReport {
    fn record<E: std::fmt::Display>(&mut self, name: &str, outcome: Result<(), E>) {
        match outcome {
            Ok(()) => self.rendered += 1,
            Err(e) => {
                warn!(diagram = name, error = %e, "diagram failed");
                self.failed += 1;
                self.failures.push(name.to_string());
            }
        }
    }
}

/// Load the graph from `source` and draw it, its critical path, and the
/// subgraph around every node.
///
/// Only a failed load aborts the run; any single diagram failing is logged
/// and the run carries on.
pub fn run(
    instance: &Instance,
    source: &dyn GraphSource,
    visualiser: &dyn Visualiser,
) -> AppResult<RunReport> {
    let max = instance.max_size()?;
    let graph = source.load_graph(DEFAULT_GRAPH_NAME)?;
    info!(
        instance = %instance.alias,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    let mut report = RunReport::default();
    report.record(graph.name(), visualiser.visualise(&graph));

    match graph.critical_path() {
        Ok(path) => report.record(path.name(), visualiser.visualise(&path)),
        Err(e) => report.record(pv_graph::CRITICAL_PATH_NAME, Err(e)),
    }

    let subgraphs = node_subgraphs(&graph, instance.subgraph_radius, max);
    let total = subgraphs.len();
    for (i, (key, subgraph)) in subgraphs.into_iter().enumerate() {
        info!("Drawing subgraph {} of {} ({})", i + 1, total, key);
        match subgraph {
            Ok(sub) => report.record(sub.name(), visualiser.visualise(&sub)),
            Err(e) => report.record(&key, Err(e)),
        }
    }

    info!(
        instance = %instance.alias,
        rendered = report.rendered,
        failed = report.failed,
        "run complete"
    );
    Ok(report)
}

/// [`run`] with the instance's record file and a DOT visualiser writing into
/// its output folder.
pub fn run_instance(instance: &Instance) -> AppResult<RunReport> {
    let source = FileSource::new(&instance.source);
    let visualiser = DotVisualiser::new(&instance.output_folder);
    run(instance, &source, &visualiser)
}

/// Fitted subgraph for every node, in node order.
fn node_subgraphs(graph: &Graph, radius: usize, max: Size) -> Vec<(String, GraphResult<Graph>)> {
    graph
        .node_ids()
        .par_iter()
        .map(|&id| {
            let key = graph.node(id).map(|n| n.id().to_string()).unwrap_or_default();
            (key, fit_subgraph(graph, id, radius, max))
        })
        .collect()
}
