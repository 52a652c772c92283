//! Critical path: the root-to-sink path with the greatest total node weight.

use std::collections::{HashMap, HashSet};

use pv_core::NodeId;
use tracing::debug;

use crate::error::GraphResult;
use crate::graph::Graph;
use crate::paths;

/// Name given to the graph returned by [`Graph::critical_path`].
pub const CRITICAL_PATH_NAME: &str = "CriticalPath";

impl Graph {
    /// Find the heaviest root-to-sink path.
    ///
    /// Roots are nodes with no parent anywhere in the graph. Each node's best
    /// downstream weight is computed once, sinks first, so the search is
    /// linear in nodes plus edges. Ties go to the first root in node order
    /// and, along the path, to the first child in edge order.
    pub fn critical_path(&self) -> GraphResult<Graph> {
        let all: HashSet<NodeId> = self.node_ids().iter().copied().collect();
        let roots: Vec<NodeId> = self
            .node_ids()
            .iter()
            .copied()
            .filter(|&id| !paths::has_parent(id, &all, self.edges()))
            .collect();

        let children = paths::successors(self.edges());
        let mut best: HashMap<NodeId, u64> = HashMap::new();
        // Ranks run parents-first; walk them backwards so children are settled.
        for rank in self.ranks()?.iter().rev() {
            for &id in rank {
                let downstream = children
                    .get(&id)
                    .into_iter()
                    .flatten()
                    .filter_map(|child| best.get(child))
                    .copied()
                    .max()
                    .unwrap_or(0);
                let weight = self.node(id).map_or(0, |n| n.weight);
                best.insert(id, weight.saturating_add(downstream));
            }
        }

        let mut path: Vec<NodeId> = Vec::new();
        let mut next = first_max(&roots, &best);
        while let Some(id) = next {
            path.push(id);
            let candidates = children.get(&id).map(Vec::as_slice).unwrap_or_default();
            next = first_max(candidates, &best);
        }

        // Keep the kind of the edge each step followed.
        let edges = path
            .windows(2)
            .filter_map(|pair| {
                self.edges()
                    .iter()
                    .find(|e| e.start() == pair[0] && e.end() == pair[1])
                    .copied()
            })
            .collect();
        let result = self.derive(CRITICAL_PATH_NAME.to_string(), path, edges, None);
        debug!(
            nodes = result.node_count(),
            weight = result.total_weight(),
            "found critical path"
        );
        Ok(result)
    }
}

/// First candidate with the greatest score; later equal scores lose.
fn first_max(candidates: &[NodeId], best: &HashMap<NodeId, u64>) -> Option<NodeId> {
    let mut winner: Option<(NodeId, u64)> = None;
    for &id in candidates {
        let score = best.get(&id).copied().unwrap_or(0);
        if winner.is_none_or(|(_, top)| score > top) {
            winner = Some((id, score));
        }
    }
    winner.map(|(id, _)| id)
}
