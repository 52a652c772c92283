//! Rank decomposition and layout size estimation.

use std::collections::HashMap;

use pv_core::{NodeId, Size};

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

impl Graph {
    /// Decompose the nodes into ranks.
    ///
    /// Rank 0 holds the roots (nodes with no parent); each later rank holds
    /// the nodes that become roots once every earlier rank is removed. Within
    /// a rank nodes keep insertion order.
    pub fn ranks(&self) -> GraphResult<Vec<Vec<NodeId>>> {
        let order: HashMap<NodeId, usize> = self
            .node_ids()
            .iter()
            .enumerate()
            .map(|(pos, &id)| (id, pos))
            .collect();
        let mut parents: HashMap<NodeId, usize> =
            self.node_ids().iter().map(|&id| (id, 0)).collect();
        let mut children: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        for edge in self.edges() {
            if !self.contains(edge.start()) {
                continue;
            }
            if let Some(count) = parents.get_mut(&edge.end()) {
                *count += 1;
                children.entry(edge.start()).or_default().push(edge.end());
            }
        }

        let mut ranks: Vec<Vec<NodeId>> = Vec::new();
        let mut remaining = self.node_count();
        let mut current: Vec<NodeId> = self
            .node_ids()
            .iter()
            .copied()
            .filter(|id| parents.get(id) == Some(&0))
            .collect();

        while !current.is_empty() {
            remaining -= current.len();
            let mut released: Vec<NodeId> = Vec::new();
            for id in &current {
                for child in children.get(id).into_iter().flatten() {
                    if let Some(count) = parents.get_mut(child) {
                        *count -= 1;
                        if *count == 0 {
                            released.push(*child);
                        }
                    }
                }
            }
            released.sort_by_key(|id| order.get(id).copied().unwrap_or(usize::MAX));
            ranks.push(current);
            current = released;
        }

        if remaining > 0 {
            return Err(GraphError::CycleDetected { remaining });
        }
        Ok(ranks)
    }

    /// Estimated layout size: `height` is the number of ranks, `width` the
    /// size of the largest rank.
    pub fn size(&self) -> GraphResult<Size> {
        let ranks = self.ranks()?;
        Ok(Size {
            width: ranks.iter().map(Vec::len).max().unwrap_or(0),
            height: ranks.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::GraphBuilder;
    use crate::error::GraphError;
    use crate::node::Node;
    use pv_core::Size;

    fn graph(ids: &[&str], edges: &[(&str, &str)]) -> crate::Graph {
        let mut builder = GraphBuilder::default();
        for id in ids {
            builder.add_node(Node::new(*id).unwrap()).unwrap();
        }
        for (s, e) in edges {
            builder.add_edge(s, e).unwrap();
        }
        builder.build()
    }

    #[test]
    fn chain_is_one_wide() {
        let g = graph(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
        assert_eq!(g.size().unwrap(), Size::new(1, 3));
    }

    #[test]
    fn diamond_is_two_wide() {
        let g = graph(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
        );
        assert_eq!(g.size().unwrap(), Size::new(2, 3));
        let ranks = g.ranks().unwrap();
        let names: Vec<Vec<&str>> = ranks
            .iter()
            .map(|r| r.iter().map(|id| g.node(*id).unwrap().id()).collect())
            .collect();
        assert_eq!(names, vec![vec!["A"], vec!["B", "C"], vec!["D"]]);
    }

    #[test]
    fn node_waits_for_its_deepest_parent() {
        // A -> B -> C and A -> C: C sits below B, not beside it.
        let g = graph(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("A", "C")]);
        assert_eq!(g.size().unwrap(), Size::new(1, 3));
    }

    #[test]
    fn duplicate_edges_do_not_break_ranking() {
        let g = graph(&["A", "B"], &[("A", "B"), ("A", "B")]);
        assert_eq!(g.size().unwrap(), Size::new(1, 2));
    }

    #[test]
    fn empty_and_disconnected() {
        assert_eq!(graph(&[], &[]).size().unwrap(), Size::EMPTY);
        assert_eq!(graph(&["A", "B", "C"], &[]).size().unwrap(), Size::new(3, 1));
    }

    #[test]
    fn cycle_is_detected() {
        let g = graph(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("B", "C"), ("C", "B"), ("C", "D")],
        );
        assert_eq!(g.size(), Err(GraphError::CycleDetected { remaining: 3 }));
    }
}
