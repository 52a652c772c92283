//! Ego-subgraph extraction with reachability preservation.
//!
//! A subgraph keeps every edge whose ends were both included, kind and all,
//! then adds connection edges so that reachability between included nodes is
//! exactly what it was in the full graph. The connection edges are the
//! transitive reduction of that reachability relation, less the pairs a kept
//! edge already joins, which makes the result canonical.

use std::collections::{HashMap, HashSet, VecDeque};

use pv_core::NodeId;
use tracing::debug;

use crate::edge::Edge;
use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::paths;

impl Graph {
    /// Extract the subgraph of nodes within `radius` hops of `centre`.
    ///
    /// Ancestors are collected by walking edges backward and descendants by
    /// walking them forward, each direction capped at `radius` hops. Nodes are
    /// ordered centre first, then ancestors, then descendants, each in
    /// discovery order. The result has `centre` as its designated centre and
    /// shares this graph's nodes.
    pub fn subgraph(&self, centre: NodeId, radius: usize) -> GraphResult<Graph> {
        let Some(centre_node) = self.node(centre) else {
            return Err(GraphError::NodeNotInGraph {
                id: self.node_key(centre).to_string(),
            });
        };

        let mut members = vec![centre];
        let mut included: HashSet<NodeId> = HashSet::from([centre]);
        for adj in [
            paths::predecessors(self.edges()),
            paths::successors(self.edges()),
        ] {
            for id in walk(centre, radius, &adj) {
                if included.insert(id) {
                    members.push(id);
                }
            }
        }

        let mut edges: Vec<Edge> = self
            .edges()
            .iter()
            .filter(|e| included.contains(&e.start()) && included.contains(&e.end()))
            .copied()
            .collect();

        let joined: HashSet<Edge> = edges.iter().copied().collect();
        let connections: Vec<Edge> = self
            .reduced_reachability(&members)
            .into_iter()
            .filter(|e| !joined.contains(e))
            .collect();

        debug!(
            centre = centre_node.id(),
            radius,
            nodes = members.len(),
            direct = edges.len(),
            connections = connections.len(),
            "extracted subgraph"
        );
        edges.extend(connections);

        let name = if centre_node.long_name.is_empty() {
            centre_node.id().to_string()
        } else {
            centre_node.long_name.clone()
        };
        Ok(self.derive(name, members, edges, Some(centre)))
    }

    /// Transitive reduction of this graph's reachability restricted to `members`.
    ///
    /// A pair `x -> y` is kept iff `x` reaches `y` and no other member `z`
    /// lies on a path between them. Pairs are produced in member order.
    fn reduced_reachability(&self, members: &[NodeId]) -> Vec<Edge> {
        let reach = self.reachable_within(members);
        let reaches = |x: NodeId, y: NodeId| reach.get(&x).is_some_and(|r| r.contains(&y));

        let mut reduced = Vec::new();
        for &x in members {
            let Some(from_x) = reach.get(&x) else {
                continue;
            };
            for &y in members.iter().filter(|&y| from_x.contains(y)) {
                let bypassed = from_x.iter().any(|&z| z != y && reaches(z, y));
                if !bypassed {
                    reduced.push(Edge::connection(x, y));
                }
            }
        }
        reduced
    }
}

/// Breadth-first walk from `origin` over `adj`, at most `radius` hops.
/// Returns nodes in discovery order, excluding `origin`.
fn walk(origin: NodeId, radius: usize, adj: &HashMap<NodeId, Vec<NodeId>>) -> Vec<NodeId> {
    let mut seen: HashSet<NodeId> = HashSet::from([origin]);
    let mut found = Vec::new();
    let mut queue: VecDeque<(NodeId, usize)> = VecDeque::from([(origin, 0)]);

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= radius {
            continue;
        }
        for &next in adj.get(&current).map(Vec::as_slice).unwrap_or_default() {
            if seen.insert(next) {
                found.push(next);
                queue.push_back((next, depth + 1));
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use crate::builder::GraphBuilder;
    use crate::edge::EdgeKind;
    use crate::error::GraphError;
    use crate::graph::Graph;
    use crate::node::Node;

    fn graph(ids: &[&str], edges: &[(&str, &str)]) -> Graph {
        let mut builder = GraphBuilder::default();
        for id in ids {
            builder
                .add_node(Node::new(*id).unwrap().with_long_name(format!("[db].[{}]", id)))
                .unwrap();
        }
        for (s, e) in edges {
            builder.add_edge(s, e).unwrap();
        }
        builder.build()
    }

    fn keys(g: &Graph) -> Vec<&str> {
        g.nodes().map(|(_, n)| n.id()).collect()
    }

    fn edge_list(g: &Graph) -> Vec<(String, EdgeKind)> {
        g.edges()
            .iter()
            .map(|e| (e.display(g).to_string(), e.kind()))
            .collect()
    }

    #[test]
    fn chain_radius_one() {
        let g = graph(&["A", "B", "C", "D"], &[("A", "B"), ("B", "C"), ("C", "D")]);
        let sub = g.subgraph(g.find("B").unwrap(), 1).unwrap();

        assert_eq!(keys(&sub), vec!["B", "A", "C"]);
        assert_eq!(
            edge_list(&sub),
            vec![
                ("Edge[A->B]".to_string(), EdgeKind::Direct),
                ("Edge[B->C]".to_string(), EdgeKind::Direct),
            ]
        );
        assert!(sub.is_centre(g.find("B").unwrap()));
        assert_eq!(sub.name(), "[db].[B]");
        assert!(sub.find("D").is_none());
    }

    #[test]
    fn radius_zero_is_centre_only() {
        let g = graph(&["A", "B"], &[("A", "B")]);
        let sub = g.subgraph(g.find("A").unwrap(), 0).unwrap();
        assert_eq!(keys(&sub), vec!["A"]);
        assert!(sub.edges().is_empty());
    }

    #[test]
    fn no_connections_when_kept_edges_cover_reachability() {
        // A -> B -> D -> E, plus A -> X -> E which falls out of range.
        let g = graph(
            &["A", "B", "X", "D", "E"],
            &[("A", "B"), ("B", "D"), ("A", "X"), ("X", "E"), ("D", "E")],
        );
        let sub = g.subgraph(g.find("D").unwrap(), 1).unwrap();
        assert_eq!(keys(&sub), vec!["D", "B", "E"]);
        assert_eq!(
            edge_list(&sub),
            vec![
                ("Edge[B->D]".to_string(), EdgeKind::Direct),
                ("Edge[D->E]".to_string(), EdgeKind::Direct),
            ]
        );

        let sub = g.subgraph(g.find("B").unwrap(), 1).unwrap();
        assert_eq!(keys(&sub), vec!["B", "A", "D"]);
        // A reaches D through B already; no connection needed.
        assert!(sub.edges().iter().all(|e| !e.is_connection()));
    }

    #[test]
    fn connection_edge_added_for_missing_intermediate() {
        // P feeds Q through a table T that falls outside the radius, and both
        // P and Q are direct parents of centre C.
        //   P -> T -> Q, P -> C, Q -> C
        let g = graph(
            &["P", "T", "Q", "C"],
            &[("P", "T"), ("T", "Q"), ("P", "C"), ("Q", "C")],
        );
        let sub = g.subgraph(g.find("C").unwrap(), 1).unwrap();
        assert_eq!(keys(&sub), vec!["C", "P", "Q"]);
        assert_eq!(
            edge_list(&sub),
            vec![
                ("Edge[P->C]".to_string(), EdgeKind::Direct),
                ("Edge[Q->C]".to_string(), EdgeKind::Direct),
                ("Edge[P->Q]".to_string(), EdgeKind::Connection),
            ]
        );
    }

    #[test]
    fn nested_subgraph_keeps_connection_kind() {
        let g = graph(
            &["P", "T", "Q", "C"],
            &[("P", "T"), ("T", "Q"), ("P", "C"), ("Q", "C")],
        );
        let c = g.find("C").unwrap();
        let outer = g.subgraph(c, 1).unwrap();
        let inner = outer.subgraph(c, 1).unwrap();
        assert_eq!(edge_list(&inner), edge_list(&outer));
        assert_eq!(
            edge_list(&inner).last(),
            Some(&("Edge[P->Q]".to_string(), EdgeKind::Connection))
        );
    }

    #[test]
    fn redundant_connections_are_pruned() {
        // Three ancestors of C linked only through excluded nodes:
        //   A -> x -> B -> y -> D, A -> C, B -> C, D -> C
        // A reaches B and D, B reaches D. Only A->B and B->D are needed.
        let g = graph(
            &["A", "x", "B", "y", "D", "C"],
            &[
                ("A", "x"),
                ("x", "B"),
                ("B", "y"),
                ("y", "D"),
                ("A", "C"),
                ("B", "C"),
                ("D", "C"),
            ],
        );
        let sub = g.subgraph(g.find("C").unwrap(), 1).unwrap();
        let connections: Vec<String> = sub
            .edges()
            .iter()
            .filter(|e| e.is_connection())
            .map(|e| e.display(&sub).to_string())
            .collect();
        assert_eq!(connections, vec!["Edge[A->B]", "Edge[B->D]"]);
    }

    #[test]
    fn subgraph_is_deterministic() {
        let g = graph(
            &["A", "B", "C", "D", "E"],
            &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("D", "E")],
        );
        let d = g.find("D").unwrap();
        let first = g.subgraph(d, 2).unwrap();
        let second = g.subgraph(d, 2).unwrap();
        assert_eq!(first.node_ids(), second.node_ids());
        assert_eq!(edge_list(&first), edge_list(&second));
    }

    #[test]
    fn subgraph_shares_node_handles() {
        let g = graph(&["A", "B"], &[("A", "B")]);
        let a = g.find("A").unwrap();
        let sub = g.subgraph(a, 1).unwrap();
        assert_eq!(sub.find("A"), Some(a));
        assert!(std::ptr::eq(sub.node(a).unwrap(), g.node(a).unwrap()));
    }

    #[test]
    fn centre_must_be_member() {
        let g = graph(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
        let c = g.find("C").unwrap();
        let sub = g.subgraph(g.find("A").unwrap(), 1).unwrap();
        assert_eq!(
            sub.subgraph(c, 1).unwrap_err(),
            GraphError::NodeNotInGraph { id: "C".into() }
        );
    }
}
