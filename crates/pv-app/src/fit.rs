//! Best-fit subgraph radius.

use pv_core::{NodeId, Size};
use pv_graph::{Graph, GraphResult};

/// Subgraph around `centre` sized for a diagram no larger than `max`.
///
/// A non-zero `radius` is used as is. With `radius == 0` the search starts at
/// radius 1 and keeps widening while the next subgraph still fits `max` and
/// has strictly more nodes; the radius-1 subgraph is returned even if it is
/// already too big.
pub fn fit_subgraph(graph: &Graph, centre: NodeId, radius: usize, max: Size) -> GraphResult<Graph> {
    if radius > 0 {
        return graph.subgraph(centre, radius);
    }

    let mut radius = 1;
    let mut best = graph.subgraph(centre, radius)?;
    loop {
        radius += 1;
        let bigger = graph.subgraph(centre, radius)?;
        if !bigger.size()?.fits_within(max) || bigger.node_count() <= best.node_count() {
            return Ok(best);
        }
        best = bigger;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pv_graph::{GraphBuilder, Node};

    /// N0 -> N1 -> ... -> N(n-1)
    fn chain(n: usize) -> Graph {
        let mut builder = GraphBuilder::default();
        for i in 0..n {
            builder.add_node(Node::new(format!("N{}", i)).unwrap()).unwrap();
        }
        for i in 1..n {
            builder
                .add_edge(&format!("N{}", i - 1), &format!("N{}", i))
                .unwrap();
        }
        builder.build()
    }

    #[test]
    fn fixed_radius_is_respected() {
        let g = chain(9);
        let sub = fit_subgraph(&g, g.find("N4").unwrap(), 2, Size::new(1, 1)).unwrap();
        assert_eq!(sub.node_count(), 5);
    }

    #[test]
    fn grows_until_height_budget() {
        let g = chain(9);
        // Radius r around N4 spans 2r + 1 ranks.
        let sub = fit_subgraph(&g, g.find("N4").unwrap(), 0, Size::new(1, 6)).unwrap();
        assert_eq!(sub.node_count(), 5);
        assert_eq!(sub.size().unwrap(), Size::new(1, 5));
    }

    #[test]
    fn stops_when_whole_graph_reached() {
        let g = chain(4);
        let sub = fit_subgraph(&g, g.find("N0").unwrap(), 0, Size::new(10, 10)).unwrap();
        assert_eq!(sub.node_count(), 4);
    }

    #[test]
    fn radius_one_kept_even_when_too_big() {
        let g = chain(5);
        let sub = fit_subgraph(&g, g.find("N2").unwrap(), 0, Size::new(1, 1)).unwrap();
        assert_eq!(sub.node_count(), 3);
    }
}
