use crate::maximum_flow::residual::{ResidualArc, ResidualNetwork};
use num_traits::NumAssign;
use std::collections::VecDeque;

/// Source-to-sink path in a residual network, each arc head-to-tail with the next.
#[derive(Clone, PartialEq, Debug)]
pub struct AugmentingPath<Flow> {
    arcs: Vec<ResidualArc<Flow>>,
}

impl<Flow> AugmentingPath<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    #[inline]
    pub fn arcs(&self) -> &[ResidualArc<Flow>] {
        &self.arcs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    pub fn bottleneck(&self) -> Flow {
        self.arcs.iter().map(|arc| arc.residual_capacity).min().unwrap_or_else(Flow::zero)
    }

    pub fn nodes(&self) -> Vec<usize> {
        let mut nodes: Vec<usize> = self.arcs.iter().map(|arc| arc.from).collect();
        nodes.extend(self.arcs.last().map(|arc| arc.to));
        nodes
    }
}

// bfs over arcs with positive residual capacity, every arc counting as one hop.
// prev[v] holds the arc used to discover v.
fn bfs<Flow>(residual: &ResidualNetwork<Flow>, source: usize, sink: Option<usize>) -> (Vec<bool>, Vec<Option<&ResidualArc<Flow>>>)
where
    Flow: NumAssign + Ord + Copy,
{
    let mut visited = vec![false; residual.num_nodes()];
    let mut prev = vec![None; residual.num_nodes()];
    if source >= residual.num_nodes() {
        return (visited, prev);
    }
    let mut queue = VecDeque::from([source]);
    visited[source] = true;

    while let Some(u) = queue.pop_front() {
        for arc in residual.neighbors(u) {
            if visited[arc.to] || arc.residual_capacity == Flow::zero() {
                continue;
            }

            visited[arc.to] = true;
            prev[arc.to] = Some(arc);
            if Some(arc.to) == sink {
                return (visited, prev);
            }
            queue.push_back(arc.to);
        }
    }

    (visited, prev)
}

/// Shortest (fewest arcs) augmenting path from `source` to `sink`, or `None`
/// once the sink is out of reach.
pub fn find_augmenting_path<Flow>(residual: &ResidualNetwork<Flow>, source: usize, sink: usize) -> Option<AugmentingPath<Flow>>
where
    Flow: NumAssign + Ord + Copy,
{
    if source == sink || sink >= residual.num_nodes() {
        return None;
    }

    let (visited, prev) = bfs(residual, source, Some(sink));
    if !visited[sink] {
        return None;
    }

    let mut arcs = Vec::new();
    let mut v = sink;
    while v != source {
        let arc = prev[v]?;
        arcs.push(arc.clone());
        v = arc.from;
    }
    arcs.reverse();

    Some(AugmentingPath { arcs })
}

/// Vertices reachable from `source` over arcs with positive residual capacity.
pub fn reachable_from<Flow>(residual: &ResidualNetwork<Flow>, source: usize) -> Vec<bool>
where
    Flow: NumAssign + Ord + Copy,
{
    bfs(residual, source, None).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maximum_flow::graph::Graph;
    use crate::maximum_flow::residual::Direction;

    #[test]
    fn prefers_fewest_arcs_over_capacity() {
        // 0 -> 3 directly with capacity 1, or 0 -> 1 -> 2 -> 3 with capacity 100
        let graph = Graph::from_edges(4, &[(0, 1, 100), (1, 2, 100), (2, 3, 100), (0, 3, 1)]).unwrap();
        let residual = ResidualNetwork::build(&graph).unwrap();
        let path = find_augmenting_path(&residual, 0, 3).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.arcs()[0].edge_id, 3);
        assert_eq!(path.bottleneck(), 1);
    }

    #[test]
    fn ties_follow_edge_order() {
        let graph = Graph::from_edges(2, &[(0, 1, 2), (0, 1, 7)]).unwrap();
        let residual = ResidualNetwork::build(&graph).unwrap();
        let path = find_augmenting_path(&residual, 0, 1).unwrap();
        assert_eq!(path.arcs()[0].edge_id, 0);
        assert_eq!(path.nodes(), vec![0, 1]);
    }

    #[test]
    fn path_is_contiguous() {
        let mut graph = Graph::from_edges(4, &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 1, 1)]).unwrap();
        graph.edges[0].flow = 1;
        graph.edges[2].flow = 1;
        let residual = ResidualNetwork::build(&graph).unwrap();
        // 1 -> 3 is saturated, so the sink is cut off
        assert!(find_augmenting_path(&residual, 0, 3).is_none());

        graph.edges[2].flow = 0;
        graph.edges[0].flow = 0;
        graph.edges[1].flow = 1;
        graph.edges[3].flow = 1;
        let residual = ResidualNetwork::build(&graph).unwrap();
        let path = find_augmenting_path(&residual, 0, 3).unwrap();
        assert_eq!(path.nodes(), vec![0, 1, 3]);
        assert!(path.arcs().windows(2).all(|w| w[0].to == w[1].from));
        assert!(path.arcs().iter().all(|a| a.direction == Direction::Forward));
    }

    #[test]
    fn unreachable_sink() {
        let graph = Graph::<i64>::from_edges(3, &[(0, 1, 5)]).unwrap();
        let residual = ResidualNetwork::build(&graph).unwrap();
        assert!(find_augmenting_path(&residual, 0, 2).is_none());
        assert_eq!(reachable_from(&residual, 0), vec![true, true, false]);
    }
}
