use crate::maximum_flow::error::FlowError;
use crate::maximum_flow::graph::Graph;
use log::trace;
use num_traits::NumAssign;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    // pushing along the arc increases the flow of the originating edge
    Forward,
    // pushing along the arc cancels flow of the originating edge
    Backward,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ResidualArc<Flow> {
    pub from: usize,
    pub to: usize,
    pub residual_capacity: Flow,
    pub edge_id: usize,
    pub direction: Direction,
}

/// Residual network of a [`Graph`], stored in compressed sparse row form.
///
/// Arcs leaving `u` live in `arcs[start[u]..start[u + 1]]`, ordered by the id of
/// the originating edge, with the forward arc first when an edge yields both.
/// Arcs with zero residual capacity are omitted.
#[derive(Default, Clone, Debug)]
pub struct ResidualNetwork<Flow> {
    pub(crate) num_nodes: usize,
    pub(crate) start: Vec<usize>,
    pub(crate) arcs: Vec<ResidualArc<Flow>>,
}

impl<Flow> ResidualNetwork<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    // O(n + m)
    pub fn build(graph: &Graph<Flow>) -> Result<Self, FlowError> {
        let num_nodes = graph.num_nodes();

        let mut degree = vec![0; num_nodes];
        for (edge_id, e) in graph.edges.iter().enumerate() {
            if e.flow < Flow::zero() || e.flow > e.upper {
                return Err(FlowError::InvariantViolation { edge_id });
            }
            if e.flow < e.upper {
                degree[e.from] += 1;
            }
            if e.flow > Flow::zero() {
                degree[e.to] += 1;
            }
        }

        let mut start = vec![0; num_nodes + 1];
        for i in 1..=num_nodes {
            start[i] = start[i - 1] + degree[i - 1];
        }

        let mut slots: Vec<Option<ResidualArc<Flow>>> = vec![None; start[num_nodes]];
        let mut counter = vec![0; num_nodes];
        for (edge_id, e) in graph.edges.iter().enumerate() {
            let (u, v) = (e.from, e.to);
            if e.flow < e.upper {
                slots[start[u] + counter[u]] = Some(ResidualArc { from: u, to: v, residual_capacity: e.upper - e.flow, edge_id, direction: Direction::Forward });
                counter[u] += 1;
            }
            if e.flow > Flow::zero() {
                slots[start[v] + counter[v]] = Some(ResidualArc { from: v, to: u, residual_capacity: e.flow, edge_id, direction: Direction::Backward });
                counter[v] += 1;
            }
        }

        let arcs: Vec<_> = slots.into_iter().flatten().collect();
        trace!("residual network rebuilt: {} nodes, {} arcs", num_nodes, arcs.len());
        Ok(ResidualNetwork { num_nodes, start, arcs })
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_arcs(&self) -> usize {
        self.arcs.len()
    }

    #[inline]
    pub fn arcs(&self) -> &[ResidualArc<Flow>] {
        &self.arcs
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> std::slice::Iter<ResidualArc<Flow>> {
        self.arcs[self.start[u]..self.start[u + 1]].iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_arcs_are_omitted() {
        let mut graph = Graph::from_edges(2, &[(0, 1, 5), (0, 1, 0)]).unwrap();
        let residual = ResidualNetwork::build(&graph).unwrap();
        assert_eq!(residual.num_nodes(), 2);
        assert_eq!(residual.num_arcs(), 1);

        graph.edges[0].flow = 5;
        let residual = ResidualNetwork::build(&graph).unwrap();
        let arcs: Vec<_> = residual.neighbors(1).cloned().collect();
        assert_eq!(arcs, vec![ResidualArc { from: 1, to: 0, residual_capacity: 5, edge_id: 0, direction: Direction::Backward }]);
        assert_eq!(residual.neighbors(0).count(), 0);
    }

    #[test]
    fn arcs_keep_their_originating_edge() {
        // anti-parallel pair plus a parallel copy, all partially used
        let mut graph = Graph::from_edges(2, &[(0, 1, 4), (1, 0, 3), (0, 1, 2)]).unwrap();
        graph.edges[0].flow = 1;
        graph.edges[1].flow = 2;
        graph.edges[2].flow = 1;
        let residual = ResidualNetwork::build(&graph).unwrap();

        let out_of_0: Vec<_> = residual.neighbors(0).map(|a| (a.edge_id, a.direction, a.residual_capacity)).collect();
        assert_eq!(out_of_0, vec![(0, Direction::Forward, 3), (1, Direction::Backward, 2), (2, Direction::Forward, 1)]);
        let out_of_1: Vec<_> = residual.neighbors(1).map(|a| (a.edge_id, a.direction, a.residual_capacity)).collect();
        assert_eq!(out_of_1, vec![(0, Direction::Backward, 1), (1, Direction::Forward, 1), (2, Direction::Backward, 1)]);
    }

    #[test]
    fn overflowing_edge_is_an_invariant_violation() {
        let mut graph = Graph::from_edges(3, &[(0, 1, 4), (1, 2, 3)]).unwrap();
        graph.edges[1].flow = 4;
        assert_eq!(ResidualNetwork::build(&graph).err(), Some(FlowError::InvariantViolation { edge_id: 1 }));
    }
}
