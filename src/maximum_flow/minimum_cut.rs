use crate::maximum_flow::augmenting_path::reachable_from;
use crate::maximum_flow::error::FlowError;
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::residual::ResidualNetwork;
use num_traits::NumAssign;

/// Source/sink partition and the edges crossing it from the source side.
#[derive(Clone, PartialEq, Debug)]
pub struct MinimumCut<Flow> {
    pub source_side: Vec<usize>,
    pub sink_side: Vec<usize>,
    // edge ids; parallel edges are listed separately
    pub edges: Vec<usize>,
    pub capacity: Flow,
}

impl<Flow> MinimumCut<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    /// Source side = vertices reachable from `source` in the final residual network.
    pub fn from_residual(graph: &Graph<Flow>, residual: &ResidualNetwork<Flow>, source: usize) -> Result<Self, FlowError> {
        graph.check_node(source)?;
        if residual.num_nodes() != graph.num_nodes() {
            return Err(FlowError::ResidualMismatch { expected: graph.num_nodes(), found: residual.num_nodes() });
        }

        let reachable = reachable_from(residual, source);
        let (source_side, sink_side): (Vec<usize>, Vec<usize>) = (0..graph.num_nodes()).partition(|&u| reachable[u]);

        let mut edges = Vec::new();
        let mut capacity = Flow::zero();
        for (edge_id, e) in graph.edges().enumerate() {
            if reachable[e.from] && !reachable[e.to] {
                edges.push(edge_id);
                capacity += e.upper;
            }
        }

        Ok(MinimumCut { source_side, sink_side, edges, capacity })
    }

    pub fn edge_list(&self, graph: &Graph<Flow>) -> Vec<(usize, usize)> {
        self.edges.iter().filter_map(|&edge_id| graph.get_edge(edge_id)).map(|e| (e.from, e.to)).collect()
    }

    #[inline]
    pub fn is_source_side(&self, u: usize) -> bool {
        self.source_side.binary_search(&u).is_ok()
    }
}
