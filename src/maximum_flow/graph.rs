use crate::maximum_flow::error::FlowError;
use num_traits::NumAssign;
use std::fmt::{self, Display};

#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
}

impl<Flow> Edge<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.flow == self.upper
    }
}

// "flow/capacity", the label drawn on every edge of the network
impl<Flow: Display> Display for Edge<Flow> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.flow, self.upper)
    }
}

/// Directed multigraph with a capacity and a flow on every edge.
///
/// Edges are identified by their insertion index, so two edges sharing the
/// same endpoints stay distinguishable.
#[derive(Debug, Clone)]
pub struct Graph<Flow> {
    num_nodes: usize,
    num_edges: usize,
    pub(crate) edges: Vec<Edge<Flow>>,
}

impl<Flow> Default for Graph<Flow> {
    fn default() -> Self {
        Graph { num_nodes: 0, num_edges: 0, edges: Vec::new() }
    }
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn from_edges(num_nodes: usize, edges: &[(usize, usize, Flow)]) -> Result<Self, FlowError> {
        let mut graph = Graph::default();
        graph.add_nodes(num_nodes);
        for &(from, to, upper) in edges {
            graph.add_directed_edge(from, to, upper)?;
        }
        Ok(graph)
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn add_node(&mut self) -> usize {
        self.num_nodes += 1;
        self.num_nodes - 1
    }

    pub fn add_nodes(&mut self, num_nodes: usize) -> Vec<usize> {
        self.num_nodes += num_nodes;
        ((self.num_nodes - num_nodes)..self.num_nodes).collect()
    }

    // return edge index
    pub fn add_directed_edge(&mut self, from: usize, to: usize, upper: Flow) -> Result<usize, FlowError> {
        self.check_node(from)?;
        self.check_node(to)?;
        if upper < Flow::zero() {
            return Err(FlowError::InvalidCapacity { from, to });
        }

        self.edges.push(Edge { from, to, flow: Flow::zero(), upper });

        self.num_edges += 1;
        Ok(self.num_edges - 1)
    }

    pub fn get_edge(&self, edge_id: usize) -> Option<Edge<Flow>> {
        self.edges.get(edge_id).cloned()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge<Flow>> {
        self.edges.iter()
    }

    pub(crate) fn check_node(&self, u: usize) -> Result<(), FlowError> {
        if u >= self.num_nodes {
            return Err(FlowError::InvalidVertex { vertex: u, num_nodes: self.num_nodes });
        }
        Ok(())
    }

    /// Whether the current flow is a feasible `source`-`sink` flow: conserved at
    /// every other vertex and never flowing back into `source` on balance.
    pub fn is_flow_between(&self, source: usize, sink: usize) -> bool {
        let mut inflow = vec![Flow::zero(); self.num_nodes];
        let mut outflow = vec![Flow::zero(); self.num_nodes];
        for e in self.edges.iter().filter(|e| e.from != e.to) {
            outflow[e.from] += e.flow;
            inflow[e.to] += e.flow;
        }

        (0..self.num_nodes).all(|u| {
            if u == source {
                outflow[u] >= inflow[u]
            } else if u == sink {
                inflow[u] >= outflow[u]
            } else {
                inflow[u] == outflow[u]
            }
        })
    }

    /// Net flow leaving `source`. With unsigned flows the caller must make sure
    /// more flow leaves `source` than enters it, see [`Graph::is_flow_between`].
    pub fn maximum_flow(&self, source: usize) -> Flow {
        let (outflow, inflow) = self.edges.iter().filter(|e| e.from != e.to).fold((Flow::zero(), Flow::zero()), |(mut outflow, mut inflow), e| {
            if e.from == source {
                outflow += e.flow;
            } else if e.to == source {
                inflow += e.flow;
            }
            (outflow, inflow)
        });
        outflow - inflow
    }

    /// Inflow minus outflow at `u`. Zero everywhere except at the source and
    /// the sink once a flow has been computed. Same caveat as
    /// [`Graph::maximum_flow`] for unsigned flows.
    pub fn excess(&self, u: usize) -> Flow {
        let inflow = self.edges.iter().filter(|e| e.to == u).fold(Flow::zero(), |sum, e| sum + e.flow);
        let outflow = self.edges.iter().filter(|e| e.from == u).fold(Flow::zero(), |sum, e| sum + e.flow);
        inflow - outflow
    }

    pub fn reset_flow(&mut self) {
        self.edges.iter_mut().for_each(|e| e.flow = Flow::zero());
    }
}
