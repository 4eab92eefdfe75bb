use crate::maximum_flow::augmenting_path::{find_augmenting_path, AugmentingPath};
use crate::maximum_flow::error::FlowError;
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::minimum_cut::MinimumCut;
use crate::maximum_flow::residual::{Direction, ResidualNetwork};
use log::{debug, info, warn};
use num_traits::NumAssign;

#[derive(Clone, PartialEq, Debug)]
pub struct MaximumFlow<Flow> {
    pub value: Flow,
    pub augmentations: usize,
    pub minimum_cut: MinimumCut<Flow>,
}

/// Edmonds-Karp: augment along a shortest residual path until none is left.
///
/// At most O(nm) augmentations for integral capacities. Solving starts from the
/// flow already on the graph when it is a feasible flow between the same source
/// and sink, so solving twice performs no further augmentation. Any other flow is
/// cleared first.
pub struct EdmondsKarp<Flow> {
    iteration_limit: Option<usize>,
    _flow: std::marker::PhantomData<Flow>,
}

impl<Flow> Default for EdmondsKarp<Flow> {
    fn default() -> Self {
        EdmondsKarp { iteration_limit: None, _flow: std::marker::PhantomData }
    }
}

impl<Flow> EdmondsKarp<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    pub fn solve(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Result<MaximumFlow<Flow>, FlowError> {
        self.solve_with_observer(source, sink, graph, |_, _, _| {})
    }

    // observer sees the residual network each path was found in, the path, and its bottleneck
    pub fn solve_with_observer<F>(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>, mut observer: F) -> Result<MaximumFlow<Flow>, FlowError>
    where
        F: FnMut(&ResidualNetwork<Flow>, &AugmentingPath<Flow>, Flow),
    {
        graph.check_node(source)?;
        graph.check_node(sink)?;
        if source == sink {
            return Err(FlowError::SourceEqualsSink(source));
        }

        if !graph.is_flow_between(source, sink) {
            warn!("flow on the graph is not a {}-{} flow; starting from zero", source, sink);
            graph.reset_flow();
        }

        let mut flow = graph.maximum_flow(source);
        let mut augmentations = 0;
        let residual = loop {
            let residual = ResidualNetwork::build(graph)?;
            let path = match find_augmenting_path(&residual, source, sink) {
                Some(path) => path,
                None => break residual,
            };

            if self.iteration_limit.is_some_and(|limit| augmentations >= limit) {
                return Err(FlowError::IterationLimitExceeded(augmentations));
            }

            let delta = augment(graph, &path)?;
            augmentations += 1;
            flow += delta;
            debug!("augmentation {}: path of {} arcs", augmentations, path.len());
            observer(&residual, &path, delta);
        };

        let minimum_cut = MinimumCut::from_residual(graph, &residual, source)?;
        info!("maximum flow found after {} augmentations; {} edges in the minimum cut", augmentations, minimum_cut.edges.len());

        Ok(MaximumFlow { value: flow, augmentations, minimum_cut })
    }
}

/// Push the bottleneck of `path` through the edges its arcs were derived from.
/// Returns the amount pushed.
///
/// Either every edge on the path is updated or, when some edge can no longer
/// take the bottleneck (a path from an outdated residual network), none is.
pub fn augment<Flow>(graph: &mut Graph<Flow>, path: &AugmentingPath<Flow>) -> Result<Flow, FlowError>
where
    Flow: NumAssign + Ord + Copy,
{
    let delta = path.bottleneck();

    let mut updates: Vec<(usize, Flow)> = Vec::with_capacity(path.len());
    for arc in path.arcs() {
        let edge_id = arc.edge_id;
        let edge = graph.edges.get(edge_id).ok_or(FlowError::InvariantViolation { edge_id })?;
        let flow = updates.iter().rev().find(|&&(id, _)| id == edge_id).map_or(edge.flow, |&(_, flow)| flow);
        if flow < Flow::zero() || flow > edge.upper {
            return Err(FlowError::InvariantViolation { edge_id });
        }

        let flow = match arc.direction {
            Direction::Forward if edge.upper - flow >= delta => flow + delta,
            Direction::Backward if flow >= delta => flow - delta,
            _ => return Err(FlowError::InvariantViolation { edge_id }),
        };
        updates.push((edge_id, flow));
    }

    for (edge_id, flow) in updates {
        graph.edges[edge_id].flow = flow;
    }
    Ok(delta)
}
