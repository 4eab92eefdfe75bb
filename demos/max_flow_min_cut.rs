use maxflow_mincut::maximum_flow::edmonds_karp::EdmondsKarp;
use maxflow_mincut::maximum_flow::error::FlowError;
use maxflow_mincut::maximum_flow::graph::Graph;

fn main() -> Result<(), FlowError> {
    env_logger::init();

    let labels = ["s", "a", "b", "c", "d", "t"];
    let mut graph = Graph::from_edges(
        labels.len(),
        &[
            (0, 1, 18),
            (0, 3, 15),
            (1, 2, 12),
            (1, 3, 10),
            (1, 4, 2),
            (2, 3, 9),
            (2, 5, 22),
            (3, 1, 4),
            (3, 4, 18),
            (4, 2, 7),
            (4, 3, 3),
            (4, 5, 8),
        ],
    )?;

    let result = EdmondsKarp::default().solve(0, labels.len() - 1, &mut graph)?;

    println!("maximum flow:{}", result.value);
    for edge in graph.edges() {
        println!("{} -> {}: {}", labels[edge.from], labels[edge.to], edge);
    }
    println!("minimum cut edges:{:?}", result.minimum_cut.edge_list(&graph));
    println!("vertex partitions:{:?} {:?}", result.minimum_cut.source_side, result.minimum_cut.sink_side);
    Ok(())
}
