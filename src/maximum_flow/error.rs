use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FlowError {
    #[error("vertex {vertex} is out of range for a network with {num_nodes} nodes")]
    InvalidVertex { vertex: usize, num_nodes: usize },

    #[error("edge {from} -> {to} has a negative capacity")]
    InvalidCapacity { from: usize, to: usize },

    // flow left the [0, upper] interval; only a broken augmentation can cause this
    #[error("edge {edge_id} carries flow outside of [0, capacity]")]
    InvariantViolation { edge_id: usize },

    #[error("residual network has {found} nodes, the graph has {expected}")]
    ResidualMismatch { expected: usize, found: usize },

    #[error("source and sink are the same vertex ({0})")]
    SourceEqualsSink(usize),

    #[error("no maximum flow after {0} augmentations")]
    IterationLimitExceeded(usize),
}
