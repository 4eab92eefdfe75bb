pub mod augmenting_path;
pub mod edmonds_karp;
pub mod error;
pub mod graph;
pub mod minimum_cut;
pub mod residual;
