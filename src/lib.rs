pub mod cs;
pub mod error;

pub use cs::graph;
pub use cs::graph::adjacency::AdjacencyMatrix;
pub use cs::graph::hamiltonian::{
    is_hamiltonian_cycle, solve_hamiltonian_cycle, solve_with_config, SearchConfig, SearchReport,
    SearchResult, SearchStats,
};
pub use error::{GraphError, Result};
