pub mod adjacency;
pub mod hamiltonian;

pub use adjacency::AdjacencyMatrix;
pub use hamiltonian::{solve_hamiltonian_cycle, SearchResult};
