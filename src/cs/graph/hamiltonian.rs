//! A backtracking search for a single Hamiltonian cycle in an undirected graph.
//! A Hamiltonian cycle is a sequence of vertices v0..v_{n-1}, each visited exactly
//! once, with an edge between consecutive vertices plus an edge from v_{n-1} back
//! to v0.
//!
//! The search fixes vertex 0 as the first vertex of every candidate path. Any
//! Hamiltonian cycle of an undirected graph can be rotated to start at vertex 0,
//! so this loses no solutions and avoids exploring the n rotations of each one.
//!
//! # Example
//! ```
//! use hamcycle::cs::graph::adjacency::AdjacencyMatrix;
//! use hamcycle::cs::graph::hamiltonian::{solve_hamiltonian_cycle, SearchResult};
//!
//! // A 4-node cycle: edges (0-1, 1-2, 2-3, 3-0).
//! let g = AdjacencyMatrix::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
//!
//! // The cycle is closed by repeating the start vertex.
//! assert_eq!(solve_hamiltonian_cycle(&g), SearchResult::Cycle(vec![0, 1, 2, 3, 0]));
//!
//! // Drop one edge and no cycle remains.
//! let g = AdjacencyMatrix::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
//! assert_eq!(solve_hamiltonian_cycle(&g), SearchResult::NoCycle);
//! ```

pub mod feasibility;
pub mod path;
pub mod search;


use std::collections::HashSet;

use crate::cs::graph::adjacency::AdjacencyMatrix;

pub use feasibility::can_extend;
pub use path::PathState;
pub use search::{solve_hamiltonian_cycle, solve_with_config};

/// Vertex placed in slot 0 of every search.
pub const START_VERTEX: usize = 0;

/// Outcome of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The visiting order, `n + 1` entries long, with the start vertex repeated last.
    Cycle(Vec<usize>),
    /// The graph has no Hamiltonian cycle.
    NoCycle,
}

impl SearchResult {
    pub fn is_cycle(&self) -> bool {
        matches!(self, SearchResult::Cycle(_))
    }

    pub fn as_cycle(&self) -> Option<&[usize]> {
        match self {
            SearchResult::Cycle(cycle) => Some(cycle),
            SearchResult::NoCycle => None,
        }
    }

    pub fn into_cycle(self) -> Option<Vec<usize>> {
        match self {
            SearchResult::Cycle(cycle) => Some(cycle),
            SearchResult::NoCycle => None,
        }
    }
}

/// Limits for [`solve_with_config`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of recursive steps; `None` searches exhaustively.
    pub node_limit: Option<u64>,
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive steps taken, one per call into the driver.
    pub nodes: u64,
    /// Vertices removed from the path after a dead end.
    pub backtracks: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub result: SearchResult,
    pub stats: SearchStats,
}

/// Checks that `sequence` is a Hamiltonian cycle of `graph` in the closed form
/// returned by the search: `n + 1` entries, first equals last, the first `n`
/// cover every vertex exactly once, and every consecutive pair is adjacent.
pub fn is_hamiltonian_cycle(graph: &AdjacencyMatrix, sequence: &[usize]) -> bool {
    let n = graph.vertex_count();
    if sequence.len() != n + 1 || sequence[0] != sequence[n] {
        return false;
    }
    if sequence.iter().any(|&v| v >= n) {
        return false;
    }

    let distinct: HashSet<usize> = sequence[..n].iter().copied().collect();
    if distinct.len() != n {
        return false;
    }

    sequence
        .windows(2)
        .all(|pair| graph.adjacent(pair[0], pair[1]))
}
