use log::{debug, trace};

use crate::cs::graph::adjacency::AdjacencyMatrix;
use crate::error::{GraphError, Result};

use super::feasibility::can_extend;
use super::path::PathState;
use super::{SearchConfig, SearchReport, SearchResult, SearchStats, START_VERTEX};

/// Finds one Hamiltonian cycle of `graph` by exhaustive backtracking.
///
/// The search starts at [`START_VERTEX`] and tries candidates in ascending
/// index order, so the returned cycle is the lexicographically smallest one
/// that begins at vertex 0.
///
/// # Returns
/// * `SearchResult::Cycle(c)` - `c.len() == n + 1` and `c[0] == c[n] == 0`
/// * `SearchResult::NoCycle` - the graph has no Hamiltonian cycle
///
/// # Example
/// ```
/// use hamcycle::{solve_hamiltonian_cycle, AdjacencyMatrix, SearchResult};
///
/// //  (0)---(1)---(2)
/// //   |   /  \    |
/// //   |  /    \   |
/// //  (3)-------(4)
/// let g = AdjacencyMatrix::from_edges(
///     5,
///     &[(0, 1), (0, 3), (1, 2), (1, 3), (1, 4), (2, 4), (3, 4)],
/// )
/// .unwrap();
///
/// assert_eq!(
///     solve_hamiltonian_cycle(&g),
///     SearchResult::Cycle(vec![0, 1, 2, 4, 3, 0])
/// );
/// ```
///
/// # Complexity
/// * Time: O(n!) in the worst case
/// * Space: O(n) for the path and the recursion stack
pub fn solve_hamiltonian_cycle(graph: &AdjacencyMatrix) -> SearchResult {
    let mut search = Search::new(graph, None);
    search.run()
}

/// Like [`solve_hamiltonian_cycle`], but honors `config.node_limit` and
/// reports how much of the search tree was explored.
///
/// # Errors
/// Returns `GraphError::SearchLimitExceeded` if the search needs more than
/// `node_limit` recursive steps. An aborted search says nothing about whether
/// a cycle exists.
pub fn solve_with_config(graph: &AdjacencyMatrix, config: &SearchConfig) -> Result<SearchReport> {
    let mut search = Search::new(graph, config.node_limit);
    let result = search.run();
    if search.aborted {
        let limit = config.node_limit.unwrap_or_default();
        debug!(
            "hamiltonian search aborted after {} nodes (limit {})",
            search.stats.nodes, limit
        );
        return Err(GraphError::SearchLimitExceeded { limit });
    }
    Ok(SearchReport {
        result,
        stats: search.stats,
    })
}

struct Search<'g> {
    graph: &'g AdjacencyMatrix,
    path: PathState,
    node_limit: Option<u64>,
    stats: SearchStats,
    aborted: bool,
}

impl<'g> Search<'g> {
    fn new(graph: &'g AdjacencyMatrix, node_limit: Option<u64>) -> Self {
        Search {
            graph,
            path: PathState::new(graph.vertex_count(), START_VERTEX),
            node_limit,
            stats: SearchStats::default(),
            aborted: false,
        }
    }

    fn run(&mut self) -> SearchResult {
        let n = self.graph.vertex_count();
        debug!(
            "hamiltonian search: {} vertices, node limit {:?}",
            n, self.node_limit
        );

        let found = self.extend(1);
        debug!(
            "hamiltonian search finished: found={}, nodes={}, backtracks={}",
            found, self.stats.nodes, self.stats.backtracks
        );
        if !found {
            return SearchResult::NoCycle;
        }

        match self.path.clone().into_cycle() {
            Some(cycle) => SearchResult::Cycle(cycle),
            None => SearchResult::NoCycle,
        }
    }

    /// Fills slot `position` and everything after it. Returns true once the
    /// path is complete and closes back on the start vertex.
    fn extend(&mut self, position: usize) -> bool {
        if let Some(limit) = self.node_limit {
            if self.stats.nodes >= limit {
                self.aborted = true;
                return false;
            }
        }
        self.stats.nodes += 1;

        let n = self.graph.vertex_count();
        if position == n {
            return match self.path.get(n - 1) {
                Some(last) => self.graph.adjacent(last, START_VERTEX),
                None => false,
            };
        }

        for candidate in (0..n).filter(|&v| v != START_VERTEX) {
            if !can_extend(self.graph, &self.path, position, candidate) {
                continue;
            }

            self.path.assign(position, candidate);
            if self.extend(position + 1) {
                return true;
            }
            self.path.unassign(position);

            if self.aborted {
                return false;
            }
            self.stats.backtracks += 1;
            trace!("backtrack: vertex {} leaves slot {}", candidate, position);
        }

        false
    }
}
