//! Dense adjacency-matrix representation of a simple undirected graph.
//!
//! Vertices are the indices `0..n`. The matrix is stored row-major in a single
//! flat buffer so that `adjacent(u, v)` is one index computation and one load.
//!
//! # Example
//! ```
//! use hamcycle::cs::graph::adjacency::AdjacencyMatrix;
//!
//! let g = AdjacencyMatrix::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
//! assert!(g.adjacent(1, 0));
//! assert!(!g.adjacent(0, 2));
//! assert_eq!(g.vertex_count(), 3);
//! ```

use crate::error::{GraphError, Result};

/// Immutable, symmetric adjacency matrix with `n >= 1` vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    n: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Builds a graph from a square boolean matrix.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidGraph` if the matrix has no rows, if any row
    /// length differs from the row count, or if `rows[u][v] != rows[v][u]` for
    /// some pair. Diagonal entries (self-loops) are accepted.
    pub fn from_matrix(rows: &[Vec<bool>]) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(GraphError::invalid_graph(
                "adjacency matrix must have at least one vertex",
            ));
        }

        let mut cells = Vec::with_capacity(n * n);
        for (u, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(GraphError::invalid_graph(format!(
                    "adjacency matrix is not square: row {} has {} entries, expected {}",
                    u,
                    row.len(),
                    n
                )));
            }
            cells.extend_from_slice(row);
        }

        for u in 0..n {
            for v in (u + 1)..n {
                if cells[u * n + v] != cells[v * n + u] {
                    return Err(GraphError::invalid_graph(format!(
                        "adjacency matrix is not symmetric at ({}, {})",
                        u, v
                    )));
                }
            }
        }

        Ok(AdjacencyMatrix { n, cells })
    }

    /// Builds a graph with `n` vertices from an undirected edge list.
    /// Repeated edges are harmless; `(u, u)` records a self-loop.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        if n == 0 {
            return Err(GraphError::invalid_graph(
                "graph must have at least one vertex",
            ));
        }
        let mut cells = vec![false; n * n];
        for &(u, v) in edges {
            for vertex in [u, v] {
                if vertex >= n {
                    return Err(GraphError::VertexOutOfRange {
                        vertex,
                        vertex_count: n,
                    });
                }
            }
            cells[u * n + v] = true;
            cells[v * n + u] = true;
        }
        Ok(AdjacencyMatrix { n, cells })
    }

    /// The complete graph K_n, without self-loops.
    pub fn complete(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(GraphError::invalid_graph(
                "graph must have at least one vertex",
            ));
        }
        let cells = (0..n * n).map(|i| i / n != i % n).collect();
        Ok(AdjacencyMatrix { n, cells })
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Whether `u` and `v` share an edge. Symmetric in its arguments.
    ///
    /// # Panics
    /// Panics if either index is `>= vertex_count()`.
    #[inline]
    pub fn adjacent(&self, u: usize, v: usize) -> bool {
        assert!(u < self.n && v < self.n, "Invalid vertex index");
        self.cells[u * self.n + v]
    }

    /// Neighbors of `v` in ascending order.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        assert!(v < self.n, "Invalid vertex index");
        let row = &self.cells[v * self.n..(v + 1) * self.n];
        row.iter()
            .enumerate()
            .filter_map(|(u, &edge)| edge.then_some(u))
    }

    pub fn degree(&self, v: usize) -> usize {
        self.neighbors(v).count()
    }

    /// Number of undirected edges; a self-loop counts once.
    pub fn edge_count(&self) -> usize {
        (0..self.n)
            .map(|u| (u..self.n).filter(|&v| self.cells[u * self.n + v]).count())
            .sum()
    }
}
