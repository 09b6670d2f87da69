use thiserror::Error;

/// Errors raised while building graphs or running a bounded search.
///
/// A graph without a Hamiltonian cycle is *not* an error; the search reports
/// that as [`SearchResult::NoCycle`](crate::cs::graph::hamiltonian::SearchResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The adjacency input is empty, not square, or not symmetric.
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// An edge endpoint does not name a vertex of the graph.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// A bounded search visited more nodes than its configured limit.
    #[error("search aborted after exceeding the node limit of {limit}")]
    SearchLimitExceeded { limit: u64 },
}

impl GraphError {
    pub fn invalid_graph(msg: impl Into<String>) -> Self {
        GraphError::InvalidGraph(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            GraphError::invalid_graph("matrix is empty").to_string(),
            "invalid graph: matrix is empty"
        );
        assert_eq!(
            GraphError::VertexOutOfRange {
                vertex: 7,
                vertex_count: 3
            }
            .to_string(),
            "vertex 7 is out of range for a graph with 3 vertices"
        );
        assert_eq!(
            GraphError::SearchLimitExceeded { limit: 10 }.to_string(),
            "search aborted after exceeding the node limit of 10"
        );
    }
}
