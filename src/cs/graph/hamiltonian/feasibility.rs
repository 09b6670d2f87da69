use crate::cs::graph::adjacency::AdjacencyMatrix;

use super::path::PathState;

/// Whether `candidate` may be placed in slot `position` of `path`.
///
/// The candidate must be adjacent to the vertex in slot `position - 1` and
/// must not already appear in slots `0..position`. The uniqueness scan is
/// linear in `position`.
///
/// # Panics
/// Panics if `position == 0` or `position >= path.len()`.
pub fn can_extend(
    graph: &AdjacencyMatrix,
    path: &PathState,
    position: usize,
    candidate: usize,
) -> bool {
    assert!(
        position > 0 && position < path.len(),
        "position must be in 1..n"
    );
    let last = match path.get(position - 1) {
        Some(v) => v,
        None => return false,
    };
    if !graph.adjacent(last, candidate) {
        return false;
    }
    !path.contains_before(position, candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> AdjacencyMatrix {
        AdjacencyMatrix::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap()
    }

    #[test]
    fn test_rejects_non_adjacent() {
        let g = square();
        let path = PathState::new(4, 0);
        assert!(!can_extend(&g, &path, 1, 2));
    }

    #[test]
    fn test_accepts_adjacent_unvisited() {
        let g = square();
        let path = PathState::new(4, 0);
        assert!(can_extend(&g, &path, 1, 1));
        assert!(can_extend(&g, &path, 1, 3));
    }

    #[test]
    fn test_rejects_already_placed() {
        let g = square();
        let mut path = PathState::new(4, 0);
        path.assign(1, 1);
        // 0 is adjacent to 1 but already sits in slot 0.
        assert!(!can_extend(&g, &path, 2, 0));
        assert!(can_extend(&g, &path, 2, 2));
    }

    #[test]
    fn test_self_loop_does_not_allow_revisit() {
        let g = AdjacencyMatrix::from_edges(2, &[(0, 0), (0, 1)]).unwrap();
        let path = PathState::new(2, 0);
        assert!(!can_extend(&g, &path, 1, 0));
        assert!(can_extend(&g, &path, 1, 1));
    }

    #[test]
    fn test_unassigned_predecessor() {
        let g = square();
        let path = PathState::new(4, 0);
        assert!(!can_extend(&g, &path, 2, 1));
    }

    #[test]
    #[should_panic(expected = "position must be in 1..n")]
    fn test_position_zero() {
        let g = square();
        let path = PathState::new(4, 0);
        can_extend(&g, &path, 0, 1);
    }
}
