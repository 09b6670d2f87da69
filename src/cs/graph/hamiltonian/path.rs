/// Partial Hamiltonian path under construction.
///
/// Holds exactly `n` slots; a slot is either a vertex index or unassigned
/// (`None`). Slot 0 is fixed to the start vertex when the state is created and
/// is never cleared. Assigned vertices are pairwise distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathState {
    slots: Vec<Option<usize>>,
}

impl PathState {
    /// A path of `n` slots with `start` placed in slot 0.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn new(n: usize, start: usize) -> Self {
        assert!(n > 0, "path must have at least one slot");
        let mut slots = vec![None; n];
        slots[0] = Some(start);
        PathState { slots }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The vertex placed in slot 0.
    #[inline]
    pub fn start(&self) -> Option<usize> {
        self.slots[0]
    }

    #[inline]
    pub fn get(&self, position: usize) -> Option<usize> {
        self.slots[position]
    }

    /// Whether `vertex` occupies any of the first `upto` slots.
    pub fn contains_before(&self, upto: usize, vertex: usize) -> bool {
        self.slots[..upto].contains(&Some(vertex))
    }

    /// Places `vertex` in the unassigned slot `position`.
    pub fn assign(&mut self, position: usize, vertex: usize) {
        debug_assert!(position > 0, "slot 0 holds the start vertex");
        debug_assert!(self.slots[position].is_none(), "slot already assigned");
        debug_assert!(
            !self.slots.contains(&Some(vertex)),
            "vertex already on the path"
        );
        self.slots[position] = Some(vertex);
    }

    /// Clears slot `position` after a dead end.
    pub fn unassign(&mut self, position: usize) {
        debug_assert!(position > 0, "slot 0 holds the start vertex");
        self.slots[position] = None;
    }

    /// Consumes a fully assigned path and closes it by repeating the start
    /// vertex. Returns `None` if any slot is still unassigned.
    pub fn into_cycle(self) -> Option<Vec<usize>> {
        let mut cycle = self.slots.into_iter().collect::<Option<Vec<usize>>>()?;
        cycle.push(cycle[0]);
        Some(cycle)
    }
}
