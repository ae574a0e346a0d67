use crate::{Role, clipper::state::State, graph::Graph};

/// Searches for the unvisited intersections of a ring, resuming every search where the
/// previous one stopped.
pub(super) struct IntersectionSearch {
    positions: Vec<usize>,
    next: usize,
}

impl IntersectionSearch {
    /// Returns a search over the ring playing the given role, in ring order.
    pub(super) fn new<T>(graph: &Graph<T>, role: Role) -> Self {
        Self {
            positions: graph.positions(role).collect(),
            next: 0,
        }
    }

    /// Returns the position of the next intersection not yet visited, if any.
    ///
    /// Nodes are never unvisited, hence those skipped by a search are never yielded again.
    pub(super) fn next(&mut self, state: &State) -> Option<usize> {
        let (offset, position) = self
            .positions
            .get(self.next..)?
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, position)| !state.get(position).visited)
            .find(|&(_, position)| state.is_intersection(position))?;

        self.next += offset + 1;
        Some(position)
    }
}
