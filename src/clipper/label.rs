use num_traits::Float;

use crate::{
    Role, Tolerance,
    cartesian::Position,
    clipper::state::State,
    graph::Graph,
};

/// The location, relative to the opposite polygon, of the edges surrounding an intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Pairing {
    /// The location of the edge towards the previous node.
    pub(super) previous: Position,
    /// The location of the edge towards the next node.
    pub(super) next: Position,
}

impl Pairing {
    fn new<T>(graph: &Graph<T>, position: usize, tolerance: &Tolerance<T>) -> Self
    where
        T: Float,
    {
        let node = &graph.nodes[position];
        Self {
            previous: graph.edge_position(node.previous, position, tolerance),
            next: graph.edge_position(position, node.next, tolerance),
        }
    }

    /// Returns true if the boundary enters the opposite polygon, false if it exits, and
    /// [`None`] if it only touches it.
    fn label(&self) -> Option<bool> {
        use Position::*;

        match (self.previous, self.next) {
            (Inside, Outside) | (OnBoundary, Outside) | (Inside, OnBoundary) => Some(false),
            (OnBoundary, Inside) | (Outside, OnBoundary) | (Outside, Inside) => Some(true),
            (Outside, Outside) | (Inside, Inside) | (OnBoundary, OnBoundary) => None,
        }
    }

    /// Returns the entry flag of an intersection given the pairing of its corresponding node,
    /// or [`None`] if neither of them crosses the opposite boundary.
    fn resolve(&self, corresponding: &Pairing) -> Option<bool> {
        if let Some(entry) = self.label() {
            return Some(entry);
        }

        let other = corresponding.label()?;
        match self.previous {
            Position::Outside => Some(false),
            Position::Inside => Some(true),
            Position::OnBoundary => Some(!other),
        }
    }
}

/// Sets the position of every node relative to the opposite ring.
pub(super) fn set_positions<T>(graph: &Graph<T>, state: &mut State, tolerance: &Tolerance<T>)
where
    T: Float,
{
    for role in [Role::Subject, Role::Clip] {
        for position in graph.positions(role) {
            let relative = if state.is_intersection(position) {
                Position::OnBoundary
            } else {
                graph.position(role.other(), &graph.nodes[position].point, tolerance)
            };

            state.get_mut(position).position = Some(relative);
        }
    }
}

/// Labels every intersection as an entry or an exit, cancelling those pairs that only touch
/// the opposite boundary and demoting one pair of every chain of equal labels.
///
/// The output side of each ring is the side of the opposite polygon its contours are made of:
/// inside for the rings traversed forwards, outside otherwise.
pub(super) fn set_labels<T>(
    graph: &Graph<T>,
    state: &mut State,
    [subject_output, clip_output]: [Position; 2],
    tolerance: &Tolerance<T>,
) where
    T: Float,
{
    let mut pairings = vec![None; graph.len()];
    for role in [Role::Subject, Role::Clip] {
        for position in graph.positions(role) {
            if state.is_intersection(position) {
                pairings[position] = Some(Pairing::new(graph, position, tolerance));
            }
        }
    }

    let mut cancelled = 0;
    for position in graph.positions(Role::Subject).chain(graph.positions(Role::Clip)) {
        let Some(corresponding) = state.corresponding(position) else {
            continue;
        };

        let (Some(pairing), Some(other)) = (pairings[position], pairings[corresponding]) else {
            continue;
        };

        match pairing.resolve(&other) {
            Some(entry) => {
                state.get_mut(position).entry = entry;
                log::trace!(
                    "node {position} labelled as {}",
                    if entry { "entry" } else { "exit" }
                );
            }
            None => {
                state.unlink(position);
                cancelled += 1;
            }
        }
    }

    let demoted = demote_chains(graph, state, Role::Subject, subject_output, &pairings)
        + demote_chains(graph, state, Role::Clip, clip_output, &pairings);

    log::debug!("{cancelled} touching pairs cancelled, {demoted} chained pairs demoted");
}

/// Demotes one of every two consecutive intersections of the given ring sharing the same
/// label, keeping the one adjacent to the output side. Returns the amount of demoted pairs.
fn demote_chains<T>(
    graph: &Graph<T>,
    state: &mut State,
    role: Role,
    output: Position,
    pairings: &[Option<Pairing>],
) -> usize {
    let intersections = graph
        .positions(role)
        .filter(|&position| state.is_intersection(position))
        .collect::<Vec<_>>();

    if intersections.len() < 2 {
        return 0;
    }

    let mut demoted = 0;
    for (index, &start) in intersections.iter().enumerate() {
        let end = intersections[(index + 1) % intersections.len()];
        if !state.is_intersection(start)
            || !state.is_intersection(end)
            || state.get(start).entry != state.get(end).entry
        {
            continue;
        }

        let kept_start = pairings[start].is_some_and(|pairing| pairing.previous == output);
        demote(state, if kept_start { end } else { start });
        demoted += 1;
    }

    demoted
}

/// Clears the intersection flag of the given node and its corresponding one, forcing their
/// position according to their label.
fn demote(state: &mut State, position: usize) {
    let forced = if state.get(position).entry {
        Position::Inside
    } else {
        Position::Outside
    };

    if let Some(corresponding) = state.corresponding(position) {
        state.get_mut(corresponding).position = Some(forced);
    }

    state.get_mut(position).position = Some(forced);
    state.unlink(position);
    log::trace!("node {position} demoted from intersection");
}
