use num_traits::Float;

use crate::{
    Error, IsClose, Result, Role, Tolerance,
    cartesian::{Point, signed_area},
    clipper::{search::IntersectionSearch, state::State},
    graph::{Graph, Node},
};

/// A direction to follow when traversing a ring.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(super) enum Direction {
    /// Use the `next` field of the [`Node`].
    #[default]
    Forward,
    /// Use the `previous` field of the [`Node`].
    Backward,
}

impl From<bool> for Direction {
    fn from(forward: bool) -> Self {
        if forward {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

impl Direction {
    /// Returns the position of the node following the given one.
    fn next<T>(&self, node: &Node<T>) -> usize {
        match self {
            Direction::Forward => node.next,
            Direction::Backward => node.previous,
        }
    }
}

/// Walks the labelled rings alternating between them at every intersection, returning the
/// closed contours of the result.
///
/// Subject nodes are left forwards when their entry flag equals the first of the given
/// directions, and clip nodes when it equals the second one.
pub(super) fn contours<T>(
    graph: &Graph<T>,
    state: &mut State,
    [subject_forwards, clip_forwards]: [bool; 2],
    tolerance: &Tolerance<T>,
) -> Result<Vec<Vec<Point<T>>>>
where
    T: Float,
{
    let limit = 2 * graph.len();
    let mut steps = 0;

    let mut contours = Vec::new();
    let mut search = IntersectionSearch::new(graph, Role::Subject);
    while let Some(start) = search.next(state) {
        let mut contour = vec![graph.nodes[start].point];
        let mut current = start;

        loop {
            state.visit(current);

            let forwards = match graph.nodes[current].role {
                Role::Subject => subject_forwards,
                Role::Clip => clip_forwards,
            };

            let direction = Direction::from(state.get(current).entry == forwards);
            loop {
                current = direction.next(&graph.nodes[current]);
                contour.push(graph.nodes[current].point);

                steps += 1;
                if steps > limit {
                    return Err(Error::TraversalDiverged { steps });
                }

                if state.is_intersection(current) {
                    break;
                }
            }

            match state.corresponding(current) {
                Some(corresponding) if !state.get(corresponding).visited => {
                    current = corresponding
                }
                _ => break,
            }
        }

        if contour.len() > 1
            && let (Some(first), Some(last)) = (contour.first(), contour.last())
            && first.is_close(last, tolerance)
        {
            contour.pop();
        }

        contours.push(contour);
    }

    let total = contours.len();
    contours.retain(|contour| {
        contour.len() > 2 && !signed_area(contour).is_close(&T::zero(), tolerance)
    });

    log::debug!(
        "{} contours traversed, {} discarded as degenerate",
        total,
        total - contours.len()
    );

    Ok(contours)
}
