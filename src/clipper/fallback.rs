use num_traits::Float;

use crate::{
    Operation, Role, Shape, Tolerance,
    cartesian::{Position, signed_area},
    clipper::state::State,
    graph::Graph,
};

/// How two rings with no crossing between them relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Relation {
    /// The subject lies within the clip, or both rings coincide.
    SubjectInsideClip,
    /// The clip lies within the subject.
    ClipInsideSubject,
    /// Neither ring encloses the other.
    Disjoint,
}

impl Relation {
    /// Returns the relation between the rings of the given graph.
    pub(super) fn new<T>(graph: &Graph<T>, state: &State, tolerance: &Tolerance<T>) -> Self
    where
        T: Float,
    {
        if matches!(
            containment(graph, state, Role::Subject, tolerance),
            Some(Position::Inside) | None
        ) {
            return Self::SubjectInsideClip;
        }

        if matches!(
            containment(graph, state, Role::Clip, tolerance),
            Some(Position::Inside) | None
        ) {
            return Self::ClipInsideSubject;
        }

        Self::Disjoint
    }
}

/// Returns the first definite position of the ring playing the given role relative to the
/// opposite one, or [`None`] if the whole ring lies on the opposite boundary.
fn containment<T>(
    graph: &Graph<T>,
    state: &State,
    role: Role,
    tolerance: &Tolerance<T>,
) -> Option<Position>
where
    T: Float,
{
    let is_definite = |position: &Position| *position != Position::OnBoundary;

    graph
        .originals(role)
        .into_iter()
        .filter_map(|position| state.get(position).position)
        .find(is_definite)
        .or_else(|| {
            graph
                .edges(role)
                .map(|edge| {
                    graph.edge_position(edge.position, graph.nodes[edge.position].next, tolerance)
                })
                .find(is_definite)
        })
}

/// Returns the result of the given operation on two rings with no crossing between them.
pub(super) fn shapes<T>(
    graph: &mut Graph<T>,
    relation: Relation,
    operation: Operation,
) -> Vec<Shape<T>>
where
    T: Float,
{
    let subject = graph.original_points(Role::Subject);
    let clip = graph.original_points(Role::Clip);

    match (relation, operation) {
        (Relation::SubjectInsideClip, Operation::Intersection) => vec![Shape::new(subject)],
        (Relation::SubjectInsideClip, Operation::Union) => vec![Shape::new(clip)],
        (Relation::SubjectInsideClip, Operation::Difference) => Vec::new(),
        (Relation::ClipInsideSubject, Operation::Intersection) => vec![Shape::new(clip)],
        (Relation::ClipInsideSubject, Operation::Union) => vec![Shape::new(subject)],
        (Relation::ClipInsideSubject, Operation::Difference) => {
            if (signed_area(&subject) > T::zero()) == (signed_area(&clip) > T::zero()) {
                graph.reverse(Role::Clip);
            }

            vec![Shape::new(subject).with_hole(graph.original_points(Role::Clip))]
        }
        (Relation::Disjoint, Operation::Intersection) => Vec::new(),
        (Relation::Disjoint, Operation::Union) => vec![Shape::new(subject), Shape::new(clip)],
        (Relation::Disjoint, Operation::Difference) => vec![Shape::new(subject)],
    }
}
