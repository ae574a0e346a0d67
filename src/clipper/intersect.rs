use num_traits::Float;

use crate::{
    IsClose, Role, Tolerance,
    clipper::state::State,
    graph::Graph,
};

/// Inserts every crossing between the subject and the clip rings into the graph, linking each
/// pair of corresponding nodes in the state. Returns the amount of linked pairs.
pub(super) fn find_intersections<T>(
    graph: &mut Graph<T>,
    state: &mut State,
    tolerance: &Tolerance<T>,
) -> usize
where
    T: Float,
{
    let subject = graph.originals(Role::Subject);
    let clip = graph.originals(Role::Clip);

    let mut total = 0;
    for &subject_from in &subject {
        let subject_to = graph.next_original(graph.nodes[subject_from].next);

        for &clip_from in &clip {
            let clip_to = graph.next_original(graph.nodes[clip_from].next);

            let crossing = graph
                .segment(subject_from, subject_to)
                .classify(&graph.segment(clip_from, clip_to), tolerance);

            if crossing.is_valid() {
                let source =
                    graph.insert(crossing.point, crossing.to_source, subject_from, subject_to);
                let target = graph.insert(crossing.point, crossing.to_clip, clip_from, clip_to);
                state.link(source, target);
                total += 1;

                log::trace!("crossing between nodes {source} and {target}");
            }

            if !crossing.is_degenerate() {
                continue;
            }

            let on_line = crossing.on_line;
            [
                (on_line.source_from, subject_from, [clip_from, clip_to]),
                (on_line.source_to, subject_to, [clip_from, clip_to]),
                (on_line.clip_from, clip_from, [subject_from, subject_to]),
                (on_line.clip_to, clip_to, [subject_from, subject_to]),
            ]
            .into_iter()
            .filter(|(on_line, ..)| *on_line)
            .for_each(|(_, vertex, edge)| {
                if touch(graph, state, vertex, edge, tolerance) {
                    total += 1;
                }
            });
        }
    }

    state.track(graph.len());
    total
}

/// Links the given vertex, known to lie on the given edge of the opposite ring, with a node at
/// its location. Returns true if, and only if, a new pair got linked.
fn touch<T>(
    graph: &mut Graph<T>,
    state: &mut State,
    vertex: usize,
    [from, to]: [usize; 2],
    tolerance: &Tolerance<T>,
) -> bool
where
    T: Float,
{
    state.track(graph.len());
    if state.is_intersection(vertex) {
        return false;
    }

    let point = graph.nodes[vertex].point;
    if let Some(endpoint) = [from, to]
        .into_iter()
        .find(|&endpoint| graph.nodes[endpoint].point.is_close(&point, tolerance))
    {
        if state.is_intersection(endpoint) {
            return false;
        }

        state.link(vertex, endpoint);
        return true;
    }

    let distance = graph.segment(from, to).distance_ratio(&point);
    let inserted = graph.insert(point, distance, from, to);
    state.link(vertex, inserted);

    log::trace!("node {vertex} touches the opposite ring at node {inserted}");
    true
}
