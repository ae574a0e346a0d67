use num_traits::Float;

use crate::{
    cartesian::Polygon,
    clipper::Unknown,
    graph::{Graph, Role},
};

/// Builds the [`Graph`] of a subject and a clip [`Polygon`].
pub(crate) struct GraphBuilder<T, S, C> {
    /// The graph being built.
    pub(super) graph: Graph<T>,
    /// The polygon being clipped.
    pub(super) subject: S,
    /// The polygon clipping the subject.
    pub(super) clip: C,
}

impl<T, C> GraphBuilder<T, Unknown, C>
where
    T: Float,
{
    /// Sets the subject [`Polygon`] into the graph.
    pub(crate) fn with_subject<'a>(
        self,
        subject: &'a Polygon<T>,
    ) -> GraphBuilder<T, &'a Polygon<T>, C> {
        GraphBuilder {
            graph: self.graph.with_ring(Role::Subject, subject),
            subject,
            clip: self.clip,
        }
    }
}

impl<T, S> GraphBuilder<T, S, Unknown>
where
    T: Float,
{
    /// Sets the clip [`Polygon`] into the graph.
    pub(crate) fn with_clip<'a>(self, clip: &'a Polygon<T>) -> GraphBuilder<T, S, &'a Polygon<T>> {
        GraphBuilder {
            graph: self.graph.with_ring(Role::Clip, clip),
            subject: self.subject,
            clip,
        }
    }
}

impl<T> GraphBuilder<T, &Polygon<T>, &Polygon<T>> {
    /// Returns the graph holding both rings.
    pub(crate) fn build(self) -> Graph<T> {
        log::trace!(
            "graph built from {} subject and {} clip vertices",
            self.subject.total_vertices(),
            self.clip.total_vertices()
        );

        self.graph
    }
}

impl<T> Graph<T>
where
    T: Float,
{
    fn with_ring(mut self, role: Role, polygon: &Polygon<T>) -> Self {
        self.nodes.reserve(polygon.total_vertices());
        for &point in &polygon.vertices {
            self.push(role, point);
        }

        self
    }
}
