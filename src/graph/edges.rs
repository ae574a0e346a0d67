use crate::{cartesian::Segment, graph::Node};

/// An edge and its location in the graph.
pub(crate) struct EdgeLocation<'a, T> {
    /// The actual edge.
    pub(crate) segment: Segment<'a, T>,
    /// The position in the graph of the first endpoint of the edge.
    pub(crate) position: usize,
}

/// Yields all the edges of the ring starting at the given position.
pub(crate) struct LocateEdges<'a, T> {
    pub(crate) nodes: &'a [Node<T>],
    pub(crate) next: Option<usize>,
    pub(crate) start: usize,
}

impl<'a, T> Iterator for LocateEdges<'a, T> {
    type Item = EdgeLocation<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current) = self.next
            && current == self.start
        {
            return None;
        }

        let position = self.next.unwrap_or(self.start);
        let node = &self.nodes[position];
        self.next = Some(node.next);

        Some(EdgeLocation {
            segment: Segment {
                from: &node.point,
                to: &self.nodes[node.next].point,
            },
            position,
        })
    }
}
