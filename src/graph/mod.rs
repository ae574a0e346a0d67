mod builder;
mod edges;

use std::fmt;

use num_traits::Float;

pub(crate) use self::builder::GraphBuilder;
pub(crate) use self::edges::LocateEdges;

use crate::{
    Tolerance,
    cartesian::{self, Point, Position, Segment},
    clipper::Unknown,
};

/// Determines the role of a polygon during the clipping process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The polygon being clipped.
    Subject,
    /// The polygon clipping the subject.
    Clip,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Subject => write!(f, "subject"),
            Role::Clip => write!(f, "clip"),
        }
    }
}

impl Role {
    /// Returns the role of the opposite polygon.
    pub(crate) fn other(self) -> Self {
        match self {
            Role::Subject => Role::Clip,
            Role::Clip => Role::Subject,
        }
    }

    fn index(self) -> usize {
        match self {
            Role::Subject => 0,
            Role::Clip => 1,
        }
    }
}

/// A circular list of nodes in the [`Graph`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct Ring {
    /// The position in the graph of the first input vertex of the ring.
    pub(crate) entrypoint: usize,
    /// The amount of nodes in the ring.
    pub(crate) len: usize,
}

/// A node in the [`Graph`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct Node<T> {
    /// The location of the node.
    pub(crate) point: Point<T>,
    /// The ring this node belongs to.
    pub(crate) role: Role,
    /// The position in the graph of the previous node.
    pub(crate) previous: usize,
    /// The position in the graph of the next node.
    pub(crate) next: usize,
    /// The parameter along the input edge the node was inserted into, zero for input vertices.
    pub(crate) distance: T,
    /// If true, the node was not part of the input polygon.
    pub(crate) synthesized: bool,
}

/// The subject and clip rings, stored as an arena of nodes linked by position.
#[derive(Debug)]
pub(crate) struct Graph<T> {
    /// All the nodes of both rings.
    pub(crate) nodes: Vec<Node<T>>,
    rings: [Ring; 2],
}

impl<T> Graph<T> {
    /// Returns the builder for a new graph.
    pub(crate) fn builder() -> GraphBuilder<T, Unknown, Unknown> {
        GraphBuilder {
            graph: Graph {
                nodes: Vec::new(),
                rings: [Ring {
                    entrypoint: 0,
                    len: 0,
                }; 2],
            },
            subject: Unknown,
            clip: Unknown,
        }
    }

    /// Returns the ring playing the given role.
    pub(crate) fn ring(&self, role: Role) -> &Ring {
        &self.rings[role.index()]
    }

    /// Returns the total amount of nodes in both rings.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the positions of all the nodes in the given ring, in ring order.
    pub(crate) fn positions(&self, role: Role) -> impl Iterator<Item = usize> + '_ {
        let ring = self.ring(role);
        std::iter::successors(Some(ring.entrypoint), |&position| {
            Some(self.nodes[position].next).filter(|&next| next != ring.entrypoint)
        })
    }

    /// Returns the positions of the input vertices of the given ring, in ring order.
    pub(crate) fn originals(&self, role: Role) -> Vec<usize> {
        self.positions(role)
            .filter(|&position| !self.nodes[position].synthesized)
            .collect()
    }

    /// Returns the position of the first input vertex at or after the given one.
    pub(crate) fn next_original(&self, position: usize) -> usize {
        let mut current = position;
        while self.nodes[current].synthesized {
            current = self.nodes[current].next;
        }

        current
    }

    /// Returns an iterator over all the edges of the given ring.
    pub(crate) fn edges(&self, role: Role) -> LocateEdges<'_, T> {
        LocateEdges {
            nodes: &self.nodes,
            start: self.ring(role).entrypoint,
            next: None,
        }
    }

    /// Returns the [`Position`] of the given point relative to the ring playing the given role.
    pub(crate) fn position(
        &self,
        role: Role,
        point: &Point<T>,
        tolerance: &Tolerance<T>,
    ) -> Position
    where
        T: Float,
    {
        cartesian::position(self.edges(role).map(|edge| edge.segment), point, tolerance)
    }

    /// Returns the [`Position`] of the midpoint of the edge between the given nodes, relative to
    /// the opposite ring.
    pub(crate) fn edge_position(
        &self,
        from: usize,
        to: usize,
        tolerance: &Tolerance<T>,
    ) -> Position
    where
        T: Float,
    {
        let midpoint = self.segment(from, to).midpoint();
        self.position(self.nodes[from].role.other(), &midpoint, tolerance)
    }

    /// Returns the segment between the given nodes.
    pub(crate) fn segment(&self, from: usize, to: usize) -> Segment<'_, T> {
        Segment {
            from: &self.nodes[from].point,
            to: &self.nodes[to].point,
        }
    }

    /// Appends a node holding the given point at the end of the ring playing the given role.
    pub(crate) fn push(&mut self, role: Role, point: Point<T>) -> usize
    where
        T: Float,
    {
        let position = self.nodes.len();
        let ring = &mut self.rings[role.index()];

        let (previous, next) = if ring.len == 0 {
            ring.entrypoint = position;
            (position, position)
        } else {
            let next = ring.entrypoint;
            (self.nodes[next].previous, next)
        };

        ring.len += 1;
        self.nodes.push(Node {
            point,
            role,
            previous,
            next,
            distance: T::zero(),
            synthesized: false,
        });

        self.nodes[previous].next = position;
        self.nodes[next].previous = position;
        position
    }

    /// Inserts a new node between the given ones, after any other node already placed there
    /// whose distance is lower.
    pub(crate) fn insert(&mut self, point: Point<T>, distance: T, start: usize, end: usize) -> usize
    where
        T: PartialOrd + Copy,
    {
        let mut current = self.nodes[start].next;
        while current != end && self.nodes[current].distance < distance {
            current = self.nodes[current].next;
        }

        let position = self.nodes.len();
        let previous = self.nodes[current].previous;
        let role = self.nodes[start].role;

        self.nodes.push(Node {
            point,
            role,
            previous,
            next: current,
            distance,
            synthesized: true,
        });

        self.nodes[previous].next = position;
        self.nodes[current].previous = position;
        self.rings[role.index()].len += 1;
        position
    }

    /// Reverses the winding of the ring playing the given role.
    pub(crate) fn reverse(&mut self, role: Role) {
        let positions = self.positions(role).collect::<Vec<_>>();
        for position in positions {
            let node = &mut self.nodes[position];
            std::mem::swap(&mut node.next, &mut node.previous);
        }
    }

    /// Returns the points of the input vertices of the given ring, in ring order.
    pub(crate) fn original_points(&self, role: Role) -> Vec<Point<T>>
    where
        T: Copy,
    {
        self.positions(role)
            .map(|position| &self.nodes[position])
            .filter(|node| !node.synthesized)
            .map(|node| node.point)
            .collect()
    }
}
